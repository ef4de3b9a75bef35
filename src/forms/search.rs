//! General search form

use serde::Serialize;

use super::{FieldCleaner, FormData};
use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchForm {
    pub term: String,
    pub in_sites: bool,
    pub in_events: bool,
    pub in_persons: bool,
}

impl SearchForm {
    pub const TERM_MAX_LENGTH: usize = 100;

    /// Blank search with every kind selected
    pub fn initial() -> Self {
        Self {
            term: String::new(),
            in_sites: true,
            in_events: true,
            in_persons: true,
        }
    }

    pub fn clean(data: &FormData) -> Result<Self> {
        let mut cleaner = FieldCleaner::new(data);

        let term = cleaner.char_field("term", true, Some(Self::TERM_MAX_LENGTH));
        let in_sites = cleaner.boolean_field("in_sites");
        let in_events = cleaner.boolean_field("in_events");
        let in_persons = cleaner.boolean_field("in_persons");

        cleaner.finish(|| {
            Some(Self {
                term: term?,
                in_sites,
                in_events,
                in_persons,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AmyError;
    use assert_matches::assert_matches;

    #[test]
    fn test_initial_checks_every_kind() {
        let initial = SearchForm::initial();
        assert!(initial.in_sites && initial.in_events && initial.in_persons);
        assert!(initial.term.is_empty());
    }

    #[test]
    fn test_clean_reads_checkboxes() {
        let data = FormData::new().with("term", " granger ").with("in_persons", "on");
        let form = SearchForm::clean(&data).unwrap();

        assert_eq!(form.term, "granger");
        assert!(form.in_persons);
        assert!(!form.in_sites);
        assert!(!form.in_events);
    }

    #[test]
    fn test_term_required_and_bounded() {
        let result = SearchForm::clean(&FormData::new().with("in_sites", "on"));
        assert_matches!(result, Err(AmyError::Validation(errors)) if errors.field_names() == vec!["term"]);

        let long = "x".repeat(101);
        let result = SearchForm::clean(&FormData::new().with("term", long));
        assert_matches!(result, Err(AmyError::Validation(_)));
    }
}
