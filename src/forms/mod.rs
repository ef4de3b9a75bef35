//! Form validation layer
//!
//! Each form turns a submitted field map into a typed, cleaned value or a
//! `ValidationErrors` carrying per-field and form-level messages. Forms are
//! stateless; foreign-key fields are resolved through [`crate::lookups::Lookups`].

pub mod award;
pub mod bulk_add;
pub mod debrief;
pub mod event;
pub mod fields;
pub mod instructors;
pub mod person;
pub mod search;
pub mod task;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

pub use award::BadgeAwardForm;
pub use bulk_add::PersonBulkAddForm;
pub use debrief::DebriefForm;
pub use event::EventForm;
pub use fields::FieldCleaner;
pub use instructors::InstructorsForm;
pub use person::PersonForm;
pub use search::SearchForm;
pub use task::{TaskForm, TaskFullForm};

/// Submitted form fields, as decoded from an urlencoded POST body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` body; the last value of a
    /// repeated key wins
    pub fn parse_urlencoded(body: &[u8]) -> Self {
        let fields = url::form_urlencoded::parse(body).into_owned().collect();
        Self { fields }
    }

    /// Builder-style setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Trimmed value of a field; missing and blank fields are both `None`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fields }
    }
}

/// Validation failures for one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    field_errors: BTreeMap<String, Vec<String>>,
    non_field_errors: Vec<String>,
}

impl ValidationErrors {
    /// Attach a message to a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Attach a message to the form as a whole
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// Messages for one field, empty if the field is valid
    pub fn field(&self, name: &str) -> &[String] {
        self.field_errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.field_errors.keys().map(String::as_str).collect()
    }

    pub fn non_field_errors(&self) -> &[String] {
        &self.non_field_errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for message in &self.non_field_errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", message)?;
            first = false;
        }
        for (field, messages) in &self.field_errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}
