//! Field-level cleaning shared by all forms
//!
//! A `FieldCleaner` reads raw values out of `FormData`, converts them and
//! records a message for every field that fails. Cleaning continues after a
//! failure so one submission reports every problem at once; an invalid field
//! reads as `None` to the form's cross-field checks.

use chrono::NaiveDate;

use super::{FormData, ValidationErrors};
use crate::utils::errors::{AmyError, Result};
use crate::utils::helpers::{char_len, is_valid_email, is_valid_url};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_INTEGER: &str = "Enter a whole number.";
pub const INVALID_NUMBER: &str = "Enter a number.";
pub const INVALID_DATE: &str = "Enter a valid date.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_URL: &str = "Enter a valid URL.";
pub const INVALID_CHOICE: &str = "Select a valid choice. That choice is not one of the available choices.";

/// The only accepted date input format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FieldCleaner<'a> {
    data: &'a FormData,
    errors: ValidationErrors,
}

impl<'a> FieldCleaner<'a> {
    pub fn new(data: &'a FormData) -> Self {
        Self {
            data,
            errors: ValidationErrors::default(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn add_non_field_error(&mut self, message: impl Into<String>) {
        self.errors.add_non_field(message);
    }

    /// Raw trimmed value, reporting a missing required field
    fn value(&mut self, name: &str, required: bool) -> Option<&'a str> {
        let value = self.data.get(name);
        if value.is_none() && required {
            self.errors.add(name, REQUIRED);
        }
        value
    }

    /// Text field, optionally bounded in characters
    pub fn char_field(&mut self, name: &str, required: bool, max_length: Option<usize>) -> Option<String> {
        let value = self.value(name, required)?;

        if let Some(max) = max_length {
            let length = char_len(value);
            if length > max {
                self.errors.add(
                    name,
                    format!("Ensure this value has at most {} characters (it has {}).", max, length),
                );
                return None;
            }
        }

        Some(value.to_string())
    }

    /// Free text that defaults to an empty string
    pub fn text_field(&mut self, name: &str) -> String {
        self.data.get(name).unwrap_or_default().to_string()
    }

    pub fn integer_field(&mut self, name: &str, required: bool, min_value: Option<i64>) -> Option<i64> {
        let value = self.value(name, required)?;

        let parsed = match value.parse::<i64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                self.errors.add(name, INVALID_INTEGER);
                return None;
            }
        };

        if let Some(min) = min_value {
            if parsed < min {
                self.errors.add(name, format!("Ensure this value is greater than or equal to {}.", min));
                return None;
            }
        }

        Some(parsed)
    }

    pub fn float_field(
        &mut self,
        name: &str,
        required: bool,
        min_value: Option<f64>,
        max_value: Option<f64>,
    ) -> Option<f64> {
        let value = self.value(name, required)?;

        let parsed = match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => {
                self.errors.add(name, INVALID_NUMBER);
                return None;
            }
        };

        if let Some(min) = min_value {
            if parsed < min {
                self.errors.add(name, format!("Ensure this value is greater than or equal to {:?}.", min));
                return None;
            }
        }
        if let Some(max) = max_value {
            if parsed > max {
                self.errors.add(name, format!("Ensure this value is less than or equal to {:?}.", max));
                return None;
            }
        }

        Some(parsed)
    }

    /// Checkbox semantics: unchecked boxes are simply absent from the body
    pub fn boolean_field(&self, name: &str) -> bool {
        match self.data.get(name) {
            None => false,
            Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "off"),
        }
    }

    pub fn date_field(&mut self, name: &str, required: bool) -> Option<NaiveDate> {
        let value = self.value(name, required)?;

        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors.add(name, INVALID_DATE);
                None
            }
        }
    }

    pub fn email_field(&mut self, name: &str, required: bool, max_length: Option<usize>) -> Option<String> {
        let value = self.char_field(name, required, max_length)?;
        if !is_valid_email(&value) {
            self.errors.add(name, INVALID_EMAIL);
            return None;
        }
        Some(value)
    }

    pub fn url_field(&mut self, name: &str, required: bool, max_length: Option<usize>) -> Option<String> {
        let value = self.char_field(name, required, max_length)?;
        if !is_valid_url(&value) {
            self.errors.add(name, INVALID_URL);
            return None;
        }
        Some(value)
    }

    /// Primary key submitted by an autocomplete or select widget
    ///
    /// Resolve the id with the matching lookup, then pass the result through
    /// [`FieldCleaner::resolved`].
    pub fn choice_id(&mut self, name: &str, required: bool) -> Option<i64> {
        let value = self.value(name, required)?;

        match value.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                self.errors.add(name, INVALID_CHOICE);
                None
            }
        }
    }

    /// Record an invalid choice when a submitted id matched nothing
    pub fn resolved<T>(&mut self, name: &str, found: Option<T>) -> Option<T> {
        if found.is_none() {
            self.errors.add(name, INVALID_CHOICE);
        }
        found
    }

    /// Fail with the collected errors, or build the cleaned value
    ///
    /// `build` returns `None` only when a required value is missing, which
    /// always comes with a recorded error.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(AmyError::Validation(self.errors));
        }

        build().ok_or_else(|| AmyError::InvalidInput("Form is missing a required value".to_string()))
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(data: &FormData, clean: impl FnOnce(&mut FieldCleaner)) -> ValidationErrors {
        let mut cleaner = FieldCleaner::new(data);
        clean(&mut cleaner);
        cleaner.into_errors()
    }

    #[test]
    fn test_required_field_missing() {
        let data = FormData::new();
        let errors = errors_for(&data, |c| {
            assert_eq!(c.char_field("term", true, Some(100)), None);
        });
        assert_eq!(errors.field("term"), [REQUIRED.to_string()]);
    }

    #[test]
    fn test_optional_field_missing_is_not_an_error() {
        let data = FormData::new();
        let errors = errors_for(&data, |c| {
            assert_eq!(c.float_field("latitude", false, Some(-90.0), Some(90.0)), None);
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_char_field_length_counts_characters() {
        let data = FormData::new().with("reg_key", "ü".repeat(21));
        let errors = errors_for(&data, |c| {
            assert_eq!(c.char_field("reg_key", false, Some(20)), None);
        });
        assert_eq!(
            errors.field("reg_key"),
            ["Ensure this value has at most 20 characters (it has 21).".to_string()]
        );
    }

    #[test]
    fn test_float_bounds() {
        let data = FormData::new()
            .with("latitude", "-90.5")
            .with("longitude", "180")
            .with("other", "north");
        let errors = errors_for(&data, |c| {
            assert_eq!(c.float_field("latitude", false, Some(-90.0), Some(90.0)), None);
            assert_eq!(c.float_field("longitude", false, Some(-180.0), Some(180.0)), Some(180.0));
            assert_eq!(c.float_field("other", false, None, None), None);
        });
        assert_eq!(
            errors.field("latitude"),
            ["Ensure this value is greater than or equal to -90.0.".to_string()]
        );
        assert!(errors.field("longitude").is_empty());
        assert_eq!(errors.field("other"), [INVALID_NUMBER.to_string()]);
    }

    #[test]
    fn test_integer_min_value() {
        let data = FormData::new().with("wanted", "0").with("attendance", "1.5");
        let errors = errors_for(&data, |c| {
            assert_eq!(c.integer_field("wanted", true, Some(1)), None);
            assert_eq!(c.integer_field("attendance", false, Some(0)), None);
        });
        assert_eq!(
            errors.field("wanted"),
            ["Ensure this value is greater than or equal to 1.".to_string()]
        );
        assert_eq!(errors.field("attendance"), [INVALID_INTEGER.to_string()]);
    }

    #[test]
    fn test_boolean_checkbox_values() {
        let data = FormData::new()
            .with("a", "on")
            .with("b", "false")
            .with("c", "0")
            .with("d", "");
        let cleaner = FieldCleaner::new(&data);
        assert!(cleaner.boolean_field("a"));
        assert!(!cleaner.boolean_field("b"));
        assert!(!cleaner.boolean_field("c"));
        assert!(!cleaner.boolean_field("d"));
        assert!(!cleaner.boolean_field("missing"));
    }

    #[test]
    fn test_date_accepts_only_iso_format() {
        let data = FormData::new().with("begin_date", "2015-02-28").with("end_date", "28/02/2015");
        let errors = errors_for(&data, |c| {
            assert_eq!(c.date_field("begin_date", true), NaiveDate::from_ymd_opt(2015, 2, 28));
            assert_eq!(c.date_field("end_date", true), None);
        });
        assert_eq!(errors.field("end_date"), [INVALID_DATE.to_string()]);
    }

    #[test]
    fn test_choice_id_and_resolution() {
        let data = FormData::new().with("airport", "YYZ").with("person", "12");
        let errors = errors_for(&data, |c| {
            assert_eq!(c.choice_id("airport", false), None);
            let id = c.choice_id("person", true);
            assert_eq!(id, Some(12));
            assert_eq!(c.resolved::<i64>("person", None), None);
        });
        assert_eq!(errors.field("airport"), [INVALID_CHOICE.to_string()]);
        assert_eq!(errors.field("person"), [INVALID_CHOICE.to_string()]);
    }

    #[test]
    fn test_finish_reports_errors() {
        let data = FormData::new();
        let mut cleaner = FieldCleaner::new(&data);
        let term = cleaner.char_field("term", true, None);
        let result = cleaner.finish(|| term);
        match result {
            Err(AmyError::Validation(errors)) => assert_eq!(errors.field_names(), vec!["term"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
