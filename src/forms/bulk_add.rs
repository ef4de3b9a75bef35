//! Bulk person upload
//!
//! The upload is a CSV file with a header row naming the columns
//! `personal`, `middle`, `family` and `email`, in any order and case.
//! `middle` and `email` may be left out entirely.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::fields::{INVALID_EMAIL, REQUIRED};
use super::ValidationErrors;
use crate::models::BulkPersonEntry;
use crate::utils::errors::{AmyError, Result};
use crate::utils::helpers::is_valid_email;

pub const FILE_FIELD: &str = "file";
pub const EMPTY_FILE: &str = "The submitted file is empty.";

const REQUIRED_COLUMNS: [&str; 2] = ["personal", "family"];

pub struct PersonBulkAddForm;

/// Column positions found in the header row
struct Columns {
    positions: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_lowercase(), index))
            .collect();
        Self { positions }
    }

    fn missing(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !self.positions.contains_key(*column))
            .collect()
    }

    /// Non-blank cell of `column` in `record`
    fn cell(&self, record: &StringRecord, column: &str) -> Option<String> {
        let index = *self.positions.get(column)?;
        record
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

impl PersonBulkAddForm {
    /// Parse an uploaded CSV into person entries
    ///
    /// Every row is checked; problems are reported under the `file` field,
    /// one message per problem, with rows numbered from 1 after the header.
    pub fn clean(file: Option<&[u8]>) -> Result<Vec<BulkPersonEntry>> {
        let mut errors = ValidationErrors::default();

        let contents = match file {
            None => {
                errors.add(FILE_FIELD, REQUIRED);
                return Err(AmyError::Validation(errors));
            }
            Some(contents) if contents.iter().all(u8::is_ascii_whitespace) => {
                errors.add(FILE_FIELD, EMPTY_FILE);
                return Err(AmyError::Validation(errors));
            }
            Some(contents) => contents,
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(contents);

        let columns = Columns::new(reader.headers()?);
        let missing = columns.missing();
        if !missing.is_empty() {
            errors.add(FILE_FIELD, format!("Missing required column(s): {}.", missing.join(", ")));
            return Err(AmyError::Validation(errors));
        }

        let mut entries = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let row = index + 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    errors.add(FILE_FIELD, format!("Row {}: {}", row, e));
                    continue;
                }
            };

            let personal = columns.cell(&record, "personal");
            let family = columns.cell(&record, "family");
            let middle = columns.cell(&record, "middle");
            let email = columns.cell(&record, "email");

            for (column, value) in [("personal", &personal), ("family", &family)] {
                if value.is_none() {
                    errors.add(FILE_FIELD, format!("Row {}, {}: {}", row, column, REQUIRED));
                }
            }
            if let Some(email) = email.as_deref() {
                if !is_valid_email(email) {
                    errors.add(FILE_FIELD, format!("Row {}: {}", row, INVALID_EMAIL));
                }
            }

            if let (Some(personal), Some(family)) = (personal, family) {
                entries.push(BulkPersonEntry { personal, middle, family, email });
            }
        }

        if entries.is_empty() && errors.is_empty() {
            errors.add(FILE_FIELD, EMPTY_FILE);
        }
        if !errors.is_empty() {
            return Err(AmyError::Validation(errors));
        }

        Ok(entries)
    }
}
