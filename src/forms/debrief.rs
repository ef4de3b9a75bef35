//! Debrief period form

use chrono::NaiveDate;
use serde::Serialize;

use super::{FieldCleaner, FormData};
use crate::utils::errors::Result;

/// Date range of events to debrief, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebriefForm {
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DebriefForm {
    pub fn clean(data: &FormData) -> Result<Self> {
        let mut cleaner = FieldCleaner::new(data);

        let begin_date = cleaner.date_field("begin_date", true);
        let end_date = cleaner.date_field("end_date", true);

        cleaner.finish(|| {
            Some(Self {
                begin_date: begin_date?,
                end_date: end_date?,
            })
        })
    }
}
