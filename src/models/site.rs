//! Site model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Host institution of an event; also used as an event's organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Site {
    pub id: i64,
    pub domain: String,
    pub fullname: String,
    pub country: Option<String>,
    pub notes: String,
}

impl Site {
    pub fn label(&self) -> String {
        format!("{} <{}>", self.fullname, self.domain)
    }
}
