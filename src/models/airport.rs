//! Airport model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Airport {
    pub id: i64,
    pub iata: String,
    pub fullname: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Autocomplete label, e.g. `YYZ: Toronto Pearson International Airport`
    pub fn label(&self) -> String {
        format!("{}: {}", self.iata, self.fullname)
    }
}
