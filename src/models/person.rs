//! Person model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub personal: String,
    pub middle: Option<String>,
    pub family: String,
    pub username: String,
    pub may_contact: bool,
    pub email: Option<String>,
    pub gender: String,
    pub airport_id: Option<i64>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub url: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn full_name(&self) -> String {
        match self.middle.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.personal, middle, self.family)
            }
            _ => format!("{} {}", self.personal, self.family),
        }
    }

    pub fn label(&self) -> String {
        match self.email.as_deref() {
            Some(email) => format!("{} <{}>", self.full_name(), email),
            None => self.full_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    pub personal: String,
    pub middle: Option<String>,
    pub family: String,
    pub username: String,
    pub may_contact: bool,
    pub email: Option<String>,
    pub gender: Gender,
    pub airport_id: Option<i64>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub url: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    Undisclosed,
    Male,
    Female,
    Other,
}

impl Gender {
    /// Single-letter code stored in `persons.gender`
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Undisclosed => "U",
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Gender::Undisclosed),
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "O" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Instructor returned by a matching search, nearest first
#[derive(Debug, Clone, Serialize)]
pub struct InstructorMatch {
    pub person: Person,
    pub airport_iata: String,
    pub distance_km: f64,
}

/// Person row parsed from a bulk-add CSV upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPersonEntry {
    pub personal: String,
    pub middle: Option<String>,
    pub family: String,
    pub email: Option<String>,
}
