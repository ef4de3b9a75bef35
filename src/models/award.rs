//! Badge and award models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub criteria: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Award {
    pub id: i64,
    pub person_id: i64,
    pub badge_id: i64,
    pub awarded: NaiveDate,
    pub event_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAwardRequest {
    pub person_id: i64,
    pub badge_id: i64,
    pub awarded: NaiveDate,
    pub event_id: Option<i64>,
}
