//! Event model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub site_id: i64,
    pub organizer_id: Option<i64>,
    pub published: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub slug: String,
    pub url: Option<String>,
    pub reg_key: Option<String>,
    pub attendance: Option<i32>,
    pub admin_fee: Option<f64>,
    pub notes: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn label(&self) -> String {
        self.slug.clone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub site_id: i64,
    pub organizer_id: Option<i64>,
    pub published: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub slug: String,
    pub url: Option<String>,
    pub reg_key: Option<String>,
    pub attendance: Option<i32>,
    pub admin_fee: Option<f64>,
    pub notes: String,
}

/// How an event is addressed in URLs: by numeric id or by slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIdent {
    Id(i64),
    Slug(String),
}

impl EventIdent {
    /// Integer-looking identifiers are ids; anything else is a slug.
    ///
    /// Event slugs are never integers, so the two cannot collide.
    pub fn parse(ident: &str) -> Self {
        match ident.trim().parse::<i64>() {
            Ok(id) => EventIdent::Id(id),
            Err(_) => EventIdent::Slug(ident.to_string()),
        }
    }
}

impl std::fmt::Display for EventIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventIdent::Id(id) => write!(f, "{}", id),
            EventIdent::Slug(slug) => write!(f, "{}", slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ident_parsing() {
        assert_eq!(EventIdent::parse("42"), EventIdent::Id(42));
        assert_eq!(EventIdent::parse("2015-01-01-ttt"), EventIdent::Slug("2015-01-01-ttt".to_string()));
    }
}
