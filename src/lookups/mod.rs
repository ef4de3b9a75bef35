//! Autocomplete lookups
//!
//! Forms select related records (airport, site, person, event...) through
//! autocomplete widgets that submit the record's id. `Lookups` resolves those
//! ids during cleaning and answers the widgets' search queries.

pub mod database;
pub mod memory;

use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{Airport, Badge, Event, Person, Role, Site, Skill};
use crate::utils::errors::{AmyError, Result};

pub use memory::MemoryLookups;

/// How many suggestions an autocomplete query returns
pub const AUTOCOMPLETE_LIMIT: i64 = 10;

#[async_trait]
pub trait Lookups: Send + Sync {
    async fn airport(&self, id: i64) -> Result<Option<Airport>>;

    async fn site(&self, id: i64) -> Result<Option<Site>>;

    async fn person(&self, id: i64) -> Result<Option<Person>>;

    /// Events that are not deleted
    async fn event(&self, id: i64) -> Result<Option<Event>>;

    async fn role(&self, id: i64) -> Result<Option<Role>>;

    async fn badge(&self, id: i64) -> Result<Option<Badge>>;

    /// All skills, ordered by name
    async fn skills(&self) -> Result<Vec<Skill>>;

    /// Records of `kind` whose label contains `term`, case-insensitively
    async fn search(&self, kind: LookupKind, term: &str, limit: i64) -> Result<Vec<LookupItem>>;
}

/// Which autocomplete source a widget queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Airport,
    Site,
    Person,
    Event,
}

impl FromStr for LookupKind {
    type Err = AmyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "airport" => Ok(LookupKind::Airport),
            "site" => Ok(LookupKind::Site),
            "person" => Ok(LookupKind::Person),
            "event" => Ok(LookupKind::Event),
            other => Err(AmyError::InvalidInput(format!("Unknown lookup: {}", other))),
        }
    }
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupItem {
    pub id: i64,
    pub label: String,
}

impl LookupItem {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_kind_parsing() {
        assert_eq!("airport".parse::<LookupKind>().unwrap(), LookupKind::Airport);
        assert_eq!("event".parse::<LookupKind>().unwrap(), LookupKind::Event);
        assert!("badge".parse::<LookupKind>().is_err());
    }
}
