//! Language subtag registry
//!
//! The registry is a JSON rendering of the IANA language subtag registry: an
//! array of records with `Type`, `Subtag` and `Description` keys. Other keys
//! (`Added`, `Prefix`, `Suppress-Script`, ...) are ignored. Grandfathered and
//! redundant records carry a `Tag` instead of a `Subtag`.

use std::path::Path;

use serde::Deserialize;

use crate::models::language::PREVIOUS_NAME_MAX_LENGTH;
use crate::utils::errors::{AmyError, Result};
use crate::utils::helpers::char_len;

/// Subtags longer than this are extended languages, regions, scripts or variants
const TOP_LEVEL_SUBTAG_MAX_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryEntry {
    #[serde(rename = "Subtag", default)]
    pub subtag: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Description", default)]
    pub description: Vec<String>,
}

impl RegistryEntry {
    /// Two-letter language subtags such as `en` or `cu`
    pub fn is_top_level_language(&self) -> bool {
        self.kind == "language" && char_len(&self.subtag) <= TOP_LEVEL_SUBTAG_MAX_LENGTH
    }

    /// Canonical English name: all description fragments joined by spaces
    pub fn full_name(&self) -> String {
        self.description.join(" ")
    }
}

/// Parse registry JSON
pub fn parse_registry(json: &str) -> Result<Vec<RegistryEntry>> {
    serde_json::from_str(json)
        .map_err(|e| AmyError::Registry(format!("Malformed language registry: {}", e)))
}

/// Read and parse the registry file at `path`
pub async fn load_registry(path: impl AsRef<Path>) -> Result<Vec<RegistryEntry>> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        AmyError::Registry(format!("Cannot read language registry {}: {}", path.display(), e))
    })?;

    let entries = parse_registry(&json)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Language registry loaded");
    Ok(entries)
}

/// Names of top-level languages that were long enough to be truncated by the
/// old 40-character column
pub fn long_language_names(entries: &[RegistryEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.is_top_level_language())
        .map(RegistryEntry::full_name)
        .filter(|name| char_len(name) >= PREVIOUS_NAME_MAX_LENGTH)
        .collect()
}
