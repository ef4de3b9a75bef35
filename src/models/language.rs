//! Language model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column width of `languages.name` before it was widened
pub const PREVIOUS_NAME_MAX_LENGTH: usize = 40;

/// Current column width of `languages.name`
pub const NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Language {
    pub id: i64,
    /// Language subtag, e.g. `en` or `tlh`
    pub subtag: String,
    /// Description of this language tag in English
    pub name: String,
}
