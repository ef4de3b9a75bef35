//! Skill model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Something an instructor is qualified to teach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}
