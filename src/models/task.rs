//! Task and role models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// What a person does at an event: instructor, helper, learner, host...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub event_id: i64,
    pub person_id: i64,
    pub role_id: i64,
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub event_id: i64,
    pub person_id: i64,
    pub role_id: i64,
}
