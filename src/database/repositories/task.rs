//! Task repository implementation

use sqlx::{FromRow, PgPool};
use serde::Serialize;
use crate::models::{CreateTaskRequest, Role, Task};
use crate::utils::errors::{AmyError, UniqueConstraint};

const UNIQUE_CONSTRAINTS: &[UniqueConstraint] = &[UniqueConstraint {
    name: "tasks_event_id_person_id_role_id_key",
    field: None,
    message: "Task with this Event, Person and Role already exists.",
}];

/// Task joined with the names needed for reporting
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TaskSummary {
    pub task_id: i64,
    pub event_id: i64,
    pub person_id: i64,
    pub person_name: String,
    pub role: String,
}

#[derive(Clone, Debug)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new task
    pub async fn create(&self, request: CreateTaskRequest) -> Result<Task, AmyError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (event_id, person_id, role_id)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, person_id, role_id, deleted
            "#
        )
        .bind(request.event_id)
        .bind(request.person_id)
        .bind(request.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AmyError::from(e).on_unique_violation(UNIQUE_CONSTRAINTS))?;

        Ok(task)
    }

    /// Live tasks with a given role across a set of events
    pub async fn summaries_for_events(&self, event_ids: &[i64], role: &str) -> Result<Vec<TaskSummary>, AmyError> {
        let tasks = sqlx::query_as::<_, TaskSummary>(
            r#"
            SELECT t.id AS task_id, t.event_id, t.person_id,
                   (p.personal || ' ' || p.family) AS person_name, r.name AS role
            FROM tasks t
            INNER JOIN persons p ON p.id = t.person_id
            INNER JOIN roles r ON r.id = t.role_id
            WHERE t.event_id = ANY($1) AND r.name = $2 AND NOT t.deleted
            ORDER BY t.event_id ASC, p.family ASC, p.personal ASC
            "#
        )
        .bind(event_ids)
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Find role by ID
    pub async fn find_role(&self, id: i64) -> Result<Option<Role>, AmyError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }
}
