//! Award repository implementation

use sqlx::PgPool;
use crate::models::{Award, Badge, CreateAwardRequest};
use crate::utils::errors::{AmyError, UniqueConstraint};

const UNIQUE_CONSTRAINTS: &[UniqueConstraint] = &[UniqueConstraint {
    name: "awards_person_id_badge_id_key",
    field: None,
    message: "Award with this Person and Badge already exists.",
}];

#[derive(Clone, Debug)]
pub struct AwardRepository {
    pool: PgPool,
}

impl AwardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Award a badge to a person
    pub async fn create(&self, request: CreateAwardRequest) -> Result<Award, AmyError> {
        let award = sqlx::query_as::<_, Award>(
            r#"
            INSERT INTO awards (person_id, badge_id, awarded, event_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, person_id, badge_id, awarded, event_id
            "#
        )
        .bind(request.person_id)
        .bind(request.badge_id)
        .bind(request.awarded)
        .bind(request.event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AmyError::from(e).on_unique_violation(UNIQUE_CONSTRAINTS))?;

        Ok(award)
    }

    /// Awards held by a person
    pub async fn list_for_person(&self, person_id: i64) -> Result<Vec<Award>, AmyError> {
        let awards = sqlx::query_as::<_, Award>(
            "SELECT id, person_id, badge_id, awarded, event_id FROM awards WHERE person_id = $1 ORDER BY awarded ASC"
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(awards)
    }

    /// Find badge by ID
    pub async fn find_badge(&self, id: i64) -> Result<Option<Badge>, AmyError> {
        let badge = sqlx::query_as::<_, Badge>(
            "SELECT id, name, title, criteria FROM badges WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(badge)
    }

    /// Create a new badge
    pub async fn create_badge(&self, name: &str, title: &str, criteria: &str) -> Result<Badge, AmyError> {
        let badge = sqlx::query_as::<_, Badge>(
            "INSERT INTO badges (name, title, criteria) VALUES ($1, $2, $3) RETURNING id, name, title, criteria"
        )
        .bind(name)
        .bind(title)
        .bind(criteria)
        .fetch_one(&self.pool)
        .await?;

        Ok(badge)
    }
}
