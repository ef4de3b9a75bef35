//! Skill repository implementation

use sqlx::PgPool;
use crate::models::Skill;
use crate::utils::errors::AmyError;

#[derive(Clone, Debug)]
pub struct SkillRepository {
    pool: PgPool,
}

impl SkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new skill
    pub async fn create(&self, name: &str) -> Result<Skill, AmyError> {
        let skill = sqlx::query_as::<_, Skill>(
            "INSERT INTO skills (name) VALUES ($1) RETURNING id, name"
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    /// List all skills ordered by name
    pub async fn list(&self) -> Result<Vec<Skill>, AmyError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT id, name FROM skills ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    /// Record that a person is qualified in a skill
    pub async fn add_qualification(&self, person_id: i64, skill_id: i64) -> Result<(), AmyError> {
        sqlx::query(
            "INSERT INTO qualifications (person_id, skill_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
        )
        .bind(person_id)
        .bind(skill_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
