//! Language repository implementation

use sqlx::PgPool;
use crate::models::Language;
use crate::utils::errors::AmyError;

#[derive(Clone, Debug)]
pub struct LanguageRepository {
    pool: PgPool,
}

impl LanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new language
    pub async fn create(&self, subtag: &str, name: &str) -> Result<Language, AmyError> {
        let language = sqlx::query_as::<_, Language>(
            "INSERT INTO languages (subtag, name) VALUES ($1, $2) RETURNING id, subtag, name"
        )
        .bind(subtag)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(language)
    }

    /// List languages ordered by name
    pub async fn list(&self) -> Result<Vec<Language>, AmyError> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, subtag, name FROM languages ORDER BY name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(languages)
    }
}
