//! Site repository implementation

use sqlx::PgPool;
use crate::models::Site;
use crate::utils::errors::AmyError;
use crate::utils::helpers::like_pattern;

#[derive(Clone, Debug)]
pub struct SiteRepository {
    pool: PgPool,
}

impl SiteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new site
    pub async fn create(&self, domain: &str, fullname: &str, country: Option<&str>) -> Result<Site, AmyError> {
        let site = sqlx::query_as::<_, Site>(
            r#"
            INSERT INTO sites (domain, fullname, country)
            VALUES ($1, $2, $3)
            RETURNING id, domain, fullname, country, notes
            "#
        )
        .bind(domain)
        .bind(fullname)
        .bind(country)
        .fetch_one(&self.pool)
        .await?;

        Ok(site)
    }

    /// Find site by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Site>, AmyError> {
        let site = sqlx::query_as::<_, Site>(
            "SELECT id, domain, fullname, country, notes FROM sites WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(site)
    }

    /// Search sites by domain or full name
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Site>, AmyError> {
        let sites = sqlx::query_as::<_, Site>(
            r#"
            SELECT id, domain, fullname, country, notes
            FROM sites
            WHERE domain ILIKE $1 OR fullname ILIKE $1
            ORDER BY fullname ASC
            LIMIT $2
            "#
        )
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(sites)
    }
}
