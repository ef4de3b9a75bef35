//! Airport repository implementation

use sqlx::PgPool;
use crate::models::Airport;
use crate::utils::errors::AmyError;
use crate::utils::helpers::like_pattern;

#[derive(Clone, Debug)]
pub struct AirportRepository {
    pool: PgPool,
}

impl AirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new airport
    pub async fn create(&self, iata: &str, fullname: &str, country: &str, latitude: f64, longitude: f64) -> Result<Airport, AmyError> {
        let airport = sqlx::query_as::<_, Airport>(
            r#"
            INSERT INTO airports (iata, fullname, country, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, iata, fullname, country, latitude, longitude
            "#
        )
        .bind(iata)
        .bind(fullname)
        .bind(country)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(airport)
    }

    /// Find airport by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Airport>, AmyError> {
        let airport = sqlx::query_as::<_, Airport>(
            "SELECT id, iata, fullname, country, latitude, longitude FROM airports WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(airport)
    }

    /// Search airports by IATA code or name
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Airport>, AmyError> {
        let airports = sqlx::query_as::<_, Airport>(
            r#"
            SELECT id, iata, fullname, country, latitude, longitude
            FROM airports
            WHERE iata ILIKE $1 OR fullname ILIKE $1
            ORDER BY iata ASC
            LIMIT $2
            "#
        )
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(airports)
    }
}
