//! Workshop request repository implementation

use sqlx::PgPool;
use crate::models::WorkshopRequest;
use crate::utils::errors::AmyError;

#[derive(Clone, Debug)]
pub struct WorkshopRequestRepository {
    pool: PgPool,
}

impl WorkshopRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find workshop request by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<WorkshopRequest>, AmyError> {
        let request = sqlx::query_as::<_, WorkshopRequest>(
            r#"
            SELECT id, personal, family, email, institution_id, institution_other_name, location, country,
                   other_preferred_dates, administrative_fee, scholarship_circumstances, number_attendees, state, created_at
            FROM workshop_requests
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Pending workshop requests, oldest first
    pub async fn list_pending(&self) -> Result<Vec<WorkshopRequest>, AmyError> {
        let requests = sqlx::query_as::<_, WorkshopRequest>(
            r#"
            SELECT id, personal, family, email, institution_id, institution_other_name, location, country,
                   other_preferred_dates, administrative_fee, scholarship_circumstances, number_attendees, state, created_at
            FROM workshop_requests
            WHERE state = 'p'
            ORDER BY created_at ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }
}
