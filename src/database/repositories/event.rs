//! Event repository implementation

use chrono::NaiveDate;
use sqlx::PgPool;
use crate::models::{CreateEventRequest, Event, EventIdent};
use crate::utils::errors::{AmyError, UniqueConstraint};
use crate::utils::helpers::like_pattern;

const UNIQUE_CONSTRAINTS: &[UniqueConstraint] = &[UniqueConstraint {
    name: "events_slug_key",
    field: Some("slug"),
    message: "Event with this Slug already exists.",
}];

#[derive(Clone, Debug)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, AmyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes, deleted, created_at
            "#
        )
        .bind(request.site_id)
        .bind(request.organizer_id)
        .bind(request.published)
        .bind(request.start)
        .bind(request.end)
        .bind(request.slug)
        .bind(request.url)
        .bind(request.reg_key)
        .bind(request.attendance)
        .bind(request.admin_fee)
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AmyError::from(e).on_unique_violation(UNIQUE_CONSTRAINTS))?;

        Ok(event)
    }

    /// Find a live event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AmyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"SELECT id, site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes, deleted, created_at FROM events WHERE id = $1 AND NOT deleted"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find a live event by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AmyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"SELECT id, site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes, deleted, created_at FROM events WHERE slug = $1 AND NOT deleted"#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find an event addressed either by numeric ID or by slug
    pub async fn get_by_ident(&self, ident: &str) -> Result<Event, AmyError> {
        let found = match EventIdent::parse(ident) {
            EventIdent::Id(id) => self.find_by_id(id).await?,
            EventIdent::Slug(slug) => self.find_by_slug(&slug).await?,
        };

        found.ok_or_else(|| AmyError::EventNotFound { ident: ident.to_string() })
    }

    /// Search live events by slug or URL
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Event>, AmyError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes, deleted, created_at
            FROM events
            WHERE NOT deleted AND (slug ILIKE $1 OR url ILIKE $1 OR notes ILIKE $1)
            ORDER BY start DESC NULLS LAST, slug ASC
            LIMIT $2
            "#
        )
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Live events starting within `[begin, end]`, oldest first
    pub async fn list_starting_between(&self, begin: NaiveDate, end: NaiveDate) -> Result<Vec<Event>, AmyError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, site_id, organizer_id, published, start, "end", slug, url, reg_key, attendance, admin_fee, notes, deleted, created_at
            FROM events
            WHERE NOT deleted AND start BETWEEN $1 AND $2
            ORDER BY start ASC, slug ASC
            "#
        )
        .bind(begin)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Mark an event as deleted
    pub async fn soft_delete(&self, id: i64) -> Result<(), AmyError> {
        sqlx::query("UPDATE events SET deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
