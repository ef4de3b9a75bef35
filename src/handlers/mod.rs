//! HTTP handlers
//!
//! Form submissions arrive as urlencoded POST bodies and are answered with
//! JSON. Handlers are grouped by what they manage:
//! - `events`: events and the tasks people hold at them
//! - `persons`: people, bulk uploads and badge awards
//! - `reports`: instructor matching, search and debrief
//! - `lookups`: autocomplete suggestions

pub mod events;
pub mod lookups;
pub mod persons;
pub mod reports;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;

use crate::config::Settings;
use crate::database::{health_check, DatabaseService};
use crate::lookups::Lookups;
use crate::utils::errors::AmyError;
use crate::utils::logging::log_form_rejected;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseService,
    pub lookups: Arc<dyn Lookups>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State whose lookups are served by the database itself
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        Self {
            lookups: Arc::new(db.clone()),
            db,
            settings: Arc::new(settings),
        }
    }

    /// State with a separate lookup source
    pub fn with_lookups(db: DatabaseService, lookups: Arc<dyn Lookups>, settings: Settings) -> Self {
        Self {
            db,
            lookups,
            settings: Arc::new(settings),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Events and tasks
        .route("/events", post(events::create_event))
        .route("/events/:ident", get(events::get_event))
        .route("/events/:ident/tasks", post(events::create_event_task))
        .route("/tasks", post(events::create_task))
        // Persons and awards
        .route("/persons", post(persons::create_person))
        .route("/persons/bulk_add", post(persons::bulk_add_persons))
        .route("/awards", post(persons::award_badge))
        // Reports
        .route("/instructors", get(reports::instructors_initial).post(reports::match_instructors))
        .route("/search", get(reports::search_initial).post(reports::search))
        .route("/debrief", post(reports::debrief))
        // Autocomplete
        .route("/lookups/:kind", get(lookups::autocomplete))
        // Health check
        .route("/health", get(health))
        .with_state(state)
}

/// Log a rejected submission before passing the error on
pub(crate) fn rejected(form: &str, error: AmyError) -> AmyError {
    if let AmyError::Validation(errors) = &error {
        log_form_rejected(form, errors);
    }
    error
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match health_check(state.db.pool()).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable" })),
            )
        }
    }
}
