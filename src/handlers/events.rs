//! Event and task handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::Form;
use tracing::debug;

use super::{rejected, AppState};
use crate::forms::{EventForm, FormData, TaskForm, TaskFullForm};
use crate::models::{Event, Task};
use crate::utils::errors::Result;
use crate::utils::logging::log_record_created;

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    Form(data): Form<FormData>,
) -> Result<(StatusCode, Json<Event>)> {
    let form = EventForm::clean(&data, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("EventForm", e))?;

    let event = state.db.events.create(form.to_request())
        .await
        .map_err(|e| rejected("EventForm", e))?;
    log_record_created("events", event.id);

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/:ident, where ident is an id or a slug
pub async fn get_event(State(state): State<AppState>, Path(ident): Path<String>) -> Result<Json<Event>> {
    debug!(ident = %ident, "Fetching event");
    let event = state.db.events.get_by_ident(&ident).await?;
    Ok(Json(event))
}

/// POST /events/:ident/tasks
pub async fn create_event_task(
    State(state): State<AppState>,
    Path(ident): Path<String>,
    Form(data): Form<FormData>,
) -> Result<(StatusCode, Json<Task>)> {
    let event = state.db.events.get_by_ident(&ident).await?;
    let form = TaskForm::clean(&data, &event, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("TaskForm", e))?;

    let task = state.db.tasks.create(form.to_request())
        .await
        .map_err(|e| rejected("TaskForm", e))?;
    log_record_created("tasks", task.id);

    Ok((StatusCode::CREATED, Json(task)))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Form(data): Form<FormData>,
) -> Result<(StatusCode, Json<Task>)> {
    let form = TaskFullForm::clean(&data, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("TaskFullForm", e))?;

    let task = state.db.tasks.create(form.to_request())
        .await
        .map_err(|e| rejected("TaskFullForm", e))?;
    log_record_created("tasks", task.id);

    Ok((StatusCode::CREATED, Json(task)))
}
