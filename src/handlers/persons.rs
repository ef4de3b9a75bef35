//! Person, bulk upload and award handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::Form;
use tracing::info;

use super::{rejected, AppState};
use crate::forms::{BadgeAwardForm, FormData, PersonBulkAddForm, PersonForm};
use crate::models::{Award, Person};
use crate::utils::errors::Result;
use crate::utils::logging::log_record_created;

/// POST /persons
pub async fn create_person(
    State(state): State<AppState>,
    Form(data): Form<FormData>,
) -> Result<(StatusCode, Json<Person>)> {
    let form = PersonForm::clean(&data, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("PersonForm", e))?;

    let person = state.db.persons.create(form.to_request())
        .await
        .map_err(|e| rejected("PersonForm", e))?;
    log_record_created("persons", person.id);

    Ok((StatusCode::CREATED, Json(person)))
}

/// POST /persons/bulk_add with a CSV body
pub async fn bulk_add_persons(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Person>>)> {
    let file = (!body.is_empty()).then_some(&body[..]);
    let entries = PersonBulkAddForm::clean(file).map_err(|e| rejected("PersonBulkAddForm", e))?;

    let persons = state.db.persons.create_bulk(&entries)
        .await
        .map_err(|e| rejected("PersonBulkAddForm", e))?;
    info!(count = persons.len(), "Persons added in bulk");

    Ok((StatusCode::CREATED, Json(persons)))
}

/// POST /awards
pub async fn award_badge(
    State(state): State<AppState>,
    Form(data): Form<FormData>,
) -> Result<(StatusCode, Json<Award>)> {
    let form = BadgeAwardForm::clean(&data, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("BadgeAwardForm", e))?;

    let award = state.db.awards.create(form.to_request())
        .await
        .map_err(|e| rejected("BadgeAwardForm", e))?;
    log_record_created("awards", award.id);

    Ok((StatusCode::CREATED, Json(award)))
}
