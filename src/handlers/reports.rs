//! Instructor matching, search and debrief handlers

use axum::extract::State;
use axum::response::Json;
use axum::Form;

use super::{rejected, AppState};
use crate::database::service::{DebriefEntry, SearchResults};
use crate::forms::instructors::InstructorsFormInitial;
use crate::forms::{DebriefForm, FormData, InstructorsForm, SearchForm};
use crate::models::InstructorMatch;
use crate::utils::errors::Result;

/// GET /instructors
pub async fn instructors_initial(State(state): State<AppState>) -> Result<Json<InstructorsFormInitial>> {
    let initial = InstructorsForm::initial(state.lookups.as_ref(), state.settings.instructors.search_len).await?;
    Ok(Json(initial))
}

/// POST /instructors
pub async fn match_instructors(
    State(state): State<AppState>,
    Form(data): Form<FormData>,
) -> Result<Json<Vec<InstructorMatch>>> {
    let form = InstructorsForm::clean(&data, state.lookups.as_ref())
        .await
        .map_err(|e| rejected("InstructorsForm", e))?;

    let matches = state.db.match_instructors(&form).await?;
    Ok(Json(matches))
}

/// GET /search
pub async fn search_initial() -> Json<SearchForm> {
    Json(SearchForm::initial())
}

/// POST /search
pub async fn search(State(state): State<AppState>, Form(data): Form<FormData>) -> Result<Json<SearchResults>> {
    let form = SearchForm::clean(&data).map_err(|e| rejected("SearchForm", e))?;
    let results = state.db.search(&form).await?;
    Ok(Json(results))
}

/// POST /debrief
pub async fn debrief(State(state): State<AppState>, Form(data): Form<FormData>) -> Result<Json<Vec<DebriefEntry>>> {
    let form = DebriefForm::clean(&data).map_err(|e| rejected("DebriefForm", e))?;
    let entries = state.db.debrief(&form).await?;
    Ok(Json(entries))
}
