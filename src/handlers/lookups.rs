//! Autocomplete handler

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;

use super::AppState;
use crate::lookups::{LookupItem, LookupKind, AUTOCOMPLETE_LIMIT};
use crate::utils::errors::Result;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub term: String,
}

/// GET /lookups/:kind?term=
pub async fn autocomplete(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Vec<LookupItem>>> {
    let kind: LookupKind = kind.parse()?;
    let items = state
        .lookups
        .search(kind, query.term.trim(), AUTOCOMPLETE_LIMIT)
        .await?;
    Ok(Json(items))
}
