//! Store settings route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value as JsonValue;
use tracing::instrument;

use crate::db::{SettingsRepository, StoreSetting};
use crate::error::Result;
use crate::state::AppState;

/// List every store setting.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StoreSetting>>> {
    let repo = SettingsRepository::new(state.pool());
    Ok(Json(repo.get_all().await?))
}

/// Insert or replace one setting; the request body is the JSON value.
#[instrument(skip(state, value), fields(key = %key))]
pub async fn upsert(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(value): Json<JsonValue>,
) -> Result<Json<StoreSetting>> {
    let repo = SettingsRepository::new(state.pool());
    Ok(Json(repo.upsert(&key, &value).await?))
}

/// Remove one setting.
#[instrument(skip(state), fields(key = %key))]
pub async fn destroy(State(state): State<AppState>, Path(key): Path<String>) -> Result<StatusCode> {
    let repo = SettingsRepository::new(state.pool());
    repo.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
