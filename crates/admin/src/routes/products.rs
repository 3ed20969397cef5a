//! Product CRUD route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use maison_core::ProductRecord;

use crate::db::{ProductInput, ProductRepository};
use crate::error::Result;
use crate::state::AppState;

/// List the whole catalog, newest first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductRecord>>> {
    let repo = ProductRepository::new(state.pool());
    Ok(Json(repo.list().await?))
}

/// Fetch one product by id.
#[instrument(skip(state), fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductRecord>> {
    let repo = ProductRepository::new(state.pool());
    Ok(Json(repo.get(id).await?))
}

/// Create a product.
#[instrument(skip(state, input), fields(slug = %input.slug))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ProductRecord>)> {
    let repo = ProductRepository::new(state.pool());
    let record = repo.insert(&input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a product.
#[instrument(skip(state, input), fields(id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductRecord>> {
    let repo = ProductRepository::new(state.pool());
    Ok(Json(repo.update(id, &input).await?))
}

/// Delete a product.
#[instrument(skip(state), fields(id = %id))]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let repo = ProductRepository::new(state.pool());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
