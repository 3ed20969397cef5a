//! Search suggestion route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use maison_core::{StorefrontEntry, catalog};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::state::AppState;

/// Maximum number of suggestions returned per request.
const MAX_SUGGESTIONS: usize = 8;

/// Search suggestions query parameters.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// Return up to eight grouped entries whose base name contains the query.
///
/// Matching is case-insensitive over the merged catalog, so a query hits a
/// product once regardless of how many color variants it has. A blank
/// query yields no suggestions.
#[instrument(skip(state), fields(q = %query.q))]
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<Vec<StorefrontEntry>>> {
    let needle = query.q.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let repo = ProductRepository::new(state.pool());
    let snapshot = state.catalog_cache().snapshot(&repo).await?;

    let matches: Vec<StorefrontEntry> = catalog::group_for_storefront(&snapshot)
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect();

    Ok(Json(matches))
}
