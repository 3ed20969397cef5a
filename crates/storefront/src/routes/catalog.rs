//! Catalog grid route handlers.

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

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
}

/// Return the grouped catalog, optionally narrowed to a category.
///
/// Variants of the same product collapse into a single entry carrying the
/// merged image set and the union of purchasable sizes.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<StorefrontEntry>>> {
    let repo = ProductRepository::new(state.pool());
    let snapshot = state.catalog_cache().snapshot(&repo).await?;

    let entries = if query.main_category.is_some() || query.sub_category.is_some() {
        let filtered: Vec<_> = snapshot
            .iter()
            .filter(|record| {
                matches_category(query.main_category.as_deref(), &record.main_category)
                    && matches_category(query.sub_category.as_deref(), &record.sub_category)
            })
            .cloned()
            .collect();
        catalog::group_for_storefront(&filtered)
    } else {
        catalog::group_for_storefront(&snapshot)
    };

    Ok(Json(entries))
}

// Unicode case folding, matching how group keys compare categories.
fn matches_category(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w.to_lowercase() == actual.to_lowercase())
}

/// Drop the cached snapshot so the next request refetches.
///
/// Called by operations tooling after back-office catalog edits that
/// should become visible before the TTL expires.
#[instrument(skip(state))]
pub async fn invalidate_cache(State(state): State<AppState>) -> axum::http::StatusCode {
    state.catalog_cache().invalidate_all().await;
    tracing::info!("Catalog snapshot invalidated");
    axum::http::StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filter_matches_everything() {
        assert!(matches_category(None, "Femmes"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert!(matches_category(Some("femmes"), "Femmes"));
        assert!(!matches_category(Some("Enfants"), "Femmes"));
    }

    #[test]
    fn filter_folds_accented_categories() {
        assert!(matches_category(Some("VÊTEMENTS"), "Vêtements"));
        assert!(matches_category(Some("vêtements"), "Vêtements"));
    }
}
