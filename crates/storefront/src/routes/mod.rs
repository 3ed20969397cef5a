//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (verifies database)
//!
//! # Catalog
//! GET  /api/catalog                 - Grouped storefront entries
//!                                     (?main_category=&sub_category=)
//! GET  /api/products/{slug}         - Product detail + related variants
//! GET  /api/search/suggestions?q=   - Grouped-entry name suggestions
//!
//! # Internal (not exposed publicly; for ops after back-office edits)
//! POST /internal/cache/invalidate   - Drop the catalog snapshot
//! ```

pub mod catalog;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the storefront API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog::index))
        .route("/api/products/{slug}", get(products::show))
        .route("/api/search/suggestions", get(search::suggestions))
        .route("/internal/cache/invalidate", post(catalog::invalidate_cache))
}
