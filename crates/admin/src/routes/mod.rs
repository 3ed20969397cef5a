//! HTTP route handlers for the back-office JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Liveness check
//! GET    /health/ready            - Readiness check (verifies database)
//!
//! # Products
//! GET    /api/products            - Full catalog, newest first
//! POST   /api/products            - Create a product
//! GET    /api/products/{id}       - Fetch one product
//! PUT    /api/products/{id}       - Replace a product
//! DELETE /api/products/{id}       - Delete a product
//!
//! # Store settings
//! GET    /api/settings            - All settings
//! PUT    /api/settings/{key}      - Upsert one setting (JSON body)
//! DELETE /api/settings/{key}      - Remove one setting
//! ```

pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Build the admin API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route("/api/settings", get(settings::list))
        .route(
            "/api/settings/{key}",
            put(settings::upsert).delete(settings::destroy),
        )
}
