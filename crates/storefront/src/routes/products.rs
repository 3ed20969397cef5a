//! Product detail route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use maison_core::{ProductRecord, catalog};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Detail page payload: the record plus its color-swatch siblings.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: ProductRecord,
    /// Every variant sharing the product's group, sorted by name,
    /// the product itself included. Out-of-stock variants stay listed.
    pub variants: Vec<ProductRecord>,
}

/// Return one product by slug together with its related variants.
#[instrument(skip(state), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetail>> {
    let repo = ProductRepository::new(state.pool());
    let snapshot = state.catalog_cache().snapshot(&repo).await?;

    let deduped = catalog::dedupe_products(&snapshot);
    let product = deduped
        .iter()
        .find(|record| record.slug == slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Product not found: {slug}")))?;

    let variants = catalog::related_variants(&snapshot, &product);

    Ok(Json(ProductDetail { product, variants }))
}
