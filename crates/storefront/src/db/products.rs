//! Read-only product repository.
//!
//! Rows are normalized into [`ProductRecord`]s here, at the boundary, so
//! the grouping engine never sees NULLs, negative stock or blank size
//! labels. Queries use runtime `query_as` with [`RawProductRow`].

use sqlx::PgPool;
use tracing::instrument;

use maison_core::{ProductRecord, RawProductRow};

use super::RepositoryError;

const SELECT_PRODUCTS: &str = "\
    SELECT id, slug, name, main_category, sub_category, image_url, \
           gallery_urls, sizes, stock, is_new, is_best_seller, created_at \
    FROM products";

/// Repository for catalog reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full catalog snapshot, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows: Vec<RawProductRow> =
            sqlx::query_as(&format!("{SELECT_PRODUCTS} ORDER BY created_at DESC"))
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(RawProductRow::normalize).collect())
    }
}
