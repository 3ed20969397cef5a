//! Product repository: catalog writes for the back office.
//!
//! All mutations are keyed by id. Rows coming back from `RETURNING`
//! clauses pass through the same [`RawProductRow`] normalization the
//! storefront uses, so both binaries agree on what a record looks like.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use maison_core::{ProductRecord, RawProductRow};

use super::RepositoryError;

const PRODUCT_COLUMNS: &str = "id, slug, name, main_category, sub_category, image_url, \
     gallery_urls, sizes, stock, is_new, is_best_seller, created_at";

/// Payload for creating or fully replacing a product.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProductInput {
    pub slug: String,
    pub name: String,
    pub main_category: String,
    pub sub_category: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
}

/// Repository for catalog writes.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows: Vec<RawProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(RawProductRow::normalize).collect())
    }

    /// Get one product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<ProductRecord, RepositoryError> {
        let row: Option<RawProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        row.map(RawProductRow::normalize)
            .ok_or(RepositoryError::NotFound)
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn insert(&self, input: &ProductInput) -> Result<ProductRecord, RepositoryError> {
        let row: RawProductRow = sqlx::query_as(&format!(
            "INSERT INTO products \
                 (slug, name, main_category, sub_category, image_url, \
                  gallery_urls, sizes, stock, is_new, is_best_seller) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&input.slug)
        .bind(&input.name)
        .bind(&input.main_category)
        .bind(&input.sub_category)
        .bind(&input.image_url)
        .bind(&input.gallery_urls)
        .bind(&input.sizes)
        .bind(input.stock)
        .bind(input.is_new)
        .bind(input.is_best_seller)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.normalize())
    }

    /// Replace an existing product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches,
    /// `RepositoryError::Conflict` if the new slug collides.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        input: &ProductInput,
    ) -> Result<ProductRecord, RepositoryError> {
        let row: Option<RawProductRow> = sqlx::query_as(&format!(
            "UPDATE products SET \
                 slug = $2, name = $3, main_category = $4, sub_category = $5, \
                 image_url = $6, gallery_urls = $7, sizes = $8, stock = $9, \
                 is_new = $10, is_best_seller = $11 \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.slug)
        .bind(&input.name)
        .bind(&input.main_category)
        .bind(&input.sub_category)
        .bind(&input.image_url)
        .bind(&input.gallery_urls)
        .bind(&input.sizes)
        .bind(input.stock)
        .bind(input.is_new)
        .bind(input.is_best_seller)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.map(RawProductRow::normalize)
            .ok_or(RepositoryError::NotFound)
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
