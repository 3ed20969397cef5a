//! Store settings database operations.
//!
//! Free-form key/value configuration for the shop (banner text, contact
//! details, social links). Values are JSON so the presentation layer can
//! store structured data without schema churn.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;

/// One store configuration entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StoreSetting {
    pub key: String,
    pub value: JsonValue,
    pub updated_at: DateTime<Utc>,
}

/// Repository for store settings.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every setting, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<StoreSetting>, RepositoryError> {
        let settings = sqlx::query_as(
            "SELECT key, value, updated_at FROM store_settings ORDER BY key",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(settings)
    }

    /// Insert or replace one setting value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn upsert(
        &self,
        key: &str,
        value: &JsonValue,
    ) -> Result<StoreSetting, RepositoryError> {
        let setting = sqlx::query_as(
            "INSERT INTO store_settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW() \
             RETURNING key, value, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(self.pool)
        .await?;

        Ok(setting)
    }

    /// Delete one setting by key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the key does not exist.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store_settings WHERE key = $1")
            .bind(key)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
