//! Catalog snapshot cache.
//!
//! An explicit cache object held in [`crate::state::AppState`] and passed
//! by reference to whoever needs memoized reads; the TTL comes from
//! configuration, not from a hidden module-level constant. Backed by
//! `moka` with a single snapshot entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use maison_core::ProductRecord;

use crate::db::{ProductRepository, RepositoryError};

/// Cache key for catalog data.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Snapshot,
}

/// Memoized view of the product table.
///
/// Handlers always go through [`CatalogCache::snapshot`]; each caller gets
/// an `Arc` to the same immutable vector, so concurrent requests share one
/// fetch per TTL window.
#[derive(Clone)]
pub struct CatalogCache {
    cache: Cache<CacheKey, Arc<Vec<ProductRecord>>>,
}

impl CatalogCache {
    /// Create a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(8).time_to_live(ttl).build();
        Self { cache }
    }

    /// Return the cached snapshot, fetching through `repo` on a miss.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying fetch fails.
    pub async fn snapshot(
        &self,
        repo: &ProductRepository<'_>,
    ) -> Result<Arc<Vec<ProductRecord>>, RepositoryError> {
        if let Some(snapshot) = self.cache.get(&CacheKey::Snapshot).await {
            debug!("Cache hit for catalog snapshot");
            return Ok(snapshot);
        }

        let snapshot = Arc::new(repo.list_all().await?);
        self.cache
            .insert(CacheKey::Snapshot, Arc::clone(&snapshot))
            .await;

        Ok(snapshot)
    }

    /// Drop all cached data.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}
