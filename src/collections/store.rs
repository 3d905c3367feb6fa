//! Shared catalog handle
//!
//! Sessions share one catalog read-only. A refresh builds a complete new
//! catalog and swaps the whole `Arc` in one step, so a reader sees either
//! the old snapshot or the new one and never a mix of both.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::collections::catalog::GeographicCatalog;
use crate::utils::logging::log_catalog_counts;

/// A published catalog and the time it was loaded
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Arc<GeographicCatalog>,
    pub loaded_at: DateTime<Utc>,
}

/// Holder of the current catalog snapshot
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<LoadedCatalog>>,
    ttl: Duration,
}

impl CatalogStore {
    /// Create a store holding `catalog`, considered fresh for `ttl`
    #[must_use]
    pub fn new(catalog: GeographicCatalog, ttl: Duration) -> Self {
        Self::with_loaded_at(catalog, ttl, Utc::now())
    }

    /// Create a store with an explicit load time
    #[must_use]
    pub fn with_loaded_at(catalog: GeographicCatalog, ttl: Duration, loaded_at: DateTime<Utc>) -> Self {
        Self {
            current: RwLock::new(Arc::new(LoadedCatalog {
                catalog: Arc::new(catalog),
                loaded_at,
            })),
            ttl,
        }
    }

    /// The current catalog and its load time
    #[must_use]
    pub fn loaded(&self) -> Arc<LoadedCatalog> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete snapshot.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The current catalog
    #[must_use]
    pub fn snapshot(&self) -> Arc<GeographicCatalog> {
        Arc::clone(&self.loaded().catalog)
    }

    /// Publish a new catalog, returning the one it replaced
    pub fn publish(&self, catalog: GeographicCatalog) -> Arc<GeographicCatalog> {
        self.publish_at(catalog, Utc::now())
    }

    /// Publish a new catalog with an explicit load time
    pub fn publish_at(&self, catalog: GeographicCatalog, loaded_at: DateTime<Utc>) -> Arc<GeographicCatalog> {
        let next = Arc::new(LoadedCatalog {
            catalog: Arc::new(catalog),
            loaded_at,
        });
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        log::info!(
            "Published geographic catalog with {} areas (replacing {} areas loaded at {})",
            guard.catalog.area_count(),
            previous.catalog.area_count(),
            previous.loaded_at
        );
        log_catalog_counts(&guard.catalog);
        Arc::clone(&previous.catalog)
    }

    /// How long a catalog stays fresh
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether the catalog is older than the TTL at `now`
    #[must_use]
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        let loaded = self.loaded();
        let stale = now - loaded.loaded_at >= self.ttl;
        if stale {
            log::warn!(
                "Geographic catalog loaded at {} is older than {} seconds",
                loaded.loaded_at,
                self.ttl.num_seconds()
            );
        }
        stale
    }

    /// Whether the catalog is older than the TTL now
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::sample_catalog;

    #[test]
    fn test_publish_swaps_whole_catalog() {
        let store = CatalogStore::new(GeographicCatalog::empty(), Duration::hours(24));
        let before = store.snapshot();
        assert!(before.is_empty());

        let previous = store.publish(sample_catalog());
        assert!(previous.is_empty());
        // A reader holding the old snapshot keeps a consistent view
        assert!(before.is_empty());
        assert!(!store.snapshot().is_empty());
    }

    #[test]
    fn test_staleness() {
        let loaded_at = Utc::now() - Duration::hours(25);
        let store = CatalogStore::with_loaded_at(sample_catalog(), Duration::hours(24), loaded_at);
        assert!(store.is_stale());
        assert!(!store.is_stale_at(loaded_at + Duration::hours(1)));

        store.publish(sample_catalog());
        assert!(!store.is_stale());
    }
}
