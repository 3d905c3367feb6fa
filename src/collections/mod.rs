//! Geographic reference collections
//!
//! The catalog of provinces, districts and municipalities, and the store
//! that shares it between sessions.

pub mod catalog;
pub mod store;

// Re-export for convenience
pub use catalog::{CatalogSnapshot, GeographicCatalog};
pub use store::{CatalogStore, LoadedCatalog};
