//! Geographic filtering
//!
//! The cascading drill-down selector and the record filter derived from a
//! selection.

pub mod area;
pub mod selector;

// Re-export commonly used items
pub use area::{AreaFilter, FilterCriteria};
pub use selector::{Choice, GeographicSelector};
