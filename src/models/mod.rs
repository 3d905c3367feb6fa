//! Domain models for the dashboard core
//!
//! Geographic entities, the drill-down selection and the indicator rows the
//! data layer hands us.

pub mod area_record;
pub mod geography;
pub mod selection;

// Re-export commonly used types
pub use area_record::AreaRecord;
pub use geography::{AreaRef, District, GeoEntity, GeoLevel, Municipality, Province};
pub use selection::{Breadcrumb, Selection};
