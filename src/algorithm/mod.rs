//! Algorithm implementations for the health dashboard
//!
//! This module contains the national performance classifier, area summary
//! and comparison reports, and the map view helpers built on them.

pub mod map;
pub mod performance;
pub mod summary;
