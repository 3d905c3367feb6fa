//! Common traits
//!
//! Interfaces shared by several modules, kept here to avoid circular
//! dependencies between the data layer and the algorithms.

pub mod traits;

pub use traits::*;
