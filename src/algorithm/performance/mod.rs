//! Performance comparison against national baselines
//!
//! This module grades local indicator values against the national value,
//! using indicator-specific threshold profiles where they exist and a
//! percentage-deviation fallback elsewhere.

pub mod classifier;
pub mod indicator;
pub mod status;
pub mod threshold;

// Re-export commonly used items
pub use classifier::{PerformanceClassifier, PerformanceResult, fallback_tier, percentage_diff};
pub use indicator::{Aggregation, Indicator, Polarity};
pub use status::PerformanceStatus;
pub use threshold::{ThresholdProfile, ThresholdRegistry};
