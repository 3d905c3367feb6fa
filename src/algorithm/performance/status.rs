//! Performance tiers
//!
//! The canonical five-tier scheme plus the neutral outcome used when a
//! comparison cannot be made.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a local value against the national baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
    /// Missing value or zero baseline, shown as neutral
    InsufficientData,
}

impl PerformanceStatus {
    /// The classified tiers from best to worst
    pub const TIERS: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Moderate,
        Self::Poor,
        Self::Critical,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::Critical => "critical",
            Self::InsufficientData => "insufficient_data",
        }
    }

    /// Rank of a classified tier, 4 for excellent down to 0 for critical
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Excellent => Some(4),
            Self::Good => Some(3),
            Self::Moderate => Some(2),
            Self::Poor => Some(1),
            Self::Critical => Some(0),
            Self::InsufficientData => None,
        }
    }

    /// Whether this tier is `other` or better; never true for insufficient data
    #[must_use]
    pub fn is_at_least(self, other: Self) -> bool {
        matches!((self.rank(), other.rank()), (Some(a), Some(b)) if a >= b)
    }

    /// Fill color from the dashboard palette
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#28A745",
            Self::Good => "#20C997",
            Self::Moderate => "#FFC107",
            Self::Poor => "#FD7E14",
            Self::Critical => "#DC3545",
            Self::InsufficientData => "#6C757D",
        }
    }
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
