//! Selection-driven record filtering
//!
//! Turns a `Selection` into a predicate over indicator rows, the in-memory
//! counterpart of the `WHERE` clause the data layer builds for aggregate
//! queries.

use crate::models::{AreaRecord, GeoLevel, Selection};

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to an area record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaFilter {
    /// Every record
    Everything,
    /// Records whose code at the given level matches
    Code(GeoLevel, String),
    /// Combined filter that requires all criteria to be met
    All(Vec<AreaFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<AreaFilter>),
}

impl AreaFilter {
    /// Filter matching every record inside the selected area
    ///
    /// Each populated level contributes one code constraint, so a stale
    /// selection with inconsistent codes matches nothing.
    #[must_use]
    pub fn for_selection(selection: &Selection) -> Self {
        let constraints: Vec<Self> = selection
            .breadcrumb()
            .into_iter()
            .map(|(level, area)| Self::Code(level, area.code.clone()))
            .collect();

        if constraints.is_empty() {
            Self::Everything
        } else {
            Self::All(constraints)
        }
    }

    /// Records that meet this filter
    pub fn apply<'a>(&self, records: &'a [AreaRecord]) -> Vec<&'a AreaRecord> {
        records.iter().filter(|r| self.meets_criteria(*r)).collect()
    }
}

impl FilterCriteria<AreaRecord> for AreaFilter {
    fn meets_criteria(&self, record: &AreaRecord) -> bool {
        match self {
            Self::Everything => true,
            Self::Code(level, code) => record.code_at(*level) == Some(code.as_str()),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}
