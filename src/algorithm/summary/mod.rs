//! Area summaries and national comparison reports

pub mod report;
pub mod source;
pub mod statistics;

pub use report::{
    Comparison, DASHBOARD_INDICATORS, IndicatorComparison, PerformanceReport, share_of_national,
};
pub use source::RecordSource;
pub use statistics::{AreaSummary, SummaryStatistics};
