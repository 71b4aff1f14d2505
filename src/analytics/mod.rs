//! Financial metrics engine
//!
//! Pure computations over in-memory records: monthly aggregation, goal
//! progress and transaction filtering. Nothing here touches storage or the
//! clock; callers supply the reference month and date.

pub mod filter;
pub mod goals;
pub mod period;

pub use filter::{apply, FilterSpec, ALL};
pub use goals::{compute_progress, track_all, GoalProgress, GoalState};
pub use period::{
    compare_months, filter_by_month, percent_change, summarize, CategoryBreakdown, CategoryTotal,
    DeltaMetric, PeriodComparison, PeriodSummary, Trend,
};
