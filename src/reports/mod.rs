//! Reports module for fintrack
//!
//! Month-level views assembled from stored records by the analytics engine:
//! the dashboard overview and the expense breakdown.

pub mod breakdown;
pub mod dashboard;

pub use breakdown::{BreakdownReport, BreakdownRow};
pub use dashboard::{BudgetUsage, DashboardReport};
