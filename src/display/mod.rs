//! Display formatting for terminal output
//!
//! Turns records and computed metrics into plain-text tables, cards and
//! summary lines. Amounts are always rendered with the configured currency.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::{format_goal_card, format_goal_list};
pub use report::{format_bar, format_delta, format_percentage, separator, truncate};
pub use transaction::{format_category_list, format_transaction_details, format_transaction_table};
