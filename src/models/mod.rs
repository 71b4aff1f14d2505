//! Core data models for fintrack
//!
//! Transactions and goals are the stored records; money, months, currencies
//! and category labels are the value types they are built from.

pub mod category;
pub mod currency;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{category_label, normalize_category, CategoryLabel, DEFAULT_CATEGORIES};
pub use currency::{Currency, UnknownCurrency};
pub use goal::{Goal, GoalValidationError};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
