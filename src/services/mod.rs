//! Service layer for fintrack
//!
//! Validation, persistence and audit logging on top of the storage layer.
//! Services hand records to the analytics engine for every computed figure.

pub mod goal;
pub mod transaction;

pub use goal::{CreateGoalInput, GoalService, GoalWithProgress};
pub use transaction::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
