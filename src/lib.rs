//! fintrack - personal finance tracking from the terminal
//!
//! Records income and expenses, aggregates them by calendar month, compares
//! each month with the one before, and tracks progress toward savings goals.
//!
//! # Architecture
//!
//! - `analytics`: pure aggregation, filtering and goal-progress computation
//! - `models`: core data types (money, months, transactions, goals)
//! - `storage`: JSON file storage layer
//! - `services`: business logic over storage, with audit logging
//! - `reports`, `display`, `export`: presentation and output formats
//! - `config`: paths and user settings
//! - `audit`: append-only change log
//! - `cli`: command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintrack::analytics::{filter_by_month, percent_change, summarize};
//! use fintrack::models::{Money, MonthKey, Transaction, TransactionType};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let records = vec![Transaction::new(
//!     TransactionType::Income,
//!     Money::from_cents(300000),
//!     "Salary",
//!     "April salary",
//!     date,
//! )];
//!
//! let april = summarize(filter_by_month(&records, MonthKey::of(date)));
//! assert_eq!(april.savings, Money::from_cents(300000));
//! assert!(percent_change(april.savings, Money::zero()).percent_change.is_none());
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
