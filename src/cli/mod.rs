//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use config::{handle_audit_command, handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MonthKey};

pub(crate) fn parse_amount(value: &str) -> TrackerResult<Money> {
    Money::parse(value).map_err(|e| {
        TrackerError::Validation(format!(
            "{}. Use a positive amount like '45' or '45.50'",
            e
        ))
    })
}

pub(crate) fn parse_date(value: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// The given date, or the local calendar date
pub(crate) fn parse_date_or_today(value: Option<&str>) -> TrackerResult<NaiveDate> {
    match value {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn parse_month(value: &str) -> TrackerResult<MonthKey> {
    MonthKey::parse(value).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// The given month, or the month containing `today`
pub(crate) fn parse_month_or(value: Option<&str>, today: NaiveDate) -> TrackerResult<MonthKey> {
    match value {
        Some(s) => parse_month(s),
        None => Ok(MonthKey::of(today)),
    }
}

pub(crate) fn create_output(path: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("45.50").unwrap().cents(), 4550);
        assert!(parse_amount("abc").unwrap_err().is_validation());

        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("29/02/2024").unwrap_err().is_validation());

        let today = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(parse_month_or(None, today).unwrap().to_string(), "2024-07");
        assert_eq!(parse_month_or(Some("2023-12"), today).unwrap().to_string(), "2023-12");
        assert!(parse_month_or(Some("2023-13"), today).is_err());
    }
}
