//! CSV Export functionality
//!
//! Writes the transactions matching a filter, newest first.

use std::io::Write;

use crate::analytics::FilterSpec;
use crate::error::{TrackerError, TrackerResult};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Export transactions matching `filter` to CSV, returning the row count
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    filter: &FilterSpec,
    writer: &mut W,
) -> TrackerResult<usize> {
    let transactions = TransactionService::new(storage).list(filter)?;
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Date", "Type", "Category", "Description", "Amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in &transactions {
        csv.write_record([
            txn.date.to_string(),
            txn.kind.as_str().to_string(),
            txn.category.clone(),
            txn.description.clone(),
            txn.amount.to_string(),
        ])
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    tracing::debug!(rows = transactions.len(), "exported transactions to csv");
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                TransactionType::Expense,
                Money::from_cents(1250),
                "Food",
                "Lunch, with \"friends\"",
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            ))
            .unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                TransactionType::Income,
                Money::from_cents(250000),
                "Salary",
                "January salary",
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ))
            .unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_export_transactions_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let mut output = Vec::new();
        let rows = export_transactions_csv(&storage, &FilterSpec::default(), &mut output).unwrap();
        assert_eq!(rows, 2);

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();
        assert_eq!(lines[0], "Date,Type,Category,Description,Amount");
        assert_eq!(lines[1], "2025-01-15,expense,Food,\"Lunch, with \"\"friends\"\"\",12.50");
        assert_eq!(lines[2], "2025-01-01,income,Salary,January salary,2500.00");
    }

    #[test]
    fn test_export_respects_filter() {
        let (_temp_dir, storage) = create_test_storage();

        let filter = FilterSpec::new().with_kind(TransactionType::Income);
        let mut output = Vec::new();
        let rows = export_transactions_csv(&storage, &filter, &mut output).unwrap();
        assert_eq!(rows, 1);
        assert!(!String::from_utf8(output).unwrap().contains("Lunch"));
    }
}
