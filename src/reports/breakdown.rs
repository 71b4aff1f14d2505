//! Category Breakdown Report
//!
//! Expenses for one month grouped by category, largest first, with each
//! category's share of the month's spending.

use std::io::Write;

use crate::analytics;
use crate::display::{format_bar, separator};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{category_label, Currency, Money, MonthKey};
use crate::storage::Storage;

/// One category's row in the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: String,
    pub amount: Money,
    /// Percentage of the month's expenses
    pub share: f64,
}

/// Category Breakdown Report
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    pub month: MonthKey,
    pub total_expenses: Money,
    pub rows: Vec<BreakdownRow>,
}

impl BreakdownReport {
    pub fn generate(storage: &Storage, month: MonthKey) -> TrackerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let summary = analytics::summarize(analytics::filter_by_month(&transactions, month));
        let breakdown = &summary.category_breakdown;

        let rows = breakdown
            .sorted_desc()
            .into_iter()
            .map(|entry| BreakdownRow {
                category: entry.category.clone(),
                amount: entry.amount,
                share: breakdown.share_of(&entry.category).unwrap_or(0.0),
            })
            .collect();

        Ok(Self {
            month,
            total_expenses: summary.total_expenses,
            rows,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Breakdown: {}\n",
            self.month.first_day().format("%B %Y")
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>14} {:>7}  {}\n",
            "Category", "Amount", "%", ""
        ));
        output.push_str(&separator(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>14} {:>6.1}%  {}\n",
                category_label(&row.category),
                currency.format(row.amount),
                row.share,
                format_bar(row.share, 100.0, 16)
            ));
        }

        output.push_str(&separator(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "TOTAL",
            currency.format(self.total_expenses)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Month", "Category", "Amount", "Percentage"])
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        for row in &self.rows {
            csv.write_record([
                self.month.to_string(),
                row.category.clone(),
                row.amount.to_string(),
                format!("{:.2}", row.share),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        csv.flush()
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        for (kind, cents, category, date) in [
            (TransactionType::Expense, 2500, "Food", "2024-05-02"),
            (TransactionType::Expense, 5000, "Transport", "2024-05-09"),
            (TransactionType::Expense, 2500, "Food", "2024-05-20"),
            (TransactionType::Income, 90000, "Salary", "2024-05-01"),
            (TransactionType::Expense, 99999, "Bills", "2024-06-01"),
        ] {
            storage
                .transactions
                .upsert(Transaction::new(
                    kind,
                    Money::from_cents(cents),
                    category,
                    "entry",
                    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                ))
                .unwrap();
        }

        (temp_dir, storage)
    }

    #[test]
    fn test_generate() {
        let (_temp_dir, storage) = create_test_storage();
        let report = BreakdownReport::generate(&storage, MonthKey::new(2024, 5).unwrap()).unwrap();

        assert_eq!(report.total_expenses.cents(), 10000);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].amount.cents(), 5000);
        assert_eq!(report.rows[0].share, 50.0);

        let total: Money = report.rows.iter().map(|r| r.amount).sum();
        assert_eq!(total, report.total_expenses);
    }

    #[test]
    fn test_format_and_export() {
        let (_temp_dir, storage) = create_test_storage();
        let report = BreakdownReport::generate(&storage, MonthKey::new(2024, 5).unwrap()).unwrap();

        let text = report.format_terminal(Currency::Gbp);
        assert!(text.contains("Expense Breakdown: May 2024"));
        assert!(text.contains("Transportation"));
        assert!(text.contains("£100.00"));

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.starts_with("Month,Category,Amount,Percentage\n"));
        assert!(csv.contains("2024-05,Food,50.00,50.00\n"));
    }

    #[test]
    fn test_empty_month() {
        let (_temp_dir, storage) = create_test_storage();
        let report = BreakdownReport::generate(&storage, MonthKey::new(2023, 1).unwrap()).unwrap();
        assert!(report.rows.is_empty());
        assert!(report
            .format_terminal(Currency::Usd)
            .contains("No expenses recorded"));
    }
}
