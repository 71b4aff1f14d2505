//! Dashboard Report
//!
//! The monthly overview: income, expenses and savings against the previous
//! month, the expense breakdown, the latest transactions, goal progress and
//! how much of the monthly budget has been spent.
//!
//! Goals on the dashboard are measured against the month's savings, not
//! all-time savings.

use std::io::Write;

use chrono::NaiveDate;

use crate::analytics::{self, DeltaMetric, GoalProgress, GoalState, PeriodComparison};
use crate::config::Settings;
use crate::display::{format_bar, format_delta, format_percentage, separator, truncate};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{category_label, Currency, Goal, Money, MonthKey, Transaction};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Spending measured against the configured monthly budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub budget: Money,
    pub spent: Money,
    /// `None` when no positive budget is configured
    pub percent_used: Option<f64>,
}

impl BudgetUsage {
    fn new(budget: Money, spent: Money) -> Self {
        let percent_used = budget
            .is_positive()
            .then(|| spent.cents() as f64 * 100.0 / budget.cents() as f64);
        Self {
            budget,
            spent,
            percent_used,
        }
    }

    pub fn is_over(&self) -> bool {
        self.budget.is_positive() && self.spent > self.budget
    }

    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }
}

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub month: MonthKey,
    pub today: NaiveDate,
    pub comparison: PeriodComparison,
    /// Most recent transactions overall, not limited to `month`
    pub recent: Vec<Transaction>,
    pub goal_count: usize,
    pub goals: Vec<(Goal, GoalProgress)>,
    pub budget: BudgetUsage,
    pub budget_alerts: bool,
}

impl DashboardReport {
    /// Build the dashboard for `month`, judging goal deadlines as of `today`
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        month: MonthKey,
        today: NaiveDate,
    ) -> TrackerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let goals = storage.goals.get_all()?;

        let comparison = analytics::compare_months(&transactions, month);
        let month_savings = comparison.current.savings;

        let progress = analytics::track_all(&goals, month_savings, today);
        let goals: Vec<_> = goals.into_iter().zip(progress).collect();

        let recent = TransactionService::new(storage).recent(settings.recent_transactions)?;

        let budget = BudgetUsage::new(settings.monthly_budget, comparison.current.total_expenses);

        tracing::debug!(%month, %today, goals = goals.len(), "generated dashboard");

        Ok(Self {
            month,
            today,
            goal_count: goals.len(),
            comparison,
            recent,
            goals,
            budget,
            budget_alerts: settings.notifications.budget_alerts,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let current = &self.comparison.current;
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard: {}\n",
            self.month.first_day().format("%B %Y")
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&stat_line(
            "Total Income",
            currency.format(current.total_income),
            &self.comparison.income_change,
        ));
        output.push_str(&stat_line(
            "Total Expenses",
            currency.format(current.total_expenses),
            &self.comparison.expense_change,
        ));
        output.push_str(&stat_line(
            "Savings",
            currency.format(current.savings),
            &self.comparison.savings_change,
        ));
        output.push_str(&format!("{:<16}{:>16}\n", "Goals", self.goal_count));

        if let Some(pct) = self.budget.percent_used {
            output.push_str(&format!(
                "{:<16}{:>16}  {} of {}\n",
                "Budget Used",
                format_percentage(pct),
                format_bar(pct, 100.0, 20),
                currency.format(self.budget.budget)
            ));
            if self.budget_alerts && self.budget.is_over() {
                output.push_str(&format!(
                    "  ! Over budget by {}\n",
                    currency.format(-self.budget.remaining())
                ));
            }
        }

        output.push_str("\nExpense Breakdown\n");
        output.push_str(&separator(60));
        output.push('\n');
        let breakdown = &current.category_breakdown;
        if breakdown.is_empty() {
            output.push_str("No expenses this month.\n");
        } else {
            for entry in breakdown.sorted_desc() {
                let share = breakdown.share_of(&entry.category).unwrap_or(0.0);
                output.push_str(&format!(
                    "{:<20} {:>14} {:>7}\n",
                    truncate(category_label(&entry.category), 20),
                    currency.format(entry.amount),
                    format!("{:.0}%", share)
                ));
            }
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&separator(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for txn in &self.recent {
            let sign = if txn.is_income() { "+" } else { "-" };
            output.push_str(&format!(
                "{} {:<24} {:>16}  {}\n",
                txn.date.format("%Y-%m-%d"),
                truncate(&txn.description, 24),
                format!("{}{}", sign, currency.format(txn.amount)),
                category_label(&txn.category)
            ));
        }

        output.push_str("\nGoals Progress\n");
        output.push_str(&separator(60));
        output.push('\n');
        if self.goals.is_empty() {
            output.push_str("No goals set yet.\n");
        }
        for (goal, progress) in &self.goals {
            let note = match progress.status {
                GoalState::Completed => " (completed)",
                GoalState::Overdue => " (overdue)",
                GoalState::OnTrack => "",
            };
            output.push_str(&format!(
                "{:<24} {} {:>6}{}\n",
                truncate(&goal.title, 24),
                format_bar(progress.progress_percent, 100.0, 20),
                format_percentage(progress.progress_percent),
                note
            ));
        }

        output
    }

    /// Export the summary figures and breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let current = &self.comparison.current;
        let previous = &self.comparison.previous;

        let change = |delta: &DeltaMetric| {
            delta
                .percent_change
                .map(|pct| format!("{:.2}", pct))
                .unwrap_or_default()
        };

        csv.write_record(["Month", "Metric", "Category", "Amount", "Previous", "Change %"])
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        let month = self.month.to_string();
        let rows = [
            ("Income", current.total_income, previous.total_income, &self.comparison.income_change),
            ("Expenses", current.total_expenses, previous.total_expenses, &self.comparison.expense_change),
            ("Savings", current.savings, previous.savings, &self.comparison.savings_change),
        ];
        for (metric, amount, prev, delta) in rows {
            csv.write_record([
                month.clone(),
                metric.to_string(),
                String::new(),
                amount.to_string(),
                prev.to_string(),
                change(delta),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        for entry in current.category_breakdown.sorted_desc() {
            csv.write_record([
                month.clone(),
                "Expense".to_string(),
                entry.category.clone(),
                entry.amount.to_string(),
                String::new(),
                String::new(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        csv.flush()
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        Ok(())
    }
}

fn stat_line(label: &str, value: String, delta: &DeltaMetric) -> String {
    match format_delta(delta) {
        Some(change) => format!("{:<16}{:>16}  {}\n", label, value, change),
        None => format!("{:<16}{:>16}\n", label, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::TransactionType;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, kind: TransactionType, cents: i64, category: &str, date: &str) {
        storage
            .transactions
            .upsert(Transaction::new(
                kind,
                Money::from_cents(cents),
                category,
                format!("{} on {}", category, date),
                NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            ))
            .unwrap();
    }

    fn seeded() -> (TempDir, Storage) {
        let (temp_dir, storage) = create_test_storage();
        add(&storage, TransactionType::Income, 300000, "Salary", "2024-04-01");
        add(&storage, TransactionType::Expense, 70000, "Bills", "2024-04-05");
        add(&storage, TransactionType::Expense, 50000, "Food", "2024-04-18");
        add(&storage, TransactionType::Income, 250000, "Salary", "2024-03-01");
        add(&storage, TransactionType::Expense, 100000, "Shopping", "2024-03-12");
        storage
            .goals
            .upsert(Goal::new(
                "Laptop",
                Money::from_cents(200000),
                MonthKey::parse("2024-03").unwrap(),
            ))
            .unwrap();
        (temp_dir, storage)
    }

    fn april() -> MonthKey {
        MonthKey::parse("2024-04").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()
    }

    #[test]
    fn test_generate() {
        let (_temp_dir, storage) = seeded();
        let report = DashboardReport::generate(&storage, &Settings::default(), april(), today()).unwrap();

        let current = &report.comparison.current;
        assert_eq!(current.total_income.cents(), 300000);
        assert_eq!(current.total_expenses.cents(), 120000);
        assert_eq!(current.savings.cents(), 180000);
        assert_eq!(report.comparison.income_change.percent_change, Some(20.0));
        // 180000 vs 150000
        assert_eq!(report.comparison.savings_change.percent_change, Some(20.0));
        assert_eq!(report.goal_count, 1);
        assert_eq!(report.recent.len(), 5);
    }

    #[test]
    fn test_goals_use_month_savings() {
        let (_temp_dir, storage) = seeded();
        let report = DashboardReport::generate(&storage, &Settings::default(), april(), today()).unwrap();

        // April saved 1800.00 toward a 2000.00 goal whose month has passed
        let (_, progress) = &report.goals[0];
        assert_eq!(progress.progress_percent, 90.0);
        assert_eq!(progress.status, GoalState::Overdue);
    }

    #[test]
    fn test_recent_respects_setting() {
        let (_temp_dir, storage) = seeded();
        let settings = Settings {
            recent_transactions: 2,
            ..Settings::default()
        };
        let report = DashboardReport::generate(&storage, &settings, april(), today()).unwrap();
        let dates: Vec<_> = report.recent.iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-04-18", "2024-04-05"]);
    }

    #[test]
    fn test_budget_usage() {
        let usage = BudgetUsage::new(Money::from_cents(100000), Money::from_cents(120000));
        assert_eq!(usage.percent_used, Some(120.0));
        assert!(usage.is_over());
        assert_eq!(usage.remaining().cents(), -20000);

        let unset = BudgetUsage::new(Money::zero(), Money::from_cents(5));
        assert_eq!(unset.percent_used, None);
        assert!(!unset.is_over());
    }

    #[test]
    fn test_terminal_hides_unavailable_deltas() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, TransactionType::Income, 100000, "Salary", "2024-04-01");

        let report = DashboardReport::generate(&storage, &Settings::default(), april(), today()).unwrap();
        let text = report.format_terminal(Currency::Usd);

        assert!(text.contains("Dashboard: April 2024"));
        assert!(text.contains("$1,000.00"));
        assert!(!text.contains("vs last month"));
        assert!(text.contains("No expenses this month."));
        assert!(text.contains("No goals set yet."));
    }

    #[test]
    fn test_terminal_shows_deltas_and_budget_alert() {
        let (_temp_dir, storage) = seeded();
        let report = DashboardReport::generate(&storage, &Settings::default(), april(), today()).unwrap();
        let text = report.format_terminal(Currency::Usd);

        // income, expenses and savings all rose 20%
        assert_eq!(text.matches("▲ 20.0% vs last month").count(), 3);
        assert!(text.contains("Over budget by $200.00"));
        assert!(text.contains("(overdue)"));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = seeded();
        let report = DashboardReport::generate(&storage, &Settings::default(), april(), today()).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "Month,Metric,Category,Amount,Previous,Change %");
        assert_eq!(lines[1], "2024-04,Income,,3000.00,2500.00,20.00");
        assert_eq!(lines[4], "2024-04,Expense,Bills,700.00,,");
        assert_eq!(lines.len(), 6);
    }
}
