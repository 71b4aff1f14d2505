//! Monthly aggregation
//!
//! Totals, savings, category breakdowns and month-over-month deltas computed
//! from an in-memory set of transactions. Every function here is pure: the
//! reference month is always passed in and inputs are only borrowed.

use serde::Serialize;

use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// Summed expenses per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryTotal>,
}

/// One category's expense total within a period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

impl CategoryBreakdown {
    fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    /// Total for a category, if any expense carried it
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all category totals
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// A category's share of total expenses, in percent
    ///
    /// `None` for unknown categories or an empty breakdown.
    pub fn share_of(&self, category: &str) -> Option<f64> {
        let total = self.total();
        if total.is_zero() {
            return None;
        }
        self.get(category)
            .map(|amount| amount.cents() as f64 / total.cents() as f64 * 100.0)
    }

    /// Entries ordered by amount, largest first; ties keep first-seen order
    pub fn sorted_desc(&self) -> Vec<&CategoryTotal> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted
    }
}

/// Income, expense and savings totals for a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub savings: Money,
    pub category_breakdown: CategoryBreakdown,
    pub transaction_count: usize,
}

/// A period-over-period percentage change
///
/// `percent_change` is `None` when there is no baseline to compare against;
/// callers should hide the comparison rather than show 0% or infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DeltaMetric {
    pub percent_change: Option<f64>,
}

/// Direction of a delta, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl DeltaMetric {
    pub fn is_available(&self) -> bool {
        self.percent_change.is_some()
    }

    pub fn trend(&self) -> Option<Trend> {
        self.percent_change.map(|pct| {
            if pct > 0.0 {
                Trend::Up
            } else if pct < 0.0 {
                Trend::Down
            } else {
                Trend::Flat
            }
        })
    }
}

/// Summaries of a month and the month before it, with deltas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub month: MonthKey,
    pub previous_month: MonthKey,
    pub current: PeriodSummary,
    pub previous: PeriodSummary,
    pub income_change: DeltaMetric,
    pub expense_change: DeltaMetric,
    pub savings_change: DeltaMetric,
}

/// Records dated within `month`, in input order
pub fn filter_by_month<'a, I>(records: I, month: MonthKey) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records
        .into_iter()
        .filter(|t| month.contains(t.date))
        .collect()
}

/// Totals and expense breakdown over the given records
pub fn summarize<'a, I>(records: I) -> PeriodSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = PeriodSummary::default();

    for txn in records {
        summary.transaction_count += 1;
        match txn.kind {
            TransactionType::Income => summary.total_income += txn.amount,
            TransactionType::Expense => {
                summary.total_expenses += txn.amount;
                summary.category_breakdown.add(&txn.category, txn.amount);
            }
        }
    }

    summary.savings = summary.total_income - summary.total_expenses;
    summary
}

/// Percentage change from `previous` to `current`
///
/// The denominator is `|previous|`, so the sign always follows the direction
/// of the move even when the baseline is negative: a deficit shrinking from
/// -100 to -40 is +60%.
pub fn percent_change(current: Money, previous: Money) -> DeltaMetric {
    if previous.is_zero() {
        return DeltaMetric::default();
    }

    let current = current.cents() as f64;
    let previous = previous.cents() as f64;

    DeltaMetric {
        percent_change: Some((current - previous) * 100.0 / previous.abs()),
    }
}

/// Compare `month` against the month before it
pub fn compare_months(records: &[Transaction], month: MonthKey) -> PeriodComparison {
    let previous_month = month.prev();
    let current = summarize(filter_by_month(records, month));
    let previous = summarize(filter_by_month(records, previous_month));

    tracing::debug!(
        %month,
        current_count = current.transaction_count,
        previous_count = previous.transaction_count,
        "compared monthly summaries"
    );

    PeriodComparison {
        month,
        previous_month,
        income_change: percent_change(current.total_income, previous.total_income),
        expense_change: percent_change(current.total_expenses, previous.total_expenses),
        savings_change: percent_change(current.savings, previous.savings),
        current,
        previous,
    }
}
