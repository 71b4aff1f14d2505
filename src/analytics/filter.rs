//! Transaction filtering
//!
//! A [`FilterSpec`] is a conjunction of optional criteria. Unset criteria
//! match everything, so the default spec is a passthrough.

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{MonthKey, Transaction, TransactionType};

/// The keyword accepted for "no restriction" on category and type
pub const ALL: &str = "all";

/// Criteria for narrowing a transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    /// Case-insensitive substring of description or category
    pub search: Option<String>,
    /// Exact category label
    pub category: Option<String>,
    /// Income or expense only
    pub kind: Option<TransactionType>,
    /// Calendar month
    pub month: Option<MonthKey>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from raw user-facing values
    ///
    /// Empty strings and the exact keyword `all` mean no restriction, so a
    /// custom category spelled `ALL` stays filterable. An unrecognized type or
    /// month is rejected rather than silently matching nothing.
    pub fn from_raw(search: &str, category: &str, kind: &str, month: &str) -> TrackerResult<Self> {
        let search = (!search.is_empty()).then(|| search.to_string());

        let category = if category.is_empty() || category == ALL {
            None
        } else {
            Some(category.to_string())
        };

        let kind = if kind.is_empty() || kind == ALL {
            None
        } else {
            Some(
                kind.parse::<TransactionType>()
                    .map_err(|e| TrackerError::Validation(e.to_string()))?,
            )
        };

        let month = if month.is_empty() {
            None
        } else {
            Some(
                MonthKey::parse(month)
                    .map_err(|e| TrackerError::Validation(format!("{}: '{}'", e, month)))?,
            )
        };

        Ok(Self {
            search,
            category,
            kind,
            month,
        })
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// True when no criterion is set
    pub fn is_passthrough(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.kind.is_none() && self.month.is_none()
    }

    /// Whether a single record satisfies every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = txn.description.to_lowercase().contains(&needle)
                || txn.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(month) = self.month {
            if !month.contains(txn.date) {
                return false;
            }
        }

        true
    }
}

/// Records matching `spec`, in input order
pub fn apply<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records.into_iter().filter(|t| spec.matches(t)).collect()
}
