//! Transaction service
//!
//! CRUD for income and expense records, with validation and audit logging,
//! plus filtered listing through the analytics filter.

use chrono::NaiveDate;

use crate::analytics::{self, FilterSpec};
use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{normalize_category, Money, Transaction, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Fields to change on an existing transaction; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

fn audit_name(txn: &Transaction) -> Option<String> {
    Some(format!("{} {}", txn.date, txn.description))
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TrackerResult<Transaction> {
        let txn = Transaction::new(
            input.kind,
            input.amount,
            normalize_category(&input.category),
            input.description.trim(),
            input.date,
        );

        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            audit_name(&txn),
            &txn,
        )?;

        tracing::info!(id = %txn.id, kind = txn.kind.as_str(), "created transaction");
        Ok(txn)
    }

    /// Find a transaction by full UUID or short id (`txn-1a2b3c4d` / `1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Transaction>> {
        let mut found = self.storage.transactions.find_matching(identifier)?;
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            n => Err(TrackerError::Validation(format!(
                "Identifier '{}' matches {} transactions; use the full id",
                identifier, n
            ))),
        }
    }

    /// Find a transaction or fail with a not-found error
    pub fn get(&self, identifier: &str) -> TrackerResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| TrackerError::transaction_not_found(identifier))
    }

    /// All transactions matching `filter`, newest first
    pub fn list(&self, filter: &FilterSpec) -> TrackerResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        if filter.is_passthrough() {
            return Ok(all);
        }

        let matched = analytics::apply(&all, filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(total = all.len(), matched = matched.len(), "filtered transactions");
        Ok(matched)
    }

    /// The `limit` most recent transactions
    pub fn recent(&self, limit: usize) -> TrackerResult<Vec<Transaction>> {
        let mut all = self.storage.transactions.get_all()?;
        all.truncate(limit);
        Ok(all)
    }

    /// Income minus expenses over every stored transaction
    pub fn all_time_savings(&self) -> TrackerResult<Money> {
        let all = self.storage.transactions.get_all()?;
        Ok(analytics::summarize(&all).savings)
    }

    /// Apply a partial update
    pub fn update(&self, identifier: &str, input: UpdateTransactionInput) -> TrackerResult<Transaction> {
        let mut txn = self.get(identifier)?;
        let before = txn.clone();

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(category) = input.category {
            txn.category = normalize_category(&category);
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }

        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        let mut changes = Vec::new();
        if before.kind != txn.kind {
            changes.push(format!("type: {} -> {}", before.kind, txn.kind));
        }
        if before.amount != txn.amount {
            changes.push(format!("amount: {} -> {}", before.amount, txn.amount));
        }
        if before.category != txn.category {
            changes.push(format!("category: {} -> {}", before.category, txn.category));
        }
        if before.date != txn.date {
            changes.push(format!("date: {} -> {}", before.date, txn.date));
        }
        if before.description != txn.description {
            changes.push("description changed".to_string());
        }

        let diff = (!changes.is_empty()).then(|| changes.join(", "));

        self.storage.log_update(
            EntityType::Transaction,
            txn.id.to_string(),
            audit_name(&txn),
            &before,
            &txn,
            diff,
        )?;

        Ok(txn)
    }

    /// Delete a transaction, returning the removed record
    pub fn delete(&self, identifier: &str) -> TrackerResult<Transaction> {
        let txn = self.get(identifier)?;

        self.storage.transactions.delete(txn.id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            audit_name(&txn),
            &txn,
        )?;

        tracing::info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(kind: TransactionType, cents: i64, category: &str, date: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            kind,
            amount: Money::from_cents(cents),
            category: category.to_string(),
            description: format!("{} entry", category),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionType::Expense, 4599, " food ", "2024-04-03"))
            .unwrap();

        assert_eq!(txn.category, "Food");
        assert_eq!(service.count().unwrap(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .create(input(TransactionType::Income, 0, "Salary", "2024-04-01"))
            .unwrap_err();
        assert!(err.is_validation());

        let mut blank = input(TransactionType::Income, 100, "Salary", "2024-04-01");
        blank.description = "   ".into();
        assert!(service.create(blank).unwrap_err().is_validation());

        assert_eq!(service.count().unwrap(), 0);
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(TransactionType::Expense, 100, "Bills", "2024-04-03"))
            .unwrap();

        let short = txn.id.to_string();
        assert_eq!(service.find(&short).unwrap().unwrap().id, txn.id);
        assert_eq!(service.find(&short[4..]).unwrap().unwrap().id, txn.id);
        assert!(service.get("nothing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(input(TransactionType::Income, 300000, "Salary", "2024-04-01")).unwrap();
        service.create(input(TransactionType::Expense, 4500, "Food", "2024-04-20")).unwrap();
        service.create(input(TransactionType::Expense, 2500, "Food", "2024-03-02")).unwrap();

        let all = service.list(&FilterSpec::default()).unwrap();
        let dates: Vec<_> = all.iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-04-20", "2024-04-01", "2024-03-02"]);

        let filter = FilterSpec::from_raw("", "Food", "expense", "2024-04").unwrap();
        let food = service.list(&filter).unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].amount.cents(), 4500);

        assert_eq!(service.recent(2).unwrap().len(), 2);
        assert_eq!(service.all_time_savings().unwrap().cents(), 293000);
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(TransactionType::Expense, 4500, "Food", "2024-04-03"))
            .unwrap();

        let updated = service
            .update(
                &txn.id.to_string(),
                UpdateTransactionInput {
                    amount: Some(Money::from_cents(5000)),
                    category: Some("shopping".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount.cents(), 5000);
        assert_eq!(updated.category, "Shopping");
        assert_eq!(updated.created_at, txn.created_at);

        let entries = storage.audit().read_all().unwrap();
        let diff = entries[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("amount: 45.00 -> 50.00"));
        assert!(diff.contains("category: Food -> Shopping"));
    }

    #[test]
    fn test_update_rejects_invalid_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(TransactionType::Expense, 4500, "Food", "2024-04-03"))
            .unwrap();

        let err = service
            .update(
                &txn.id.to_string(),
                UpdateTransactionInput {
                    amount: Some(Money::from_cents(-1)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(&txn.id.to_string()).unwrap().amount.cents(), 4500);
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(TransactionType::Expense, 4500, "Food", "2024-04-03"))
            .unwrap();

        let deleted = service.delete(&txn.id.to_string()).unwrap();
        assert_eq!(deleted.id, txn.id);
        assert_eq!(service.count().unwrap(), 0);
        assert!(service.delete(&txn.id.to_string()).unwrap_err().is_not_found());
    }
}
