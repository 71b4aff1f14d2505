//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct TransactionData {
    pub(crate) transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

fn newest_first(records: &mut [Transaction]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), TrackerError> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All transactions, newest date first; same-day records newest-created first
    pub fn get_all(&self) -> Result<Vec<Transaction>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions whose id matches a full or short identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Transaction>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut found: Vec<_> = data
            .values()
            .filter(|t| t.id.matches(identifier))
            .cloned()
            .collect();
        newest_first(&mut found);
        Ok(found)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction; returns whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    fn expense(cents: i64, day: u32) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(cents),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_get_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = expense(1250, 3);
        let id = txn.id;

        repo.upsert(txn).unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().amount.cents(), 1250);

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let older_same_day = expense(100, 10);
        let mut newer_same_day = expense(200, 10);
        newer_same_day.created_at = older_same_day.created_at + Duration::seconds(5);

        repo.upsert(expense(300, 2)).unwrap();
        repo.upsert(older_same_day).unwrap();
        repo.upsert(newer_same_day).unwrap();
        repo.upsert(expense(400, 28)).unwrap();

        let amounts: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|t| t.amount.cents())
            .collect();
        assert_eq!(amounts, vec![400, 200, 100, 300]);
    }

    #[test]
    fn test_find_matching_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = expense(999, 5);
        let short = txn.id.to_string();
        let full = txn.id.as_uuid().to_string();
        repo.upsert(txn).unwrap();
        repo.upsert(expense(1, 6)).unwrap();

        assert_eq!(repo.find_matching(&short).unwrap().len(), 1);
        assert_eq!(repo.find_matching(&full).unwrap().len(), 1);
        assert!(repo.find_matching("txn-zzzzzzzz").unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let txn = expense(5000, 15);
        let id = txn.id;

        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().amount.cents(), 5000);
    }
}
