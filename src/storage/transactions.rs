//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::traits::TransactionStore;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

fn newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.title.cmp(&b.title)));
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> LedgerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Apply `change` to a copy of the data. If it reports a change, write the
    /// copy and swap it in.
    fn commit<F>(&self, change: F) -> LedgerResult<bool>
    where
        F: FnOnce(&mut HashMap<TransactionId, Transaction>) -> bool,
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut next = data.clone();
        if !change(&mut next) {
            return Ok(false);
        }

        let mut transactions: Vec<_> = next.values().cloned().collect();
        newest_first(&mut transactions);
        write_json_atomic(&self.path, &TransactionData { transactions })?;

        *data = next;
        Ok(true)
    }
}

impl TransactionStore for TransactionRepository {
    fn find_all(&self) -> LedgerResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }

    fn find_by_id(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    fn delete_by_id(&self, id: TransactionId) -> LedgerResult<bool> {
        self.commit(|data| data.remove(&id).is_some())
    }

    fn save(&self, transaction: &Transaction) -> LedgerResult<()> {
        self.commit(|data| {
            data.insert(transaction.id, transaction.clone());
            true
        })?;
        Ok(())
    }

    fn save_many(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        if transactions.is_empty() {
            return Ok(());
        }
        self.commit(|data| {
            for txn in transactions {
                data.insert(txn.id, txn.clone());
            }
            true
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, NewTransaction, TransactionType};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn income(cents: i64) -> Transaction {
        Transaction::new(
            "Salary",
            TransactionType::Income,
            Money::from_cents(cents),
            CategoryId::new(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = income(5000);
        repo.save(&txn).unwrap();

        let retrieved = repo.find_by_id(txn.id).unwrap().unwrap();
        assert_eq!(retrieved, txn);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = income(5000);
        repo.save(&txn).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.delete_by_id(txn.id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.delete_by_id(txn.id).unwrap());
    }

    #[test]
    fn test_delete_missing_does_not_write() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        let path = temp_dir.path().join("transactions.json");

        assert!(!repo.delete_by_id(TransactionId::new()).unwrap());
        assert!(!path.exists());

        repo.save(&income(5000)).unwrap();
        std::fs::write(&path, "marker").unwrap();

        // A rewrite would have replaced the marker with the JSON document
        assert!(!repo.delete_by_id(TransactionId::new()).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "marker");
    }

    #[test]
    fn test_save_many_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category_id = CategoryId::new();
        let rows = vec![
            NewTransaction {
                title: "Coffee".into(),
                kind: TransactionType::Outcome,
                value: Money::from_cents(500),
                category_id,
            },
            NewTransaction {
                title: "Gift".into(),
                kind: TransactionType::Income,
                value: Money::from_cents(5000),
                category_id,
            },
        ];
        let batch = repo.create_many(rows);
        assert_eq!(repo.count().unwrap(), 0);

        repo.save_many(&batch).unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);
        assert!(repo2
            .find_all()
            .unwrap()
            .iter()
            .all(|t| t.category_id == category_id));
    }

    #[test]
    fn test_save_many_empty_is_noop() {
        let (temp_dir, repo) = create_test_repo();
        repo.save_many(&[]).unwrap();
        assert!(!temp_dir.path().join("transactions.json").exists());
    }
}
