//! Balance service
//!
//! Recomputes the balance from the full transaction set on every call.

use crate::error::LedgerResult;
use crate::models::Balance;
use crate::storage::{Storage, TransactionStore};

/// Service for balance computation
pub struct BalanceService<'a> {
    transactions: &'a dyn TransactionStore,
}

impl<'a> BalanceService<'a> {
    /// Create a balance service over the storage's transactions
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_store(&storage.transactions)
    }

    /// Create a balance service over any transaction store
    pub fn with_store(transactions: &'a dyn TransactionStore) -> Self {
        Self { transactions }
    }

    /// Current income, outcome and total
    pub fn compute(&self) -> LedgerResult<Balance> {
        let transactions = self.transactions.find_all()?;
        Balance::from_transactions(&transactions)
    }
}
