//! Store abstractions consumed by the service layer
//!
//! Services receive these as `&dyn CategoryStore` / `&dyn TransactionStore`
//! so they can run against the JSON repositories, a wrapped store in tests, or
//! any other backend. Each call is one store round-trip; there is no
//! isolation between calls.

use std::collections::HashSet;

use crate::error::LedgerResult;
use crate::models::{Category, NewTransaction, Transaction, TransactionId};

/// Persistence for categories, keyed by title
pub trait CategoryStore: Send + Sync {
    /// Every stored category
    fn find_all(&self) -> LedgerResult<Vec<Category>>;

    /// The category whose title matches exactly, if any
    fn find_by_title(&self, title: &str) -> LedgerResult<Option<Category>>;

    /// All categories whose title is in `titles`, in one lookup
    fn find_by_titles(&self, titles: &HashSet<String>) -> LedgerResult<Vec<Category>>;

    /// Build unsaved categories, one per title
    fn create_many(&self, titles: &[String]) -> Vec<Category> {
        titles.iter().map(Category::new).collect()
    }

    /// Persist one category
    fn save(&self, category: &Category) -> LedgerResult<()>;

    /// Persist a batch of categories in one write
    fn save_many(&self, categories: &[Category]) -> LedgerResult<()>;
}

/// Persistence for transactions
pub trait TransactionStore: Send + Sync {
    /// Every stored transaction
    fn find_all(&self) -> LedgerResult<Vec<Transaction>>;

    fn find_by_id(&self, id: TransactionId) -> LedgerResult<Option<Transaction>>;

    /// Remove a transaction; returns whether a row was removed
    fn delete_by_id(&self, id: TransactionId) -> LedgerResult<bool>;

    /// Build unsaved transactions, one per row
    fn create_many(&self, rows: Vec<NewTransaction>) -> Vec<Transaction> {
        rows.into_iter().map(Transaction::from).collect()
    }

    /// Persist one transaction
    fn save(&self, transaction: &Transaction) -> LedgerResult<()>;

    /// Persist a batch of transactions in one write
    fn save_many(&self, transactions: &[Transaction]) -> LedgerResult<()>;
}
