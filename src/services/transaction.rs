//! Transaction service
//!
//! Creates and deletes transactions. Creation of an outcome is guarded by the
//! balance check: an outcome larger than the current total is rejected before
//! anything is written.
//!
//! The check reads the balance and the write happens afterwards, in a separate
//! store call. Two callers racing on the same ledger can both pass the check
//! unless the service holds the storage write lock (see
//! `Settings::serialize_writes`).

use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::TransactionValidationError;
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::services::{BalanceService, CategoryService};
use crate::storage::{CategoryStore, Storage, TransactionStore};

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub value: Money,
    pub kind: TransactionType,
    pub category_title: String,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    categories: &'a dyn CategoryStore,
    transactions: &'a dyn TransactionStore,
    audit: Option<&'a AuditLogger>,
    write_lock: Option<&'a Mutex<()>>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            categories: &storage.categories,
            transactions: &storage.transactions,
            audit: Some(&storage.audit),
            write_lock: storage.write_lock(),
        }
    }

    /// Create a transaction service over arbitrary stores, without audit
    /// logging or write serialization
    pub fn with_stores(
        categories: &'a dyn CategoryStore,
        transactions: &'a dyn TransactionStore,
    ) -> Self {
        Self {
            categories,
            transactions,
            audit: None,
            write_lock: None,
        }
    }

    /// Hold `lock` across every check-then-write sequence
    pub fn serialized(mut self, lock: &'a Mutex<()>) -> Self {
        self.write_lock = Some(lock);
        self
    }

    fn lock(&self) -> LedgerResult<Option<MutexGuard<'a, ()>>> {
        self.write_lock
            .map(|lock| {
                lock.lock().map_err(|e| {
                    LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
                })
            })
            .transpose()
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let title = input.title.trim();
        let category_title = input.category_title.trim();

        if title.is_empty() {
            return Err(LedgerError::Validation(
                TransactionValidationError::EmptyTitle.to_string(),
            ));
        }
        if category_title.is_empty() {
            return Err(LedgerError::Validation("Category title cannot be empty".into()));
        }
        if input.value.is_negative() {
            return Err(LedgerError::Validation(
                TransactionValidationError::NegativeValue(input.value).to_string(),
            ));
        }

        let _guard = self.lock()?;

        let balance = BalanceService::with_store(self.transactions).compute()?;

        if input.kind == TransactionType::Outcome && !balance.covers(input.value) {
            warn!(
                needed = %input.value,
                available = %balance.total,
                "outcome rejected, insufficient balance"
            );
            return Err(LedgerError::InsufficientBalance {
                needed: input.value,
                available: balance.total,
            });
        }

        if balance.with(input.kind, input.value).is_none() {
            return Err(LedgerError::OutOfRange(format!(
                "{} of {} does not fit in the balance",
                input.kind, input.value
            )));
        }

        // Committed on its own; a failure below leaves the category in place.
        let category = CategoryService::from_parts(self.categories, self.audit)
            .find_or_create(category_title)?;

        let txn = Transaction::new(title, input.kind, input.value, category.id);
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.transactions.save(&txn)?;

        if let Some(audit) = self.audit {
            audit.log_committed(&[AuditEntry::create(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.title.clone()),
                &txn,
            )]);
        }

        info!(id = %txn.id, kind = %txn.kind, value = %txn.value, "transaction created");
        Ok(txn)
    }

    /// Delete a transaction, returning the removed record
    pub fn delete(&self, id: TransactionId) -> LedgerResult<Transaction> {
        let _guard = self.lock()?;

        let txn = self
            .transactions
            .find_by_id(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        // Removed by someone else between the lookup and the delete
        if !self.transactions.delete_by_id(id)? {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }

        if let Some(audit) = self.audit {
            audit.log_committed(&[AuditEntry::delete(
                EntityType::Transaction,
                id.to_string(),
                Some(txn.title.clone()),
                &txn,
            )]);
        }

        info!(id = %id, "transaction deleted");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.transactions.find_by_id(id)
    }

    /// Find a transaction by full ID or by a unique ID prefix such as the
    /// short form shown in listings
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.transactions.find_by_id(id);
        }

        if identifier.is_empty() {
            return Ok(None);
        }

        let mut matches: Vec<_> = self
            .transactions
            .find_all()?
            .into_iter()
            .filter(|t| t.id.to_string().starts_with(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(LedgerError::Validation(format!(
                "Identifier '{}' is ambiguous, it matches {} transactions",
                identifier, n
            ))),
        }
    }

    /// List all transactions, newest first
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        self.transactions.find_all()
    }
}
