//! Storage layer for the ledger
//!
//! JSON file repositories behind the `CategoryStore` and `TransactionStore`
//! traits, plus the append-only audit log.

pub mod categories;
pub mod file_io;
pub mod traits;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use traits::{CategoryStore, TransactionStore};
pub use transactions::TransactionRepository;

use std::sync::Mutex;

use crate::audit::AuditLogger;
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub audit: AuditLogger,
    serialize_writes: bool,
    write_lock: Mutex<()>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            audit: AuditLogger::new(paths.audit_log()),
            serialize_writes: false,
            write_lock: Mutex::new(()),
            paths,
        })
    }

    /// Serialize balance-checked writes through a single-writer lock
    pub fn with_serialized_writes(mut self, enabled: bool) -> Self {
        self.serialize_writes = enabled;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The single-writer lock, when serialized writes are enabled
    pub fn write_lock(&self) -> Option<&Mutex<()>> {
        self.serialize_writes.then_some(&self.write_lock)
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }
}
