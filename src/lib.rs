//! ledger-cli - a personal finance ledger
//!
//! Records income and outcome transactions tagged with categories, refuses
//! outcomes larger than the current balance and bulk-imports transactions from
//! CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, balance, money)
//! - `storage`: Store traits and their JSON file implementations
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::config::{paths::LedgerPaths, settings::Settings};
//! use ledger::services::BalanceService;
//! use ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?.with_serialized_writes(settings.serialize_writes);
//! storage.load_all()?;
//! let balance = BalanceService::new(&storage).compute()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
