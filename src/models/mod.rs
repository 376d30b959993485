//! Core data models for the ledger
//!
//! Transactions, the categories they are tagged with, and the balance derived
//! from them.

pub mod balance;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use balance::Balance;
pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{NewTransaction, Transaction, TransactionType};
