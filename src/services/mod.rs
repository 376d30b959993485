//! Service layer for the ledger
//!
//! Business rules on top of the store traits: the balance check on outcomes,
//! lazy category creation and bulk import. Services borrow their stores, so
//! tests can hand them any `CategoryStore` / `TransactionStore`.

pub mod balance;
pub mod category;
pub mod import;
pub mod transaction;

pub use balance::BalanceService;
pub use category::CategoryService;
pub use import::{ImportReader, ImportRow, ImportService, ParsedBatch};
pub use transaction::{CreateTransactionInput, TransactionService};
