//! Audit logging for the ledger
//!
//! Every transaction and category created or deleted is recorded in an
//! append-only, line-delimited JSON log next to the data directory.
//!
//! - `AuditEntry`: one operation on one entity, with the entity's JSON form.
//! - `AuditLogger`: appends entries to the log and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
