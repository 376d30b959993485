//! Transaction model
//!
//! A transaction is either income or outcome, carries a non-negative value and
//! references exactly one category. Transactions are never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// The fields of a transaction before it is given an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub title: String,
    pub kind: TransactionType,
    pub value: Money,
    pub category_id: CategoryId,
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short description
    pub title: String,

    /// Income or outcome
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount
    pub value: Money,

    /// The category this transaction is tagged with
    pub category_id: CategoryId,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new, unsaved transaction
    pub fn new(
        title: impl Into<String>,
        kind: TransactionType,
        value: Money,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            kind,
            value,
            category_id,
            created_at: Utc::now(),
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if self.value.is_negative() {
            return Err(TransactionValidationError::NegativeValue(self.value));
        }

        Ok(())
    }
}

impl From<NewTransaction> for Transaction {
    fn from(row: NewTransaction) -> Self {
        Self::new(row.title, row.kind, row.value, row.category_id)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.title, self.kind, self.value)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NegativeValue(Money),
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
            Self::NegativeValue(value) => {
                write!(f, "Transaction value cannot be negative ({})", value)
            }
            Self::UnknownType(kind) => write!(
                f,
                "Unknown transaction type '{}', expected 'income' or 'outcome'",
                kind
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
