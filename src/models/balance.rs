//! Balance snapshot derived from a set of transactions
//!
//! A balance is never stored. It is recomputed from the full transaction set
//! every time it is needed, so it is exactly as fresh as the read it was built
//! from.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::{Transaction, TransactionType};
use crate::error::{LedgerError, LedgerResult};

/// Income, outcome and their difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub income: Money,
    pub outcome: Money,
    pub total: Money,
}

impl Balance {
    /// Sum a set of transactions into a balance
    ///
    /// Fails with `OutOfRange` if any of the three sums does not fit in
    /// `Money`.
    pub fn from_transactions<'a, I>(transactions: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .try_fold(Self::default(), |balance, txn| {
                balance.with(txn.kind, txn.value).ok_or_else(|| {
                    LedgerError::OutOfRange(format!(
                        "balance overflows after adding {} {}",
                        txn.kind, txn.id
                    ))
                })
            })
    }

    /// The balance after one more transaction of `kind` and `value`, or
    /// `None` if it no longer fits
    pub fn with(&self, kind: TransactionType, value: Money) -> Option<Self> {
        let (income, outcome) = match kind {
            TransactionType::Income => (self.income.checked_add(value)?, self.outcome),
            TransactionType::Outcome => (self.income, self.outcome.checked_add(value)?),
        };

        Some(Self {
            income,
            outcome,
            total: income.checked_sub(outcome)?,
        })
    }

    /// Whether an outcome of `value` would be accepted against this balance
    pub fn covers(&self, value: Money) -> bool {
        value <= self.total
    }
}
