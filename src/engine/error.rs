use std::fmt;

use thiserror::Error;

use crate::domain::AccountId;
use crate::storage::StorageError;

/// Role an account plays in the failing operation, so callers can tell
/// which side of a transfer was at fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Account,
    Source,
    Target,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => f.write_str("Account"),
            Self::Source => f.write_str("Source account"),
            Self::Target => f.write_str("Target account"),
        }
    }
}

/// Errors raised by the balance-mutation engine.
///
/// Every variant guarantees that no balance was changed: the transaction is
/// rolled back before the error propagates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("{role} not found: {id}")]
    AccountNotFound { role: AccountRole, id: AccountId },

    #[error("Account has not enough money on balance: {id}")]
    InsufficientBalance { id: AccountId },

    #[error("Account currency differs with the currency of operation: {id}")]
    CurrencyMismatch { id: AccountId },

    #[error("Balance arithmetic overflow on account: {id}")]
    Overflow { id: AccountId },

    #[error("Transfer amount must not be negative")]
    NegativeAmount,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
