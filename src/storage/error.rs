use thiserror::Error;

use crate::domain::AccountId;

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// An account with this id already exists. With server-generated random
    /// ids this should never happen, but the contract defines it anyway.
    #[error("Duplicate account id: {0}")]
    DuplicateKey(AccountId),

    /// A balance write targeted a row that was absent when the transaction
    /// began. Defensive: the engine always reads before it writes.
    #[error("Account row not found: {0}")]
    NotFound(AccountId),

    /// The store aborted the transaction to break a lock conflict.
    /// Transient: the whole operation is safe to retry.
    #[error("Transaction aborted due to a storage conflict")]
    Conflict,

    /// The store did not answer within its bounded wait (lock or statement
    /// timeout). Surfaced to callers as storage unavailability.
    #[error("Storage unavailable: timed out waiting for account lock")]
    Unavailable,
}

impl StorageError {
    /// Whether the failed operation is safe and worthwhile to retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            StorageError::DuplicateKey(AccountId::from("a-1")).to_string(),
            "Duplicate account id: a-1"
        );
        assert_eq!(
            StorageError::NotFound(AccountId::from("a-2")).to_string(),
            "Account row not found: a-2"
        );
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "Storage unavailable: timed out waiting for account lock"
        );
    }

    #[test]
    fn only_conflict_is_transient() {
        assert!(StorageError::Conflict.is_transient());
        assert!(!StorageError::Unavailable.is_transient());
        assert!(!StorageError::NotFound(AccountId::from("a-1")).is_transient());
        assert!(!StorageError::DuplicateKey(AccountId::from("a-1")).is_transient());
    }
}
