use thiserror::Error;

use crate::domain::ValidationErrors;
use crate::engine::MutationError;
use crate::storage::StorageError;

/// Caller-visible errors for the account operation surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed input, rejected before any store interaction
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Domain failure from the balance-mutation engine; no balance changed
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// Storage failure outside a mutation (e.g. duplicate id on create)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
