//! Prelude module for convenient imports
//!
//! Import everything you need with: `use teller::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, Currency, Deposit, DomainError, FieldViolation, NewAccount, Transfer,
    ValidationErrors, Withdrawal,
};

// Storage types
pub use crate::storage::{
    AccountStore, InMemoryAccountStore, MemoryTransaction, StorageError, StoreTransaction,
};

// Engine types
pub use crate::engine::{AccountRole, BalanceMutator, MutationError};

// Service types
pub use crate::service::{AccountService, ServiceError};

// API types
pub use crate::api::{AccountApi, ApiResponse, Body, ErrorBody};
