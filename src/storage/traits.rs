use std::sync::Arc;

use async_trait::async_trait;

use super::error::StorageError;
use crate::domain::{Account, AccountId};

/// Durable key-value contract over account records with transactional
/// read-modify-write semantics.
///
/// Correctness of concurrent balance mutation is delegated entirely to this
/// contract: two transactions touching the same account serialize on its row
/// lock, so neither can read a pre-update balance that the other is about to
/// overwrite.
#[async_trait]
pub trait AccountStore: Send + Sync {
    type Txn: StoreTransaction;

    /// Look up an account by id. Absence is not an error; the caller decides
    /// the semantics.
    async fn find(&self, id: &AccountId) -> Result<Option<Account>, StorageError>;

    /// Persist a new account. The id must be pre-assigned by the caller;
    /// fails with `DuplicateKey` if it collides.
    async fn create(&self, account: Account) -> Result<(), StorageError>;

    /// Begin a transaction over the given account rows.
    ///
    /// Row locks are acquired in canonical (sorted) id order regardless of
    /// the order ids are passed in, which rules out deadlock between two
    /// transfers running in opposite directions. Ids with no backing row are
    /// left unlocked; `read` reports them as absent. Waiting for a lock is
    /// bounded; on timeout the transaction fails with `Unavailable` and no
    /// lock is retained.
    async fn begin(&self, ids: &[&AccountId]) -> Result<Self::Txn, StorageError>;
}

/// An open transaction holding row locks on the accounts it was begun with.
///
/// Balance writes are staged and become visible to other transactions only
/// on `commit`, which applies every staged write or none. Dropping the
/// transaction without committing discards all staged writes.
pub trait StoreTransaction: Send {
    /// Read an account row inside this transaction. Returns `None` for ids
    /// that had no row when the transaction began.
    fn read(&self, id: &AccountId) -> Option<Account>;

    /// Stage an unconditional balance write for an account held by this
    /// transaction. Fails with `NotFound` if the row is absent.
    fn update_balance(&mut self, id: &AccountId, new_balance: i64) -> Result<(), StorageError>;

    /// Atomically apply all staged writes and release the row locks
    fn commit(self) -> Result<(), StorageError>;
}

// Stores are shared across tasks behind Arc; delegate the contract through it
#[async_trait]
impl<S: AccountStore> AccountStore for Arc<S> {
    type Txn = S::Txn;

    async fn find(&self, id: &AccountId) -> Result<Option<Account>, StorageError> {
        (**self).find(id).await
    }

    async fn create(&self, account: Account) -> Result<(), StorageError> {
        (**self).create(account).await
    }

    async fn begin(&self, ids: &[&AccountId]) -> Result<Self::Txn, StorageError> {
        (**self).begin(ids).await
    }
}
