use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::{DashMap, Entry};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::timeout;

use super::error::StorageError;
use super::traits::{AccountStore, StoreTransaction};
use crate::domain::{Account, AccountId};

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Concurrent in-memory account store.
///
/// Each account row lives behind its own async mutex inside a DashMap, so a
/// transaction holds exactly the rows it operates on and unrelated accounts
/// never contend. Lock waits are bounded by a configurable timeout.
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,
    lock_timeout: Duration,
}

impl InMemoryAccountStore {
    /// Create a new empty store with the default lock timeout
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Configure how long a transaction may wait for a row lock
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    async fn lock_row(
        &self,
        cell: Arc<Mutex<Account>>,
    ) -> Result<OwnedMutexGuard<Account>, StorageError> {
        timeout(self.lock_timeout, cell.lock_owned())
            .await
            .map_err(|_| StorageError::Unavailable)
    }

    // Clone the row cell out of the map so no shard lock is held across await
    fn cell(&self, id: &AccountId) -> Option<Arc<Mutex<Account>>> {
        self.accounts.get(id).map(|row| Arc::clone(row.value()))
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

/// An open transaction over the in-memory store.
///
/// Holds the row locks of every account it was begun with until commit or
/// drop. Writes are staged in memory and applied to the locked rows only on
/// commit, so a dropped transaction leaves no trace.
pub struct MemoryTransaction {
    rows: BTreeMap<AccountId, OwnedMutexGuard<Account>>,
    staged: BTreeMap<AccountId, i64>,
}

impl StoreTransaction for MemoryTransaction {
    fn read(&self, id: &AccountId) -> Option<Account> {
        self.rows.get(id).map(|row| (**row).clone())
    }

    fn update_balance(&mut self, id: &AccountId, new_balance: i64) -> Result<(), StorageError> {
        if !self.rows.contains_key(id) {
            return Err(StorageError::NotFound(id.clone()));
        }
        self.staged.insert(id.clone(), new_balance);
        Ok(())
    }

    fn commit(mut self) -> Result<(), StorageError> {
        let staged = std::mem::take(&mut self.staged);
        for (id, balance) in staged {
            if let Some(row) = self.rows.get_mut(&id) {
                row.set_balance(balance);
            }
        }
        // Row locks release when the guards drop here
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    type Txn = MemoryTransaction;

    async fn find(&self, id: &AccountId) -> Result<Option<Account>, StorageError> {
        let Some(cell) = self.cell(id) else {
            return Ok(None);
        };
        let row = self.lock_row(cell).await?;
        Ok(Some(row.clone()))
    }

    async fn create(&self, account: Account) -> Result<(), StorageError> {
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateKey(account.id().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(Mutex::new(account)));
                Ok(())
            }
        }
    }

    async fn begin(&self, ids: &[&AccountId]) -> Result<Self::Txn, StorageError> {
        // Canonical acquisition order: sorted unique ids, never the
        // source-then-target order the caller happened to pass
        let mut ordered: Vec<&AccountId> = ids.to_vec();
        ordered.sort();
        ordered.dedup();

        let mut rows = BTreeMap::new();
        for id in ordered {
            let Some(cell) = self.cell(id) else {
                // Absent rows stay unlocked; read() reports them as None
                continue;
            };
            let row = self.lock_row(cell).await?;
            rows.insert(id.clone(), row);
        }

        Ok(MemoryTransaction {
            rows,
            staged: BTreeMap::new(),
        })
    }
}
