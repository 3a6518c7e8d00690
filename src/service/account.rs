use std::sync::Arc;

use tracing::info;

use super::error::ServiceError;
use crate::domain::{Account, AccountId, Deposit, NewAccount, Transfer, Withdrawal};
use crate::engine::BalanceMutator;
use crate::storage::AccountStore;

/// Public operation surface of the ledger.
///
/// Validates request shape before any store interaction, generates fresh ids
/// on creation, and drives the balance-mutation engine for everything that
/// touches a balance.
pub struct AccountService<S: AccountStore> {
    store: Arc<S>,
    mutator: BalanceMutator<Arc<S>>,
}

impl<S: AccountStore> AccountService<S> {
    /// Create a service on top of a shared account store
    pub fn new(store: Arc<S>) -> Self {
        Self {
            mutator: BalanceMutator::new(Arc::clone(&store)),
            store,
        }
    }

    /// Validate account data and create a new bank account with a fresh
    /// server-generated id and zero balance
    pub async fn create_account(&self, request: NewAccount) -> Result<Account, ServiceError> {
        request.validate()?;

        let account = Account::new(AccountId::random(), request.name);
        self.store.create(account.clone()).await?;

        info!(id = %account.id(), "Created account");
        Ok(account)
    }

    /// Get an account by id. Absence is an expected outcome for a lookup,
    /// not an error.
    pub async fn get_account(&self, id: &AccountId) -> Result<Option<Account>, ServiceError> {
        Ok(self.store.find(id).await?)
    }

    /// Deposit on an account balance
    pub async fn deposit(&self, id: &AccountId, request: Deposit) -> Result<(), ServiceError> {
        request.validate()?;
        self.mutator
            .apply_delta(id, request.amount, &request.currency)
            .await?;
        Ok(())
    }

    /// Withdraw from an account balance
    pub async fn withdraw(&self, id: &AccountId, request: Withdrawal) -> Result<(), ServiceError> {
        request.validate()?;
        self.mutator
            .apply_delta(id, -request.amount, &request.currency)
            .await?;
        Ok(())
    }

    /// Transfer money from a source to a target account atomically
    pub async fn transfer(
        &self,
        source_id: &AccountId,
        target_id: &AccountId,
        request: Transfer,
    ) -> Result<(), ServiceError> {
        request.validate()?;
        self.mutator
            .apply_transfer(source_id, target_id, request.amount, &request.currency)
            .await?;
        Ok(())
    }
}
