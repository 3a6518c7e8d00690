use tracing::{debug, warn};

use super::error::{AccountRole, MutationError};
use crate::domain::{operations, AccountId, DomainError};
use crate::storage::{AccountStore, StoreTransaction};

/// Balance-mutation engine enforcing account invariants across one or two
/// accounts inside a single all-or-nothing storage transaction.
///
/// All balance writes in the system flow through this type. Transient
/// storage conflicts are retried exactly once; every operation re-reads
/// current state, so a retry is idempotent.
pub struct BalanceMutator<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> BalanceMutator<S> {
    /// Create a new mutator on top of a transactional account store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply a signed delta to a single account balance.
    ///
    /// Positive deltas deposit, negative deltas withdraw. On success the
    /// change is durable and atomic; on any failure the balance is
    /// untouched.
    pub async fn apply_delta(
        &self,
        id: &AccountId,
        delta: i64,
        currency: &str,
    ) -> Result<(), MutationError> {
        match self.delta_once(id, delta, currency).await {
            Err(MutationError::Storage(err)) if err.is_transient() => {
                warn!(%id, error = %err, "Transient storage failure, retrying delta once");
                self.delta_once(id, delta, currency).await
            }
            result => result,
        }
    }

    /// Move `amount` from the source account to the target account as one
    /// atomic unit: either both balances change or neither does.
    ///
    /// The amount must be non-negative; a transfer only ever moves funds
    /// from source to target, so a negative amount is rejected here rather
    /// than silently crediting the source.
    ///
    /// Row locks are taken in canonical id order (via the store contract),
    /// not source-then-target, so two transfers running in opposite
    /// directions cannot deadlock. Validation order is still observable as
    /// source-first: an insufficient source balance is reported even when
    /// the target is also missing.
    pub async fn apply_transfer(
        &self,
        source_id: &AccountId,
        target_id: &AccountId,
        amount: i64,
        currency: &str,
    ) -> Result<(), MutationError> {
        if amount < 0 {
            return Err(MutationError::NegativeAmount);
        }

        match self.transfer_once(source_id, target_id, amount, currency).await {
            Err(MutationError::Storage(err)) if err.is_transient() => {
                warn!(
                    %source_id,
                    %target_id,
                    error = %err,
                    "Transient storage failure, retrying transfer once"
                );
                self.transfer_once(source_id, target_id, amount, currency).await
            }
            result => result,
        }
    }

    async fn delta_once(
        &self,
        id: &AccountId,
        delta: i64,
        currency: &str,
    ) -> Result<(), MutationError> {
        debug!(%id, delta, "Applying balance delta");

        let mut txn = self.store.begin(&[id]).await?;

        let mut account = txn.read(id).ok_or_else(|| MutationError::AccountNotFound {
            role: AccountRole::Account,
            id: id.clone(),
        })?;

        operations::ensure_currency(&account, currency).map_err(|err| attach_account(err, id))?;
        operations::apply_delta(&mut account, delta).map_err(|err| attach_account(err, id))?;

        txn.update_balance(id, account.balance())?;
        txn.commit()?;
        Ok(())
    }

    async fn transfer_once(
        &self,
        source_id: &AccountId,
        target_id: &AccountId,
        amount: i64,
        currency: &str,
    ) -> Result<(), MutationError> {
        debug!(%source_id, %target_id, amount, "Applying transfer");

        let mut txn = self.store.begin(&[source_id, target_id]).await?;

        let source = txn.read(source_id).ok_or_else(|| MutationError::AccountNotFound {
            role: AccountRole::Source,
            id: source_id.clone(),
        })?;

        // Source validation precedes the target lookup: an insufficient
        // source balance is reported even if the target does not exist
        let new_source_balance = source
            .balance()
            .checked_sub(amount)
            .ok_or_else(|| MutationError::Overflow {
                id: source_id.clone(),
            })?;
        if new_source_balance < 0 {
            return Err(MutationError::InsufficientBalance {
                id: source_id.clone(),
            });
        }

        let target = txn.read(target_id).ok_or_else(|| MutationError::AccountNotFound {
            role: AccountRole::Target,
            id: target_id.clone(),
        })?;

        operations::ensure_currency(&source, currency).map_err(|err| attach_account(err, source_id))?;
        operations::ensure_currency(&target, currency).map_err(|err| attach_account(err, target_id))?;

        if source_id == target_id {
            // Degenerate self-transfer: fully validated, nets to zero.
            // Staging both writes would apply the credit on top of the
            // debit's stale read and corrupt the balance.
            txn.commit()?;
            return Ok(());
        }

        let new_target_balance = target
            .balance()
            .checked_add(amount)
            .ok_or_else(|| MutationError::Overflow {
                id: target_id.clone(),
            })?;

        txn.update_balance(source_id, new_source_balance)?;
        txn.update_balance(target_id, new_target_balance)?;
        txn.commit()?;
        Ok(())
    }
}

// Attach the offending account id to a bare domain error
fn attach_account(err: DomainError, id: &AccountId) -> MutationError {
    match err {
        DomainError::InsufficientBalance => MutationError::InsufficientBalance { id: id.clone() },
        DomainError::CurrencyMismatch => MutationError::CurrencyMismatch { id: id.clone() },
        DomainError::Overflow => MutationError::Overflow { id: id.clone() },
    }
}
