use super::account::Account;
use super::error::DomainError;

/// Apply a signed delta to an account balance.
///
/// Positive deltas are deposits, negative deltas are withdrawals. The
/// resulting balance must stay non-negative; on any failure the account
/// is left untouched.
pub fn apply_delta(account: &mut Account, delta: i64) -> Result<(), DomainError> {
    let new_balance = account
        .balance()
        .checked_add(delta)
        .ok_or(DomainError::Overflow)?;

    if new_balance < 0 {
        return Err(DomainError::InsufficientBalance);
    }

    account.set_balance(new_balance);
    Ok(())
}

/// Check that an operation currency code matches the account currency
pub fn ensure_currency(account: &Account, currency: &str) -> Result<(), DomainError> {
    if account.currency().code() != currency {
        return Err(DomainError::CurrencyMismatch);
    }
    Ok(())
}
