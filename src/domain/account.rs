use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed length of an account name in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Opaque account identifier, generated server-side.
///
/// Ids are `Ord` so that storage can acquire row locks in a canonical
/// global order, independent of the source/target roles in a transfer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an existing identifier (e.g. taken from a request path)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// String form of the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Supported account currencies. Only one currency exists in this system,
/// so every account carries `Currency::Usd` as a constant rather than a
/// free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// ISO 4217 code for this currency
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Bank account with private fields enforcing invariants.
///
/// The balance is held in minor currency units and is never negative.
/// All balance mutation goes through the engine; the only setter is
/// crate-private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: i64,
    currency: Currency,
}

impl Account {
    /// Create a new account with zero balance in the single supported currency
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: 0,
            currency: Currency::Usd,
        }
    }

    /// Get the account id
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Get the account holder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the balance in minor currency units
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Get the account currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    // Internal mutation method for use by the operations module and storage
    pub(crate) fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_zero_balance_in_usd() {
        let account = Account::new(AccountId::from("a-1"), "Alice");

        assert_eq!(account.id(), &AccountId::from("a-1"));
        assert_eq!(account.name(), "Alice");
        assert_eq!(account.balance(), 0);
        assert_eq!(account.currency(), Currency::Usd);
    }

    #[test]
    fn set_balance_updates_balance() {
        let mut account = Account::new(AccountId::from("a-1"), "Alice");
        account.set_balance(1_000);

        assert_eq!(account.balance(), 1_000);
    }

    #[test]
    fn random_ids_are_unique() {
        let a = AccountId::random();
        let b = AccountId::random();

        assert_ne!(a, b);
    }

    #[test]
    fn account_id_displays_inner_string() {
        let id = AccountId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn account_ids_order_lexicographically() {
        let a = AccountId::from("aaa");
        let b = AccountId::from("bbb");

        assert!(a < b);
    }

    #[test]
    fn currency_code_is_usd() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::default(), Currency::Usd);
    }

    #[test]
    fn account_can_be_cloned() {
        let account = Account::new(AccountId::from("a-1"), "Alice");
        let cloned = account.clone();

        assert_eq!(account, cloned);
    }
}
