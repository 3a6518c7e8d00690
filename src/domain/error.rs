use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Account has not enough money on balance")]
    InsufficientBalance,

    #[error("Account currency differs from the currency of the operation")]
    CurrencyMismatch,

    #[error("Balance arithmetic overflow")]
    Overflow,
}
