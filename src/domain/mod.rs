pub mod account;
pub mod error;
pub mod operations;
pub mod request;

// Re-export commonly used types
pub use account::{Account, AccountId, Currency, MAX_NAME_LEN};
pub use error::DomainError;
pub use operations::{apply_delta, ensure_currency};
pub use request::{Deposit, FieldViolation, NewAccount, Transfer, ValidationErrors, Withdrawal};
