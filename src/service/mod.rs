pub mod account;
pub mod error;

// Re-export commonly used types
pub use account::AccountService;
pub use error::ServiceError;
