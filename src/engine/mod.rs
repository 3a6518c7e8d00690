pub mod error;
pub mod mutator;

// Re-export commonly used types
pub use error::{AccountRole, MutationError};
pub use mutator::BalanceMutator;
