pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::StorageError;
pub use memory::{InMemoryAccountStore, MemoryTransaction};
pub use traits::{AccountStore, StoreTransaction};
