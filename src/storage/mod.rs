pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Logical key holding the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Logical key holding the threshold as a decimal string.
pub const THRESHOLD_KEY: &str = "threshold";

/// Abstraction over platform key/value persistence. The ledger treats every
/// adapter as best-effort: an unavailable backend degrades the session to
/// in-memory-only rather than failing operations.
pub trait StorageAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
