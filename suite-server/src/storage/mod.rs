//! Key-value persistence
//!
//! Two stores back the node, mirroring what a browser offers a dashboard:
//!
//! | Store | Backend | Lifetime |
//! |-------|---------|----------|
//! | durable | [`DurableStore`] (redb) | survives restarts |
//! | tab | [`MemoryStore`] | process lifetime |
//!
//! Records are JSON blobs under string keys (see [`StorageKey`]). Reads are
//! best-effort: a value that cannot be decoded is dropped and treated as
//! missing. Every write publishes a [`StorageEvent`].

mod durable;
mod keys;
mod local;
mod memory;

pub use durable::DurableStore;
pub use keys::StorageKey;
pub use local::{LocalStore, StorageArea, StorageEvent, StorageEventKind};
pub use memory::MemoryStore;

use shared::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Raw byte store
///
/// Implementations must be cheap to share across request handlers.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn keys(&self) -> StorageResult<Vec<String>>;
}
