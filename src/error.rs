//! Storage error types

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reading or writing the persisted task collection
#[derive(Debug, Error)]
pub enum StorageError {
    /// No `window` or no `localStorage` in this environment
    #[error("local storage is unavailable")]
    Unavailable,

    /// The browser threw while reading or writing
    #[error("storage access failed: {0}")]
    Access(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored collection contains the same id twice
    #[error("duplicate task id {0}")]
    DuplicateId(u32),

    /// Stored id is too large to allocate a successor
    #[error("task id {0} out of range")]
    IdOutOfRange(u32),
}
