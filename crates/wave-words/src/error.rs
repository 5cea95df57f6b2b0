//! Word counter error types

use thiserror::Error;

/// Failures reported by a document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Document not found: {collection}/{key}")]
    NotFound { collection: String, key: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] wave_storage::StorageError),

    #[error("Store task failed: {0}")]
    Task(String),
}

/// The only error the gateway surfaces. Every store failure maps here unchanged.
#[derive(Error, Debug)]
pub enum WordsError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}
