//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] wave_storage::StorageError),

    #[error("Word store error: {0}")]
    Words(#[from] wave_words::WordsError),

    #[error("Configuration error: {0}")]
    Config(String),
}
