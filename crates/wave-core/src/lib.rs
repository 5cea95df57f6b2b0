//! Great Wave Core
//!
//! Wires configuration, the SQLite database and the word gateway into a
//! single `Wave` handle for the command surface.

mod config;
mod error;
mod wave;

pub use config::Config;
pub use error::CoreError;
pub use wave::Wave;

// Re-export core components
pub use wave_storage::{Database, StorageError};
pub use wave_words::{
    normalize, DocumentStore, MemoryStore, SqliteStore, StoreError, UpsertMode, WordGateway,
    WordRecord, WordsError, DEFAULT_COLLECTION, DEFAULT_TOP_N,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
