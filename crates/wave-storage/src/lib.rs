//! Great Wave Storage Layer
//!
//! SQLite persistence for word documents and application settings.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
