//! Great Wave Words
//!
//! Submitted words are case-folded into keys and counted in a document
//! store:
//! - `normalize` maps raw input to the record key
//! - `WordGateway` performs the upsert and the two read queries
//! - `DocumentStore` is the collaborator seam, backed by SQLite or memory

mod error;
mod gateway;
mod memory;
mod normalize;
mod record;
mod sqlite;
mod store;

pub use error::{StoreError, WordsError};
pub use gateway::{UpsertMode, WordGateway, DEFAULT_COLLECTION, DEFAULT_TOP_N};
pub use memory::MemoryStore;
pub use normalize::normalize;
pub use record::{WordFields, WordRecord};
pub use sqlite::SqliteStore;
pub use store::{Direction, DocumentStore, Lookup, Query, StoreResult};

pub type Result<T> = std::result::Result<T, WordsError>;
