//! Document store collaborator contract

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{WordFields, WordRecord};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcome of a point lookup. Absence is an expected answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(WordFields),
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Server-sorted, bounded read ordered by `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub direction: Direction,
    pub limit: usize,
}

impl Query {
    /// Highest counts first, at most `limit` records.
    pub fn top(limit: usize) -> Self {
        Self {
            direction: Direction::Descending,
            limit,
        }
    }
}

/// A named collection of word documents keyed by string id.
///
/// Implementations own all persisted state. None of the methods are
/// combined into a transaction by callers.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Point lookup.
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Lookup>;

    /// Unconditional create or overwrite.
    async fn set(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()>;

    /// Write to an existing document. Fails with `StoreError::NotFound` if absent.
    async fn update(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()>;

    /// Every document in the collection, in the store's enumeration order.
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<WordRecord>>;

    /// Ordered by count, ties in an implementation-defined order.
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<WordRecord>>;

    /// Atomically add `by` to the count, creating the document with `by` if absent.
    async fn increment(&self, collection: &str, key: &str, by: u64) -> StoreResult<()>;
}
