//! Counter store gateway
//!
//! Upsert protocol for a submitted word:
//! ```text
//! normalize(word) -> key
//!   get(key)
//!     Found(n) -> update(key, n + 1)
//!     Absent   -> set(key, 1)
//! ```
//! The read and the write are separate store calls, so two concurrent
//! submissions of the same key can lose an increment. `UpsertMode::Atomic`
//! replaces the sequence with a single server-side increment.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{StoreError, WordsError};
use crate::normalize::normalize;
use crate::record::{WordFields, WordRecord};
use crate::store::{DocumentStore, Lookup, Query};
use crate::Result;

pub const DEFAULT_COLLECTION: &str = "words";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpsertMode {
    /// get, then update or set
    #[default]
    ReadModifyWrite,
    /// single `increment` call
    Atomic,
}

impl UpsertMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertMode::ReadModifyWrite => "read-modify-write",
            UpsertMode::Atomic => "atomic",
        }
    }
}

impl std::fmt::Display for UpsertMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UpsertMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read-modify-write" => Ok(UpsertMode::ReadModifyWrite),
            "atomic" => Ok(UpsertMode::Atomic),
            _ => Err(format!("Unknown upsert mode: {}", s)),
        }
    }
}

/// Word counters over an injected document store.
#[derive(Clone)]
pub struct WordGateway {
    store: Arc<dyn DocumentStore>,
    collection: String,
    mode: UpsertMode,
}

impl WordGateway {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            mode: UpsertMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: UpsertMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> UpsertMode {
        self.mode
    }

    /// Count one submission of `word`.
    pub async fn record_occurrence(&self, word: &str) -> Result<()> {
        let key = normalize(word);

        match self.mode {
            UpsertMode::ReadModifyWrite => self.read_modify_write(&key).await,
            UpsertMode::Atomic => {
                self.store
                    .increment(&self.collection, &key, 1)
                    .await
                    .map_err(|e| store_failure("increment", e))?;
                tracing::debug!(key = %key, "Incremented word atomically");
                Ok(())
            }
        }
    }

    async fn read_modify_write(&self, key: &str) -> Result<()> {
        let lookup = self
            .store
            .get(&self.collection, key)
            .await
            .map_err(|e| store_failure("get", e))?;

        match lookup {
            Lookup::Found(existing) => {
                let fields = existing.incremented();
                self.store
                    .update(&self.collection, key, fields)
                    .await
                    .map_err(|e| store_failure("update", e))?;
                tracing::debug!(key = %key, count = fields.count, "Incremented word");
            }
            Lookup::Absent => {
                self.store
                    .set(&self.collection, key, WordFields::first())
                    .await
                    .map_err(|e| store_failure("set", e))?;
                tracing::debug!(key = %key, "Created word");
            }
        }

        Ok(())
    }

    /// Record several submissions in order, stopping at the first failure.
    /// Returns how many were recorded.
    pub async fn record_occurrences<I, S>(&self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recorded = 0;
        for word in words {
            self.record_occurrence(word.as_ref()).await?;
            recorded += 1;
        }
        Ok(recorded)
    }

    /// Every counted word, in the store's order.
    pub async fn fetch_all(&self) -> Result<Vec<WordRecord>> {
        self.store
            .list_all(&self.collection)
            .await
            .map_err(|e| store_failure("list_all", e))
    }

    /// The `n` most submitted words, highest count first. `n` defaults to
    /// `DEFAULT_TOP_N`. Order among equal counts is up to the store.
    pub async fn fetch_top(&self, n: Option<usize>) -> Result<Vec<WordRecord>> {
        let query = Query::top(n.unwrap_or(DEFAULT_TOP_N));
        self.store
            .query(&self.collection, &query)
            .await
            .map_err(|e| store_failure("query", e))
    }
}

fn store_failure(operation: &'static str, error: StoreError) -> WordsError {
    tracing::warn!(operation, error = %error, "Document store call failed");
    WordsError::StoreUnavailable(error)
}
