use serde::{Deserialize, Serialize};

/// A counted word as returned by the read queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Normalized word, the document key
    pub id: String,
    /// Number of submissions, always at least 1 once stored
    pub count: u64,
}

/// Persisted document body, keyed externally by the normalized word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFields {
    pub count: u64,
}

impl WordFields {
    /// Body written on the first submission of a word.
    pub fn first() -> Self {
        Self { count: 1 }
    }

    pub fn incremented(self) -> Self {
        Self {
            count: self.count.saturating_add(1),
        }
    }

    pub fn into_record(self, id: impl Into<String>) -> WordRecord {
        WordRecord {
            id: id.into(),
            count: self.count,
        }
    }
}
