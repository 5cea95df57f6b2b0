//! In-process document store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::StoreError;
use crate::record::{WordFields, WordRecord};
use crate::store::{Direction, DocumentStore, Lookup, Query, StoreResult};

type Collection = BTreeMap<String, WordFields>;

/// Memory-backed `DocumentStore` with an availability switch.
///
/// While unavailable every call fails with `StoreError::Unavailable` and
/// leaves the data untouched. Writes that would leave a zero count fail with
/// `StoreError::InvalidRequest`.
#[derive(Clone)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
    available: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Seed a collection with `(id, count)` pairs, overwriting existing ids.
    pub fn with_records<I, S>(self, collection: &str, records: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        {
            let mut collections = self.collections.write();
            let docs = collections.entry(collection.to_string()).or_default();
            for (id, count) in records {
                docs.insert(id.into(), WordFields { count });
            }
        }
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Current contents of a collection, ordered by id. Ignores availability.
    pub fn snapshot(&self, collection: &str) -> Vec<WordRecord> {
        self.collections
            .read()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| fields.into_record(id.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        }
    }
}

fn check_count(key: &str, count: u64) -> StoreResult<()> {
    if count == 0 {
        return Err(StoreError::InvalidRequest(format!(
            "count for {key:?} must be at least 1"
        )));
    }
    Ok(())
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Lookup> {
        self.check_available()?;
        let lookup = self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.get(key).copied())
            .map_or(Lookup::Absent, Lookup::Found);
        Ok(lookup)
    }

    async fn set(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()> {
        self.check_available()?;
        check_count(key, fields.count)?;
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), fields);
        Ok(())
    }

    async fn update(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()> {
        self.check_available()?;
        check_count(key, fields.count)?;
        let mut collections = self.collections.write();
        match collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
        {
            Some(existing) => {
                *existing = fields;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            }),
        }
    }

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<WordRecord>> {
        self.check_available()?;
        Ok(self.snapshot(collection))
    }

    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<WordRecord>> {
        self.check_available()?;
        let mut records = self.snapshot(collection);
        match query.direction {
            Direction::Descending => records.sort_by(|a, b| b.count.cmp(&a.count)),
            Direction::Ascending => records.sort_by(|a, b| a.count.cmp(&b.count)),
        }
        records.truncate(query.limit);
        Ok(records)
    }

    async fn increment(&self, collection: &str, key: &str, by: u64) -> StoreResult<()> {
        self.check_available()?;
        let mut collections = self.collections.write();
        let docs = collections.entry(collection.to_string()).or_default();
        let current = docs.get(key).map_or(0, |fields| fields.count);
        let count = current.saturating_add(by);
        check_count(key, count)?;
        docs.insert(key.to_string(), WordFields { count });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_update() {
        let store = MemoryStore::new();
        assert_eq!(store.get("words", "wave").await.unwrap(), Lookup::Absent);

        store.set("words", "wave", WordFields::first()).await.unwrap();
        store
            .update("words", "wave", WordFields { count: 7 })
            .await
            .unwrap();

        assert_eq!(
            store.get("words", "wave").await.unwrap(),
            Lookup::Found(WordFields { count: 7 })
        );
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let store = MemoryStore::new();
        let err = store
            .update("words", "ghost", WordFields::first())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref key, .. } if key == "ghost"));
        assert!(store.snapshot("words").is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::new().with_records("words", [("sea", 2)]);
        assert_eq!(store.get("tags", "sea").await.unwrap(), Lookup::Absent);
        assert!(store.list_all("tags").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_orders_and_limits() {
        let store =
            MemoryStore::new().with_records("words", [("a", 5), ("b", 9), ("c", 1), ("d", 3)]);

        let top = store.query("words", &Query::top(3)).await.unwrap();
        let counts: Vec<u64> = top.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![9, 5, 3]);

        let bottom = store
            .query(
                "words",
                &Query {
                    direction: Direction::Ascending,
                    limit: 1,
                },
            )
            .await
            .unwrap();
        assert_eq!(bottom, vec![WordRecord { id: "c".into(), count: 1 }]);
    }

    #[tokio::test]
    async fn test_increment_creates_then_adds() {
        let store = MemoryStore::new();
        store.increment("words", "tide", 1).await.unwrap();
        store.increment("words", "tide", 2).await.unwrap();
        assert_eq!(
            store.snapshot("words"),
            vec![WordRecord { id: "tide".into(), count: 3 }]
        );
    }

    #[tokio::test]
    async fn test_zero_count_is_rejected() {
        let store = MemoryStore::new().with_records("words", [("sea", 2)]);

        let err = store
            .set("words", "nothing", WordFields { count: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidRequest(_)));

        let err = store
            .update("words", "sea", WordFields { count: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidRequest(_)));

        let err = store.increment("words", "nil", 0).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRequest(_)));

        // Adding zero to an existing count keeps it positive
        store.increment("words", "sea", 0).await.unwrap();

        assert_eq!(
            store.snapshot("words"),
            vec![WordRecord { id: "sea".into(), count: 2 }]
        );
    }

    #[tokio::test]
    async fn test_offline_store_rejects_everything() {
        let store = MemoryStore::new().with_records("words", [("foam", 1)]);
        store.set_available(false);

        assert!(store.get("words", "foam").await.is_err());
        assert!(store.set("words", "foam", WordFields::first()).await.is_err());
        assert!(store.increment("words", "foam", 1).await.is_err());
        assert!(store.list_all("words").await.is_err());

        assert_eq!(
            store.snapshot("words"),
            vec![WordRecord { id: "foam".into(), count: 1 }]
        );
    }
}
