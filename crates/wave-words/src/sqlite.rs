//! SQLite-backed document store

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};

use wave_storage::Database;

use crate::error::StoreError;
use crate::record::{WordFields, WordRecord};
use crate::store::{Direction, DocumentStore, Lookup, Query, StoreResult};

#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Run one blocking statement group off the async executor.
    async fn run<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> wave_storage::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        let result = tokio::task::spawn_blocking(move || db.with_connection(f))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?;
        Ok(result?)
    }
}

/// Counts written to SQLite must be positive and fit an `INTEGER`.
fn to_sql_count(key: &str, count: u64) -> StoreResult<i64> {
    if count == 0 {
        return Err(StoreError::InvalidRequest(format!(
            "count for {key:?} must be at least 1"
        )));
    }
    i64::try_from(count).map_err(|_| {
        StoreError::InvalidRequest(format!("count {count} for {key:?} exceeds storage range"))
    })
}

fn from_sql_count(column: usize, raw: i64) -> rusqlite::Result<u64> {
    u64::try_from(raw).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(column, raw))
}

fn read_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: row.get(0)?,
        count: from_sql_count(1, row.get(1)?)?,
    })
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Lookup> {
        let (collection, key) = (collection.to_string(), key.to_string());
        self.run(move |conn| {
            let count = conn
                .query_row(
                    "SELECT count FROM documents WHERE collection = ?1 AND id = ?2",
                    rusqlite::params![collection, key],
                    |row| from_sql_count(0, row.get(0)?),
                )
                .optional()?;

            Ok(count.map_or(Lookup::Absent, |count| Lookup::Found(WordFields { count })))
        })
        .await
    }

    async fn set(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()> {
        let count = to_sql_count(key, fields.count)?;
        let (collection, key) = (collection.to_string(), key.to_string());
        self.run(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO documents (collection, id, count) VALUES (?1, ?2, ?3)",
                rusqlite::params![collection, key, count],
            )?;
            Ok(())
        })
        .await
    }

    async fn update(&self, collection: &str, key: &str, fields: WordFields) -> StoreResult<()> {
        let count = to_sql_count(key, fields.count)?;
        let (owned_collection, owned_key) = (collection.to_string(), key.to_string());
        let changed = self
            .run(move |conn| {
                let changed = conn.execute(
                    "UPDATE documents SET count = ?3 WHERE collection = ?1 AND id = ?2",
                    rusqlite::params![owned_collection, owned_key, count],
                )?;
                Ok(changed)
            })
            .await?;

        if changed == 0 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            });
        }
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<WordRecord>> {
        let collection = collection.to_string();
        self.run(move |conn| {
            let mut stmt =
                conn.prepare("SELECT id, count FROM documents WHERE collection = ?1")?;
            let records = stmt
                .query_map([collection], read_record)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<WordRecord>> {
        let collection = collection.to_string();
        let order = match query.direction {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        };
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);

        self.run(move |conn| {
            let sql = format!(
                "SELECT id, count FROM documents WHERE collection = ?1
                 ORDER BY count {order}
                 LIMIT ?2"
            );
            let mut stmt = conn.prepare(&sql)?;
            let records = stmt
                .query_map(rusqlite::params![collection, limit], read_record)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    async fn increment(&self, collection: &str, key: &str, by: u64) -> StoreResult<()> {
        let by = i64::try_from(by).map_err(|_| {
            StoreError::InvalidRequest(format!("increment {by} for {key:?} exceeds storage range"))
        })?;
        let (collection, key) = (collection.to_string(), key.to_string());
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO documents (collection, id, count) VALUES (?1, ?2, ?3)
                 ON CONFLICT (collection, id) DO UPDATE SET count = count + excluded.count",
                rusqlite::params![collection, key, by],
            )?;
            Ok(())
        })
        .await
    }
}
