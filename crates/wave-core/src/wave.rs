//! Application state container

use std::sync::Arc;

use wave_storage::Database;
use wave_words::{SqliteStore, UpsertMode, WordGateway, WordRecord};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

const TRENDING_LIMIT_KEY: &str = "trending_limit";
const UPSERT_MODE_KEY: &str = "upsert_mode";

/// Owns the database handle and the word gateway built on top of it.
pub struct Wave {
    config: Config,
    db: Database,
    gateway: WordGateway,
}

impl Wave {
    /// Open the configured database file and apply persisted settings.
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    pub fn with_database(mut config: Config, db: Database) -> Result<Self> {
        if config.collection.is_empty() {
            return Err(CoreError::Config(
                "collection name cannot be empty".to_string(),
            ));
        }

        if let Some(raw) = db.get_setting(TRENDING_LIMIT_KEY)? {
            match raw.parse::<usize>() {
                Ok(limit) => config.trending_limit = limit,
                Err(e) => tracing::warn!(value = %raw, "Ignoring invalid trending_limit: {}", e),
            }
        }

        if let Some(raw) = db.get_setting(UPSERT_MODE_KEY)? {
            match raw.parse::<UpsertMode>() {
                Ok(mode) => config.upsert_mode = mode,
                Err(e) => tracing::warn!(value = %raw, "Ignoring invalid upsert_mode: {}", e),
            }
        }

        let gateway = WordGateway::new(Arc::new(SqliteStore::new(db.clone())), &config.collection)
            .with_mode(config.upsert_mode);

        tracing::info!(
            collection = %config.collection,
            upsert_mode = %config.upsert_mode,
            trending_limit = config.trending_limit,
            "Initialized word store"
        );

        Ok(Self {
            config,
            db,
            gateway,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gateway(&self) -> &WordGateway {
        &self.gateway
    }

    pub async fn submit(&self, word: &str) -> Result<()> {
        Ok(self.gateway.record_occurrence(word).await?)
    }

    pub async fn submit_all<I, S>(&self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.gateway.record_occurrences(words).await?)
    }

    /// Every word with its count, for the cloud.
    pub async fn word_cloud(&self) -> Result<Vec<WordRecord>> {
        Ok(self.gateway.fetch_all().await?)
    }

    /// Most submitted words, `limit` or the configured trending limit.
    pub async fn trending(&self, limit: Option<usize>) -> Result<Vec<WordRecord>> {
        let limit = limit.unwrap_or(self.config.trending_limit);
        Ok(self.gateway.fetch_top(Some(limit)).await?)
    }

    pub fn set_trending_limit(&mut self, limit: usize) -> Result<()> {
        self.db
            .set_setting(TRENDING_LIMIT_KEY, &limit.to_string())?;
        self.config.trending_limit = limit;
        Ok(())
    }

    pub fn set_upsert_mode(&mut self, mode: UpsertMode) -> Result<()> {
        self.db.set_setting(UPSERT_MODE_KEY, mode.as_str())?;
        self.config.upsert_mode = mode;
        self.gateway = self.gateway.clone().with_mode(mode);
        tracing::info!(upsert_mode = %mode, "Changed upsert mode");
        Ok(())
    }
}
