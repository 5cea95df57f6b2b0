//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use wave_words::{UpsertMode, DEFAULT_COLLECTION, DEFAULT_TOP_N};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Collection holding the word documents
    pub collection: String,
    /// Number of words shown on the trending board
    pub trending_limit: usize,
    pub upsert_mode: UpsertMode,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("words.db"),
            collection: DEFAULT_COLLECTION.to_string(),
            trending_limit: DEFAULT_TOP_N,
            upsert_mode: UpsertMode::default(),
        }
    }

    /// `GREAT_WAVE_DATA_DIR` if set, otherwise the platform data directory.
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("GREAT_WAVE_DATA_DIR") {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("GreatWave"))
            .unwrap_or_else(|| PathBuf::from(".great-wave"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
