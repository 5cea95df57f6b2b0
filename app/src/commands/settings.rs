//! Configuration commands

use serde::{Deserialize, Serialize};
use wave_core::{UpsertMode, Wave};

use super::{CommandResult, TextOutput};

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub database_path: String,
    pub collection: String,
    pub trending_limit: usize,
    pub upsert_mode: UpsertMode,
}

impl From<&wave_core::Config> for ConfigInfo {
    fn from(config: &wave_core::Config) -> Self {
        Self {
            database_path: config.database_path.display().to_string(),
            collection: config.collection.clone(),
            trending_limit: config.trending_limit,
            upsert_mode: config.upsert_mode,
        }
    }
}

impl TextOutput for ConfigInfo {
    fn to_text(&self) -> String {
        format!(
            "database_path   {}\ncollection      {}\ntrending_limit  {}\nupsert_mode     {}",
            self.database_path, self.collection, self.trending_limit, self.upsert_mode
        )
    }
}

pub fn get_config(wave: &Wave) -> CommandResult<ConfigInfo> {
    CommandResult::ok(wave.config().into())
}

pub fn set_trending_limit(wave: &mut Wave, limit: usize) -> CommandResult<ConfigInfo> {
    match wave.set_trending_limit(limit) {
        Ok(()) => get_config(wave),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn set_upsert_mode(wave: &mut Wave, mode: UpsertMode) -> CommandResult<ConfigInfo> {
    match wave.set_upsert_mode(mode) {
        Ok(()) => get_config(wave),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wave_core::{Config, Database};

    #[test]
    fn test_settings_commands() {
        let config = Config::new(PathBuf::from("/tmp/great-wave"));
        let mut wave = Wave::with_database(config, Database::open_in_memory().unwrap()).unwrap();

        let info = set_trending_limit(&mut wave, 9).data.unwrap();
        assert_eq!(info.trending_limit, 9);

        let info = set_upsert_mode(&mut wave, UpsertMode::Atomic).data.unwrap();
        assert_eq!(info.upsert_mode, UpsertMode::Atomic);
        assert_eq!(info.database_path, "/tmp/great-wave/words.db");

        let text = get_config(&wave).data.unwrap().to_text();
        assert!(text.contains("upsert_mode     atomic"));
    }
}
