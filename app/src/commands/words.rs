//! Word submission and listing commands

use serde::{Deserialize, Serialize};
use wave_core::{Wave, WordRecord};

use super::{CommandResult, TextOutput};

#[derive(Debug, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub count: u64,
}

impl From<WordRecord> for WordInfo {
    fn from(record: WordRecord) -> Self {
        Self {
            word: record.id,
            count: record.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitInfo {
    pub recorded: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<WordInfo>,
}

impl From<Vec<WordRecord>> for WordList {
    fn from(records: Vec<WordRecord>) -> Self {
        Self {
            words: records.into_iter().map(WordInfo::from).collect(),
        }
    }
}

impl TextOutput for SubmitInfo {
    fn to_text(&self) -> String {
        match self.recorded {
            1 => "Recorded 1 word".to_string(),
            n => format!("Recorded {n} words"),
        }
    }
}

impl TextOutput for WordList {
    fn to_text(&self) -> String {
        if self.words.is_empty() {
            return "No words yet".to_string();
        }

        let width = self
            .words
            .iter()
            .map(|w| w.word.chars().count())
            .max()
            .unwrap_or(0);

        self.words
            .iter()
            .map(|w| format!("{:<width$}  {}", w.word, w.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn submit(wave: &Wave, words: Vec<String>) -> CommandResult<SubmitInfo> {
    match wave.submit_all(&words).await {
        Ok(recorded) => CommandResult::ok(SubmitInfo { recorded }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Every word, largest counts first so the cloud reads top-down.
pub async fn cloud(wave: &Wave) -> CommandResult<WordList> {
    match wave.word_cloud().await {
        Ok(mut records) => {
            records.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
            CommandResult::ok(records.into())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub async fn trending(wave: &Wave, limit: Option<usize>) -> CommandResult<WordList> {
    match wave.trending(limit).await {
        Ok(records) => CommandResult::ok(records.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wave_core::{Config, Database};

    fn test_wave() -> Wave {
        let config = Config::new(PathBuf::from(":memory:"));
        Wave::with_database(config, Database::open_in_memory().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_cloud() {
        let wave = test_wave();
        let words = vec!["Sea".to_string(), "sea".to_string(), "Sky".to_string()];

        let result = submit(&wave, words).await;
        assert!(result.success);
        assert_eq!(result.data.unwrap().recorded, 3);

        let cloud = cloud(&wave).await.data.unwrap();
        let pairs: Vec<(&str, u64)> = cloud
            .words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(pairs, vec![("sea", 2), ("sky", 1)]);
    }

    #[tokio::test]
    async fn test_trending_limit() {
        let wave = test_wave();
        let words = ["a", "b", "b", "c", "c", "c"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        submit(&wave, words).await;

        let top = trending(&wave, Some(2)).await.data.unwrap();
        let ids: Vec<&str> = top.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_empty_store_lists_render_message() {
        let wave = test_wave();
        let cloud = cloud(&wave).await;
        assert!(cloud.success);
        assert_eq!(cloud.data.unwrap().to_text(), "No words yet");

        let top = trending(&wave, None).await.data.unwrap();
        assert!(top.words.is_empty());
        assert_eq!(top.to_text(), "No words yet");
    }

    #[test]
    fn test_text_output() {
        let list = WordList {
            words: vec![
                WordInfo { word: "tsunami".into(), count: 4 },
                WordInfo { word: "sea".into(), count: 12 },
            ],
        };
        assert_eq!(list.to_text(), "tsunami  4\nsea      12");
        assert_eq!(WordList { words: Vec::new() }.to_text(), "No words yet");
        assert_eq!(SubmitInfo { recorded: 1 }.to_text(), "Recorded 1 word");
        assert_eq!(SubmitInfo { recorded: 2 }.to_text(), "Recorded 2 words");
    }
}
