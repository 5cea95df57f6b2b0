//! Great Wave command line
//!
//! Opens the word store, runs one command and prints its result as text or
//! as a JSON `CommandResult`.

pub mod cli;
pub mod commands;

use anyhow::Context;
use serde::Serialize;

use cli::{Cli, CliCommand, ConfigAction, OutputFormat};
use commands::{CommandResult, TextOutput};
use wave_core::{Config, Wave};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::default();
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    let mut wave = Wave::new(config).context("failed to open word store")?;
    let format = cli.format;

    match cli.command {
        CliCommand::Submit { words } => emit(format, commands::words::submit(&wave, words).await),
        CliCommand::Cloud => emit(format, commands::words::cloud(&wave).await),
        CliCommand::Trending { limit } => {
            emit(format, commands::words::trending(&wave, limit).await)
        }
        CliCommand::Config { action: None } => emit(format, commands::settings::get_config(&wave)),
        CliCommand::Config {
            action: Some(ConfigAction::TrendingLimit { limit }),
        } => emit(
            format,
            commands::settings::set_trending_limit(&mut wave, limit),
        ),
        CliCommand::Config {
            action: Some(ConfigAction::UpsertMode { mode }),
        } => emit(format, commands::settings::set_upsert_mode(&mut wave, mode)),
    }
}

fn emit<T>(format: OutputFormat, result: CommandResult<T>) -> anyhow::Result<()>
where
    T: Serialize + TextOutput,
{
    let rendered = render(format, &result)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    match result.error {
        Some(error) => {
            tracing::error!(error = %error, "Command failed");
            anyhow::bail!(error)
        }
        None => Ok(()),
    }
}

fn render<T>(format: OutputFormat, result: &CommandResult<T>) -> anyhow::Result<String>
where
    T: Serialize + TextOutput,
{
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => result
            .data
            .as_ref()
            .map(TextOutput::to_text)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::words::SubmitInfo;

    #[test]
    fn test_render_json_failure() {
        let result: CommandResult<SubmitInfo> = CommandResult::err("offline".to_string());
        let json = render(OutputFormat::Json, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "offline");
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_render_text_success() {
        let result = CommandResult::ok(SubmitInfo { recorded: 2 });
        assert_eq!(
            render(OutputFormat::Text, &result).unwrap(),
            "Recorded 2 words"
        );
        assert!(emit(OutputFormat::Text, result).is_ok());
    }

    #[test]
    fn test_emit_failure_is_error() {
        let result: CommandResult<SubmitInfo> = CommandResult::err("offline".to_string());
        assert!(emit(OutputFormat::Text, result).is_err());
    }

    #[tokio::test]
    async fn test_run_against_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let database = dir.path().join("words.db");
        let cli = |args: &[&str]| {
            let mut argv = vec!["wave", "--database", database.to_str().unwrap()];
            argv.extend_from_slice(args);
            <Cli as clap::Parser>::try_parse_from(argv).unwrap()
        };

        run(cli(&["submit", "Hokusai", "hokusai"])).await.unwrap();
        run(cli(&["config", "trending-limit", "1"])).await.unwrap();

        let wave = Wave::new(Config {
            database_path: database.clone(),
            ..Config::new(dir.path().to_path_buf())
        })
        .unwrap();
        assert_eq!(wave.config().trending_limit, 1);
        let top = wave.trending(None).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, "hokusai");
        assert_eq!(top[0].count, 2);
    }

    #[tokio::test]
    async fn test_run_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let database = dir.path().join("nested").join("words.db");
        let argv = ["wave", "--database", database.to_str().unwrap(), "cloud"];

        run(<Cli as clap::Parser>::try_parse_from(argv).unwrap())
            .await
            .unwrap();
        assert!(database.exists());
    }
}
