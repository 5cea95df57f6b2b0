//! Command line definition

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wave_core::UpsertMode;

#[derive(Parser, Debug)]
#[command(
    name = "wave",
    version,
    about = "Submit words, then read back the word cloud and the trending board"
)]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Count one submission per word
    Submit {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List every word with its count
    Cloud,
    /// Show the most submitted words
    Trending {
        /// Number of words (defaults to the configured trending limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show the effective configuration, or change a persisted setting
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Persist the default trending board size
    TrendingLimit { limit: usize },
    /// Persist the upsert strategy: read-modify-write or atomic
    UpsertMode { mode: UpsertMode },
}
