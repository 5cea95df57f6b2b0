use clap::Parser;

use great_wave::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wave_core::init_logging();
    great_wave::run(Cli::parse()).await
}
