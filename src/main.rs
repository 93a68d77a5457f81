//! movplay - hand movie and show streams off to VLC
//!
//! # Usage
//!
//! ```bash
//! movplay play "https://cdn.example/x.m3u8" --title "Show S1E1"
//! movplay command "https://cdn.example/x.m3u8" --referrer "https://site.example"
//! movplay detect --json
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use movplay::cli::{Cli, Command, ExitCode, Output};
use movplay::commands;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run_cli(cli).await.into()
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Command::Play(cmd) => commands::play_cmd(cmd, &output).await,
        Command::Command(cmd) => commands::command_cmd(cmd, &output).await,
        Command::Detect(cmd) => commands::detect_cmd(cmd, &output).await,
    }
}
