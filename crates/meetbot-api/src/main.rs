//! meetbot entry point.
//!
//! Binary name: `meetbot`
//!
//! Parses CLI arguments, initializes tracing, wires the dialogue controller
//! to its stores and either serves Telegram or reports configuration status.

mod cli;
mod state;
mod telegram;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;

use meetbot_infra::config::resolve_data_dir;
use meetbot_infra::secret::telegram_token;
use meetbot_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need logging or state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "meetbot", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);

    let result = match cli.command {
        Commands::Run => run(data_dir).await,
        Commands::Check => check(data_dir).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}

async fn run(data_dir: PathBuf) -> anyhow::Result<()> {
    let token = telegram_token(&data_dir).await?;
    let state = AppState::init(data_dir).await?;

    telegram::run(
        &token,
        state.controller.clone(),
        state.config.telegram.register_commands,
    )
    .await;
    Ok(())
}

async fn check(data_dir: PathBuf) -> anyhow::Result<()> {
    let has_token = telegram_token(&data_dir).await.is_ok();
    let state = AppState::init(data_dir).await?;

    let mark = |ok: bool| if ok { "✓" } else { "✗" };

    println!();
    println!("  Data directory: {}", state.data_dir.display());
    println!("  {} Telegram token", mark(has_token));

    match state.controller.meetings().store() {
        Some(store) => {
            println!(
                "  {} Spreadsheet {} (worksheet '{}')",
                mark(true),
                store.spreadsheet_id(),
                store.worksheet()
            );
            match state.controller.meetings().list().await {
                Ok(meetings) => println!("  {} {} meeting(s) stored", mark(true), meetings.len()),
                Err(e) => println!("  {} Reading meetings failed: {e}", mark(false)),
            }
        }
        None => println!(
            "  {} Spreadsheet unavailable, meetings will not be saved",
            mark(false)
        ),
    }
    println!();

    if !has_token {
        anyhow::bail!("Telegram token missing");
    }
    Ok(())
}
