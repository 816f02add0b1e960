mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use flashdeck_core::AppConfig;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FLASHDECK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "flashdeck", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.effective_data_dir());
    tracing::debug!("Using data directory {}", data_dir.display());

    if let Err(err) = run(cli.command, &data_dir, &config).await {
        output::output_error(&format!("{:#}", err));
    }
    Ok(())
}

async fn run(command: Commands, data_dir: &Path, config: &AppConfig) -> anyhow::Result<()> {
    if let Commands::Replay(args) = command {
        return handlers::replay::handle(data_dir, config, args).await;
    }

    let mut ctx = CliContext::load(data_dir, config).await;

    match command {
        Commands::List(args) => handlers::cards::handle_list(&mut ctx, args),
        Commands::Tags => handlers::cards::handle_tags(&ctx),
        Commands::Add(args) => handlers::cards::handle_add(&mut ctx, args).await,
        Commands::Edit(args) => handlers::cards::handle_edit(&mut ctx, args).await,
        Commands::Delete { id } => handlers::cards::handle_delete(&mut ctx, id).await,
        Commands::Shuffle { seed } => handlers::cards::handle_shuffle(&mut ctx, seed).await,
        Commands::Import(args) => handlers::import::handle(&mut ctx, args).await,
        Commands::Settings(settings_cmd) => {
            handlers::settings::handle(&mut ctx, settings_cmd.action).await
        }
        Commands::Replay(_) | Commands::Completions { .. } => Ok(()),
    }
}
