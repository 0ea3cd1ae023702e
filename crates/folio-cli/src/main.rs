use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::{AppConfig, PortfolioContent};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A personal portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (TOML); overrides the configured one
    #[arg(short = 'c', long = "content")]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Write the default config and a sample portfolio file
    Init,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run) | None => {
            let content = load_content(&config, cli.content.as_deref())?;
            commands::run::run(config, content)
        }
        Some(Commands::Init) => commands::init::run(),
    }
}

/// Resolve the portfolio document: CLI flag, then configured path, then the
/// built-in sample.
fn load_content(config: &AppConfig, override_path: Option<&Path>) -> Result<PortfolioContent> {
    if let Some(path) = override_path {
        return PortfolioContent::load(path)
            .with_context(|| format!("failed to load portfolio from {}", path.display()));
    }

    if let Some(path) = config.portfolio_path() {
        if path.exists() {
            tracing::info!("loading portfolio from {}", path.display());
            return PortfolioContent::load(&path)
                .with_context(|| format!("failed to load portfolio from {}", path.display()));
        }
        tracing::warn!(
            "configured portfolio file {} does not exist, using the built-in sample",
            path.display()
        );
    }

    Ok(PortfolioContent::default())
}
