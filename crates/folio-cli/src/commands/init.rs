use anyhow::{Context, Result};

use folio_core::{AppConfig, PortfolioContent};

/// Write the default config and a sample portfolio file, refusing to
/// overwrite anything that already exists.
pub fn run() -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
    } else {
        AppConfig::default()
            .save()
            .context("failed to write default config")?;
        println!("Wrote default config: {}", config_path.display());
    }

    let portfolio_path = AppConfig::sample_portfolio_path();
    if portfolio_path.exists() {
        println!("Portfolio already exists: {}", portfolio_path.display());
    } else {
        if let Some(parent) = portfolio_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let sample = toml::to_string_pretty(&PortfolioContent::default())
            .context("failed to serialize sample portfolio")?;
        std::fs::write(&portfolio_path, sample)?;
        println!("Wrote sample portfolio: {}", portfolio_path.display());
        println!("Set `portfolio` under [general] in the config to use it.");
    }

    Ok(())
}
