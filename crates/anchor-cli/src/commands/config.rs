//! Configuration management command handlers
use anchor_core::config::config_path;
use anchor_core::AnchorConfig;
use anyhow::{Context, Result};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(),
        ConfigAction::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigAction::Init { force } => init_config(force),
    }
}

fn show_config() -> Result<()> {
    let config = AnchorConfig::load_or_default().context("Failed to load config")?;

    println!("Configuration:");
    println!("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}");
    print!("{}", toml::to_string_pretty(&config)?);

    println!("\n[resolved]");
    println!("  snapshot = {}", config.snapshot_path()?.display());
    match &config.lexicon_path {
        Some(path) => println!("  lexicon = {}", path.display()),
        None => println!("  lexicon = built-in"),
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = config_path()?;
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    AnchorConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
