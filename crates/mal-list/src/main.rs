//! MAL list summary CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use mal_list::ListReport;
use shared::{Config, LogConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// List export to summarize (defaults to the configured export)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log entry titles for each category
    #[arg(long)]
    titles: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    shared::logging::init(LogConfig::from_config(&config, "mal-list", args.verbose)?)?;

    info!("MAL list summary starting");
    info!(config_file = %args.config.display(), "Loaded configuration");

    let input = args.input.unwrap_or_else(|| config.default_export_path());
    let report = ListReport::load(&input)
        .with_context(|| format!("Failed to summarize {}", input.display()))?;

    report.log_summary(args.titles || config.lists.show_titles);

    info!("MAL list summary finished");

    Ok(())
}
