//! Command line entry point for elo-lists
//!
//! Loads ranking lists from a directory, runs the round-robin simulation
//! for each one and prints per-list and aggregate ratings.

use anyhow::Result;
use clap::Parser;
use elo_lists::config::{validate_config, AppConfig, OutputFormat};
use elo_lists::lists::DirectoryListProvider;
use elo_lists::output;
use elo_lists::pipeline::RankingPipeline;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Elo ratings from independently ordered ranking lists
#[derive(Parser)]
#[command(
    name = "elo-lists",
    version,
    about = "Rank items from several ordered lists with round-robin Elo",
    long_about = "Each file in the lists directory is one ranking, best item first. Every list \
                 is simulated as a repeated round-robin tournament in which the higher listed \
                 item always wins, and the converged Elo ratings are averaged across lists."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Lists directory override
    #[arg(long, value_name = "DIR", help = "Directory with one ranking list per file")]
    lists_dir: Option<PathBuf>,

    /// Output format override
    #[arg(short, long, value_enum, help = "Report format")]
    format: Option<OutputFormat>,

    /// Round-robin passes override
    #[arg(long, value_name = "N", help = "Override the number of round-robin passes per list")]
    iterations: Option<u32>,

    /// Aggregate threshold override
    #[arg(
        long,
        value_name = "RATING",
        help = "Only report items whose average rating is above this value"
    )]
    min_rating: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without ranking")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with run settings
fn display_startup_banner(config: &AppConfig) {
    info!("elo-lists {}", elo_lists::VERSION);
    info!("   Lists: {}", config.input.lists_dir.display());
    info!("   Default rating: {}", config.rating.default_rating);
    info!("   Scale factor: {}", config.rating.scale_factor);
    info!("   Passes per list: {}", config.rating.iterations);
    info!("   Aggregate threshold: {}", config.rating.min_aggregate_rating);
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(dir) = &args.lists_dir {
        config.input.lists_dir = dir.clone();
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    if let Some(iterations) = args.iterations {
        config.rating.iterations = iterations;
    }

    if let Some(min_rating) = args.min_rating {
        config.rating.min_aggregate_rating = min_rating;
    }

    validate_config(&config)?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<()> {
    let provider = Arc::new(DirectoryListProvider::new(&config.input.lists_dir));
    let pipeline = RankingPipeline::new(provider, &config.rating)?;

    let report = pipeline.run()?;
    print!("{}", output::render(&report, config.output.format)?);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    if let Err(e) = run(&config) {
        error!("Ranking failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
