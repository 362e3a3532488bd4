//! discogs-scraper main entry point
//!
//! Command-line interface for scraping Discogs marketplace listings.

use anyhow::Context;
use clap::Parser;
use discogs_scraper::config::{load_config_with_hash, Config};
use discogs_scraper::crawler::crawl;
use discogs_scraper::model::CrawlRequest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrape vinyl listings of one style from the Discogs marketplace
///
/// Listings are collected newest first. Each request is preceded by a short
/// random pause to keep the load on the marketplace low.
#[derive(Parser, Debug)]
#[command(name = "discogs-scraper")]
#[command(version)]
#[command(about = "Discogs marketplace scraper", long_about = None)]
struct Cli {
    /// Marketplace style to scrape (e.g. "Techno", "Deep House")
    #[arg(value_name = "STYLE")]
    style: String,

    /// Number of listings to scrape
    #[arg(value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Write the dataset to a timestamped CSV file
    #[arg(short, long)]
    export: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the CSV export (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.display().to_string();
    }

    let request = CrawlRequest::new(&cli.style, cli.count, cli.export)?;
    tracing::info!(
        "Scraping {} '{}' listings from {}",
        request.item_count(),
        request.category(),
        config.marketplace.origin
    );

    let outcome = match crawl(&config, &request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e).context("scrape failed");
        }
    };

    match &outcome.export_path {
        Some(path) => println!(
            "✓ Scraped {} listings, exported to {}",
            outcome.dataset.len(),
            path.display()
        ),
        None => println!("✓ Scraped {} listings", outcome.dataset.len()),
    }

    Ok(())
}

/// Loads the config file if one was given, otherwise the defaults
fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("discogs_scraper=info,warn"),
            1 => EnvFilter::new("discogs_scraper=debug,info"),
            2 => EnvFilter::new("discogs_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
