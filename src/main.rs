//! emag-scraper main entry point
//!
//! This is the command-line interface for the bounded product collector.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use emag_scraper::collector::collect;
use emag_scraper::config::{load_config_with_hash, validate, Config};
use emag_scraper::output::{
    generate_markdown_summary, print_statistics, write_dataset, RunSummary,
};
use emag_scraper::url::{category_slug, category_url};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// emag-scraper: collects product listings from category pages
///
/// Visits each configured category once, accepts products up to a global cap
/// and a per-category cap while dropping duplicate product URLs, and writes
/// the normalized products as a JSON dataset.
#[derive(Parser, Debug)]
#[command(name = "emag-scraper")]
#[command(version)]
#[command(about = "Bounded product collector for category listing pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be collected without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Override the global product cap
    #[arg(long, value_name = "N")]
    max_products: Option<usize>,

    /// Override the per-category product cap
    #[arg(long, value_name = "N")]
    max_per_category: Option<usize>,

    /// Override the dataset output path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&mut config, &cli).context("Invalid command-line override")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_collect(config, config_hash).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("emag_scraper=info,warn"),
            1 => EnvFilter::new("emag_scraper=debug,info"),
            2 => EnvFilter::new("emag_scraper=trace,debug"),
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

/// Applies command-line overrides and re-validates the result
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<(), emag_scraper::ConfigError> {
    if let Some(max_products) = cli.max_products {
        config.limits.max_products = max_products;
    }
    if let Some(max_per_category) = cli.max_per_category {
        config.limits.max_per_category = max_per_category;
    }
    if let Some(output) = &cli.output {
        config.output.dataset_path = output.display().to_string();
    }
    validate(config)
}

/// Handles the --dry-run mode: shows the resolved plan
fn handle_dry_run(config: &Config) {
    println!("=== emag-scraper Dry Run ===\n");

    println!("Limits:");
    println!("  Max products: {}", config.limits.max_products);
    println!("  Max per category: {}", config.limits.max_per_category);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\nOutput:");
    println!("  Dataset: {}", config.output.dataset_path);
    if let Some(summary_path) = &config.output.summary_path {
        println!("  Report: {}", summary_path);
    }

    println!("\nCategories ({}):", config.site.categories.len());
    for category in &config.site.categories {
        match category_url(&config.site.base_url, category) {
            Ok(url) => println!("  - {} -> {}", category_slug(&url), url),
            Err(e) => println!("  - {} (invalid: {})", category, e),
        }
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would collect at most {} products",
        config
            .limits
            .max_products
            .min(
                config
                    .limits
                    .max_per_category
                    .saturating_mul(config.site.categories.len())
            )
    );
}

/// Handles the main collection run
async fn handle_collect(config: Config, config_hash: String) -> anyhow::Result<()> {
    let started_at = Utc::now();

    let (items, stats) = collect(&config).await.context("Collection failed")?;
    println!("Total products scraped: {}", items.len());

    let dataset_path = Path::new(&config.output.dataset_path);
    let written = write_dataset(&items, dataset_path)
        .with_context(|| format!("Failed to write dataset {}", dataset_path.display()))?;
    println!("Saved {} products to {}", written, dataset_path.display());

    print_statistics(&stats);

    if let Some(summary_path) = &config.output.summary_path {
        let summary = RunSummary {
            started_at,
            finished_at: Utc::now(),
            config_hash,
            base_url: config.site.base_url.clone(),
            limits: config.limits,
            categories_configured: config.site.categories.len(),
            dataset_path: config.output.dataset_path.clone(),
            records_written: written,
            stats,
        };

        match generate_markdown_summary(&summary, Path::new(summary_path)) {
            Ok(()) => tracing::info!("Report written to {}", summary_path),
            Err(e) => tracing::warn!("Failed to write report {}: {}", summary_path, e),
        }
    }

    Ok(())
}
