//! Collector module for fetching and accepting product listings
//!
//! This module contains the core collection logic, including:
//! - HTTP fetching of category listing pages
//! - Product card extraction
//! - Quota enforcement and deduplication across the run

mod engine;
mod extractor;
mod fetcher;

pub use engine::{CategoryOutcome, Collector};
pub use extractor::{ExtractionError, ProductExtractor, RawItem, DEFAULT_RATING_TEXT};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};

use crate::config::Config;
use crate::output::RunStatistics;
use crate::Result;

/// Runs a complete collection over the configured categories
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Visit each category in order until the global cap binds
/// 3. Return accepted items in acceptance order with the run statistics
///
/// # Returns
///
/// * `Ok((items, stats))` - Collection finished (individual category failures are in `stats`)
/// * `Err(ScraperError)` - The HTTP client or extractor could not be built
pub async fn collect(config: &Config) -> Result<(Vec<RawItem>, RunStatistics)> {
    let fetcher = HttpFetcher::new(&config.http)?;
    let mut collector = Collector::new(config, fetcher)?;
    collector.run(&config.site.categories).await;
    Ok(collector.finish())
}
