//! Collection engine - bounded traversal of category listing pages
//!
//! The engine visits categories strictly in configured order. Each category
//! is fetched once, its product cards are extracted in document order, and
//! every candidate is offered to the [`CollectionState`] accept step, which
//! enforces the global cap, the per-category cap, and URL deduplication.
//! Fetch and extraction failures are logged and counted, never fatal.

use crate::collector::extractor::ProductExtractor;
use crate::collector::fetcher::{FetchError, PageFetcher};
use crate::collector::RawItem;
use crate::config::{Config, LimitsConfig};
use crate::output::RunStatistics;
use crate::state::{AcceptOutcome, CollectionState};
use crate::url::{category_slug, category_url};
use crate::ScraperError;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// What happened to a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// The global cap was already reached, nothing was fetched
    Skipped,

    /// The category URL could not be built or the page could not be fetched
    Failed,

    /// The page was fetched and walked
    Processed {
        /// Candidates accepted from this page
        accepted: usize,
    },
}

/// Main collection engine
pub struct Collector<F> {
    fetcher: F,
    extractor: ProductExtractor,
    base_url: String,
    timeout: Duration,
    state: CollectionState,
    stats: RunStatistics,
}

impl<F: PageFetcher> Collector<F> {
    /// Creates a collector from the run configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The run configuration (base URL, quotas, timeout, selectors)
    /// * `fetcher` - Source of listing pages
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Ready to run with empty state
    /// * `Err(ScraperError)` - A configured selector does not compile
    pub fn new(config: &Config, fetcher: F) -> Result<Self, ScraperError> {
        let extractor = ProductExtractor::new(&config.selectors)?;

        Ok(Self::with_extractor(
            fetcher,
            extractor,
            &config.site.base_url,
            config.limits,
            Duration::from_secs(config.http.timeout_secs),
        ))
    }

    /// Creates a collector from already-built parts
    pub fn with_extractor(
        fetcher: F,
        extractor: ProductExtractor,
        base_url: &str,
        limits: LimitsConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            base_url: base_url.to_string(),
            timeout,
            state: CollectionState::new(limits),
            stats: RunStatistics::default(),
        }
    }

    /// Visits categories in order until the list or the global cap is exhausted
    ///
    /// Categories left over once the global cap binds are never fetched; they
    /// are recorded as unvisited in the run statistics.
    pub async fn run(&mut self, categories: &[String]) {
        tracing::info!(
            "Collecting from {} categories (max {} products, {} per category)",
            categories.len(),
            self.state.limits().max_products,
            self.state.limits().max_per_category
        );

        for (index, category) in categories.iter().enumerate() {
            if self.state.is_full() {
                let unvisited = &categories[index..];
                tracing::info!(
                    "Global cap of {} products reached, {} categories not visited",
                    self.state.limits().max_products,
                    unvisited.len()
                );
                self.stats.record_unvisited(unvisited);
                break;
            }

            self.process_category(category).await;
        }

        tracing::info!(
            "Collection finished: {} products accepted, {} categories failed, {} candidates skipped",
            self.state.accepted_count(),
            self.stats.failed_categories.len(),
            self.stats.skipped_candidates()
        );
    }

    /// Fetches one category page and offers its candidates for acceptance
    ///
    /// Calling this again for a category already processed is safe: its
    /// products are rejected as duplicates and the category cap still holds.
    pub async fn process_category(&mut self, category: &str) -> CategoryOutcome {
        if self.state.is_full() {
            tracing::debug!("Skipping {}: global cap reached", category);
            return CategoryOutcome::Skipped;
        }

        let url = match category_url(&self.base_url, category) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Invalid category '{}': {}", category, e);
                self.stats.record_invalid(category, &e.to_string());
                return CategoryOutcome::Failed;
            }
        };

        let slug = category_slug(&url);
        tracing::info!("Scraping category: {}", url);
        self.stats.record_visit(&slug);

        let page = match self.fetcher.fetch(&url, self.timeout).await {
            Ok(page) => page,
            Err(e) => {
                self.record_fetch_failure(category, &e);
                return CategoryOutcome::Failed;
            }
        };

        tracing::debug!(
            "Fetched {} (HTTP {}, {} bytes)",
            page.final_url,
            page.status_code,
            page.body.len()
        );

        let accepted = self.accept_page(&page.body, &url, &slug);
        tracing::info!(
            "Accepted {} products from {} ({} total)",
            accepted,
            slug,
            self.state.accepted_count()
        );

        CategoryOutcome::Processed { accepted }
    }

    /// Walks the candidates of one page through the accept step
    fn accept_page(&mut self, body: &str, page_url: &Url, slug: &str) -> usize {
        let document = Html::parse_document(body);
        let mut accepted = 0;

        for (position, candidate) in self
            .extractor
            .extract(&document, page_url, slug)
            .enumerate()
        {
            if self.state.is_full() {
                tracing::debug!("Global cap reached while walking {}", slug);
                break;
            }

            if self.state.is_category_full(slug) {
                tracing::debug!("Category cap reached for {}", slug);
                break;
            }

            let item = match candidate {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!("Skipping card {} on {}: {}", position, page_url, e);
                    self.stats.record_malformed();
                    continue;
                }
            };

            let product_url = item.product_url.clone();
            let outcome = self.state.try_accept(item);
            self.stats.record_outcome(slug, outcome);

            if outcome.is_quota_stop() {
                tracing::debug!("Stopping walk of {}: {}", slug, outcome.as_str());
                break;
            }

            match outcome {
                AcceptOutcome::Accepted => {
                    tracing::trace!("Accepted {}", product_url);
                    accepted += 1;
                }
                AcceptOutcome::MissingUrl => {
                    tracing::debug!("Skipping card {} on {}: no product URL", position, page_url);
                }
                _ => tracing::debug!("Skipping {} {}", outcome.as_str(), product_url),
            }
        }

        accepted
    }

    fn record_fetch_failure(&mut self, category: &str, error: &FetchError) {
        tracing::warn!(
            "Failed to retrieve {} ({}): {}",
            error.url(),
            error.kind(),
            error
        );
        self.stats
            .record_failure(category, error.kind(), &error.to_string());
    }

    /// Current collection state
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    /// Statistics gathered so far
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    /// Ends the run, returning accepted items in acceptance order and the statistics
    pub fn finish(self) -> (Vec<RawItem>, RunStatistics) {
        (self.state.into_items(), self.stats)
    }
}
