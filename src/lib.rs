//! emag-scraper: a bounded product collector for category listing pages
//!
//! This crate fetches one listing page per configured category, extracts
//! product cards, and accepts them under a global cap and a per-category cap
//! with URL-based deduplication across the whole run. Accepted products are
//! normalized and written as a JSON dataset.

pub mod collector;
pub mod config;
pub mod normalize;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use collector::{Collector, HttpFetcher, PageFetcher, ProductExtractor, RawItem};
pub use config::Config;
pub use normalize::{derive_tags, normalize_price, normalize_rating};
pub use output::{write_dataset, ProductRecord, RunStatistics};
pub use state::{AcceptOutcome, CollectionState};
