//! Output error and run summary types
//!
//! This module defines the error type shared by the dataset writer and the
//! report generator, and the summary data the run report is built from.

use crate::config::LimitsConfig;
use crate::output::stats::RunStatistics;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything the run report needs to know about a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: String,
    pub base_url: String,
    pub limits: LimitsConfig,
    pub categories_configured: usize,
    pub dataset_path: String,
    pub records_written: usize,
    pub stats: RunStatistics,
}

impl RunSummary {
    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds().max(0)
    }

    /// Share of the global cap that was filled, as a percentage
    pub fn fill_rate(&self) -> f64 {
        if self.limits.max_products == 0 {
            return 0.0;
        }
        (self.stats.accepted as f64 / self.limits.max_products as f64) * 100.0
    }

    /// Share of visited categories whose page was fetched, as a percentage
    pub fn fetch_success_rate(&self) -> f64 {
        if self.stats.categories_visited == 0 {
            return 0.0;
        }
        let fetched = self
            .stats
            .categories_visited
            .saturating_sub(self.stats.failed_categories.len());
        (fetched as f64 / self.stats.categories_visited as f64) * 100.0
    }
}
