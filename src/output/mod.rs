//! Output module for the dataset and run reports
//!
//! This module handles:
//! - Normalizing accepted items and writing the JSON dataset
//! - Recording run statistics
//! - Generating the markdown run report

mod dataset;
mod markdown;
pub mod stats;
mod types;

pub use dataset::{build_records, format_product, write_dataset, ProductRecord};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, FailedCategory, RunStatistics};
pub use types::{OutputError, OutputResult, RunSummary};
