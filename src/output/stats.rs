//! Run statistics
//!
//! Counters gathered by the collection engine while it walks categories,
//! plus a plain-text printer for the end-of-run summary.

use crate::state::AcceptOutcome;

/// A category that could not be fetched or whose URL could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCategory {
    /// The category as configured (e.g., "laptopuri/c")
    pub category: String,

    /// Short error label (e.g., "timeout", "http-status", "url")
    pub kind: String,

    pub message: String,
}

/// Per-run diagnostic counters
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Categories whose page fetch was attempted
    pub categories_visited: usize,

    /// Categories skipped because their fetch failed
    pub failed_categories: Vec<FailedCategory>,

    /// Categories skipped because no listing URL could be built from them
    pub invalid_categories: Vec<FailedCategory>,

    /// Categories never visited because the global cap was reached first
    pub unvisited_categories: Vec<String>,

    /// Candidates taken off a page and checked (malformed ones included)
    pub candidates_examined: usize,

    /// Cards dropped because a mandatory field was missing
    pub malformed_candidates: usize,

    /// Candidates rejected because their product URL was already accepted
    pub duplicate_candidates: usize,

    /// Candidates rejected because they had no product URL
    pub missing_url_candidates: usize,

    pub accepted: usize,

    /// Accepted count per category slug, in traversal order
    pub per_category: Vec<(String, usize)>,
}

impl RunStatistics {
    /// Records that a category page is about to be fetched
    pub fn record_visit(&mut self, slug: &str) {
        self.categories_visited += 1;
        if !self.per_category.iter().any(|(s, _)| s == slug) {
            self.per_category.push((slug.to_string(), 0));
        }
    }

    /// Records a category whose fetch failed
    pub fn record_failure(&mut self, category: &str, kind: &str, message: &str) {
        self.failed_categories.push(FailedCategory {
            category: category.to_string(),
            kind: kind.to_string(),
            message: message.to_string(),
        });
    }

    /// Records a category whose listing URL could not be built
    ///
    /// Nothing was fetched, so the category does not count as visited.
    pub fn record_invalid(&mut self, category: &str, message: &str) {
        self.invalid_categories.push(FailedCategory {
            category: category.to_string(),
            kind: "url".to_string(),
            message: message.to_string(),
        });
    }

    /// Records categories left over once the global cap bound
    pub fn record_unvisited(&mut self, categories: &[String]) {
        self.unvisited_categories.extend_from_slice(categories);
    }

    /// Records a product card that could not be extracted
    pub fn record_malformed(&mut self) {
        self.candidates_examined += 1;
        self.malformed_candidates += 1;
    }

    /// Records the accept step's decision for one candidate
    ///
    /// Quota stops are not counted: the candidate was never considered.
    pub fn record_outcome(&mut self, slug: &str, outcome: AcceptOutcome) {
        match outcome {
            AcceptOutcome::Accepted => {
                self.candidates_examined += 1;
                self.accepted += 1;
                match self.per_category.iter_mut().find(|(s, _)| s == slug) {
                    Some((_, count)) => *count += 1,
                    None => self.per_category.push((slug.to_string(), 1)),
                }
            }
            AcceptOutcome::Duplicate => {
                self.candidates_examined += 1;
                self.duplicate_candidates += 1;
            }
            AcceptOutcome::MissingUrl => {
                self.candidates_examined += 1;
                self.missing_url_candidates += 1;
            }
            AcceptOutcome::GlobalCapReached | AcceptOutcome::CategoryCapReached => {}
        }
    }

    /// Candidates that were examined but not accepted
    pub fn skipped_candidates(&self) -> usize {
        self.malformed_candidates + self.duplicate_candidates + self.missing_url_candidates
    }

    /// Accepted count for one category slug
    pub fn category_accepted(&self, slug: &str) -> usize {
        self.per_category
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Collection Statistics ===\n");

    println!("Categories:");
    println!("  Visited: {}", stats.categories_visited);
    println!("  Failed: {}", stats.failed_categories.len());
    println!("  Invalid: {}", stats.invalid_categories.len());
    println!("  Not visited (global cap): {}", stats.unvisited_categories.len());
    println!();

    println!("Candidates:");
    println!("  Examined: {}", stats.candidates_examined);
    println!("  Accepted: {}", stats.accepted);
    println!("  Duplicates: {}", stats.duplicate_candidates);
    println!("  Missing URL: {}", stats.missing_url_candidates);
    println!("  Malformed: {}", stats.malformed_candidates);
    println!();

    if !stats.per_category.is_empty() {
        println!("Accepted per Category:");
        for (slug, count) in &stats.per_category {
            println!("  {}: {}", slug, count);
        }
        println!();
    }

    if !stats.failed_categories.is_empty() {
        println!("Failed Categories ({}):", stats.failed_categories.len());
        for failed in &stats.failed_categories {
            println!("  - {} [{}] {}", failed.category, failed.kind, failed.message);
        }
        println!();
    }

    if !stats.invalid_categories.is_empty() {
        println!("Invalid Categories ({}):", stats.invalid_categories.len());
        for invalid in &stats.invalid_categories {
            println!("  - {} {}", invalid.category, invalid.message);
        }
        println!();
    }
}
