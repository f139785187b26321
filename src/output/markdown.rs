//! Markdown run report generation
//!
//! This module generates a human-readable markdown report of a collection
//! run: configuration fingerprint, quotas, totals, per-category counts, and
//! failed categories.

use crate::output::types::{OutputResult, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown report for a finished run
///
/// # Arguments
///
/// * `summary` - The run summary data
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(summary: &RunSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let stats = &summary.stats;
    let mut md = String::new();

    md.push_str("# Product Collection Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Site**: {}\n", summary.base_url));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        summary.duration_seconds()
    ));
    md.push_str(&format!("- **Config Hash**: {}\n", summary.config_hash));
    md.push_str(&format!("- **Dataset**: {}\n\n", summary.dataset_path));

    // Quotas
    md.push_str("## Limits\n\n");
    md.push_str(&format!(
        "- **Max Products**: {}\n",
        summary.limits.max_products
    ));
    md.push_str(&format!(
        "- **Max Per Category**: {}\n\n",
        summary.limits.max_per_category
    ));

    // Totals
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!(
        "- **Records Written**: {}\n",
        summary.records_written
    ));
    md.push_str(&format!(
        "- **Global Cap Filled**: {:.2}%\n",
        summary.fill_rate()
    ));
    md.push_str(&format!(
        "- **Categories Configured**: {}\n",
        summary.categories_configured
    ));
    md.push_str(&format!(
        "- **Categories Visited**: {}\n",
        stats.categories_visited
    ));
    md.push_str(&format!(
        "- **Fetch Success Rate**: {:.2}%\n\n",
        summary.fetch_success_rate()
    ));

    // Candidate breakdown
    md.push_str("## Candidate Breakdown\n\n");
    md.push_str("| Outcome | Count |\n");
    md.push_str("|---------|-------|\n");
    md.push_str(&format!("| Accepted | {} |\n", stats.accepted));
    md.push_str(&format!(
        "| Duplicate URL | {} |\n",
        stats.duplicate_candidates
    ));
    md.push_str(&format!(
        "| Missing URL | {} |\n",
        stats.missing_url_candidates
    ));
    md.push_str(&format!(
        "| Malformed | {} |\n\n",
        stats.malformed_candidates
    ));

    if !stats.per_category.is_empty() {
        md.push_str("## Accepted per Category\n\n");
        md.push_str("| Category | Products |\n");
        md.push_str("|----------|----------|\n");
        for (slug, count) in &stats.per_category {
            md.push_str(&format!("| {} | {} |\n", slug, count));
        }
        md.push('\n');
    }

    if !stats.failed_categories.is_empty() {
        md.push_str("## Failed Categories\n\n");
        md.push_str("| Category | Error | Message |\n");
        md.push_str("|----------|-------|---------|\n");
        for failed in &stats.failed_categories {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                failed.category, failed.kind, failed.message
            ));
        }
        md.push('\n');
    }

    if !stats.invalid_categories.is_empty() {
        md.push_str("## Invalid Categories\n\n");
        for invalid in &stats.invalid_categories {
            md.push_str(&format!("- {}: {}\n", invalid.category, invalid.message));
        }
        md.push('\n');
    }

    if !stats.unvisited_categories.is_empty() {
        md.push_str("## Not Visited (global cap reached)\n\n");
        for category in &stats.unvisited_categories {
            md.push_str(&format!("- {}\n", category));
        }
        md.push('\n');
    }

    md
}
