//! URL handling module
//!
//! This module builds category listing URLs from the configured base URL,
//! derives the category slug used as the per-category quota key, and resolves
//! hrefs found inside product cards.

mod category;
mod resolve;

// Re-export main functions
pub use category::{category_slug, category_url, FALLBACK_SLUG};
pub use resolve::resolve_href;
