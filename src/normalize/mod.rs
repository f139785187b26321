//! Field normalization for extracted product data
//!
//! All functions here are total: unparseable input yields a sentinel value
//! (`None` for price, `0.0` for rating) instead of an error.

mod price;
mod rating;
mod tags;

pub use price::{normalize_price, CURRENCY_SUFFIX};
pub use rating::normalize_rating;
pub use tags::{derive_tags, MIN_TAG_CHARS};
