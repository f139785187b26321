//! State module for tracking collection progress
//!
//! # Components
//!
//! - `CollectionState`: accepted products, per-category counters, and the
//!   run-wide set of seen product URLs
//! - `AcceptOutcome`: the decision taken for one candidate by the accept step

mod collection_state;

// Re-export main types
pub use collection_state::{AcceptOutcome, CollectionState};
