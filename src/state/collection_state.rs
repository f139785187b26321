use crate::collector::RawItem;
use crate::config::LimitsConfig;
use std::collections::{HashMap, HashSet};

/// Result of offering one candidate to [`CollectionState::try_accept`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptOutcome {
    /// The candidate was stored and both counters were incremented
    Accepted,

    /// The candidate has no product URL
    MissingUrl,

    /// Another candidate with the same product URL was already accepted
    Duplicate,

    /// The run already holds `max_products` items
    GlobalCapReached,

    /// The candidate's category already holds `max_per_category` items
    CategoryCapReached,
}

impl AcceptOutcome {
    /// Returns true if no further candidates from the current page can be accepted
    pub fn is_quota_stop(&self) -> bool {
        matches!(self, Self::GlobalCapReached | Self::CategoryCapReached)
    }

    /// Short label used in logs and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::MissingUrl => "missing-url",
            Self::Duplicate => "duplicate",
            Self::GlobalCapReached => "global-cap",
            Self::CategoryCapReached => "category-cap",
        }
    }
}

/// Mutable state of a collection run
///
/// The only mutator is [`try_accept`](Self::try_accept), which performs the
/// quota checks, the duplicate check, and the insertion as one step. This
/// keeps the following true at all times:
///
/// - the number of accepted items equals the sum of the per-category counters
/// - every accepted product URL is in the seen set exactly once
/// - accepted items never exceed `max_products`
/// - no category counter exceeds `max_per_category`
#[derive(Debug, Clone)]
pub struct CollectionState {
    limits: LimitsConfig,
    accepted: Vec<RawItem>,
    category_counts: HashMap<String, usize>,
    seen_urls: HashSet<String>,
}

impl CollectionState {
    /// Creates an empty state bound to the given quotas
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            limits,
            accepted: Vec::new(),
            category_counts: HashMap::new(),
            seen_urls: HashSet::new(),
        }
    }

    /// Offers a candidate for acceptance
    ///
    /// Checks are applied in order: global cap, category cap, missing URL,
    /// duplicate URL. Only an `Accepted` outcome changes the state.
    pub fn try_accept(&mut self, item: RawItem) -> AcceptOutcome {
        if self.is_full() {
            return AcceptOutcome::GlobalCapReached;
        }

        if self.is_category_full(&item.category) {
            return AcceptOutcome::CategoryCapReached;
        }

        if item.product_url.is_empty() {
            return AcceptOutcome::MissingUrl;
        }

        if !self.seen_urls.insert(item.product_url.clone()) {
            return AcceptOutcome::Duplicate;
        }

        *self.category_counts.entry(item.category.clone()).or_insert(0) += 1;
        self.accepted.push(item);

        AcceptOutcome::Accepted
    }

    /// Checks if the global cap has been reached
    pub fn is_full(&self) -> bool {
        self.accepted.len() >= self.limits.max_products
    }

    /// Checks if a category has reached its cap
    pub fn is_category_full(&self, category: &str) -> bool {
        self.category_count(category) >= self.limits.max_per_category
    }

    /// Number of accepted items across all categories
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Number of accepted items for one category
    pub fn category_count(&self, category: &str) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    /// Number of items that can still be accepted before the global cap
    pub fn remaining(&self) -> usize {
        self.limits.max_products.saturating_sub(self.accepted.len())
    }

    /// Checks if a product URL has already been accepted
    pub fn has_seen(&self, product_url: &str) -> bool {
        self.seen_urls.contains(product_url)
    }

    /// Accepted items in acceptance order
    pub fn accepted(&self) -> &[RawItem] {
        &self.accepted
    }

    pub fn limits(&self) -> LimitsConfig {
        self.limits
    }

    /// Consumes the state, returning accepted items in acceptance order
    pub fn into_items(self) -> Vec<RawItem> {
        self.accepted
    }
}
