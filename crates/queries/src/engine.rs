//! The query engine: stateless lookups and aggregations over a shared catalog.
//!
//! The operations themselves are split by theme across `temporal`, `titles`
//! and `people`; this module holds the engine struct and its configuration.

use data_loader::Catalog;
use std::sync::Arc;

/// Default minimum number of votes for `votes_for_title` to report a title
pub const DEFAULT_VOTE_THRESHOLD: u32 = 2000;

/// Answers point queries against a `Catalog`.
///
/// The engine only holds a shared handle to the immutable catalog and its
/// configuration, so it is cheap to clone and safe to use from any number
/// of threads at once.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    pub(crate) catalog: Arc<Catalog>,

    /// Minimum vote count for `votes_for_title`
    pub(crate) vote_threshold: u32,
}

impl QueryEngine {
    /// Create a new query engine over `catalog`
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            vote_threshold: DEFAULT_VOTE_THRESHOLD,
        }
    }

    /// Configure the vote reporting threshold (default: 2000)
    pub fn with_vote_threshold(mut self, threshold: u32) -> Self {
        self.vote_threshold = threshold;
        self
    }

    pub fn vote_threshold(&self) -> u32 {
        self.vote_threshold
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
