//! Engine shared between threads that rebuild and search concurrently

use parking_lot::RwLock;

use super::engine::{FuzzyEngine, Match};
use crate::config::EngineConfig;
use crate::error::StateError;
use crate::filter::WordFilter;

/// Thread-safe wrapper around [`FuzzyEngine`]
///
/// Rebuilding the source takes the write lock; searches take the read lock
/// and run concurrently with each other. The new index is built before the
/// write lock is taken, so searches only wait for the swap.
#[derive(Debug, Default)]
pub struct SharedFuzzyEngine {
    inner: RwLock<FuzzyEngine>,
}

impl SharedFuzzyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            inner: RwLock::new(FuzzyEngine::with_config(config)),
        }
    }

    /// Replace the source. Returns (word_count, hash).
    pub fn set_source<I, S>(&self, values: I, filters: &[&dyn WordFilter]) -> (usize, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = self.inner.read().config().clone();
        let mut rebuilt = FuzzyEngine::with_config(config);
        let result = rebuilt.set_source(values, filters);

        *self.inner.write() = rebuilt;
        result
    }

    pub fn find_match(&self, query: &str, min_similarity: f64) -> Result<Vec<Match>, StateError> {
        self.inner.read().find_match(query, min_similarity)
    }

    pub fn find_ranked(
        &self,
        query: &str,
        min_similarity: f64,
        limit: usize,
    ) -> Result<Vec<Match>, StateError> {
        self.inner.read().find_ranked(query, min_similarity, limit)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Match>, StateError> {
        self.inner.read().search(query)
    }

    pub fn word_count(&self) -> usize {
        self.inner.read().word_count()
    }

    pub fn index_hash(&self) -> String {
        self.inner.read().index_hash().to_string()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().is_ready()
    }
}
