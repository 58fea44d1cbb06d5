//! FuzzyEngine - prefix-index driven Levenshtein search

use std::hash::{Hash, Hasher};
use std::time::Instant;

use ahash::AHasher;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::distance::similarity;
use crate::error::StateError;
use crate::filter::{apply_filters, WordFilter};
use crate::index::{PrefixIndex, Walk};
use crate::state::EditDistanceState;

/// A source value that matched a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The stored value, as given to [`FuzzyEngine::set_source`]
    pub value: String,
    /// `1 - distance / max(len(key), len(query))`; 1.0 for an identical key
    pub similarity: f64,
}

impl Match {
    pub fn new(value: impl Into<String>, similarity: f64) -> Self {
        Self {
            value: value.into(),
            similarity,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Index nodes visited
    pub visited: usize,
    /// Subtrees skipped by the pruning policy
    pub pruned: usize,
    /// Rollbacks applied when backtracking
    pub rollbacks: usize,
}

/// Matches of one search together with its counters
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// In discovery order
    pub matches: Vec<Match>,
    pub stats: SearchStats,
}

/// Sort by similarity descending. The sort is stable, so ties keep discovery order.
pub fn rank_matches(matches: &mut [Match]) {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Fuzzy word search over a prefix index
///
/// The index is built by [`set_source`](Self::set_source) and only read by
/// searches, so a built engine can be shared across threads by reference.
/// Each search owns its own [`EditDistanceState`] and walks the index
/// sequentially.
#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    index: PrefixIndex,
    word_count: usize,
    index_hash: String,
    config: EngineConfig,
}

impl Default for FuzzyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyEngine {
    /// Create a new FuzzyEngine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            index: PrefixIndex::new(),
            word_count: 0,
            index_hash: String::new(),
            config,
        }
    }

    /// Replace the source with `values`, each passed through `filters` in order.
    ///
    /// The filtered form becomes the index key, the untouched value is what
    /// matches report. Returns (word_count, hash).
    pub fn set_source<I, S>(&mut self, values: I, filters: &[&dyn WordFilter]) -> (usize, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();

        let mut index = PrefixIndex::new();
        let mut hasher = AHasher::default();
        let mut skipped = 0;

        for value in values {
            let value = value.as_ref();
            match apply_filters(value, filters) {
                Some(key) => {
                    key.hash(&mut hasher);
                    value.hash(&mut hasher);
                    index.insert(&key, value);
                }
                None => skipped += 1,
            }
        }

        let hash = format!("{:016x}", hasher.finish());
        let word_count = index.len();

        debug!(
            words = word_count,
            keys = index.key_count(),
            nodes = index.node_count(),
            skipped,
            hash = %hash,
            elapsed_us = start.elapsed().as_micros() as u64,
            "source index rebuilt"
        );

        self.index = index;
        self.word_count = word_count;
        self.index_hash = hash.clone();

        (word_count, hash)
    }

    /// Find every source value whose key is at least `min_similarity` similar to `query`.
    ///
    /// Matches come back in discovery order; see [`rank_matches`] and
    /// [`find_ranked`](Self::find_ranked) for sorted results. An error means
    /// the traversal broke the distance state's contract and is a bug.
    pub fn find_match(&self, query: &str, min_similarity: f64) -> Result<Vec<Match>, StateError> {
        Ok(self.find_match_with_stats(query, min_similarity)?.matches)
    }

    /// [`find_match`](Self::find_match), also reporting traversal counters.
    pub fn find_match_with_stats(
        &self,
        query: &str,
        min_similarity: f64,
    ) -> Result<SearchOutcome, StateError> {
        let start = Instant::now();

        let target: Vec<char> = query.chars().collect();
        let query_len = target.len();
        let mut state = EditDistanceState::from_chars(target, self.config.strategy);
        let pruning = self.config.pruning;

        let mut matches = Vec::new();
        let mut stats = SearchStats::default();

        self.index.try_traverse::<StateError, _>(|info| {
            stats.visited += 1;

            // Backtracking out of a branch: drop what is no longer shared
            let stale = state.source().len() - info.shared_len;
            if stale > 0 {
                state.rollback_by(stale)?;
                stats.rollbacks += 1;
            }
            state.extend_chars(info.delta());

            let mut word_similarity = None;
            if info.is_word() {
                let score = similarity(state.distance(), info.prefix.len(), query_len);
                word_similarity = Some(score);
                if score >= min_similarity {
                    matches.extend(info.values.iter().map(|v| Match::new(v.as_str(), score)));
                }
            }

            if pruning.should_skip(&state, query_len, word_similarity, min_similarity) {
                stats.pruned += 1;
                trace!(depth = info.depth, row_minimum = state.row_minimum(), "subtree pruned");
                return Ok(Walk::SkipSubtree);
            }
            Ok(Walk::Continue)
        })?;

        debug!(
            query,
            min_similarity,
            visited = stats.visited,
            pruned = stats.pruned,
            matches = matches.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "search complete"
        );

        Ok(SearchOutcome { matches, stats })
    }

    /// Matches sorted by similarity descending, truncated to `limit`.
    pub fn find_ranked(
        &self,
        query: &str,
        min_similarity: f64,
        limit: usize,
    ) -> Result<Vec<Match>, StateError> {
        let mut matches = self.find_match(query, min_similarity)?;
        rank_matches(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    /// Ranked search using the configured threshold and result limit.
    pub fn search(&self, query: &str) -> Result<Vec<Match>, StateError> {
        self.find_ranked(query, self.config.min_similarity, self.config.max_results)
    }

    /// Run independent queries, in parallel on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn find_match_batch<S>(
        &self,
        queries: &[S],
        min_similarity: f64,
    ) -> Result<Vec<Vec<Match>>, StateError>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.find_match(query.as_ref(), min_similarity))
            .collect()
    }

    /// Run independent queries one after the other.
    #[cfg(not(feature = "parallel"))]
    pub fn find_match_batch<S>(
        &self,
        queries: &[S],
        min_similarity: f64,
    ) -> Result<Vec<Vec<Match>>, StateError>
    where
        S: AsRef<str>,
    {
        queries
            .iter()
            .map(|query| self.find_match(query.as_ref(), min_similarity))
            .collect()
    }

    /// Number of values in the current source
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Fingerprint of the current source, for change detection
    pub fn index_hash(&self) -> &str {
        &self.index_hash
    }

    /// Check if the source has any values
    pub fn is_ready(&self) -> bool {
        self.word_count > 0
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}
