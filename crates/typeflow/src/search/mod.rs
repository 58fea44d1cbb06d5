//! Fuzzy word search
//!
//! [`FuzzyEngine`] walks a [`PrefixIndex`](crate::index::PrefixIndex) depth
//! first and keeps one [`EditDistanceState`](crate::state::EditDistanceState)
//! in step with the walk: each visited node extends the state by the
//! characters it adds, and moving to a sibling branch rolls back the
//! characters that are no longer shared. Words are scored as they are
//! reached; the [`Pruning`] policy decides which subtrees are not worth
//! entering.
//!
//! # Example
//!
//! ```rust
//! use typeflow::filter::lowercase;
//! use typeflow::search::FuzzyEngine;
//!
//! let mut engine = FuzzyEngine::new();
//! engine.set_source(["Iran", "Iraq", "Ireland"], &[&lowercase]);
//!
//! let matches = engine.find_ranked("iraq", 0.7, 10).unwrap();
//! assert_eq!(matches[0].value, "Iraq");
//! assert_eq!(matches[0].similarity, 1.0);
//! ```

mod engine;
mod pruning;
mod shared;

pub use engine::{rank_matches, FuzzyEngine, Match, SearchOutcome, SearchStats};
pub use pruning::{similarity_upper_bound, Pruning};
pub use shared::SharedFuzzyEngine;
