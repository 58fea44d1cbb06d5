//! typeflow - fuzzy word search on an incremental Levenshtein engine
//!
//! Candidate words are stored in a prefix index. A search walks that index
//! depth first and keeps a single edit-distance table in step with the walk,
//! so words that share a prefix share the work of comparing it against the
//! query.
//!
//! # Features
//!
//! - `parallel` - Run the queries of a batch on the rayon thread pool
//!
//! # Example
//!
//! ```rust
//! use typeflow::filter::lowercase;
//! use typeflow::{levenshtein, EditDistanceState, FuzzyEngine};
//!
//! assert_eq!(levenshtein("iraq", "rep of ireland"), 11);
//!
//! // Incremental comparison against a fixed target
//! let mut state = EditDistanceState::new("alex");
//! state.extend("al");
//! state.extend("es");
//! assert_eq!(state.distance(), 1);
//!
//! // Fuzzy search over a word list
//! let mut engine = FuzzyEngine::new();
//! engine.set_source(["Ireland (Republic)", "Iceland"], &[&lowercase]);
//! let matches = engine.find_match("rep of ireland", 0.32).unwrap();
//! assert!(matches.iter().any(|m| m.value == "Ireland (Republic)"));
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod filter;
pub mod index;
pub mod logging;
pub mod search;
pub mod state;

// Re-export main types at crate root
pub use config::EngineConfig;
pub use distance::{levenshtein, similarity};
pub use error::{Error, Result, StateError};
pub use filter::WordFilter;
pub use index::{PrefixIndex, PrefixInfo, Walk};
pub use search::{
    rank_matches, FuzzyEngine, Match, Pruning, SearchOutcome, SearchStats, SharedFuzzyEngine,
};
pub use state::{EditDistanceState, Strategy, UNSET_DISTANCE};
