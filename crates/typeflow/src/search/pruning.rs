//! Subtree pruning policies
//!
//! Similarity of a key of length `L` at distance `d` from a query of length
//! `q` is `1 - d / max(L, q)`. Once the walk has reached a prefix whose last
//! cost row has minimum `r`, every key below it has `d >= r` and also
//! `d >= L - q`. Maximising over `L` gives the bound `q / (q + r)`, reached
//! at `L = q + r`. [`Pruning::Bounded`] skips a subtree only when that bound
//! is already below the threshold, so it never loses a match.

use serde::{Deserialize, Serialize};

use crate::state::EditDistanceState;

/// Slack for comparing the bound against the threshold in floating point.
const BOUND_EPSILON: f64 = 1e-9;

/// How a search decides to skip the subtree below a visited node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Skip when no key below can reach the threshold. Exact.
    #[default]
    Bounded,
    /// Skip below a word whose own similarity misses the threshold.
    ///
    /// Cheaper to evaluate and prunes more, but a longer key below a poor
    /// word can still score well (for example `ireland` under `ire` for the
    /// query `ireland`), so matches can be lost.
    TerminalThreshold,
    /// Visit every node.
    Disabled,
}

impl Pruning {
    /// Decide whether to skip what lies below the node the state currently ends at.
    ///
    /// `word_similarity` is the best similarity of the values stored at the
    /// node, if it terminates any key.
    pub(crate) fn should_skip(
        self,
        state: &EditDistanceState,
        query_len: usize,
        word_similarity: Option<f64>,
        min_similarity: f64,
    ) -> bool {
        match self {
            Pruning::Bounded => {
                similarity_upper_bound(query_len, state.row_minimum()) + BOUND_EPSILON
                    < min_similarity
            }
            Pruning::TerminalThreshold => {
                word_similarity.is_some_and(|similarity| similarity < min_similarity)
            }
            Pruning::Disabled => false,
        }
    }
}

/// Highest similarity any key extending the current prefix can reach.
///
/// `row_minimum` is the minimum of the prefix's last cost row.
pub fn similarity_upper_bound(query_len: usize, row_minimum: usize) -> f64 {
    let den = query_len + row_minimum;
    if den == 0 {
        return 1.0;
    }
    query_len as f64 / den as f64
}
