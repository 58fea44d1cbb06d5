//! Incremental Levenshtein state
//!
//! An [`EditDistanceState`] compares a growing `source` against a fixed
//! `target`. The source can be extended by any number of characters and a
//! suffix of it can be rolled back, so that a prefix-ordered walk over many
//! candidate words only pays for the characters it actually changes.
//!
//! Two cost-table strategies share the same contract:
//!
//! - [`Strategy::FullMatrix`] keeps every row of the
//!   `(|source| + 1) x (|target| + 1)` table in one flat buffer. Extending
//!   fills only the new rows, O(|delta| * |target|). Rolling back truncates
//!   the buffer, which keeps its capacity so re-extension does not allocate.
//! - [`Strategy::TwoRow`] keeps only the previous and the current row,
//!   O(|target|) memory. No historical rows survive, so every extension and
//!   every rollback refills both rows from the whole source,
//!   O(|source| * |target|) per call. Pick it when memory matters more than
//!   the cost of many small extensions.
//!
//! # Example
//!
//! ```rust
//! use typeflow::state::EditDistanceState;
//!
//! let mut state = EditDistanceState::new("alex");
//! state.extend("al");
//! assert_eq!(state.distance(), 2);
//! state.extend("es");
//! assert_eq!(state.distance(), 1);
//! state.rollback_by(2).unwrap();
//! assert_eq!(state.distance(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::distance::fill_row;
use crate::error::StateError;

/// Reported by [`EditDistanceState::distance`] before the first extension.
pub const UNSET_DISTANCE: usize = usize::MAX;

/// Cost-table layout used by an [`EditDistanceState`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every row retained; cheap extension and rollback.
    #[default]
    FullMatrix,
    /// Two rolling rows; O(|target|) memory, full recompute per call.
    TwoRow,
}

#[derive(Debug, Clone)]
enum CostTable {
    /// Row-major cells, `target.len() + 1` per row, row 0 always present.
    Matrix { cells: Vec<usize> },
    /// `curr` holds the row for the whole source, `prev` the one before it.
    TwoRow { prev: Vec<usize>, curr: Vec<usize> },
}

/// Levenshtein comparison of an incrementally built source against a fixed target.
#[derive(Debug, Clone)]
pub struct EditDistanceState {
    target: Vec<char>,
    source: Vec<char>,
    table: CostTable,
    extended: bool,
}

impl EditDistanceState {
    /// Create a state for `target` with the default [`Strategy::FullMatrix`].
    pub fn new(target: &str) -> Self {
        Self::with_strategy(target, Strategy::default())
    }

    /// Create a state for `target` with an explicit strategy.
    pub fn with_strategy(target: &str, strategy: Strategy) -> Self {
        Self::from_chars(target.chars().collect(), strategy)
    }

    /// Create a state from an already decoded target.
    pub fn from_chars(target: Vec<char>, strategy: Strategy) -> Self {
        let seed: Vec<usize> = (0..=target.len()).collect();
        let table = match strategy {
            Strategy::FullMatrix => CostTable::Matrix { cells: seed },
            Strategy::TwoRow => CostTable::TwoRow {
                prev: seed.clone(),
                curr: seed,
            },
        };

        Self {
            target,
            source: Vec::new(),
            table,
            extended: false,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self.table {
            CostTable::Matrix { .. } => Strategy::FullMatrix,
            CostTable::TwoRow { .. } => Strategy::TwoRow,
        }
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Source accumulated by all extensions not yet rolled back.
    pub fn source(&self) -> &[char] {
        &self.source
    }

    /// Whether any extension (even an empty one) has happened since creation or [`reset`](Self::reset).
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Append `delta` to the source.
    pub fn extend(&mut self, delta: &str) {
        let delta: Vec<char> = delta.chars().collect();
        self.extend_chars(&delta);
    }

    /// Append already decoded characters to the source.
    ///
    /// An empty delta only marks the state as extended.
    pub fn extend_chars(&mut self, delta: &[char]) {
        self.extended = true;
        if delta.is_empty() {
            return;
        }

        let start = self.source.len();
        self.source.extend_from_slice(delta);

        match &mut self.table {
            CostTable::Matrix { cells } => {
                let width = self.target.len() + 1;
                for (offset, &ch) in delta.iter().enumerate() {
                    let base = cells.len();
                    cells.resize(base + width, 0);
                    let (filled, fresh) = cells.split_at_mut(base);
                    fill_row(&filled[base - width..], fresh, start + offset + 1, ch, &self.target);
                }
            }
            CostTable::TwoRow { prev, curr } => {
                recompute_rows(prev, curr, &self.source, &self.target);
            }
        }
    }

    /// Remove the last `n` characters of the source.
    ///
    /// Afterwards [`distance`](Self::distance) reports exactly what it did
    /// right after the extension that brought the source to its new length.
    pub fn rollback_by(&mut self, n: usize) -> Result<(), StateError> {
        if !self.extended {
            return Err(StateError::EmptyState);
        }
        if n > self.source.len() {
            return Err(StateError::OutOfRangeRollback {
                requested: n,
                available: self.source.len(),
            });
        }
        if n == 0 {
            return Ok(());
        }

        let len = self.source.len() - n;
        self.source.truncate(len);

        match &mut self.table {
            CostTable::Matrix { cells } => {
                cells.truncate((len + 1) * (self.target.len() + 1));
            }
            CostTable::TwoRow { prev, curr } => {
                recompute_rows(prev, curr, &self.source, &self.target);
            }
        }
        Ok(())
    }

    /// Current distance between source and target, O(1).
    ///
    /// Returns [`UNSET_DISTANCE`] until the first extension.
    pub fn distance(&self) -> usize {
        if !self.extended {
            return UNSET_DISTANCE;
        }
        self.last_row()[self.target.len()]
    }

    /// Like [`distance`](Self::distance) but reports the unset state as an error.
    pub fn try_distance(&self) -> Result<usize, StateError> {
        if !self.extended {
            return Err(StateError::EmptyState);
        }
        Ok(self.distance())
    }

    /// Minimum of the last computed row.
    ///
    /// No extension of the current source can end up closer to the target
    /// than this, since every cell of the next row is at least the minimum
    /// of the row before it.
    pub fn row_minimum(&self) -> usize {
        self.last_row().iter().copied().min().unwrap_or(0)
    }

    /// Back to the freshly created state, keeping allocations.
    pub fn reset(&mut self) {
        self.source.clear();
        self.extended = false;
        match &mut self.table {
            CostTable::Matrix { cells } => cells.truncate(self.target.len() + 1),
            CostTable::TwoRow { prev, curr } => {
                recompute_rows(prev, curr, &self.source, &self.target);
            }
        }
    }

    fn last_row(&self) -> &[usize] {
        match &self.table {
            CostTable::Matrix { cells } => &cells[cells.len() - (self.target.len() + 1)..],
            CostTable::TwoRow { curr, .. } => curr.as_slice(),
        }
    }
}

fn recompute_rows(prev: &mut Vec<usize>, curr: &mut Vec<usize>, source: &[char], target: &[char]) {
    curr.clear();
    curr.extend(0..=target.len());
    prev.resize(target.len() + 1, 0);

    for (i, &ch) in source.iter().enumerate() {
        std::mem::swap(prev, curr);
        fill_row(&prev[..], &mut curr[..], i + 1, ch, target);
    }
}
