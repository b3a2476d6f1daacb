// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairwise overlap conflicts between rectangles.
//!
//! Overlap is sampled on the unit lattice: every cell lying inside some
//! rectangle is checked against every rectangle's closed bounds. A cell
//! covered by exactly two rectangles contributes that pair as a conflict.
//! A cell covered by three or more cannot be expressed as pairwise
//! constraints, and the whole extraction is reported as infeasible.

pub mod cells;

pub use cells::{candidate_cells, cells_of, Cell};

use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Unordered pairs of rectangle indices that share at least one cell.
///
/// Pairs are stored as `(low, high)` so each pair appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSet {
    pairs: BTreeSet<(usize, usize)>,
}

impl ConflictSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conflict between `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        assert_ne!(a, b, "A rectangle cannot conflict with itself");
        self.pairs.insert((a.min(b), a.max(b)))
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&(a.min(b), a.max(b)))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<(usize, usize)> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}

/// Result of conflict extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConflictOutcome {
    /// No cell is covered more than twice.
    Conflicts(ConflictSet),
    /// `cell` is covered by every rectangle in `covering` (three or more).
    Infeasible { cell: Cell, covering: Vec<usize> },
}

impl ConflictOutcome {
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ConflictOutcome::Infeasible { .. })
    }

    /// The conflict set, or `None` when infeasible.
    pub fn conflicts(&self) -> Option<&ConflictSet> {
        match self {
            ConflictOutcome::Conflicts(set) => Some(set),
            ConflictOutcome::Infeasible { .. } => None,
        }
    }
}

/// Indices of the rectangles whose closed bounds contain `cell`'s center.
pub fn covering(rectangles: &[Rectangle], cell: Cell) -> Vec<usize> {
    rectangles
        .iter()
        .enumerate()
        .filter(|(_, rect)| cell.covered_by(rect))
        .map(|(index, _)| index)
        .collect()
}

/// Extract pairwise conflicts, or report the first over-covered cell.
///
/// Cells are examined in ascending `(x, y)` order, so the reported
/// witness is the lowest over-covered cell.
pub fn extract_conflicts(rectangles: &[Rectangle]) -> ConflictOutcome {
    let cells = candidate_cells(rectangles);
    let mut conflicts = ConflictSet::new();

    for cell in cells.iter().copied() {
        let covering = covering(rectangles, cell);
        match covering.as_slice() {
            [a, b] => {
                conflicts.insert(*a, *b);
            }
            [_, _, _, ..] => {
                debug!(%cell, ?covering, "cell covered by more than two rectangles");
                return ConflictOutcome::Infeasible { cell, covering };
            }
            _ => {}
        }
    }

    debug!(
        cells = cells.len(),
        conflicts = conflicts.len(),
        "extracted conflicts"
    );
    ConflictOutcome::Conflicts(conflicts)
}
