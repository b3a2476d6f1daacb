// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximum disjoint rectangle scoring.
//!
//! The conflict set of a layout defines a packing program: one variable
//! per rectangle, maximize their sum, and at most one of each conflicting
//! pair. This module builds that model, hands it to a [`PackingSolver`]
//! for both the LP relaxation and the integer program, and reports the
//! two optima with their ratio (the integrality gap).
//!
//! An infeasible conflict extraction, or a solver that returns no optimum,
//! contributes zeros rather than an error.

pub mod lp;

pub use lp::MicroLpSolver;

use crate::conflicts::{extract_conflicts, ConflictOutcome, ConflictSet};
use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this ILP value the ratio is reported as 0.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Which variant of the packing program to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formulation {
    /// `x_i` in `[0, 1]`.
    Relaxed,
    /// `x_i` in `{0, 1}`.
    Integer,
}

/// Constraint model for maximum disjoint rectangle selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingModel {
    /// Number of decision variables, one per rectangle.
    pub variables: usize,
    /// One `x_i + x_j <= 1` constraint per pair.
    pub conflicts: Vec<(usize, usize)>,
}

impl PackingModel {
    pub fn new(variables: usize, conflicts: &ConflictSet) -> Self {
        let conflicts: Vec<(usize, usize)> = conflicts.iter().collect();
        for &(a, b) in &conflicts {
            assert!(
                a < variables && b < variables,
                "Conflict ({}, {}) refers to a missing rectangle",
                a,
                b
            );
        }
        Self {
            variables,
            conflicts,
        }
    }
}

/// An external optimizer for packing models.
pub trait PackingSolver {
    /// Optimal objective value, or `None` if no optimum was reached.
    fn optimum(&self, model: &PackingModel, formulation: Formulation) -> Option<f64>;
}

/// LP and ILP optima of a layout and their ratio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub lp: f64,
    pub ilp: f64,
    pub ratio: f64,
}

impl Score {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Combine two optima; the ratio is 0 when `ilp` is (nearly) 0.
    pub fn from_values(lp: f64, ilp: f64) -> Self {
        let ratio = if ilp < RATIO_EPSILON { 0.0 } else { lp / ilp };
        Self { lp, ilp, ratio }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LP: {}, ILP: {}, Ratio: {:.2}", self.lp, self.ilp, self.ratio)
    }
}

/// Solve both formulations of an already extracted conflict outcome.
pub fn score_outcome(
    rectangles: usize,
    outcome: &ConflictOutcome,
    solver: &impl PackingSolver,
) -> Score {
    let Some(conflicts) = outcome.conflicts() else {
        return Score::zero();
    };
    let model = PackingModel::new(rectangles, conflicts);
    let lp = solver.optimum(&model, Formulation::Relaxed).unwrap_or(0.0);
    let ilp = solver.optimum(&model, Formulation::Integer).unwrap_or(0.0);
    Score::from_values(lp, ilp)
}

/// Extract conflicts from `rectangles` and score them.
pub fn score(rectangles: &[Rectangle], solver: &impl PackingSolver) -> Score {
    score_outcome(rectangles.len(), &extract_conflicts(rectangles), solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Returns fixed values and counts calls.
    struct StubSolver {
        relaxed: Option<f64>,
        integer: Option<f64>,
        calls: Cell<usize>,
    }

    impl PackingSolver for StubSolver {
        fn optimum(&self, _model: &PackingModel, formulation: Formulation) -> Option<f64> {
            self.calls.set(self.calls.get() + 1);
            match formulation {
                Formulation::Relaxed => self.relaxed,
                Formulation::Integer => self.integer,
            }
        }
    }

    fn stub(relaxed: Option<f64>, integer: Option<f64>) -> StubSolver {
        StubSolver {
            relaxed,
            integer,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_ratio() {
        let s = Score::from_values(2.5, 2.0);
        assert_eq!(s.ratio, 1.25);
        assert_eq!(Score::from_values(1.0, 0.0).ratio, 0.0);
    }

    #[test]
    fn test_missing_optimum_counts_as_zero() {
        let rects = [Rectangle::new((0, 1), (0, 1))];
        let s = score(&rects, &stub(Some(1.0), None));
        assert_eq!(s, Score::from_values(1.0, 0.0));
    }

    #[test]
    fn test_infeasible_skips_solver() {
        let rects = [Rectangle::new((0, 2), (0, 2)); 3];
        let solver = stub(Some(3.0), Some(3.0));
        assert_eq!(score(&rects, &solver), Score::zero());
        assert_eq!(solver.calls.get(), 0);
    }

    #[test]
    fn test_model_from_conflicts() {
        let set: ConflictSet = [(1, 0), (2, 1)].into_iter().collect();
        let model = PackingModel::new(3, &set);
        assert_eq!(model.conflicts, vec![(0, 1), (1, 2)]);
    }

    #[test]
    #[should_panic(expected = "missing rectangle")]
    fn test_model_rejects_out_of_range() {
        let set: ConflictSet = [(0, 5)].into_iter().collect();
        PackingModel::new(2, &set);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Score::from_values(2.5, 2.0).to_string(),
            "LP: 2.5, ILP: 2, Ratio: 1.25"
        );
    }
}
