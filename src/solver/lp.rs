// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing solver backed by `good_lp` and the pure-Rust microlp engine.

use crate::solver::{Formulation, PackingModel, PackingSolver};
use good_lp::{variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use tracing::{debug, warn};

/// Solves packing models with microlp through `good_lp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl PackingSolver for MicroLpSolver {
    fn optimum(&self, model: &PackingModel, formulation: Formulation) -> Option<f64> {
        if model.variables == 0 {
            return Some(0.0);
        }

        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = (0..model.variables)
            .map(|_| match formulation {
                Formulation::Relaxed => vars.add(variable().min(0).max(1)),
                Formulation::Integer => vars.add(variable().binary()),
            })
            .collect();

        let mut objective: Expression = 0.into();
        for x in &xs {
            objective += x;
        }

        let mut problem = vars
            .maximise(objective)
            .using(good_lp::solvers::microlp::microlp);
        for &(a, b) in &model.conflicts {
            problem.add_constraint((xs[a] + xs[b]).leq(1));
        }

        match problem.solve() {
            Ok(solution) => {
                let value: f64 = xs.iter().map(|&x| solution.value(x)).sum();
                debug!(?formulation, value, "packing model solved");
                Some(value)
            }
            Err(e) => {
                warn!(?formulation, error = %e, "packing model not solved to optimality");
                None
            }
        }
    }
}
