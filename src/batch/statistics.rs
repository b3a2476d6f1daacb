// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch statistics
//!
//! Counters accumulated over an evaluated batch.

use crate::batch::Evaluated;
use crate::conflicts::ConflictOutcome;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, AsRefStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    Samples,
    InfeasibleSamples,
    ConflictPairs,
    ScoredSamples,
    GapSamples,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStatistics {
    stats: [u64; Counters::COUNT],
}

impl BatchStatistics {
    pub fn new() -> Self {
        BatchStatistics::default()
    }

    /// Fold one evaluated sample into the counters.
    pub fn record(&mut self, item: &Evaluated) {
        self.add(Counters::Samples, 1);
        match &item.outcome {
            ConflictOutcome::Infeasible { .. } => self.add(Counters::InfeasibleSamples, 1),
            ConflictOutcome::Conflicts(set) => self.add(Counters::ConflictPairs, set.len() as u64),
        }
        if let Some(score) = item.score {
            self.add(Counters::ScoredSamples, 1);
            // LP above ILP means the relaxation has a gap.
            if score.ratio > 1.0 + 1e-9 {
                self.add(Counters::GapSamples, 1);
            }
        }
    }

    fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for BatchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", counter.as_ref(), self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::{Cell, ConflictSet};
    use crate::context::GeneratorContext;
    use crate::bits::DecisionBits;
    use crate::solver::Score;

    fn evaluated(outcome: ConflictOutcome, score: Option<Score>) -> Evaluated {
        let ctx = GeneratorContext::with_labels(1).unwrap();
        let sample = ctx.sample(&DecisionBits::zeros(ctx.bit_budget())).unwrap();
        Evaluated {
            seed: 0,
            sample,
            outcome,
            score,
        }
    }

    #[test]
    fn test_record() {
        let mut stats = BatchStatistics::new();
        let pairs: ConflictSet = [(0, 1), (1, 2)].into_iter().collect();
        stats.record(&evaluated(
            ConflictOutcome::Conflicts(pairs),
            Some(Score::from_values(2.5, 2.0)),
        ));
        stats.record(&evaluated(
            ConflictOutcome::Infeasible {
                cell: Cell::new(0, 0),
                covering: vec![0, 1, 2],
            },
            Some(Score::zero()),
        ));

        assert_eq!(stats.get(Counters::Samples), 2);
        assert_eq!(stats.get(Counters::InfeasibleSamples), 1);
        assert_eq!(stats.get(Counters::ConflictPairs), 2);
        assert_eq!(stats.get(Counters::ScoredSamples), 2);
        assert_eq!(stats.get(Counters::GapSamples), 1);
    }

    #[test]
    fn test_display() {
        let stats = BatchStatistics::new();
        assert_eq!(
            stats.to_string(),
            "samples=0 infeasible_samples=0 conflict_pairs=0 scored_samples=0 gap_samples=0"
        );
    }
}
