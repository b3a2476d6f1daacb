// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel generation of many independent samples.
//!
//! Each sample is a pure function of the shared context and its own seed,
//! so samples are generated with rayon without any synchronization. Sample
//! `i` is seeded with `base_seed + i`; the output is identical to a
//! sequential loop over the same seeds.

pub mod statistics;

pub use statistics::{BatchStatistics, Counters};

use crate::bits::SeededBits;
use crate::conflicts::{extract_conflicts, ConflictOutcome};
use crate::context::{GeneratorContext, Sample};
use crate::errors::Result;
use crate::solver::{score_outcome, PackingSolver, Score};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Seed used for the sample at `index`.
pub fn seed_for(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Generate `count` samples in parallel.
pub fn generate_batch(ctx: &GeneratorContext, base_seed: u64, count: usize) -> Result<Vec<Sample>> {
    let samples = (0..count)
        .into_par_iter()
        .map(|index| ctx.sample_from_source(&mut SeededBits::new(seed_for(base_seed, index))))
        .collect::<Result<Vec<Sample>>>()?;
    info!(count, labels = ctx.config().labels(), "generated batch");
    Ok(samples)
}

/// A sample together with its conflict model and, optionally, its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluated {
    pub seed: u64,
    pub sample: Sample,
    pub outcome: ConflictOutcome,
    pub score: Option<Score>,
}

/// Generate, extract conflicts from the corrected rectangles, and score
/// each sample when a solver is given.
pub fn evaluate_batch<S>(
    ctx: &GeneratorContext,
    base_seed: u64,
    count: usize,
    solver: Option<&S>,
) -> Result<(Vec<Evaluated>, BatchStatistics)>
where
    S: PackingSolver + Sync,
{
    let evaluated = (0..count)
        .into_par_iter()
        .map(|index| -> Result<Evaluated> {
            let seed = seed_for(base_seed, index);
            let sample = ctx.sample_from_source(&mut SeededBits::new(seed))?;
            let outcome = extract_conflicts(&sample.corrected);
            let score = solver.map(|s| score_outcome(sample.corrected.len(), &outcome, s));
            Ok(Evaluated {
                seed,
                sample,
                outcome,
                score,
            })
        })
        .collect::<Result<Vec<Evaluated>>>()?;

    let mut stats = BatchStatistics::new();
    for item in &evaluated {
        stats.record(item);
    }
    info!(%stats, "evaluated batch");
    Ok((evaluated, stats))
}
