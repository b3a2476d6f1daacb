// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sources of decision bits.
//!
//! The pipeline accepts any bit source. [`SeededBits`] gives reproducible
//! uniform bits from a ChaCha20 stream; [`FixedBits`] replays a given
//! pattern, which is handy in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Anything that can produce decision bits on demand.
pub trait BitSource {
    /// Overwrite every entry of `bits`.
    fn fill(&mut self, bits: &mut [bool]);
}

/// Uniform random bits from a seeded ChaCha20 generator.
#[derive(Debug, Clone)]
pub struct SeededBits {
    rng: ChaCha20Rng,
}

impl SeededBits {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl BitSource for SeededBits {
    fn fill(&mut self, bits: &mut [bool]) {
        for bit in bits.iter_mut() {
            *bit = self.rng.gen();
        }
    }
}

/// Replays a fixed pattern, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedBits {
    pattern: Vec<bool>,
    next: usize,
}

impl FixedBits {
    /// # Panics
    ///
    /// Panics if `pattern` is empty.
    pub fn new(pattern: Vec<bool>) -> Self {
        assert!(!pattern.is_empty(), "FixedBits needs a non-empty pattern");
        Self { pattern, next: 0 }
    }
}

impl BitSource for FixedBits {
    fn fill(&mut self, bits: &mut [bool]) {
        for bit in bits.iter_mut() {
            *bit = self.pattern[self.next];
            self.next = (self.next + 1) % self.pattern.len();
        }
    }
}
