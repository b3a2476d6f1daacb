// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Comparator networks driven by external decision bits.
//!
//! A network is an ordered list of position pairs. Unlike a sorting run,
//! whether a pair is swapped is decided by a bit supplied by the caller,
//! never by the values being compared. Because the construction in
//! [`batcher`] is a sorting network, every permutation of the input is
//! reachable for some choice of bits.

pub mod batcher;

pub use batcher::batcher_odd_even;

use crate::errors::{GenerationError, Result};

/// A compare-swap between two positions, `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparator {
    pub lo: usize,
    pub hi: usize,
}

impl Comparator {
    /// # Panics
    ///
    /// Panics unless `lo < hi`.
    pub fn new(lo: usize, hi: usize) -> Self {
        assert!(lo < hi, "Comparator positions must be ordered: ({}, {})", lo, hi);
        Self { lo, hi }
    }
}

/// An ordered sequence of comparators over `width` positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparatorNetwork {
    width: usize,
    comparators: Vec<Comparator>,
}

impl ComparatorNetwork {
    /// Wrap an explicit comparator list.
    ///
    /// # Panics
    ///
    /// Panics if a comparator reaches outside `0..width`.
    pub fn new(width: usize, comparators: Vec<Comparator>) -> Self {
        for c in &comparators {
            assert!(
                c.hi < width,
                "Comparator ({}, {}) outside network of width {}",
                c.lo,
                c.hi,
                width
            );
        }
        Self { width, comparators }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of comparators (M).
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    /// Apply the network to a copy of `input`.
    ///
    /// Comparator `i` swaps its two positions when `bits[i]` is set.
    /// Comparators run strictly in network order because later pairs may
    /// touch positions moved by earlier ones.
    pub fn apply<T: Copy>(&self, input: &[T], bits: &[bool]) -> Result<Vec<T>> {
        if bits.len() != self.comparators.len() {
            return Err(GenerationError::BitLengthMismatch {
                expected: self.comparators.len(),
                actual: bits.len(),
            });
        }
        assert_eq!(
            input.len(),
            self.width,
            "Input length does not match network width"
        );

        let mut out = input.to_vec();
        for (c, &swap) in self.comparators.iter().zip(bits) {
            if swap {
                out.swap(c.lo, c.hi);
            }
        }
        Ok(out)
    }

    /// Run the network as an ordinary sorter and report which comparators
    /// fired.
    ///
    /// Sorts `values` in place. The returned bits, applied to the sorted
    /// output in reverse order, rebuild the original arrangement.
    pub fn sort_recording<T: Ord>(&self, values: &mut [T]) -> Vec<bool> {
        assert_eq!(
            values.len(),
            self.width,
            "Input length does not match network width"
        );
        self.comparators
            .iter()
            .map(|c| {
                let swap = values[c.lo] > values[c.hi];
                if swap {
                    values.swap(c.lo, c.hi);
                }
                swap
            })
            .collect()
    }
}
