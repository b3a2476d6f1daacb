// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batcher's odd-even merge network for arbitrary even widths.
//!
//! # Algorithm
//!
//! For p = 1, 2, 4, ... while p < width:
//!   For k = p, p/2, ..., 1:
//!     For j = k mod p, k mod p + 2k, ... while j + k < width:
//!       For i = 0 ..= min(k - 1, width - j - k - 1):
//!         Emit (i + j, i + j + k) if both lie in the same block of size 2p
//!
//! The emission order is part of the contract: decision bit `i` of a
//! decode always drives comparator `i`. The block filter is what makes the
//! result a sorting network; dropping it yields pairs that cross merge
//! boundaries.

use crate::errors::{GenerationError, Result};
use crate::network::{Comparator, ComparatorNetwork};
use tracing::debug;

/// Build the odd-even merge network for `width` positions.
///
/// # Panics
///
/// Panics if `width` is odd or below 2. Use [`try_batcher_odd_even`] for
/// widths that come from outside the crate.
pub fn batcher_odd_even(width: usize) -> ComparatorNetwork {
    assert!(
        width >= 2 && width % 2 == 0,
        "Network width must be even and at least 2: {}",
        width
    );

    let mut comparators = Vec::new();
    let mut p = 1;
    while p < width {
        let mut k = p;
        while k > 0 {
            let mut j = k % p;
            while j + k < width {
                let span = (k - 1).min(width - j - k - 1);
                for i in 0..=span {
                    let lo = i + j;
                    let hi = lo + k;
                    if lo / (2 * p) == hi / (2 * p) {
                        comparators.push(Comparator::new(lo, hi));
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }

    debug!(width, comparators = comparators.len(), "built odd-even merge network");
    ComparatorNetwork::new(width, comparators)
}

/// Fallible variant of [`batcher_odd_even`].
pub fn try_batcher_odd_even(width: usize) -> Result<ComparatorNetwork> {
    if width < 2 || width % 2 != 0 {
        return Err(GenerationError::InvalidWidth { width });
    }
    Ok(batcher_odd_even(width))
}
