// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants shared by the decoder and the height corrector.
//!
//! The number of labels is a runtime value (see [`crate::config`]), so
//! only the quantities that never vary between decodes live here.

/// Number of bits that encode one rectangle's color.
pub const BITS_PER_COLOR: usize = 2;

/// Number of distinct colors (2^BITS_PER_COLOR).
pub const NCOLORS: usize = 1 << BITS_PER_COLOR;

/// Each label occupies exactly two slots of the base array.
pub const OCCURRENCES_PER_LABEL: usize = 2;

/// Label count used when nothing else is specified.
///
/// 14 labels give a 28-wide network with 162 comparators.
pub const DEFAULT_LABELS: usize = 14;

/// Colors must fit in the `u8` carried by [`crate::geometry::Color`].
const _: () = assert!(NCOLORS <= u8::MAX as usize, "NCOLORS must fit in a u8");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // Validates compile-time constant
    fn test_ncolors_matches_bits() {
        assert_eq!(NCOLORS, 4);
        assert_eq!(BITS_PER_COLOR, 2);
    }
}
