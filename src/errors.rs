// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the generation pipeline.
//!
//! Only caller-supplied input can produce these errors. Broken internal
//! invariants (a label that does not occur exactly twice after decoding)
//! are programming errors and panic instead.

use thiserror::Error;

/// Errors returned when a caller hands the pipeline malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A configuration with zero labels was requested.
    #[error("at least one label is required")]
    NoLabels,

    /// Comparator networks are only defined for even widths of at least 2.
    #[error("network width must be even and at least 2, got {width}")]
    InvalidWidth { width: usize },

    /// The decision vector does not have the length the configuration needs.
    #[error("expected {expected} decision bits, got {actual}")]
    BitLengthMismatch { expected: usize, actual: usize },

    /// A textual bit string contained something other than `0` or `1`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// A color value outside `0..NCOLORS`.
    #[error("color value {value} out of range")]
    InvalidColor { value: u8 },

    /// A rectangle extent with its low end above its high end.
    #[error("reversed interval ({low}, {high})")]
    ReversedInterval { low: i64, high: i64 },

    /// The supplied color list does not have one entry per label.
    #[error("expected {expected} colors, got {actual}")]
    ColorCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GenerationError::BitLengthMismatch {
            expected: 10,
            actual: 7,
        };
        assert_eq!(err.to_string(), "expected 10 decision bits, got 7");

        let err = GenerationError::InvalidBit {
            position: 3,
            found: 'x',
        };
        assert_eq!(err.to_string(), "invalid bit 'x' at position 3");
    }
}
