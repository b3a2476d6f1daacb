// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for rectangle labels.
//!
//! Every rectangle carries one of [`NCOLORS`] colors, read straight from a
//! two-bit group of the decision vector. Same-colored rectangles are the
//! ones the height corrector keeps apart.

use crate::errors::GenerationError;
use crate::geometry::constants::{BITS_PER_COLOR, NCOLORS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display names, indexed by color value.
const NAMES: [&str; NCOLORS] = ["red", "green", "blue", "orange"];

/// A color in the range 0..NCOLORS.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Color(u8);

impl Color {
    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NCOLORS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < NCOLORS, "Color out of range: {}", value);
        Self(value)
    }

    /// Try to create a new color, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NCOLORS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Build a color from a `BITS_PER_COLOR`-wide group, high bit first.
    ///
    /// # Panics
    ///
    /// Panics if `bits.len() != BITS_PER_COLOR`.
    pub fn from_bits(bits: &[bool]) -> Self {
        assert_eq!(
            bits.len(),
            BITS_PER_COLOR,
            "A color is encoded by exactly {} bits",
            BITS_PER_COLOR
        );
        let value = bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
        Self::new(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Color {
    type Error = GenerationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(GenerationError::InvalidColor { value })
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAMES[self.as_usize()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let c = Color::new(0);
        assert_eq!(c.value(), 0);

        let c = Color::new(3);
        assert_eq!(c.value(), 3);
    }

    #[test]
    #[should_panic(expected = "Color out of range")]
    fn test_color_out_of_range() {
        Color::new(4);
    }

    #[test]
    fn test_color_try_new() {
        assert!(Color::try_new(0).is_some());
        assert!(Color::try_new(3).is_some());
        assert!(Color::try_new(4).is_none());
    }

    #[test]
    fn test_from_bits_high_bit_first() {
        assert_eq!(Color::from_bits(&[false, false]).value(), 0);
        assert_eq!(Color::from_bits(&[false, true]).value(), 1);
        assert_eq!(Color::from_bits(&[true, false]).value(), 2);
        assert_eq!(Color::from_bits(&[true, true]).value(), 3);
    }

    #[test]
    fn test_serde_as_plain_value() {
        assert_eq!(serde_json::to_string(&Color::new(2)).unwrap(), "2");
        let c: Color = serde_json::from_str("3").unwrap();
        assert_eq!(c, Color::new(3));
        assert!(serde_json::from_str::<Color>("4").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(0).to_string(), "red");
        assert_eq!(Color::new(3).to_string(), "orange");
    }
}
