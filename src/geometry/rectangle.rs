// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axis-aligned integer rectangles.

use crate::errors::{GenerationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle with integer corners.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. Zero-width or zero-height
/// rectangles are allowed. Fields are private so that every rectangle,
/// deserialized ones included, passes through the interval check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    x1: i64,
    x2: i64,
    y1: i64,
    y2: i64,
}

/// Unvalidated wire form of [`Rectangle`].
#[derive(Deserialize)]
struct RawRectangle {
    x1: i64,
    x2: i64,
    y1: i64,
    y2: i64,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = GenerationError;

    fn try_from(raw: RawRectangle) -> Result<Self> {
        Self::try_new((raw.x1, raw.x2), (raw.y1, raw.y2))
    }
}

impl Rectangle {
    /// Create a rectangle from its horizontal and vertical extents.
    ///
    /// # Panics
    ///
    /// Panics if either interval is reversed.
    pub fn new((x1, x2): (i64, i64), (y1, y2): (i64, i64)) -> Self {
        assert!(x1 <= x2, "Reversed x interval: ({}, {})", x1, x2);
        assert!(y1 <= y2, "Reversed y interval: ({}, {})", y1, y2);
        Self { x1, x2, y1, y2 }
    }

    /// Fallible variant of [`Rectangle::new`] for extents from outside
    /// the crate.
    pub fn try_new((x1, x2): (i64, i64), (y1, y2): (i64, i64)) -> Result<Self> {
        for (low, high) in [(x1, x2), (y1, y2)] {
            if low > high {
                return Err(GenerationError::ReversedInterval { low, high });
            }
        }
        Ok(Self { x1, x2, y1, y2 })
    }

    pub fn x1(&self) -> i64 {
        self.x1
    }

    pub fn x2(&self) -> i64 {
        self.x2
    }

    /// Lower edge.
    pub fn y1(&self) -> i64 {
        self.y1
    }

    /// Upper edge.
    pub fn y2(&self) -> i64 {
        self.y2
    }

    pub fn x_interval(&self) -> (i64, i64) {
        (self.x1, self.x2)
    }

    pub fn y_interval(&self) -> (i64, i64) {
        (self.y1, self.y2)
    }

    pub fn width(&self) -> i64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i64 {
        self.y2 - self.y1
    }

    /// Same rectangle with a new vertical extent.
    pub fn with_y(&self, y1: i64, y2: i64) -> Self {
        Self::new(self.x_interval(), (y1, y2))
    }

    /// Closed containment of a point given in doubled coordinates.
    ///
    /// Cell centers sit on half-integers, so callers pass `2x` and `2y`
    /// to stay in integer arithmetic.
    pub fn contains_doubled(&self, px: i64, py: i64) -> bool {
        2 * self.x1 <= px && px <= 2 * self.x2 && 2 * self.y1 <= py && py <= 2 * self.y2
    }
}

impl fmt::Display for Rectangle {
    /// Format as `x=(x1,x2) y=(y1,y2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=({},{}) y=({},{})",
            self.x1, self.x2, self.y1, self.y2
        )
    }
}
