// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unit lattice cells used to sample rectangle overlap.

use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The unit cell `[x, x+1] x [y, y+1]`, sampled at its center.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Center point `(x + 0.5, y + 0.5)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x as f64 + 0.5, self.y as f64 + 0.5)
    }

    /// Center in doubled integer coordinates, `(2x + 1, 2y + 1)`.
    pub fn doubled_center(&self) -> (i64, i64) {
        (2 * self.x + 1, 2 * self.y + 1)
    }

    /// Whether the closed rectangle contains this cell's center.
    pub fn covered_by(&self, rect: &Rectangle) -> bool {
        let (px, py) = self.doubled_center();
        rect.contains_doubled(px, py)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cx, cy) = self.center();
        write!(f, "({}, {})", cx, cy)
    }
}

/// Cells strictly inside a rectangle: `x1..x2` by `y1..y2`.
pub fn cells_of(rect: &Rectangle) -> impl Iterator<Item = Cell> + '_ {
    (rect.x1()..rect.x2()).flat_map(move |x| (rect.y1()..rect.y2()).map(move |y| Cell::new(x, y)))
}

/// Every cell inside any of the rectangles, deduplicated and ordered.
pub fn candidate_cells(rectangles: &[Rectangle]) -> BTreeSet<Cell> {
    rectangles.iter().flat_map(cells_of).collect()
}
