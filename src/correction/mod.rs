// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Height correction for same-colored rectangles.
//!
//! Rectangles of one color are swept bottom to top by their lower edge.
//! Each rectangle's top is pulled down so that it ends strictly below the
//! lower edge of the next rectangle of the same color:
//!
//! ```text
//! limit = max(1, next.y1 - y1)
//! y2'   = y1 + min(y2 - y1, limit - 1)
//! ```
//!
//! Only the immediate successor in sweep order is consulted. Since later
//! rectangles of the same color start no lower than that successor, a
//! clipped top also stays below them. The one exception is a tie: a
//! rectangle whose successor shares its lower edge collapses to zero
//! height at that edge and may coincide with it.

use crate::geometry::{Color, Rectangle};
use std::collections::BTreeMap;
use tracing::trace;

/// Rewrite vertical extents so that adjacent same-colored rectangles do
/// not overlap. Horizontal extents and lower edges are unchanged.
///
/// # Panics
///
/// Panics if `rectangles` and `colors` differ in length.
pub fn correct_heights(rectangles: &[Rectangle], colors: &[Color]) -> Vec<Rectangle> {
    assert_eq!(
        rectangles.len(),
        colors.len(),
        "Every rectangle needs exactly one color"
    );

    let mut corrected = rectangles.to_vec();
    for (color, group) in sweep_order(rectangles, colors) {
        for (rank, &index) in group.iter().enumerate() {
            let current = corrected[index];
            let next_bottom = group.get(rank + 1).map(|&next| rectangles[next].y1());
            let limit = match next_bottom {
                Some(bottom) => (bottom - current.y1()).max(1),
                None => i64::MAX,
            };
            let top = current.y1() + current.height().min(limit - 1);
            if top != current.y2() {
                trace!(index, %color, from = current.y2(), to = top, "clipped rectangle top");
            }
            corrected[index] = current.with_y(current.y1(), top);
        }
    }
    corrected
}

/// Rectangle indices grouped by color, each group ordered by lower edge
/// with ties broken by index.
pub fn sweep_order(rectangles: &[Rectangle], colors: &[Color]) -> BTreeMap<Color, Vec<usize>> {
    let mut groups: BTreeMap<Color, Vec<usize>> = BTreeMap::new();
    for (index, &color) in colors.iter().enumerate() {
        groups.entry(color).or_default().push(index);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|&index| (rectangles[index].y1(), index));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(y1: i64, y2: i64) -> Rectangle {
        Rectangle::new((0, 1), (y1, y2))
    }

    #[test]
    fn test_different_colors_untouched() {
        let rects = vec![rect(0, 10), rect(2, 5)];
        let colors = vec![Color::new(0), Color::new(1)];
        assert_eq!(correct_heights(&rects, &colors), rects);
    }

    #[test]
    fn test_lower_rectangle_clipped() {
        let rects = vec![rect(0, 10), rect(4, 6)];
        let colors = vec![Color::new(2); 2];
        let out = correct_heights(&rects, &colors);
        assert_eq!(out[0], rect(0, 3));
        assert_eq!(out[1], rect(4, 6));
    }

    #[test]
    fn test_order_independent_of_input_position() {
        let rects = vec![rect(4, 6), rect(0, 10)];
        let colors = vec![Color::new(0); 2];
        let out = correct_heights(&rects, &colors);
        assert_eq!(out[0], rect(4, 6));
        assert_eq!(out[1], rect(0, 3));
    }

    #[test]
    fn test_shared_bottom_collapses() {
        let rects = vec![rect(3, 8), rect(3, 5)];
        let colors = vec![Color::new(1); 2];
        let out = correct_heights(&rects, &colors);
        assert_eq!(out[0], rect(3, 3));
        assert_eq!(out[1], rect(3, 5));
    }

    #[test]
    fn test_short_rectangle_not_stretched() {
        let rects = vec![rect(0, 1), rect(9, 12)];
        let colors = vec![Color::new(3); 2];
        assert_eq!(correct_heights(&rects, &colors), rects);
    }

    #[test]
    fn test_clipped_by_successor_bottom() {
        // The tall bottom rectangle is limited by the middle one.
        let rects = vec![rect(0, 20), rect(5, 6), rect(8, 9)];
        let colors = vec![Color::new(0); 3];
        let out = correct_heights(&rects, &colors);
        assert_eq!(out[0], rect(0, 4));
        assert_eq!(out[1], rect(5, 6));
        assert_eq!(out[2], rect(8, 9));
    }

    #[test]
    fn test_sweep_order_ties_by_index() {
        let rects = vec![rect(2, 3), rect(1, 4), rect(2, 9)];
        let colors = vec![Color::new(0); 3];
        let order = sweep_order(&rects, &colors);
        assert_eq!(order[&Color::new(0)], vec![1, 0, 2]);
    }

    #[test]
    fn test_idempotent() {
        let rects = vec![rect(0, 9), rect(3, 12), rect(3, 4), rect(7, 8)];
        let colors = vec![Color::new(0), Color::new(0), Color::new(1), Color::new(0)];
        let once = correct_heights(&rects, &colors);
        assert_eq!(correct_heights(&once, &colors), once);
    }
}
