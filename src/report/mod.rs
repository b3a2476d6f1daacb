// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text reports of decoded samples.
//!
//! Each rectangle is listed with its bottom-left and top-right corners
//! and its color value:
//!
//! ```text
//! Idx  br(x,y)   tl(x,y)   Color
//!   0  ( 7, 3)  ( 8,14)    0
//! ```

use crate::conflicts::ConflictOutcome;
use crate::context::Sample;
use crate::geometry::{Color, Rectangle};
use crate::solver::Score;

/// Column header shared by every rectangle table.
pub const TABLE_HEADER: &str = "Idx  br(x,y)   tl(x,y)   Color";

/// One row per rectangle, under [`TABLE_HEADER`].
///
/// # Panics
///
/// Panics if `rectangles` and `colors` differ in length.
pub fn rectangle_table(rectangles: &[Rectangle], colors: &[Color]) -> String {
    assert_eq!(
        rectangles.len(),
        colors.len(),
        "Every rectangle needs exactly one color"
    );
    let mut out = format!("{}\n", TABLE_HEADER);
    for (index, (rect, color)) in rectangles.iter().zip(colors).enumerate() {
        out.push_str(&format!(
            "{:3}  ({:2},{:2})  ({:2},{:2})    {}\n",
            index,
            rect.x1(),
            rect.y1(),
            rect.x2(),
            rect.y2(),
            color.value()
        ));
    }
    out
}

/// Before/after tables for one sample.
pub fn sample_report(sample: &Sample) -> String {
    format!(
        "=== BEFORE Height Correction ===\n{}\n=== AFTER Height Correction ===\n{}",
        rectangle_table(&sample.original, &sample.colors),
        rectangle_table(&sample.corrected, &sample.colors)
    )
}

/// One line describing a conflict outcome, plus the score if known.
pub fn outcome_line(outcome: &ConflictOutcome, score: Option<&Score>) -> String {
    let line = match outcome {
        ConflictOutcome::Conflicts(set) => {
            let pairs: Vec<String> = set.iter().map(|(a, b)| format!("{}-{}", a, b)).collect();
            format!("conflicts [{}]", pairs.join(" "))
        }
        ConflictOutcome::Infeasible { cell, covering } => {
            format!("infeasible: cell {} covered by {:?}", cell, covering)
        }
    };
    match score {
        Some(score) => format!("{}; {}", line, score),
        None => line,
    }
}
