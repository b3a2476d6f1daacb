// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rectangle decoding from permuted label arrays.
//!
//! The base array `[1, 1, 2, 2, ..., N, N]` is permuted twice, once per
//! axis. A label's two positions in the horizontal permutation give its
//! x extent and its two positions in the vertical permutation give its
//! y extent. Colors come straight from the color bit segment.

use crate::geometry::{Color, Label, Rectangle, BITS_PER_COLOR, OCCURRENCES_PER_LABEL};

/// Build `[1, 1, 2, 2, ..., labels, labels]`.
pub fn base_array(labels: usize) -> Vec<Label> {
    (1..=labels)
        .flat_map(|label| std::iter::repeat(label).take(OCCURRENCES_PER_LABEL))
        .collect()
}

/// Lowest and highest position holding `label`.
///
/// # Panics
///
/// Panics unless `label` occurs exactly twice. Arrays produced by a
/// comparator network from [`base_array`] always satisfy this.
pub fn label_extent(arr: &[Label], label: Label) -> (i64, i64) {
    let mut positions = arr
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == label)
        .map(|(position, _)| position as i64);
    let (Some(first), Some(second), None) = (positions.next(), positions.next(), positions.next())
    else {
        panic!(
            "Label {} must occur exactly {} times in {:?}",
            label, OCCURRENCES_PER_LABEL, arr
        );
    };
    (first.min(second), first.max(second))
}

/// One bounding rectangle per label, in label order.
///
/// # Panics
///
/// Panics if the arrays differ in length or are not permutations of
/// `base_array(labels)`.
pub fn decode_rectangles(arr_h: &[Label], arr_v: &[Label], labels: usize) -> Vec<Rectangle> {
    assert_eq!(
        arr_h.len(),
        arr_v.len(),
        "Horizontal and vertical arrays differ in length"
    );
    assert_eq!(
        arr_h.len(),
        OCCURRENCES_PER_LABEL * labels,
        "Arrays must hold every label exactly twice"
    );
    (1..=labels)
        .map(|label| Rectangle::new(label_extent(arr_h, label), label_extent(arr_v, label)))
        .collect()
}

/// Read one color per label from consecutive two-bit groups.
///
/// # Panics
///
/// Panics if `bits.len() != labels * BITS_PER_COLOR`.
pub fn decode_colors(bits: &[bool], labels: usize) -> Vec<Color> {
    assert_eq!(
        bits.len(),
        labels * BITS_PER_COLOR,
        "Color segment has the wrong length"
    );
    bits.chunks_exact(BITS_PER_COLOR).map(Color::from_bits).collect()
}

/// Rectangles and colors decoded for one layout, indexed by `label - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub rectangles: Vec<Rectangle>,
    pub colors: Vec<Color>,
}

/// Decode rectangles and colors from two permuted arrays and a color segment.
pub fn decode(arr_h: &[Label], arr_v: &[Label], color_bits: &[bool], labels: usize) -> Decoded {
    Decoded {
        rectangles: decode_rectangles(arr_h, arr_v, labels),
        colors: decode_colors(color_bits, labels),
    }
}
