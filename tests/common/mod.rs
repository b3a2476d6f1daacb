// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use rectnet::{Color, Rectangle};
use std::collections::HashMap;

/// Bounding boxes computed by hashing every position under its label.
///
/// Independent of the crate's decoder; used as a reference oracle.
pub fn bounding_boxes_by_label(arr_h: &[usize], arr_v: &[usize]) -> HashMap<usize, Rectangle> {
    fn positions(arr: &[usize]) -> HashMap<usize, Vec<i64>> {
        let mut map: HashMap<usize, Vec<i64>> = HashMap::new();
        for (i, &v) in arr.iter().enumerate() {
            map.entry(v).or_default().push(i as i64);
        }
        map
    }
    let h = positions(arr_h);
    let v = positions(arr_v);
    h.iter()
        .map(|(&label, xs)| {
            let ys = &v[&label];
            let x = (*xs.iter().min().unwrap(), *xs.iter().max().unwrap());
            let y = (*ys.iter().min().unwrap(), *ys.iter().max().unwrap());
            (label, Rectangle::new(x, y))
        })
        .collect()
}

pub fn colors(values: &[u8]) -> Vec<Color> {
    values.iter().map(|&v| Color::new(v)).collect()
}

/// The layout used by the end-to-end examples (N=8).
pub const ARR_H: [usize; 16] = [3, 8, 6, 8, 4, 5, 6, 1, 1, 2, 7, 3, 2, 4, 5, 7];
pub const ARR_V: [usize; 16] = [4, 8, 7, 1, 6, 4, 6, 3, 3, 8, 2, 7, 5, 5, 1, 2];

/// Five rectangles whose conflicts form a 5-cycle with no cell covered
/// three times.
pub fn ring_of_five() -> Vec<Rectangle> {
    vec![
        Rectangle::new((0, 3), (0, 1)),
        Rectangle::new((2, 3), (0, 4)),
        Rectangle::new((0, 3), (3, 4)),
        Rectangle::new((0, 1), (2, 4)),
        Rectangle::new((0, 1), (0, 3)),
    ]
}

/// Small rectangles with colors, for property tests.
pub fn colored_rectangles() -> impl Strategy<Value = (Vec<Rectangle>, Vec<Color>)> {
    prop::collection::vec((0i64..20, 0i64..6, 0i64..20, 0i64..8, 0u8..4), 0..24).prop_map(
        |raw| {
            raw.into_iter()
                .map(|(x1, w, y1, h, c)| (Rectangle::new((x1, x1 + w), (y1, y1 + h)), Color::new(c)))
                .unzip()
        },
    )
}
