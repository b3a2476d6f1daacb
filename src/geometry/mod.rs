// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for decoded layouts.
//!
//! - Label: identifier of one rectangle (1..=N)
//! - Color: one of NCOLORS rectangle colors
//! - Rectangle: integer axis-aligned box

pub mod color;
pub mod constants;
pub mod rectangle;

pub use color::Color;
pub use constants::*;
pub use rectangle::Rectangle;

/// Identifier of one rectangle. Labels run from 1 to N inclusive.
pub type Label = usize;
