// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Procedural rectangle layouts decoded from bitstrings.
//!
//! A fixed-length bitstring is turned into N colored, axis-aligned
//! rectangles, post-processed so that same-colored rectangles do not
//! overlap vertically, and finally reduced to the pairwise overlap
//! conflicts that a maximum-independent-set style optimizer consumes.
//!
//! # Architecture
//!
//! ## Shared, immutable data
//!
//! - The Batcher odd-even comparator network for width 2N, built once per
//!   width and shared through [`memo`]
//! - The [`GeneratorConfig`] describing N and the bit budget
//!
//! ## Per-decode values
//!
//! Every decode is a pure function of the configuration and its bits:
//!
//! 1. **Network application**: two bit segments drive the network over
//!    `[1, 1, 2, 2, ..., N, N]`, giving one permutation per axis
//! 2. **Decoding**: each label's two positions in a permutation are its
//!    extent along that axis; two-bit groups give the colors
//! 3. **Height correction**: same-colored rectangles are clipped so that
//!    each ends below the next one's lower edge
//! 4. **Conflict extraction**: lattice cells covered by exactly two
//!    rectangles yield conflict pairs; triple coverage is infeasible
//!
//! The optimizer itself is external; [`solver`] defines the model it
//! must accept and ships a microlp-backed implementation.
//!
//! # Parallelization
//!
//! Decodes share nothing mutable. [`batch`] generates many samples with
//! rayon, one seed per sample.

pub mod batch;
pub mod bits;
pub mod config;
pub mod conflicts;
pub mod context;
pub mod correction;
pub mod decode;
pub mod errors;
pub mod geometry;
pub mod memo;
pub mod network;
pub mod report;
pub mod solver;

// Re-export commonly used types
pub use bits::{BitSource, DecisionBits, SeededBits};
pub use config::GeneratorConfig;
pub use conflicts::{extract_conflicts, ConflictOutcome, ConflictSet};
pub use context::{GeneratorContext, Sample};
pub use correction::correct_heights;
pub use errors::{GenerationError, Result};
pub use geometry::{Color, Label, Rectangle};
pub use network::{batcher_odd_even, ComparatorNetwork};
pub use solver::{score, MicroLpSolver, PackingSolver, Score};
