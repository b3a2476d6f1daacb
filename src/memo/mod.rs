// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data shared by every decode.
//!
//! The comparator network for a given width is a pure function of that
//! width, so it is built once per width and handed out behind an `Arc`.
//! Decodes with different label counts can run in the same process, each
//! getting the network for its own width.

pub mod networks;

pub use networks::{network_for_width, NetworkMemo};
