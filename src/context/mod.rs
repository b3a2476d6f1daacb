// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation context combining configuration and shared network.
//!
//! A [`GeneratorContext`] pairs an immutable [`GeneratorConfig`] with the
//! memoized comparator network for its width. It holds no mutable state,
//! so one context can drive any number of decodes, including from
//! several threads at once.
//!
//! # Pipeline
//!
//! ```text
//! bits ─┬─ horizontal ── apply ── arr_h ─┐
//!       ├─ vertical ──── apply ── arr_v ─┼─ decode ── original ── correct ── corrected
//!       └─ colors ───────────────────────┘
//! ```

use crate::bits::{BitSource, DecisionBits};
use crate::config::GeneratorConfig;
use crate::correction::correct_heights;
use crate::decode::{base_array, decode, decode_rectangles};
use crate::errors::{GenerationError, Result};
use crate::geometry::{Color, Label, Rectangle};
use crate::network::ComparatorNetwork;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

/// One decoded layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Horizontal permutation of the base array.
    pub arr_h: Vec<Label>,
    /// Vertical permutation of the base array.
    pub arr_v: Vec<Label>,
    /// Color of each label, indexed by `label - 1`.
    pub colors: Vec<Color>,
    /// Bounding rectangles straight from the permutations.
    pub original: Vec<Rectangle>,
    /// Rectangles after height correction.
    pub corrected: Vec<Rectangle>,
}

impl Sample {
    pub fn labels(&self) -> usize {
        self.colors.len()
    }
}

/// Configuration plus the network it needs.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    config: GeneratorConfig,
    network: Arc<ComparatorNetwork>,
    base: Vec<Label>,
}

impl GeneratorContext {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            network: config.network(),
            base: base_array(config.labels()),
        }
    }

    /// Shorthand for a context with `labels` labels.
    pub fn with_labels(labels: usize) -> Result<Self> {
        Ok(Self::new(GeneratorConfig::new(labels)?))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn network(&self) -> &ComparatorNetwork {
        &self.network
    }

    pub fn base(&self) -> &[Label] {
        &self.base
    }

    /// Decision bits one decode consumes.
    pub fn bit_budget(&self) -> usize {
        self.config.bit_budget()
    }

    /// Run the full pipeline on one decision vector.
    ///
    /// Fails without decoding anything if `bits` has the wrong length.
    pub fn sample(&self, bits: &DecisionBits) -> Result<Sample> {
        let segments = bits.segments(&self.config)?;
        let arr_h = self.network.apply(&self.base, segments.horizontal)?;
        let arr_v = self.network.apply(&self.base, segments.vertical)?;
        let decoded = decode(&arr_h, &arr_v, segments.colors, self.config.labels());
        let corrected = correct_heights(&decoded.rectangles, &decoded.colors);
        trace!(labels = self.config.labels(), "decoded sample");
        Ok(Sample {
            arr_h,
            arr_v,
            colors: decoded.colors,
            original: decoded.rectangles,
            corrected,
        })
    }

    /// Draw exactly [`bit_budget`](Self::bit_budget) bits and decode them.
    pub fn sample_from_source(&self, source: &mut impl BitSource) -> Result<Sample> {
        let bits = DecisionBits::from_source(source, self.bit_budget());
        self.sample(&bits)
    }

    /// Decode externally supplied permutations with explicit colors.
    ///
    /// The arrays must be permutations of the base array; anything else is
    /// a caller bug and panics.
    pub fn sample_from_arrays(
        &self,
        arr_h: Vec<Label>,
        arr_v: Vec<Label>,
        colors: Vec<Color>,
    ) -> Result<Sample> {
        if colors.len() != self.config.labels() {
            return Err(GenerationError::ColorCountMismatch {
                expected: self.config.labels(),
                actual: colors.len(),
            });
        }
        let original = decode_rectangles(&arr_h, &arr_v, self.config.labels());
        let corrected = correct_heights(&original, &colors);
        Ok(Sample {
            arr_h,
            arr_v,
            colors,
            original,
            corrected,
        })
    }
}
