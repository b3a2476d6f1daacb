// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable generation parameters.
//!
//! Everything about a decode that depends on the label count N is derived
//! from a [`GeneratorConfig`] value instead of module-level state, so
//! decodes with different N can share a process.
//!
//! # Bit budget
//!
//! A decision vector is laid out as
//!
//! ```text
//! [ horizontal network: M ][ vertical network: M ][ colors: N * BITS_PER_COLOR ]
//! ```
//!
//! where M is the comparator count for width 2N. The total is therefore
//! `2M + 2N`. (An earlier formulation reserved `4M + 2N`; the extra 2M bits
//! were never read.)

use crate::errors::{GenerationError, Result};
use crate::geometry::{BITS_PER_COLOR, DEFAULT_LABELS, OCCURRENCES_PER_LABEL};
use crate::memo::network_for_width;
use crate::network::ComparatorNetwork;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Label count and everything derived from it.
///
/// Deserialization goes through [`GeneratorConfig::new`], so a stored
/// configuration with zero labels is rejected like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GeneratorConfig {
    labels: usize,
}

/// Unvalidated wire form of [`GeneratorConfig`].
#[derive(Deserialize)]
struct RawConfig {
    labels: usize,
}

impl TryFrom<RawConfig> for GeneratorConfig {
    type Error = GenerationError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.labels)
    }
}

impl GeneratorConfig {
    /// Create a configuration for `labels` rectangles.
    pub fn new(labels: usize) -> Result<Self> {
        if labels == 0 {
            return Err(GenerationError::NoLabels);
        }
        Ok(Self { labels })
    }

    /// Number of labels (N).
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Network width, 2N.
    pub fn width(&self) -> usize {
        OCCURRENCES_PER_LABEL * self.labels
    }

    /// The shared comparator network for this width.
    pub fn network(&self) -> Arc<ComparatorNetwork> {
        network_for_width(self.width())
    }

    /// Comparator count M.
    pub fn comparator_count(&self) -> usize {
        self.network().len()
    }

    /// Number of trailing color bits, N * BITS_PER_COLOR.
    pub fn color_bit_count(&self) -> usize {
        self.labels * BITS_PER_COLOR
    }

    /// Total decision bits consumed by one decode.
    pub fn bit_budget(&self) -> usize {
        2 * self.comparator_count() + self.color_bit_count()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_labels_rejected() {
        assert_eq!(GeneratorConfig::new(0), Err(GenerationError::NoLabels));
    }

    #[test]
    fn test_derived_sizes() {
        let config = GeneratorConfig::new(3).unwrap();
        assert_eq!(config.width(), 6);
        assert_eq!(config.comparator_count(), 12);
        assert_eq!(config.color_bit_count(), 6);
        assert_eq!(config.bit_budget(), 30);
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.labels(), 14);
        assert_eq!(config.comparator_count(), 162);
        assert_eq!(config.bit_budget(), 2 * 162 + 28);
    }

    #[test]
    fn test_deserialize_validates_labels() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"labels":3}"#).unwrap();
        assert_eq!(config, GeneratorConfig::new(3).unwrap());
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"labels":3}"#);

        let err = serde_json::from_str::<GeneratorConfig>(r#"{"labels":0}"#).unwrap_err();
        assert!(err.to_string().contains("at least one label"), "{}", err);
    }

    #[test]
    fn test_single_label() {
        let config = GeneratorConfig::new(1).unwrap();
        assert_eq!(config.width(), 2);
        assert_eq!(config.bit_budget(), 4);
    }
}
