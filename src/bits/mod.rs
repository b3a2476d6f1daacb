// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decision bit vectors and their segments.
//!
//! One flat vector drives a whole decode: the first M bits steer the
//! horizontal network, the next M the vertical network, and the final
//! N * BITS_PER_COLOR bits give each label its color.

pub mod source;

pub use source::{BitSource, FixedBits, SeededBits};

use crate::config::GeneratorConfig;
use crate::errors::{GenerationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An owned sequence of binary decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionBits(Vec<bool>);

impl DecisionBits {
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// All-zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Draw `len` bits from a source.
    pub fn from_source(source: &mut impl BitSource, len: usize) -> Self {
        let mut bits = vec![false; len];
        source.fill(&mut bits);
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Split into the three segments a decode of `config` consumes.
    ///
    /// Fails if the length is not exactly `config.bit_budget()`; nothing is
    /// decoded from a short or long vector.
    pub fn segments(&self, config: &GeneratorConfig) -> Result<BitSegments<'_>> {
        let expected = config.bit_budget();
        if self.0.len() != expected {
            return Err(GenerationError::BitLengthMismatch {
                expected,
                actual: self.0.len(),
            });
        }
        let m = config.comparator_count();
        let (horizontal, rest) = self.0.split_at(m);
        let (vertical, colors) = rest.split_at(m);
        Ok(BitSegments {
            horizontal,
            vertical,
            colors,
        })
    }
}

impl From<Vec<bool>> for DecisionBits {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromStr for DecisionBits {
    type Err = GenerationError;

    /// Parse a string of `0` and `1`. Whitespace and `_` are separators.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace() && *c != '_')
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(GenerationError::InvalidBit { position, found }),
            })
            .collect::<Result<Vec<bool>>>()
            .map(Self)
    }
}

impl fmt::Display for DecisionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Borrowed views of the three segments of a decision vector.
#[derive(Debug, Clone, Copy)]
pub struct BitSegments<'a> {
    pub horizontal: &'a [bool],
    pub vertical: &'a [bool],
    pub colors: &'a [bool],
}
