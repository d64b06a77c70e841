// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration snapshot for building and restoring a [`SpanSlider`](crate::SpanSlider).

use core::fmt;

use crate::types::{Handle, MovementPolicy};

/// Everything needed to recreate a slider outside of an interaction.
///
/// The snapshot is plain data; with the `serde` feature it can be persisted
/// and restored with [`SpanSlider::from_config`](crate::SpanSlider::from_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanSliderConfig {
    /// Lowest admissible value.
    pub minimum: i32,
    /// Highest admissible value.
    pub maximum: i32,
    /// Committed lower value; clamped into the range when applied.
    pub lower: i32,
    /// Committed upper value; clamped into the range when applied.
    pub upper: i32,
    /// Amount added or removed by a single-step action.
    pub single_step: i32,
    /// Amount added or removed by a page-step action.
    pub page_step: i32,
    /// Whether dragging commits values continuously.
    pub tracking: bool,
    /// How handles constrain each other.
    pub movement: MovementPolicy,
    /// Handle targeted by actions on the main control.
    pub main_control: Handle,
}

impl Default for SpanSliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 99,
            lower: 0,
            upper: 0,
            single_step: 1,
            page_step: 10,
            tracking: true,
            movement: MovementPolicy::Free,
            main_control: Handle::Lower,
        }
    }
}

impl SpanSliderConfig {
    /// Checks the fields that cannot be repaired by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum > self.maximum {
            return Err(ConfigError::InvertedRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        for step in [self.single_step, self.page_step] {
            if step < 0 {
                return Err(ConfigError::NegativeStep { step });
            }
        }
        Ok(())
    }
}

/// Error returned when a [`SpanSliderConfig`] cannot be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `minimum` is greater than `maximum`.
    InvertedRange {
        /// The configured minimum.
        minimum: i32,
        /// The configured maximum.
        maximum: i32,
    },
    /// A step size is negative.
    NegativeStep {
        /// The offending step.
        step: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { minimum, maximum } => {
                write!(f, "slider range is inverted: minimum {minimum} > maximum {maximum}")
            }
            Self::NegativeStep { step } => write!(f, "slider step {step} is negative"),
        }
    }
}

impl core::error::Error for ConfigError {}
