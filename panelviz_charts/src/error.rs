// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart errors.

extern crate alloc;

use alloc::string::String;

use panelviz_transforms::ValidationError;

/// A configuration value the engine cannot work with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A color option is not a six-digit hex color.
    #[error("invalid hex color `{0}`")]
    InvalidColor(String),
    /// A color option was given as an empty list.
    #[error("color option has no value")]
    EmptyColor,
    /// The gauge range has its bounds the wrong way round.
    #[error("gauge minimum {min} is greater than gauge maximum {max}")]
    InvertedGaugeRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// A numeric option that must be finite is not.
    #[error("option `{0}` must be a finite number")]
    NonFinite(&'static str),
}

/// The single failure channel of a render pass.
///
/// `Display` yields the message to show in place of the chart.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The query result does not fit the chart.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
