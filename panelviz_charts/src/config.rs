// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed chart options.
//!
//! Each record deserializes from a host option bag (a JSON object keyed by option name).
//! Missing options take their defaults and unknown options are ignored. Colors arrive as a
//! one-element array of hex strings, or as a bare hex string.
//!
//! Numeric options are read through accessors that clamp them into their documented bounds.
//! `validate` reports the problems clamping cannot repair.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use panelviz_core::Domain;
use peniko::{Brush, Color};
use serde::Deserialize;

use crate::color::hex_to_rgb;
use crate::error::ConfigError;
use crate::log;

/// A color option.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct ConfigColor(pub Color);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    One(String),
    Many(Vec<String>),
}

impl ConfigColor {
    /// Creates a color option from channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Color::from_rgb8(r, g, b))
    }

    /// Parses a `#RRGGBB` hex string.
    pub fn parse(hex: &str) -> Result<Self, ConfigError> {
        let [r, g, b] =
            hex_to_rgb(hex.trim()).ok_or_else(|| ConfigError::InvalidColor(hex.into()))?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Returns the color.
    pub fn color(self) -> Color {
        self.0
    }
}

impl TryFrom<RawColor> for ConfigColor {
    type Error = ConfigError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        match raw {
            RawColor::One(hex) => Self::parse(&hex),
            RawColor::Many(list) => list
                .first()
                .ok_or(ConfigError::EmptyColor)
                .and_then(|hex| Self::parse(hex)),
        }
    }
}

impl From<ConfigColor> for Brush {
    fn from(color: ConfigColor) -> Self {
        Self::Solid(color.0)
    }
}

/// Clamps a numeric option into `[lo, hi]`; non-finite values fall back to `default`.
#[cfg_attr(
    not(feature = "tracing"),
    allow(unused_variables, reason = "`option` is only read by log events")
)]
fn bounded(option: &'static str, value: f64, lo: f64, hi: f64, default: f64) -> f64 {
    if !value.is_finite() {
        log::warn!(option, "non-finite option replaced by its default");
        return default;
    }
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        log::warn!(option, value, clamped, "option clamped into bounds");
    }
    clamped
}

/// Reads a count option, clamped into `lo..=hi` and truncated toward zero.
fn count(option: &'static str, value: f64, lo: u8, hi: u8, default: f64) -> usize {
    let n = bounded(option, value, f64::from(lo), f64::from(hi), default);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to a small non-negative range; the fraction is dropped"
    )]
    {
        n as usize
    }
}

/// Gauge options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Value at the left end of the arc.
    pub gauge_min: f64,
    /// Value at the right end of the arc.
    pub gauge_max: f64,
    /// Width of the arc band.
    pub gauge_thickness: f64,
    /// Background arc color.
    pub gauge_color_background: ConfigColor,
    /// Value arc color.
    pub gauge_color_fill: ConfigColor,
    /// Pointer color.
    pub pointer_color: ConfigColor,
    /// Value label color.
    pub value_label_color: ConfigColor,
    /// Min/max label color.
    pub min_max_label_color: ConfigColor,
    /// Title text.
    pub title_text: String,
    /// Whether to draw the title.
    pub title_display: bool,
    /// Value label font size.
    pub value_label_size: f64,
    /// Decimal places of all gauge labels.
    pub value_format_string: f64,
    /// Whether to draw the min/max labels.
    pub show_min_max_labels: bool,
    /// Min/max label font size.
    pub min_max_label_size: f64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            gauge_min: 0.0,
            gauge_max: 100.0,
            gauge_thickness: 20.0,
            gauge_color_background: ConfigColor::from_rgb8(0xE0, 0xE0, 0xE0),
            gauge_color_fill: ConfigColor::from_rgb8(0x42, 0x85, 0xF4),
            pointer_color: ConfigColor::from_rgb8(0xEA, 0x43, 0x35),
            value_label_color: ConfigColor::from_rgb8(0x33, 0x33, 0x33),
            min_max_label_color: ConfigColor::from_rgb8(0x66, 0x66, 0x66),
            title_text: "KPI Progress".into(),
            title_display: true,
            value_label_size: 36.0,
            value_format_string: 1.0,
            show_min_max_labels: true,
            min_max_label_size: 14.0,
        }
    }
}

impl GaugeConfig {
    /// Largest magnitude accepted for the gauge bounds.
    pub const RANGE_LIMIT: f64 = 1e9;

    /// Checks the gauge range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gauge_min.is_finite() {
            return Err(ConfigError::NonFinite("gauge_min"));
        }
        if !self.gauge_max.is_finite() {
            return Err(ConfigError::NonFinite("gauge_max"));
        }
        if self.gauge_min > self.gauge_max {
            return Err(ConfigError::InvertedGaugeRange {
                min: self.gauge_min,
                max: self.gauge_max,
            });
        }
        Ok(())
    }

    /// The value range, with each bound clamped to `±1e9`.
    pub fn range(&self) -> Domain {
        let limit = Self::RANGE_LIMIT;
        Domain::new(
            bounded("gauge_min", self.gauge_min, -limit, limit, 0.0),
            bounded("gauge_max", self.gauge_max, -limit, limit, 100.0),
        )
    }

    /// Arc band width, in `5..=50`.
    pub fn thickness(&self) -> f64 {
        bounded("gauge_thickness", self.gauge_thickness, 5.0, 50.0, 20.0)
    }

    /// Value label font size, in `10..=72`.
    pub fn value_label_size(&self) -> f64 {
        bounded("value_label_size", self.value_label_size, 10.0, 72.0, 36.0)
    }

    /// Decimal places, in `0..=10`.
    pub fn decimals(&self) -> usize {
        count("value_format_string", self.value_format_string, 0, 10, 1.0)
    }

    /// Min/max label font size, in `8..=30`.
    pub fn min_max_label_size(&self) -> f64 {
        bounded("min_max_label_size", self.min_max_label_size, 8.0, 30.0, 14.0)
    }
}

/// Radar options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Title prefix; the item name follows it.
    pub chart_title: String,
    /// Whether to draw the title.
    pub title_display: bool,
    /// Number of grid rings.
    pub levels: f64,
    /// Fixed value at the outer ring; `None` scales to the data.
    pub max_value: Option<f64>,
    /// Polygon fill color.
    pub radar_fill_color: ConfigColor,
    /// Polygon outline and dot color.
    pub radar_stroke_color: ConfigColor,
    /// Grid ring and axis line color.
    pub grid_color: ConfigColor,
    /// Axis label color.
    pub axis_label_color: ConfigColor,
    /// Tick value label color.
    pub value_label_color: ConfigColor,
    /// Axis label font size.
    pub axis_label_font_size: f64,
    /// Whether to draw tick value labels along each axis.
    pub show_value_labels: bool,
    /// Tick value label font size.
    pub value_label_font_size: f64,
    /// Decimal places of tick value labels.
    pub value_decimal_places: f64,
    /// Polygon fill opacity.
    pub fill_opacity: f64,
    /// Polygon outline width.
    pub stroke_width: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            chart_title: "Performance Overview".into(),
            title_display: true,
            levels: 5.0,
            max_value: None,
            radar_fill_color: ConfigColor::from_rgb8(0x42, 0x85, 0xF4),
            radar_stroke_color: ConfigColor::from_rgb8(0x1A, 0x73, 0xE8),
            grid_color: ConfigColor::from_rgb8(0xCD, 0xCD, 0xCD),
            axis_label_color: ConfigColor::from_rgb8(0x33, 0x33, 0x33),
            value_label_color: ConfigColor::from_rgb8(0x00, 0x00, 0x00),
            axis_label_font_size: 12.0,
            show_value_labels: true,
            value_label_font_size: 10.0,
            value_decimal_places: 1.0,
            fill_opacity: 0.7,
            stroke_width: 2.0,
        }
    }
}

impl RadarConfig {
    /// Always succeeds: every radar option is repaired by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Grid ring count, in `2..=10`.
    pub fn levels(&self) -> usize {
        count("levels", self.levels, 2, 10, 5.0)
    }

    /// Axis label font size, in `8..=24`.
    pub fn axis_label_font_size(&self) -> f64 {
        bounded("axis_label_font_size", self.axis_label_font_size, 8.0, 24.0, 12.0)
    }

    /// Tick value label font size, in `8..=20`.
    pub fn value_label_font_size(&self) -> f64 {
        bounded("value_label_font_size", self.value_label_font_size, 8.0, 20.0, 10.0)
    }

    /// Decimal places, in `0..=5`.
    pub fn decimals(&self) -> usize {
        count("value_decimal_places", self.value_decimal_places, 0, 5, 1.0)
    }

    /// Fill opacity, in `0.1..=1`.
    pub fn fill_opacity(&self) -> f64 {
        bounded("fill_opacity", self.fill_opacity, 0.1, 1.0, 0.7)
    }

    /// Outline width, in `1..=5`.
    pub fn stroke_width(&self) -> f64 {
        bounded("stroke_width", self.stroke_width, 1.0, 5.0, 2.0)
    }

    /// The polygon fill color with the fill opacity applied.
    pub fn polygon_fill(&self) -> Color {
        #[allow(clippy::cast_possible_truncation, reason = "opacity is in [0.1, 1]")]
        let alpha = self.fill_opacity() as f32;
        self.radar_fill_color.0.with_alpha(alpha)
    }
}

/// Heatmap options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Color of the lowest value.
    pub min_color: ConfigColor,
    /// Color of the domain midpoint, when `use_mid_color` is on.
    pub mid_color: ConfigColor,
    /// Color of the highest value.
    pub max_color: ConfigColor,
    /// Whether to blend through `mid_color`.
    pub use_mid_color: bool,
    /// Whether to draw x category labels.
    pub show_x_axis_labels: bool,
    /// Whether to draw y category labels.
    pub show_y_axis_labels: bool,
    /// X label font size.
    pub x_axis_label_size: f64,
    /// Y label font size.
    pub y_axis_label_size: f64,
    /// Whether to print values inside cells.
    pub show_cell_values: bool,
    /// Cell value font size.
    pub cell_value_size: f64,
    /// Cell value color.
    pub cell_value_color: ConfigColor,
    /// Decimal places of cell values.
    pub value_decimal_places: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            min_color: ConfigColor::from_rgb8(0xFF, 0xFF, 0xFF),
            mid_color: ConfigColor::from_rgb8(0xFF, 0xFF, 0x00),
            max_color: ConfigColor::from_rgb8(0xFF, 0x00, 0x00),
            use_mid_color: false,
            show_x_axis_labels: true,
            show_y_axis_labels: true,
            x_axis_label_size: 12.0,
            y_axis_label_size: 12.0,
            show_cell_values: true,
            cell_value_size: 10.0,
            cell_value_color: ConfigColor::from_rgb8(0x00, 0x00, 0x00),
            value_decimal_places: 1.0,
        }
    }
}

impl HeatmapConfig {
    /// Always succeeds: every heatmap option is repaired by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// X label font size, in `8..=24`.
    pub fn x_axis_label_size(&self) -> f64 {
        bounded("x_axis_label_size", self.x_axis_label_size, 8.0, 24.0, 12.0)
    }

    /// Y label font size, in `8..=24`.
    pub fn y_axis_label_size(&self) -> f64 {
        bounded("y_axis_label_size", self.y_axis_label_size, 8.0, 24.0, 12.0)
    }

    /// Cell value font size, in `8..=20`.
    pub fn cell_value_size(&self) -> f64 {
        bounded("cell_value_size", self.cell_value_size, 8.0, 20.0, 10.0)
    }

    /// Decimal places, in `0..=10`.
    pub fn decimals(&self) -> usize {
        count("value_decimal_places", self.value_decimal_places, 0, 10, 1.0)
    }
}
