// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color scales.
//!
//! Heatmap cells blend between two or three color stops, channel by channel in 8-bit sRGB.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use panelviz_core::Domain;
use peniko::Color;

/// Fill used for cells without data.
pub const MISSING_COLOR: Color = Color::from_rgb8(0xCC, 0xCC, 0xCC);

/// Decodes a `#RRGGBB` (or `RRGGBB`) hex string into channel values.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Blends two colors channel-wise: `round(a + (b - a) * t)`.
///
/// `t` is clamped to `[0, 1]`.
pub fn interpolate_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mix = |a: u8, b: u8| {
        let a = f64::from(a);
        let v = (a + (f64::from(b) - a) * t).round().clamp(0.0, 255.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the u8 range")]
        {
            v as u8
        }
    };
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Position of `value` between `lo` and `hi`, as a fraction.
///
/// A zero-width span yields `1` at or above `hi` and `0` below it.
fn ratio(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 {
        return if value >= hi { 1.0 } else { 0.0 };
    }
    (value - lo) / span
}

fn channels(color: Color) -> [u8; 3] {
    let rgba = color.to_rgba8();
    [rgba.r, rgba.g, rgba.b]
}

/// A two- or three-stop linear color scale over a numeric domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    domain: Domain,
    min: [u8; 3],
    mid: Option<[u8; 3]>,
    max: [u8; 3],
}

impl ColorScale {
    /// Creates a scale blending `min` into `max` across `domain`.
    pub fn two_stop(domain: Domain, min: Color, max: Color) -> Self {
        Self {
            domain,
            min: channels(min),
            mid: None,
            max: channels(max),
        }
    }

    /// Creates a scale that blends `min` into `mid` below the domain midpoint and `mid` into
    /// `max` at or above it.
    pub fn three_stop(domain: Domain, min: Color, mid: Color, max: Color) -> Self {
        Self {
            domain,
            min: channels(min),
            mid: Some(channels(mid)),
            max: channels(max),
        }
    }

    /// Returns the domain this scale spans.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Maps a value to a color; `None` and `NaN` map to [`MISSING_COLOR`].
    pub fn color(&self, value: Option<f64>) -> Color {
        match value {
            Some(v) if !v.is_nan() => {
                let [r, g, b] = self.rgb(v);
                Color::from_rgb8(r, g, b)
            }
            _ => MISSING_COLOR,
        }
    }

    /// Maps a value to channel values.
    pub fn rgb(&self, value: f64) -> [u8; 3] {
        let (lo, hi) = (self.domain.min(), self.domain.max());
        match self.mid {
            None => interpolate_rgb(self.min, self.max, ratio(value, lo, hi)),
            Some(mid) => {
                let center = self.domain.midpoint();
                if value < center {
                    interpolate_rgb(self.min, mid, ratio(value, lo, center))
                } else {
                    interpolate_rgb(mid, self.max, ratio(value, center, hi))
                }
            }
        }
    }
}
