// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface sizes and chart frames.
//!
//! The round charts place a circle of fixed relative size below the title:
//! - radar: radius `0.35 · min(width, height)`, top of the circle `50` below the title
//!   baseline;
//! - gauge: radius `0.325 · min(width, height)`, top of the arc `25` below the title baseline.

use kurbo::Point;

use crate::title::TITLE_BASELINE_Y;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the smaller of width and height.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Center and outer radius of a round chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialFrame {
    /// Chart center.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
}

impl RadialFrame {
    /// Fraction of the half-side used by the radar's outer ring.
    pub const RADAR_SCALE: f64 = 0.7;
    /// Gap between the title baseline and the radar's outer ring.
    pub const RADAR_TITLE_GAP: f64 = 50.0;
    /// Fraction of the half-side used by the gauge's outer arc.
    pub const GAUGE_SCALE: f64 = 0.65;
    /// Gap between the title baseline and the top of the gauge arc.
    pub const GAUGE_TITLE_GAP: f64 = 25.0;

    /// Frame for a radar chart on `size`.
    pub fn radar(size: Size) -> Self {
        Self::below_title(size, Self::RADAR_SCALE, Self::RADAR_TITLE_GAP)
    }

    /// Frame for a gauge on `size`.
    pub fn gauge(size: Size) -> Self {
        Self::below_title(size, Self::GAUGE_SCALE, Self::GAUGE_TITLE_GAP)
    }

    fn below_title(size: Size, scale: f64, gap: f64) -> Self {
        let radius = (0.5 * size.min_side() * scale).max(0.0);
        Self {
            center: Point::new(0.5 * size.width, TITLE_BASELINE_Y + gap + radius),
            radius,
        }
    }
}
