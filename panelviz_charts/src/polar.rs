// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar layout for radar charts.
//!
//! `N` axes are spaced evenly around the circle. Slot `0` points straight up and later slots
//! proceed clockwise:
//!
//! ```text
//! θᵢ = i · 2π / N − π/2
//! ```
//!
//! Values map to radii linearly, `0` at the center and the domain maximum on the outer ring.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Point;
use panelviz_core::{TextAnchor, TextBaseline};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::layout::RadialFrame;
use crate::scale::ScaleLinear;
use crate::sector_mark::polar_point;

/// Tolerance under which a cosine or sine counts as zero when placing labels.
pub const LABEL_TOLERANCE: f64 = 0.001;

/// Angular slots and radial scale of a radar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarLayout {
    frame: RadialFrame,
    axis_count: usize,
    radial: ScaleLinear,
}

impl PolarLayout {
    /// Creates a layout for `axis_count` axes whose outer ring represents `max`.
    pub fn new(frame: RadialFrame, axis_count: usize, max: f64) -> Self {
        Self {
            frame,
            axis_count,
            radial: ScaleLinear::new((0.0, max), (0.0, frame.radius)),
        }
    }

    /// Returns the chart center.
    pub fn center(&self) -> Point {
        self.frame.center
    }

    /// Returns the outer radius.
    pub fn radius(&self) -> f64 {
        self.frame.radius
    }

    /// Returns the value at the outer ring.
    pub fn max(&self) -> f64 {
        self.radial.domain_max()
    }

    /// Returns the number of axes.
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Returns the angle of axis `slot`, in radians.
    pub fn angle(&self, slot: usize) -> f64 {
        if self.axis_count == 0 {
            return -FRAC_PI_2;
        }
        slot as f64 * (TAU / self.axis_count as f64) - FRAC_PI_2
    }

    /// Maps a value to its distance from the center.
    pub fn scale_radius(&self, value: f64) -> f64 {
        self.radial.map(value)
    }

    /// Returns the point at `radius` along axis `slot`.
    pub fn point(&self, slot: usize, radius: f64) -> Point {
        polar_point(self.frame.center, radius, self.angle(slot))
    }

    /// Returns the data vertex for `value` on axis `slot`.
    pub fn vertex(&self, slot: usize, value: f64) -> Point {
        self.point(slot, self.scale_radius(value))
    }

    /// Returns one vertex per value, in input order.
    pub fn vertices(&self, values: impl IntoIterator<Item = f64>) -> SmallVec<[Point; 8]> {
        values
            .into_iter()
            .enumerate()
            .map(|(slot, v)| self.vertex(slot, v))
            .collect()
    }

    /// Returns the grid ring radii `R / levels · k` for `k = 1..=levels`.
    pub fn ring_radii(&self, levels: usize) -> impl Iterator<Item = f64> {
        let step = self.frame.radius / levels.max(1) as f64;
        (1..=levels).map(move |k| step * k as f64)
    }

    /// Returns the tick values `max / levels · k` for `k = 1..=levels`.
    pub fn tick_values(&self, levels: usize) -> impl Iterator<Item = f64> {
        let step = self.max() / levels.max(1) as f64;
        (1..=levels).map(move |k| step * k as f64)
    }
}

/// Chooses anchor and baseline for a label placed outward along `angle`.
///
/// Labels to the right of center start at their point, labels to the left end at it, and labels
/// straight above or below are centered. Labels below center hang from their point; labels
/// above sit on it.
pub fn label_placement(angle: f64) -> (TextAnchor, TextBaseline) {
    let (sin, cos) = (angle.sin(), angle.cos());
    let anchor = if cos.abs() < LABEL_TOLERANCE {
        TextAnchor::Middle
    } else if cos > 0.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    };
    let baseline = if sin.abs() < LABEL_TOLERANCE {
        TextBaseline::Middle
    } else if sin > 0.0 {
        TextBaseline::Hanging
    } else {
        TextBaseline::Auto
    };
    (anchor, baseline)
}
