// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.
//!
//! Points are circles: radar data dots and, with a transparent fill, radar grid rings.

use kurbo::Point;
use panelviz_core::{CirclePrimitive, StrokeStyle};
use peniko::{Brush, Color};

/// A circular point mark.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
}

impl PointMarkSpec {
    /// Creates a point mark with a black fill and no stroke.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: Brush::Solid(Color::BLACK),
            stroke: None,
        }
    }

    /// Creates an unfilled ring stroked with `stroke`.
    pub fn ring(center: Point, radius: f64, stroke: StrokeStyle) -> Self {
        Self {
            center,
            radius,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Some(stroke),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Generates the primitive.
    pub fn primitive(&self) -> CirclePrimitive {
        CirclePrimitive {
            center: self.center,
            radius: self.radius,
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
        }
    }
}
