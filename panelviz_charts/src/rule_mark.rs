// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment. Radar axes are rules from the center to the outer
//! ring.

use kurbo::{Line, Point};
use panelviz_core::{LinePrimitive, StrokeStyle};
use peniko::{Brush, Color};

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Start point in scene coordinates.
    pub p0: Point,
    /// End point in scene coordinates.
    pub p1: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0,
            p1,
            stroke: Brush::Solid(Color::BLACK),
            stroke_width: 1.0,
        }
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Generates the rule primitive.
    pub fn primitive(&self) -> LinePrimitive {
        LinePrimitive {
            line: Line::new(self.p0, self.p1),
            stroke: StrokeStyle::solid(self.stroke.clone(), self.stroke_width),
        }
    }
}
