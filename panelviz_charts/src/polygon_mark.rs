// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon mark generation.

use kurbo::Point;
use panelviz_core::{PolygonPrimitive, StrokeStyle};
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// A closed, filled polygon (radar data area, gauge pointer).
#[derive(Clone, Debug)]
pub struct PolygonMarkSpec {
    /// Vertices in drawing order.
    pub points: SmallVec<[Point; 8]>,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
}

impl PolygonMarkSpec {
    /// Creates a polygon through `points`, in order.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill: Brush::Solid(Color::BLACK),
            stroke: None,
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
    pub fn primitive(&self) -> PolygonPrimitive {
        PolygonPrimitive {
            points: self.points.clone(),
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
        }
    }
}
