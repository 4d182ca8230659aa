// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use panelviz_core::{RectPrimitive, StrokeStyle};
use peniko::{Brush, Color};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
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
    pub fn primitive(&self) -> RectPrimitive {
        RectPrimitive {
            rect: self.rect,
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
        }
    }
}
