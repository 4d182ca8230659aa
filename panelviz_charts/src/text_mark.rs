// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use panelviz_core::{TextAnchor, TextBaseline, TextPrimitive};
use peniko::{Brush, Color};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Whether to draw in a bold weight.
    pub bold: bool,
    /// Text rotation angle in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            bold: false,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Auto,
            fill: Brush::Solid(Color::BLACK),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the text rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Draws the text in a bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Generates the primitive.
    pub fn primitive(&self) -> TextPrimitive {
        TextPrimitive {
            pos: self.pos,
            text: self.text.clone(),
            font_size: self.font_size,
            bold: self.bold,
            angle: self.angle,
            anchor: self.anchor,
            baseline: self.baseline,
            fill: self.fill.clone(),
        }
    }
}
