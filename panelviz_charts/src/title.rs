// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! Gauge and radar titles sit centered above the chart with their baseline at a fixed height;
//! chart geometry is laid out below that line rather than measured around the title.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use panelviz_core::{TextAnchor, TextBaseline, TextPrimitive};
use peniko::{Brush, Color};

use crate::text_mark::TextMarkSpec;

/// Baseline height of chart titles, in scene coordinates from the top edge.
pub const TITLE_BASELINE_Y: f64 = 30.0;

/// Default title font size.
pub const TITLE_FONT_SIZE: f64 = 16.0;

/// A chart-level title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Title text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: TITLE_FONT_SIZE,
            fill: Brush::Solid(Color::BLACK),
        }
    }

    /// Emits the title centered on `center_x`, on the title baseline.
    pub fn primitive(&self, center_x: f64) -> TextPrimitive {
        TextMarkSpec::new(Point::new(center_x, TITLE_BASELINE_Y), self.text.clone())
            .with_font_size(self.font_size)
            .with_fill(self.fill.clone())
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Auto)
            .bold()
            .primitive()
    }
}
