// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge, radar and heatmap engines for `panelviz_core` scenes.
//!
//! Each chart turns a validated query result plus a typed option record into a flat,
//! paint-ordered [`Scene`](panelviz_core::Scene):
//! - **Scales** map values to radii, angles and colors, with domains resolved from options or
//!   data.
//! - **Layouts** place the polar axes, the gauge arc and the heatmap grid.
//! - **Marks** build the primitives (rings, sectors, polygons, rects and text).
//!
//! Rendering is a pure function of surface size, data and options. Text shaping is out of
//! scope; text primitives carry unshaped strings with an anchor and baseline.

#![no_std]

extern crate alloc;

mod chart;
#[cfg(test)]
mod chart_tests;
mod color;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod gauge_arc;
mod gauge_chart;
mod grid;
mod heatmap_chart;
mod layout;
mod log;
mod point_mark;
mod polar;
mod polygon_mark;
mod radar_chart;
mod rect_mark;
mod rule_mark;
mod scale;
mod sector_mark;
mod text_mark;
mod title;

pub use chart::{Chart, GaugeChart, HeatmapChart, RadarChart};
pub use color::{ColorScale, MISSING_COLOR, hex_to_rgb, interpolate_rgb};
pub use config::{ConfigColor, GaugeConfig, HeatmapConfig, RadarConfig};
pub use error::{ChartError, ConfigError};
pub use gauge_arc::{
    GAUGE_END_ANGLE, GAUGE_START_ANGLE, GaugeArc, POINTER_HALF_WIDTH, POINTER_INSET,
};
pub use gauge_chart::GaugeChartSpec;
pub use grid::{
    GridLayout, LABEL_GAP, Margins, ROTATE_ABOVE_COUNT, ROTATE_BELOW_CELL_SIZE,
    ROTATED_LABEL_ANGLE,
};
pub use heatmap_chart::HeatmapChartSpec;
pub use layout::{RadialFrame, Size};
pub use point_mark::PointMarkSpec;
pub use polar::{LABEL_TOLERANCE, PolarLayout, label_placement};
pub use polygon_mark::PolygonMarkSpec;
pub use radar_chart::RadarChartSpec;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{
    RADAR_AUTO_PADDING, ScaleLinear, infer_domain, resolve_heatmap_domain, resolve_radar_max,
};
pub use sector_mark::{SectorMarkSpec, normalize_angle};
pub use text_mark::TextMarkSpec;
pub use title::{TITLE_BASELINE_Y, TITLE_FONT_SIZE, TitleSpec};
