// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar (spider) chart for a single item.

extern crate alloc;

use alloc::format;

use panelviz_core::{QueryResult, Scene, StrokeStyle};
use panelviz_transforms::RadarSeries;
use peniko::Color;

use crate::config::RadarConfig;
use crate::error::ChartError;
use crate::format::format_fixed;
use crate::layout::{RadialFrame, Size};
use crate::log;
use crate::point_mark::PointMarkSpec;
use crate::polar::{PolarLayout, label_placement};
use crate::polygon_mark::PolygonMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::resolve_radar_max;
use crate::text_mark::TextMarkSpec;
use crate::title::TitleSpec;

/// Stroke width of the grid rings.
const RING_STROKE_WIDTH: f64 = 0.5;
/// Stroke width of the axis lines.
const AXIS_STROKE_WIDTH: f64 = 1.0;
/// Distance between the outer ring and the axis labels.
const AXIS_LABEL_OFFSET: f64 = 20.0;
/// Radius of the vertex dots.
const DOT_RADIUS: f64 = 4.0;
/// Stroke width of the white ring around each vertex dot.
const DOT_STROKE_WIDTH: f64 = 1.5;

/// A radar chart: one axis per measure, one polygon for the item's values.
///
/// Paint order: grid rings, then per axis its line, label and tick labels, then the polygon,
/// the vertex dots and the title.
#[derive(Clone, Debug)]
pub struct RadarChartSpec {
    /// Surface size.
    pub size: Size,
    /// Chart options.
    pub config: RadarConfig,
}

impl RadarChartSpec {
    /// Creates a radar spec.
    pub fn new(size: Size, config: RadarConfig) -> Self {
        Self { size, config }
    }

    /// Builds the radar scene for `data`.
    ///
    /// `data` must hold at least one dimension (the item name), at least one measure and
    /// exactly one row.
    pub fn scene(&self, data: &QueryResult) -> Result<Scene, ChartError> {
        let series = RadarSeries::from_query(data)?;
        self.config.validate()?;
        let c = &self.config;

        let max = resolve_radar_max(c.max_value, series.values());
        let layout = PolarLayout::new(RadialFrame::radar(self.size), series.points.len(), max);
        let levels = c.levels();
        let decimals = c.decimals();
        log::debug!(
            max,
            levels,
            axes = layout.axis_count(),
            radius = layout.radius(),
            "radar layout"
        );

        let mut scene = Scene::new();
        let grid = StrokeStyle::solid(c.grid_color, RING_STROKE_WIDTH);
        for r in layout.ring_radii(levels) {
            scene.push(PointMarkSpec::ring(layout.center(), r, grid.clone()).primitive());
        }

        for (slot, point) in series.points.iter().enumerate() {
            let (anchor, baseline) = label_placement(layout.angle(slot));
            scene.push(
                RuleMarkSpec::new(layout.center(), layout.point(slot, layout.radius()))
                    .with_stroke(c.grid_color, AXIS_STROKE_WIDTH)
                    .primitive(),
            );
            scene.push(
                TextMarkSpec::new(
                    layout.point(slot, layout.radius() + AXIS_LABEL_OFFSET),
                    point.axis_label.as_str(),
                )
                .with_font_size(c.axis_label_font_size())
                .with_fill(c.axis_label_color)
                .with_anchor(anchor)
                .with_baseline(baseline)
                .primitive(),
            );
            if c.show_value_labels {
                for tick in layout.tick_values(levels) {
                    scene.push(
                        TextMarkSpec::new(layout.vertex(slot, tick), format_fixed(tick, decimals))
                            .with_font_size(c.value_label_font_size())
                            .with_fill(c.value_label_color)
                            .with_anchor(anchor)
                            .with_baseline(baseline)
                            .primitive(),
                    );
                }
            }
        }

        let vertices = layout.vertices(series.values());
        scene.push(
            PolygonMarkSpec::new(vertices.iter().copied())
                .with_fill(c.polygon_fill())
                .with_stroke(StrokeStyle::solid(c.radar_stroke_color, c.stroke_width()))
                .primitive(),
        );
        let dot_ring = StrokeStyle::solid(Color::WHITE, DOT_STROKE_WIDTH);
        for vertex in vertices {
            scene.push(
                PointMarkSpec::new(vertex, DOT_RADIUS)
                    .with_fill(c.radar_stroke_color)
                    .with_stroke(dot_ring.clone())
                    .primitive(),
            );
        }

        if c.title_display {
            let title = format!("{}: {}", c.chart_title, series.item_name);
            scene.push(TitleSpec::new(title).primitive(self.size.width / 2.0));
        }
        Ok(scene)
    }
}
