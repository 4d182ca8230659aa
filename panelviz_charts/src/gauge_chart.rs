// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-value gauge.

use kurbo::Point;
use panelviz_core::{QueryResult, Scene, TextAnchor};
use panelviz_transforms::GaugeReading;

use crate::config::GaugeConfig;
use crate::error::ChartError;
use crate::format::format_fixed;
use crate::gauge_arc::GaugeArc;
use crate::layout::{RadialFrame, Size};
use crate::log;
use crate::polygon_mark::PolygonMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::title::TitleSpec;

/// Vertical distance from the gauge center to the min/max label band.
const MIN_MAX_LABEL_OFFSET: f64 = 10.0;
/// Value label height below the gauge center, as a fraction of the outer radius.
const VALUE_LABEL_DROP: f64 = 0.4;

/// A half-circle gauge showing one value against a configured range.
///
/// Paint order: background arc, value arc, pointer, value label, min label, max label, title.
#[derive(Clone, Debug)]
pub struct GaugeChartSpec {
    /// Surface size.
    pub size: Size,
    /// Chart options.
    pub config: GaugeConfig,
}

impl GaugeChartSpec {
    /// Creates a gauge spec.
    pub fn new(size: Size, config: GaugeConfig) -> Self {
        Self { size, config }
    }

    /// Builds the gauge scene for `data`.
    ///
    /// `data` must hold one dimension, one measure and exactly one row. The value is clamped
    /// into the gauge range; a missing or unparseable value reads as `0`.
    pub fn scene(&self, data: &QueryResult) -> Result<Scene, ChartError> {
        let reading = GaugeReading::from_query(data)?;
        self.config.validate()?;
        let c = &self.config;

        let arc = GaugeArc::new(RadialFrame::gauge(self.size), c.thickness(), c.range());
        let value = arc.clamp(reading.value);
        let decimals = c.decimals();
        log::debug!(
            raw = reading.value,
            value,
            angle = arc.angle(value),
            radius = arc.outer_radius(),
            "gauge layout"
        );

        let mut scene = Scene::new();
        scene.push(
            arc.background()
                .with_fill(c.gauge_color_background)
                .primitive(),
        );
        scene.push(arc.fill(value).with_fill(c.gauge_color_fill).primitive());
        scene.push(
            PolygonMarkSpec::new(arc.pointer(value))
                .with_fill(c.pointer_color)
                .primitive(),
        );

        let center = arc.center();
        let radius = arc.outer_radius();
        scene.push(
            TextMarkSpec::new(
                Point::new(center.x, center.y + VALUE_LABEL_DROP * radius),
                format_fixed(value, decimals),
            )
            .with_font_size(c.value_label_size())
            .with_fill(c.value_label_color)
            .with_anchor(TextAnchor::Middle)
            .bold()
            .primitive(),
        );

        if c.show_min_max_labels {
            let size = c.min_max_label_size();
            let y = center.y + MIN_MAX_LABEL_OFFSET + size / 2.0;
            let range = arc.range();
            for (x, bound) in [
                (center.x - radius, range.min()),
                (center.x + radius, range.max()),
            ] {
                scene.push(
                    TextMarkSpec::new(Point::new(x, y), format_fixed(bound, decimals))
                        .with_font_size(size)
                        .with_fill(c.min_max_label_color)
                        .with_anchor(TextAnchor::Middle)
                        .primitive(),
                );
            }
        }

        if c.title_display {
            scene.push(TitleSpec::new(c.title_text.as_str()).primitive(self.size.width / 2.0));
        }
        Ok(scene)
    }
}
