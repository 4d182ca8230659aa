// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical heatmap.

use kurbo::Point;
use panelviz_core::{Domain, QueryResult, Scene, StrokeStyle, TextAnchor};
use panelviz_transforms::HeatmapTable;
use peniko::Color;

use crate::color::ColorScale;
use crate::config::HeatmapConfig;
use crate::error::ChartError;
use crate::format::format_fixed;
use crate::grid::{GridLayout, ROTATED_LABEL_ANGLE};
use crate::layout::Size;
use crate::log;
use crate::rect_mark::RectMarkSpec;
use crate::scale::resolve_heatmap_domain;
use crate::text_mark::TextMarkSpec;

/// Color of the category labels.
const AXIS_LABEL_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);
/// Stroke width of the white cell borders.
const CELL_STROKE_WIDTH: f64 = 1.0;

/// A grid of colored cells, one per (x category, y category) crossing.
///
/// Paint order: cells row by row (each followed by its value label), y labels, x labels.
#[derive(Clone, Debug)]
pub struct HeatmapChartSpec {
    /// Surface size.
    pub size: Size,
    /// Chart options.
    pub config: HeatmapConfig,
}

impl HeatmapChartSpec {
    /// Creates a heatmap spec.
    pub fn new(size: Size, config: HeatmapConfig) -> Self {
        Self { size, config }
    }

    /// Returns the color scale for a domain.
    pub fn color_scale(&self, domain: Domain) -> ColorScale {
        let c = &self.config;
        if c.use_mid_color {
            ColorScale::three_stop(
                domain,
                c.min_color.color(),
                c.mid_color.color(),
                c.max_color.color(),
            )
        } else {
            ColorScale::two_stop(domain, c.min_color.color(), c.max_color.color())
        }
    }

    /// Builds the heatmap scene for `data`.
    ///
    /// The first dimension supplies the columns, the second the rows and the single measure
    /// the cell values. Crossings without a value are drawn in the neutral "no data" color
    /// and carry no label.
    pub fn scene(&self, data: &QueryResult) -> Result<Scene, ChartError> {
        let table = HeatmapTable::from_query(data)?;
        self.config.validate()?;
        let c = &self.config;

        let domain = resolve_heatmap_domain(table.values().iter().copied());
        let colors = self.color_scale(domain);
        let xs = table.x_categories();
        let ys = table.y_categories();
        let grid = GridLayout::new(self.size, xs.len(), ys.len());
        let decimals = c.decimals();
        log::debug!(
            min = domain.min(),
            max = domain.max(),
            columns = grid.columns(),
            rows = grid.rows(),
            cell = grid.cell_size(),
            "heatmap layout"
        );

        let mut scene = Scene::new();
        let border = StrokeStyle::solid(Color::WHITE, CELL_STROKE_WIDTH);
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let value = table.value(column, row);
                let cell = grid.cell(column, row);
                scene.push(
                    RectMarkSpec::new(cell)
                        .with_fill(colors.color(value))
                        .with_stroke(border.clone())
                        .primitive(),
                );
                if let Some(v) = value
                    && c.show_cell_values
                {
                    let size = c.cell_value_size();
                    let center = cell.center();
                    scene.push(
                        TextMarkSpec::new(
                            Point::new(center.x, center.y + size / 3.0),
                            format_fixed(v, decimals),
                        )
                        .with_font_size(size)
                        .with_fill(c.cell_value_color)
                        .with_anchor(TextAnchor::Middle)
                        .primitive(),
                    );
                }
            }
        }

        if c.show_y_axis_labels {
            let size = c.y_axis_label_size();
            for (row, label) in ys.iter().enumerate() {
                scene.push(
                    TextMarkSpec::new(grid.y_label_pos(row, size), label.as_str())
                        .with_font_size(size)
                        .with_fill(AXIS_LABEL_COLOR)
                        .with_anchor(TextAnchor::End)
                        .primitive(),
                );
            }
        }

        if c.show_x_axis_labels {
            let size = c.x_axis_label_size();
            let rotate = grid.rotate_x_labels();
            for (column, label) in xs.iter().enumerate() {
                let mark = TextMarkSpec::new(grid.x_label_pos(column), label.as_str())
                    .with_font_size(size)
                    .with_fill(AXIS_LABEL_COLOR);
                let mark = if rotate {
                    mark.with_anchor(TextAnchor::Start)
                        .with_angle(ROTATED_LABEL_ANGLE)
                } else {
                    mark.with_anchor(TextAnchor::Middle)
                };
                scene.push(mark.primitive());
            }
        }
        Ok(scene)
    }
}
