// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing chart interface.
//!
//! A host mounts a chart once with [`Chart::initialize`], then calls [`Chart::render`]
//! whenever data, options or size change. Each render returns either a complete [`Scene`] or
//! the one message to show instead of it.

use panelviz_core::{QueryResult, Scene};

use crate::config::{GaugeConfig, HeatmapConfig, RadarConfig};
use crate::error::ChartError;
use crate::gauge_chart::GaugeChartSpec;
use crate::heatmap_chart::HeatmapChartSpec;
use crate::layout::Size;
use crate::log;
use crate::radar_chart::RadarChartSpec;

/// A chart a host can mount and render.
pub trait Chart {
    /// The chart's option record.
    type Config;

    /// Sets the drawing surface size.
    fn initialize(&mut self, surface: Size);

    /// Builds a scene from a query result and options.
    ///
    /// Renders do not depend on each other: the same inputs always give the same scene.
    fn render(&self, data: &QueryResult, config: &Self::Config) -> Result<Scene, ChartError>;
}

/// Single-value gauge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GaugeChart {
    surface: Size,
}

impl GaugeChart {
    /// Creates a gauge on an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chart for GaugeChart {
    type Config = GaugeConfig;

    fn initialize(&mut self, surface: Size) {
        self.surface = surface;
    }

    fn render(&self, data: &QueryResult, config: &GaugeConfig) -> Result<Scene, ChartError> {
        let spec = GaugeChartSpec::new(self.surface, config.clone());
        let scene = spec.scene(data)?;
        log::debug!(primitives = scene.len(), "gauge rendered");
        Ok(scene)
    }
}

/// Single-item radar chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadarChart {
    surface: Size,
}

impl RadarChart {
    /// Creates a radar chart on an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chart for RadarChart {
    type Config = RadarConfig;

    fn initialize(&mut self, surface: Size) {
        self.surface = surface;
    }

    fn render(&self, data: &QueryResult, config: &RadarConfig) -> Result<Scene, ChartError> {
        let spec = RadarChartSpec::new(self.surface, config.clone());
        let scene = spec.scene(data)?;
        log::debug!(primitives = scene.len(), "radar rendered");
        Ok(scene)
    }
}

/// Categorical heatmap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeatmapChart {
    surface: Size,
}

impl HeatmapChart {
    /// Creates a heatmap on an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chart for HeatmapChart {
    type Config = HeatmapConfig;

    fn initialize(&mut self, surface: Size) {
        self.surface = surface;
    }

    fn render(&self, data: &QueryResult, config: &HeatmapConfig) -> Result<Scene, ChartError> {
        let spec = HeatmapChartSpec::new(self.surface, config.clone());
        let scene = spec.scene(data)?;
        log::debug!(primitives = scene.len(), "heatmap rendered");
        Ok(scene)
    }
}
