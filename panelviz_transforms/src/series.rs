// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-row datasets for the radar and gauge charts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use panelviz_core::{DataPoint, QueryResult};

use crate::coerce::number_or_zero;
use crate::error::ValidationError;
use crate::log;
use crate::validate::{ChartKind, validate};

/// One entity's measures, one [`DataPoint`] per measure in query order.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarSeries {
    /// The entity name, taken from the first dimension.
    pub item_name: String,
    /// Axis label and value per measure.
    pub points: Vec<DataPoint>,
}

impl RadarSeries {
    /// Validates `result` for a radar chart and extracts its single row.
    ///
    /// Axis labels use each measure's display label. Missing or unparseable values read as `0`.
    pub fn from_query(result: &QueryResult) -> Result<Self, ValidationError> {
        validate(ChartKind::Radar, result)?;
        let row = &result.data[0];
        let item_name = row
            .get(&result.dimensions()[0].name)
            .map(|c| c.value.to_label())
            .unwrap_or_default();
        let points: Vec<DataPoint> = result
            .measures()
            .iter()
            .map(|m| DataPoint {
                axis_label: m.display_label().into(),
                value: number_or_zero(row.get(&m.name)),
            })
            .collect();
        log::debug!(item = %item_name, axes = points.len(), "radar series");
        Ok(Self { item_name, points })
    }

    /// Returns the values in axis order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// The single observed value of a gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeReading {
    /// The measure's display label.
    pub label: String,
    /// The observed value; missing or unparseable values read as `0`.
    pub value: f64,
}

impl GaugeReading {
    /// Validates `result` for a gauge and extracts its single value.
    pub fn from_query(result: &QueryResult) -> Result<Self, ValidationError> {
        validate(ChartKind::Gauge, result)?;
        let measure = &result.measures()[0];
        let value = number_or_zero(result.data[0].get(&measure.name));
        log::debug!(value, "gauge reading");
        Ok(Self {
            label: measure.display_label().into(),
            value,
        })
    }
}
