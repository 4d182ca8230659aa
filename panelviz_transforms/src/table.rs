// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned category table used by the heatmap.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use panelviz_core::QueryResult;

use crate::coerce::number_or_missing;
use crate::error::ValidationError;
use crate::log;
use crate::validate::{ChartKind, validate};

/// Distinct labels in first-occurrence order.
#[derive(Clone, Debug, Default)]
struct CategoryIndex {
    labels: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl CategoryIndex {
    /// Returns the index of `label`, appending it if unseen.
    fn intern(&mut self, label: String) -> usize {
        if let Some(&idx) = self.lookup.get(&label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.clone());
        self.lookup.insert(label, idx);
        idx
    }
}

/// Two categorical axes and the values observed at their crossings.
///
/// This is a deliberately small representation:
/// - category labels in the order rows first mention them (never sorted, never duplicated),
/// - a sparse value map keyed by `(x index, y index)`.
///
/// A crossing with no row, or whose measure did not parse, has no value. That is "no data",
/// not zero.
#[derive(Clone, Debug)]
pub struct HeatmapTable {
    x: CategoryIndex,
    y: CategoryIndex,
    cells: HashMap<(usize, usize), f64>,
    observed: Vec<f64>,
}

impl HeatmapTable {
    /// Validates `result` for a heatmap and collects its categories and cell values.
    ///
    /// The first dimension supplies x categories, the second y categories, and the first
    /// measure the values. When two rows share a crossing, the later parsed value wins. Rows
    /// with an unparseable value still contribute their categories.
    pub fn from_query(result: &QueryResult) -> Result<Self, ValidationError> {
        validate(ChartKind::Heatmap, result)?;
        let x_field = &result.dimensions()[0].name;
        let y_field = &result.dimensions()[1].name;
        let measure = &result.measures()[0].name;

        let mut table = Self {
            x: CategoryIndex::default(),
            y: CategoryIndex::default(),
            cells: HashMap::new(),
            observed: Vec::new(),
        };
        for row in &result.data {
            let label = |field: &str| {
                row.get(field)
                    .map(|c| c.value.to_label())
                    .unwrap_or_default()
            };
            let xi = table.x.intern(label(x_field));
            let yi = table.y.intern(label(y_field));
            if let Some(v) = number_or_missing(row.get(measure)) {
                table.cells.insert((xi, yi), v);
                table.observed.push(v);
            }
        }
        log::debug!(
            x = table.x.labels.len(),
            y = table.y.labels.len(),
            cells = table.cells.len(),
            "heatmap table"
        );
        Ok(table)
    }

    /// Returns the x category labels in first-occurrence order.
    pub fn x_categories(&self) -> &[String] {
        &self.x.labels
    }

    /// Returns the y category labels in first-occurrence order.
    pub fn y_categories(&self) -> &[String] {
        &self.y.labels
    }

    /// Returns the value at a crossing, or `None` for "no data".
    pub fn value(&self, x: usize, y: usize) -> Option<f64> {
        self.cells.get(&(x, y)).copied()
    }

    /// Returns every parsed value in row order, including values a later row overwrote.
    pub fn values(&self) -> &[f64] {
        &self.observed
    }
}
