// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-result data model.
//!
//! Dashboard hosts hand visualizations a list of field descriptors (dimensions and measures)
//! and rows keyed by field name, where each cell wraps a primitive JSON value. These types
//! deserialize that shape directly with `serde`.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Deserialize;

/// A primitive cell value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Text(String),
}

impl Value {
    /// Renders the value as a category label.
    ///
    /// Integral numbers print without a fractional part and negative zero prints as `0`, so
    /// `0` and `-0` name the same category. `null` prints as an empty string.
    pub fn to_label(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) if *n == 0.0 => String::from("0"),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A single cell of a row.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Cell {
    /// The raw value.
    #[serde(default)]
    pub value: Value,
}

impl Cell {
    /// Creates a cell holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A row of cells keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, returning the row for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts or replaces the cell for `field`.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(field.into(), Cell::new(value));
    }

    /// Returns the cell for `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Cell> {
        self.cells.get(field)
    }
}

/// A field descriptor (dimension or measure).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Field identifier; rows are keyed by it.
    pub name: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Short human-readable label.
    #[serde(default)]
    pub label_short: Option<String>,
}

impl Field {
    /// Creates a field with no labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            label_short: None,
        }
    }

    /// Sets the short label.
    pub fn with_label_short(mut self, label_short: impl Into<String>) -> Self {
        self.label_short = Some(label_short.into());
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the best label to display: short label, then label, then name.
    ///
    /// Empty labels are skipped.
    pub fn display_label(&self) -> &str {
        [self.label_short.as_deref(), self.label.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}

/// The dimension and measure descriptors of a query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Fields {
    /// Dimension-like fields, in query order.
    #[serde(default)]
    pub dimension_like: Vec<Field>,
    /// Measure-like fields, in query order.
    #[serde(default)]
    pub measure_like: Vec<Field>,
}

/// A complete query result: field descriptors plus rows.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryResult {
    /// Field descriptors.
    #[serde(default)]
    pub fields: Fields,
    /// Rows in query order.
    #[serde(default)]
    pub data: Vec<Row>,
}

impl QueryResult {
    /// Creates a query result from its parts.
    pub fn new(dimensions: Vec<Field>, measures: Vec<Field>, data: Vec<Row>) -> Self {
        Self {
            fields: Fields {
                dimension_like: dimensions,
                measure_like: measures,
            },
            data,
        }
    }

    /// Returns the dimension fields.
    pub fn dimensions(&self) -> &[Field] {
        &self.fields.dimension_like
    }

    /// Returns the measure fields.
    pub fn measures(&self) -> &[Field] {
        &self.fields.measure_like
    }
}

/// One category/value pair of a single-entity chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Category label (radar axis name).
    pub axis_label: String,
    /// Numeric value.
    pub value: f64,
}

/// A numeric range used for scaling, with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// The unit domain `[0, 1]`.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates a domain, ordering the bounds if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `(min + max) / 2`.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Returns `true` if the domain has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Clamps `value` into the domain.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
