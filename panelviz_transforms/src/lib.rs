// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-result validation and coercion for panelviz charts.
//!
//! This crate sits between a host's raw query result and the chart engines:
//! - **Validation** checks the dimension, measure and row counts each chart type needs, and
//!   reports a user-facing message when they are not met.
//! - **Coercion** parses measure cells into `f64`. Single-value charts read a missing or
//!   unparseable value as `0`; the heatmap keeps it as "no data".
//!
//! The output is a small typed dataset per chart kind ([`RadarSeries`], [`GaugeReading`],
//! [`HeatmapTable`]) that layout code can consume without looking at field names again.

#![no_std]

extern crate alloc;

mod coerce;
mod error;
mod log;
mod series;
mod table;
mod validate;

pub use coerce::{number_or_missing, number_or_zero, parse_number};
pub use error::{ValidationError, ValidationErrorKind};
pub use series::{GaugeReading, RadarSeries};
pub use table::HeatmapTable;
pub use validate::{ChartKind, validate};
