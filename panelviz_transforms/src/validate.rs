// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-chart cardinality checks.

use panelviz_core::QueryResult;

use crate::error::{ValidationError, ValidationErrorKind as Kind};

const NO_DATA: &str = "No data returned for this query.";

const RADAR_NO_DIMENSION: &str =
    "This visualization requires at least one dimension (for the item name).";
const RADAR_NO_MEASURE: &str =
    "This visualization requires at least one measure (for performance metrics).";
const RADAR_TOO_MANY_ROWS: &str = "This Radar Gauge visualization is designed for a single item. \
     Please ensure your query returns only one row of data (e.g., by filtering to a single \
     dimension value).";

const GAUGE_NO_DIMENSION: &str = "This visualization requires at least one dimension.";
const GAUGE_ONE_MEASURE: &str = "This chart accepts exactly one measure.";
const GAUGE_TOO_MANY_ROWS: &str = "This Single-Value Gauge visualization is designed for a \
     single value. Please ensure your query returns only one row of data (e.g., by filtering to \
     a single dimension value).";

const HEATMAP_NO_DIMENSIONS: &str =
    "This visualization requires at least two dimensions (one for X-axis, one for Y-axis).";
const HEATMAP_ONE_MEASURE: &str =
    "This visualization requires exactly one measure (for cell values).";

/// The chart a query result is validated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Semicircular single-value gauge.
    Gauge,
    /// Radar (polar) chart of one entity's measures.
    Radar,
    /// Categorical heatmap.
    Heatmap,
}

/// Checks that `result` has the shape `kind` needs.
///
/// Checks run in a fixed order and the first failure wins:
/// - radar: a dimension, a measure, at least one row, at most one row;
/// - gauge: a dimension, a measure, at least one row, at most one row, exactly one measure;
/// - heatmap: two dimensions, exactly one measure, at least one row.
pub fn validate(kind: ChartKind, result: &QueryResult) -> Result<(), ValidationError> {
    let dimensions = result.dimensions().len();
    let measures = result.measures().len();
    let rows = result.data.len();

    let fail = |what, message| Err(ValidationError::new(what, message));

    match kind {
        ChartKind::Radar => {
            if dimensions == 0 {
                return fail(Kind::MissingDimension, RADAR_NO_DIMENSION);
            }
            if measures == 0 {
                return fail(Kind::MissingMeasure, RADAR_NO_MEASURE);
            }
            if rows == 0 {
                return fail(Kind::EmptyResult, NO_DATA);
            }
            if rows > 1 {
                return fail(Kind::TooManyRows, RADAR_TOO_MANY_ROWS);
            }
        }
        ChartKind::Gauge => {
            if dimensions == 0 {
                return fail(Kind::MissingDimension, GAUGE_NO_DIMENSION);
            }
            if measures == 0 {
                return fail(Kind::MissingMeasure, GAUGE_ONE_MEASURE);
            }
            if rows == 0 {
                return fail(Kind::EmptyResult, NO_DATA);
            }
            if rows > 1 {
                return fail(Kind::TooManyRows, GAUGE_TOO_MANY_ROWS);
            }
            if measures != 1 {
                return fail(Kind::WrongMeasureCount, GAUGE_ONE_MEASURE);
            }
        }
        ChartKind::Heatmap => {
            if dimensions < 2 {
                return fail(Kind::MissingDimension, HEATMAP_NO_DIMENSIONS);
            }
            if measures == 0 {
                return fail(Kind::MissingMeasure, HEATMAP_ONE_MEASURE);
            }
            if measures > 1 {
                return fail(Kind::WrongMeasureCount, HEATMAP_ONE_MEASURE);
            }
            if rows == 0 {
                return fail(Kind::EmptyResult, NO_DATA);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use panelviz_core::{Field, Row};

    use super::*;

    fn query(dimensions: usize, measures: usize, rows: usize) -> QueryResult {
        QueryResult::new(
            (0..dimensions).map(|i| Field::new(std::format!("d{i}"))).collect(),
            (0..measures).map(|i| Field::new(std::format!("m{i}"))).collect(),
            vec![Row::new(); rows],
        )
    }

    fn kind_of(kind: ChartKind, q: &QueryResult) -> Option<Kind> {
        validate(kind, q).err().map(|e| e.kind())
    }

    #[test]
    fn radar_requires_one_row_with_dimension_and_measure() {
        assert_eq!(kind_of(ChartKind::Radar, &query(1, 3, 1)), None);
        assert_eq!(
            kind_of(ChartKind::Radar, &query(0, 3, 1)),
            Some(Kind::MissingDimension)
        );
        assert_eq!(
            kind_of(ChartKind::Radar, &query(1, 0, 1)),
            Some(Kind::MissingMeasure)
        );
        assert_eq!(
            kind_of(ChartKind::Radar, &query(1, 2, 0)),
            Some(Kind::EmptyResult)
        );
        assert_eq!(
            kind_of(ChartKind::Radar, &query(1, 2, 2)),
            Some(Kind::TooManyRows)
        );
    }

    #[test]
    fn gauge_requires_exactly_one_measure() {
        assert_eq!(kind_of(ChartKind::Gauge, &query(1, 1, 1)), None);
        assert_eq!(
            kind_of(ChartKind::Gauge, &query(1, 2, 1)),
            Some(Kind::WrongMeasureCount)
        );
        assert_eq!(
            kind_of(ChartKind::Gauge, &query(1, 0, 1)),
            Some(Kind::MissingMeasure)
        );
        // Row count is checked before the exact measure count.
        assert_eq!(
            kind_of(ChartKind::Gauge, &query(1, 2, 3)),
            Some(Kind::TooManyRows)
        );
    }

    #[test]
    fn heatmap_requires_two_dimensions_and_one_measure() {
        assert_eq!(kind_of(ChartKind::Heatmap, &query(2, 1, 5)), None);
        assert_eq!(kind_of(ChartKind::Heatmap, &query(3, 1, 5)), None);
        assert_eq!(
            kind_of(ChartKind::Heatmap, &query(1, 1, 5)),
            Some(Kind::MissingDimension)
        );
        assert_eq!(
            kind_of(ChartKind::Heatmap, &query(2, 2, 5)),
            Some(Kind::WrongMeasureCount)
        );
        assert_eq!(
            kind_of(ChartKind::Heatmap, &query(2, 1, 0)),
            Some(Kind::EmptyResult)
        );
    }

    #[test]
    fn error_displays_the_user_facing_message() {
        let err = validate(ChartKind::Heatmap, &query(2, 1, 0)).unwrap_err();
        assert_eq!(err.to_string(), "No data returned for this query.");
        assert_eq!(err.message(), NO_DATA);

        let err = validate(ChartKind::Radar, &query(1, 1, 2)).unwrap_err();
        assert!(err.to_string().starts_with("This Radar Gauge visualization"));
    }
}
