// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors.

/// The shape violation behind a [`ValidationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Fewer dimensions than the chart needs.
    MissingDimension,
    /// No measure where at least one is needed.
    MissingMeasure,
    /// The query returned no rows.
    EmptyResult,
    /// More rows than a single-entity chart can show.
    TooManyRows,
    /// A measure count other than the exact one the chart needs.
    WrongMeasureCount,
}

/// A query result that does not fit the chart it was sent to.
///
/// The `Display` output is the message to show in place of the chart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: &'static str,
}

impl ValidationError {
    pub(crate) const fn new(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// Returns the kind of violation.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}
