// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric coercion of cell values.
//!
//! Hosts deliver measures as JSON numbers most of the time, but formatted strings (`"12.5"`,
//! `" 40 units"`) and nulls show up too. Strings are parsed leniently: leading whitespace is
//! skipped and the longest numeric prefix wins.

use panelviz_core::{Cell, Value};

/// Parses a cell value into a finite number.
///
/// Returns `None` for null, booleans, strings without a numeric prefix, and non-finite
/// numbers.
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => *n,
        Value::Text(s) => parse_prefix(s)?,
        Value::Null | Value::Bool(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Reads a measure for single-value charts: missing or unparseable cells count as `0`.
pub fn number_or_zero(cell: Option<&Cell>) -> f64 {
    number_or_missing(cell).unwrap_or(0.0)
}

/// Reads a measure where "no data" must stay distinguishable from zero.
pub fn number_or_missing(cell: Option<&Cell>) -> Option<f64> {
    cell.and_then(|c| parse_number(&c.value))
}

/// Parses the longest decimal-number prefix of `s`, after leading whitespace.
fn parse_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn text(s: &str) -> Option<f64> {
        parse_number(&Value::from(s))
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(parse_number(&Value::Number(4.25)), Some(4.25));
        assert_eq!(parse_number(&Value::Number(f64::NAN)), None);
        assert_eq!(parse_number(&Value::Number(f64::INFINITY)), None);
    }

    #[test]
    fn strings_use_the_longest_numeric_prefix() {
        assert_eq!(text("12.5"), Some(12.5));
        assert_eq!(text("  -3e2kg"), Some(-300.0));
        assert_eq!(text("40 units"), Some(40.0));
        assert_eq!(text(".5"), Some(0.5));
        assert_eq!(text("7."), Some(7.0));
        assert_eq!(text("1e"), Some(1.0));
        assert_eq!(text("+8"), Some(8.0));
    }

    #[test]
    fn non_numeric_values_are_missing() {
        assert_eq!(text("abc"), None);
        assert_eq!(text(""), None);
        assert_eq!(text("-"), None);
        assert_eq!(text("."), None);
        assert_eq!(text("Infinity"), None);
        assert_eq!(parse_number(&Value::Null), None);
        assert_eq!(parse_number(&Value::Bool(true)), None);
    }

    #[test]
    fn single_value_contexts_read_missing_as_zero() {
        assert_eq!(number_or_zero(None), 0.0);
        assert_eq!(number_or_zero(Some(&Cell::new("n/a"))), 0.0);
        assert_eq!(number_or_zero(Some(&Cell::new(6.0))), 6.0);
        assert_eq!(number_or_missing(Some(&Cell::default())), None);
    }
}
