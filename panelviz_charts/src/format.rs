// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-decimal number formatting for labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Rounding is to the nearest representable label; a value exactly halfway between two labels
/// rounds away from zero (`0.25` with one decimal prints `0.3`). Negative zero prints as zero.
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if !is_decimal_tie(value, decimals) {
        return format!("{value:.decimals$}");
    }

    // A tie terminates one digit after `decimals`, so this expansion is exact.
    let mut digits: Vec<u8> = format!("{:.prec$}", value.abs(), prec = decimals + 1).into_bytes();
    digits.pop();
    if decimals == 0 {
        digits.pop();
    }
    increment_last_digit(&mut digits);

    let mut out = String::with_capacity(digits.len() + 1);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits.into_iter().map(char::from));
    out
}

/// Returns `true` if `value · 10^decimals` has a fractional part of exactly one half.
///
/// With `value = m · 2^e`, that product doubled is `m · 5^decimals · 2^(decimals + e + 1)`,
/// which is an odd integer exactly when the lowest set bit of `value` is `2^-(decimals + 1)`.
fn is_decimal_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    let lowest_bit = exponent + i64::from(mantissa.trailing_zeros());
    usize::try_from(-(lowest_bit + 1)).is_ok_and(|d| d == decimals)
}

/// Adds one unit in the last place to an ASCII decimal, carrying through `.`.
fn increment_last_digit(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        match *d {
            b'.' => {}
            b'9' => *d = b'0',
            _ => {
                *d += 1;
                return;
            }
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pads_and_rounds_to_the_requested_precision() {
        assert_eq!(format_fixed(75.0, 1), "75.0");
        assert_eq!(format_fixed(4.4, 2), "4.40");
        assert_eq!(format_fixed(2.0 / 3.0, 3), "0.667");
        assert_eq!(format_fixed(12.34, 0), "12");
        assert_eq!(format_fixed(0.1, 3), "0.100");
    }

    #[test]
    fn negative_zero_prints_without_sign() {
        assert_eq!(format_fixed(-0.0, 1), "0.0");
        assert_eq!(format_fixed(-1.26, 1), "-1.3");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(0.75, 1), "0.8");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
    }

    #[test]
    fn halves_carry_into_higher_digits() {
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(99.5, 0), "100");
        assert_eq!(format_fixed(9.75, 1), "9.8");
        assert_eq!(format_fixed(19.875, 2), "19.88");
    }

    #[test]
    fn near_halves_keep_their_binary_value() {
        // 1.45 and 0.15 are stored just below the half.
        assert_eq!(format_fixed(1.45, 1), "1.4");
        assert_eq!(format_fixed(0.15, 1), "0.1");
        assert_eq!(format_fixed(0.375, 1), "0.4");
    }
}
