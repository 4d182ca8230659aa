// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales and domain resolution.
//!
//! [`ScaleLinear`] maps data values into screen units (radii, angles). The `resolve_*`
//! functions pick the domain each chart scales against: a configured bound when one is given,
//! otherwise one computed from the data, widened so that no later division sees a zero span.

use panelviz_core::Domain;

use crate::log;

/// Headroom applied to the largest radar value when no maximum is configured.
pub const RADAR_AUTO_PADDING: f64 = 1.1;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// Returns the finite min/max of `values`, or `None` if there is no finite value.
pub fn infer_domain(values: impl IntoIterator<Item = f64>) -> Option<Domain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some(Domain::new(min, max))
    } else {
        None
    }
}

/// Resolves the radar's radial maximum.
///
/// A configured maximum is used when it is a positive finite number. Otherwise the maximum is
/// the largest value (never below `0`) times [`RADAR_AUTO_PADDING`], with `0` replaced by `1`.
pub fn resolve_radar_max(configured: Option<f64>, values: impl IntoIterator<Item = f64>) -> f64 {
    if let Some(max) = configured {
        if max.is_finite() && max > 0.0 {
            return max;
        }
        log::warn!(max, "ignoring non-positive radar max_value");
    }
    let largest = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let max = largest * RADAR_AUTO_PADDING;
    if max == 0.0 { 1.0 } else { max }
}

/// Resolves the heatmap color domain from the observed cell values.
///
/// No values, or a zero-width range, yields [`Domain::UNIT`].
pub fn resolve_heatmap_domain(values: impl IntoIterator<Item = f64>) -> Domain {
    match infer_domain(values) {
        Some(domain) if !domain.is_degenerate() => domain,
        _ => Domain::UNIT,
    }
}
