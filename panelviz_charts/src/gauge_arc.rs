// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-circle gauge geometry.
//!
//! The gauge spans `−π` (left) to `0` (right), clockwise over the top of the center. Values
//! are clamped into the configured range and mapped linearly onto that sweep.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Point;
use panelviz_core::Domain;

use crate::layout::RadialFrame;
use crate::scale::ScaleLinear;
use crate::sector_mark::{SectorMarkSpec, polar_point};

/// Angle of the gauge minimum.
pub const GAUGE_START_ANGLE: f64 = -PI;
/// Angle of the gauge maximum.
pub const GAUGE_END_ANGLE: f64 = 0.0;
/// Half the width of the pointer base.
pub const POINTER_HALF_WIDTH: f64 = 4.0;
/// Distance between the pointer tip and the inner edge of the arc.
pub const POINTER_INSET: f64 = 5.0;

/// Arc and pointer geometry of a gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeArc {
    frame: RadialFrame,
    thickness: f64,
    range: Domain,
    angle: ScaleLinear,
}

impl GaugeArc {
    /// Creates the geometry for a gauge of `thickness` showing `range` inside `frame`.
    pub fn new(frame: RadialFrame, thickness: f64, range: Domain) -> Self {
        Self {
            frame,
            thickness,
            range,
            angle: ScaleLinear::new(
                (range.min(), range.max()),
                (GAUGE_START_ANGLE, GAUGE_END_ANGLE),
            ),
        }
    }

    /// Returns the gauge center.
    pub fn center(&self) -> Point {
        self.frame.center
    }

    /// Returns the outer radius.
    pub fn outer_radius(&self) -> f64 {
        self.frame.radius
    }

    /// Returns the inner radius, never below `0`.
    pub fn inner_radius(&self) -> f64 {
        (self.frame.radius - self.thickness).max(0.0)
    }

    /// Returns the value range.
    pub fn range(&self) -> Domain {
        self.range
    }

    /// Clamps `value` into the gauge range.
    pub fn clamp(&self, value: f64) -> f64 {
        self.range.clamp(value)
    }

    /// Maps a value to its angle. Out-of-range values are clamped first.
    pub fn angle(&self, value: f64) -> f64 {
        self.angle.map(self.clamp(value))
    }

    /// The full background sector.
    pub fn background(&self) -> SectorMarkSpec {
        self.sector(GAUGE_END_ANGLE)
    }

    /// The sector from the gauge minimum up to `value`.
    pub fn fill(&self, value: f64) -> SectorMarkSpec {
        self.sector(self.angle(value))
    }

    fn sector(&self, end_angle: f64) -> SectorMarkSpec {
        SectorMarkSpec::new(
            self.frame.center,
            self.inner_radius(),
            self.frame.radius,
            GAUGE_START_ANGLE,
            end_angle,
        )
    }

    /// Distance from the center to the pointer tip, never below `0`.
    pub fn pointer_length(&self) -> f64 {
        (self.frame.radius - self.thickness - POINTER_INSET).max(0.0)
    }

    /// The pointer triangle for `value`: left base corner, tip, right base corner.
    ///
    /// The base straddles the center, perpendicular to the pointing direction.
    pub fn pointer(&self, value: f64) -> [Point; 3] {
        let dir = self.angle(value);
        let c = self.frame.center;
        [
            polar_point(c, POINTER_HALF_WIDTH, dir - FRAC_PI_2),
            polar_point(c, self.pointer_length(), dir),
            polar_point(c, POINTER_HALF_WIDTH, dir + FRAC_PI_2),
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_4;

    use super::*;

    fn gauge(min: f64, max: f64) -> GaugeArc {
        let frame = RadialFrame {
            center: Point::new(150.0, 150.0),
            radius: 100.0,
        };
        GaugeArc::new(frame, 20.0, Domain::new(min, max))
    }

    #[test]
    fn range_maps_onto_the_upper_half_turn() {
        let g = gauge(0.0, 100.0);
        assert!((g.angle(0.0) + PI).abs() < 1e-12);
        assert!(g.angle(100.0).abs() < 1e-12);
        assert!((g.angle(75.0) + FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn angle_is_monotonic_and_clamped() {
        let g = gauge(-50.0, 50.0);
        let mut prev = g.angle(-50.0);
        for i in 1..=100 {
            let a = g.angle(-50.0 + f64::from(i));
            assert!(a >= prev);
            prev = a;
        }
        assert_eq!(g.angle(-1e6), g.angle(-50.0));
        assert_eq!(g.angle(1e6), g.angle(50.0));
    }

    #[test]
    fn degenerate_range_points_at_the_start() {
        let g = gauge(10.0, 10.0);
        assert_eq!(g.angle(10.0), GAUGE_START_ANGLE);
        assert_eq!(g.angle(99.0), GAUGE_START_ANGLE);
    }

    #[test]
    fn fill_sector_ends_at_the_value_angle() {
        let g = gauge(0.0, 100.0);
        let fill = g.fill(75.0);
        assert_eq!(fill.start_angle, GAUGE_START_ANGLE);
        assert!((fill.end_angle + FRAC_PI_4).abs() < 1e-12);
        assert_eq!(fill.inner_radius, 80.0);
        assert_eq!(fill.outer_radius, 100.0);
        assert!((g.background().sweep() - PI).abs() < 1e-12);
    }

    #[test]
    fn pointer_tip_follows_the_value() {
        let g = gauge(0.0, 100.0);
        let [left, tip, right] = g.pointer(75.0);
        assert_eq!(g.pointer_length(), 75.0);
        let expected = Point::new(
            150.0 + 75.0 * (-FRAC_PI_4).cos(),
            150.0 + 75.0 * (-FRAC_PI_4).sin(),
        );
        assert!((tip - expected).hypot() < 1e-9, "{tip:?}");
        assert!(((left - g.center()).hypot() - POINTER_HALF_WIDTH).abs() < 1e-9);
        assert!(((right - g.center()).hypot() - POINTER_HALF_WIDTH).abs() < 1e-9);
        // Base is perpendicular to the pointer.
        let base = right - left;
        let dir = tip - g.center();
        assert!((base.x * dir.x + base.y * dir.y).abs() < 1e-9);
    }

    #[test]
    fn thick_gauges_never_go_negative() {
        let frame = RadialFrame {
            center: Point::ZERO,
            radius: 10.0,
        };
        let g = GaugeArc::new(frame, 30.0, Domain::new(0.0, 1.0));
        assert_eq!(g.inner_radius(), 0.0);
        assert_eq!(g.pointer_length(), 0.0);
    }
}
