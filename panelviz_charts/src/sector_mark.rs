// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (annulus arc) mark generation.
//!
//! A sector is the region between two concentric arcs. The path runs along the outer arc
//! clockwise, steps in to the inner radius, runs back along the inner arc counter-clockwise,
//! and closes. Angles are in radians with `0` pointing right and positive angles turning
//! clockwise (screen space, y down).

use core::f64::consts::{PI, TAU};

use kurbo::Point;
use panelviz_core::{ArcPath, ArcPathPrimitive, StrokeStyle};
use peniko::{Brush, Color};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    let a = if a < 0.0 { a + TAU } else { a };
    // A tiny negative remainder rounds up to a full turn.
    if a >= TAU { 0.0 } else { a }
}

/// Returns the point at `angle` on the circle of `radius` around `center`.
pub(crate) fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// An annulus sector.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius in scene coordinates (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius in scene coordinates.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Fill paint for the sector.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::Solid(Color::BLACK),
            stroke: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns the clockwise sweep from the start to the end angle, in `[0, 2π)`.
    pub fn sweep(&self) -> f64 {
        let sweep = normalize_angle(self.end_angle) - normalize_angle(self.start_angle);
        if sweep < 0.0 { sweep + TAU } else { sweep }
    }

    /// Builds the sector outline.
    ///
    /// Both arcs share the large-arc flag, set only when the sweep exceeds `π`.
    pub fn path(&self) -> ArcPath {
        let start = normalize_angle(self.start_angle);
        let end = normalize_angle(self.end_angle);
        let large_arc = self.sweep() > PI;

        let mut path = ArcPath::new();
        path.move_to(polar_point(self.center, self.outer_radius, start));
        path.arc_to(
            self.outer_radius,
            large_arc,
            true,
            polar_point(self.center, self.outer_radius, end),
        );
        path.line_to(polar_point(self.center, self.inner_radius, end));
        path.arc_to(
            self.inner_radius,
            large_arc,
            false,
            polar_point(self.center, self.inner_radius, start),
        );
        path.close();
        path
    }

    /// Generates the primitive.
    pub fn primitive(&self) -> ArcPathPrimitive {
        ArcPathPrimitive {
            path: self.path(),
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use panelviz_core::PathSegment;
    use peniko::color::palette::css;

    use super::*;

    fn close_pt(a: Point, b: Point) -> bool {
        (a - b).hypot() <= 1e-9
    }

    #[test]
    fn normalize_maps_into_one_turn() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-12);
        let a = normalize_angle(-7.0 * TAU - 0.5);
        assert!((0.0..TAU).contains(&a), "{a}");
        assert_eq!(normalize_angle(-1e-18), 0.0);
        assert_eq!(normalize_angle(-TAU), 0.0);
    }

    #[test]
    fn upper_half_ring_path() {
        let sector = SectorMarkSpec::new(Point::new(100.0, 100.0), 30.0, 50.0, -PI, 0.0)
            .with_fill(css::SILVER);
        let path = sector.path();
        let segs = path.segments();
        assert_eq!(segs.len(), 5);

        let PathSegment::MoveTo(start) = segs[0] else {
            panic!("expected MoveTo, got {:?}", segs[0]);
        };
        assert!(close_pt(start, Point::new(50.0, 100.0)), "{start:?}");

        let PathSegment::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        } = segs[1]
        else {
            panic!("expected ArcTo, got {:?}", segs[1]);
        };
        assert_eq!(radius, 50.0);
        assert!(!large_arc);
        assert!(sweep);
        assert!(close_pt(to, Point::new(150.0, 100.0)), "{to:?}");

        let PathSegment::LineTo(inner_end) = segs[2] else {
            panic!("expected LineTo, got {:?}", segs[2]);
        };
        assert!(close_pt(inner_end, Point::new(130.0, 100.0)), "{inner_end:?}");

        let PathSegment::ArcTo {
            radius, sweep, to, ..
        } = segs[3]
        else {
            panic!("expected ArcTo, got {:?}", segs[3]);
        };
        assert_eq!(radius, 30.0);
        assert!(!sweep);
        assert!(close_pt(to, Point::new(70.0, 100.0)), "{to:?}");
        assert_eq!(segs[4], PathSegment::Close);

        // The clockwise outer arc passes over the top of the center.
        let bounds = path.bounding_box();
        assert!((bounds.y0 - 50.0).abs() < 1e-3, "{bounds:?}");
        assert!(bounds.y1 <= 100.0 + 1e-9, "{bounds:?}");
    }

    #[test]
    fn large_arc_flag_only_beyond_half_turn() {
        let c = Point::ZERO;
        assert!((SectorMarkSpec::new(c, 1.0, 2.0, -PI, 0.0).sweep() - PI).abs() < 1e-12);
        let small = SectorMarkSpec::new(c, 1.0, 2.0, 0.0, FRAC_PI_2).path();
        let big = SectorMarkSpec::new(c, 1.0, 2.0, 0.0, 3.0 * FRAC_PI_2).path();
        assert!(matches!(
            small.segments()[1],
            PathSegment::ArcTo {
                large_arc: false,
                ..
            }
        ));
        assert!(matches!(
            big.segments()[1],
            PathSegment::ArcTo {
                large_arc: true,
                ..
            }
        ));
    }

    #[test]
    fn primitive_carries_paint() {
        let prim = SectorMarkSpec::new(Point::ZERO, 5.0, 10.0, -PI, -FRAC_PI_2)
            .with_fill(css::TOMATO)
            .with_stroke(StrokeStyle::solid(css::BLACK, 2.0))
            .primitive();
        assert_eq!(prim.fill, css::TOMATO.into());
        assert_eq!(prim.stroke, Some(StrokeStyle::solid(css::BLACK, 2.0)));
    }
}
