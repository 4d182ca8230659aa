// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc path geometry.
//!
//! Gauge sectors are described the way SVG describes them: move, elliptical arc (here always
//! circular), line, arc, close. Keeping the segments symbolic lets a rendering shell emit an SVG
//! `d` attribute directly, while [`ArcPath::to_bez_path`] flattens the same description into
//! `kurbo` curves for renderers that want Bézier paths.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, Point, Rect, Shape, SvgArc, Vec2};
use smallvec::SmallVec;

/// One segment of an [`ArcPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Circular arc from the current point to `to`.
    ArcTo {
        /// Arc radius.
        radius: f64,
        /// SVG large-arc flag.
        large_arc: bool,
        /// SVG sweep flag (`true` is clockwise in y-down screen space).
        sweep: bool,
        /// Arc end point.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered list of path segments made of lines and circular arcs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcPath {
    segments: SmallVec<[PathSegment; 5]>,
}

impl ArcPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move-to segment.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.segments.push(PathSegment::MoveTo(p.into()));
    }

    /// Appends a line-to segment.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.segments.push(PathSegment::LineTo(p.into()));
    }

    /// Appends a circular arc segment.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: impl Into<Point>) {
        self.segments.push(PathSegment::ArcTo {
            radius,
            large_arc,
            sweep,
            to: to.into(),
        });
    }

    /// Appends a close segment.
    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Converts the path into a `kurbo` Bézier path.
    ///
    /// Arcs are approximated with cubic segments within `tolerance`. An arc whose endpoints
    /// coincide or whose radius is zero degenerates to a straight line, matching SVG.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        let mut current = Point::ZERO;
        let mut start = Point::ZERO;
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    out.move_to(p);
                    current = p;
                    start = p;
                }
                PathSegment::LineTo(p) => {
                    out.line_to(p);
                    current = p;
                }
                PathSegment::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg = SvgArc {
                        from: current,
                        to,
                        radii: Vec2::new(radius, radius),
                        x_rotation: 0.0,
                        large_arc,
                        sweep,
                    };
                    match kurbo::Arc::from_svg_arc(&svg) {
                        Some(arc) => out.extend(arc.append_iter(tolerance)),
                        None => out.line_to(to),
                    }
                    current = to;
                }
                PathSegment::Close => {
                    out.close_path();
                    current = start;
                }
            }
        }
        out
    }

    /// Formats the path as SVG path data (`d` attribute).
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = match *segment {
                PathSegment::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
                PathSegment::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
                PathSegment::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A{radius} {radius} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                ),
                PathSegment::Close => write!(out, "Z"),
            };
        }
        out
    }

    /// Returns the bounding box of the flattened path.
    pub fn bounding_box(&self) -> Rect {
        self.to_bez_path(0.1).bounding_box()
    }
}
