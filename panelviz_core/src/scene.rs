// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene primitives.
//!
//! A [`Scene`] is the complete output of one chart render: a flat sequence of primitives with
//! absolute coordinates and resolved paint. Paint order is sequence order; later primitives draw
//! on top of earlier ones. There is no z-index and no grouping.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::path::ArcPath;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The font's alphabetic baseline sits on the anchor point.
    #[default]
    Auto,
    /// Text is vertically centered on the anchor point.
    Middle,
    /// The top of the text hangs from the anchor point.
    Hanging,
}

/// Stroke paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Creates a solid stroke.
    pub fn solid(color: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: color.into(),
            stroke_width,
        }
    }
}

/// A filled and/or stroked circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePrimitive {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill paint; transparent for an outline-only circle.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePrimitive {
    /// Segment geometry.
    pub line: Line,
    /// Stroke paint and width.
    pub stroke: StrokeStyle,
}

/// A closed polygon.
///
/// Points are listed in drawing order; the polygon is implicitly closed.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonPrimitive {
    /// Vertices in drawing order.
    pub points: SmallVec<[Point; 8]>,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// A filled path made of lines and circular arcs.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcPathPrimitive {
    /// Path geometry.
    pub path: ArcPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPrimitive {
    /// Rectangle geometry.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPrimitive {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Whether the text is drawn in a bold weight.
    pub bold: bool,
    /// Rotation in degrees about `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// A drawable unit of a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A circle.
    Circle(CirclePrimitive),
    /// A line segment.
    Line(LinePrimitive),
    /// A closed polygon.
    Polygon(PolygonPrimitive),
    /// A path of lines and arcs.
    ArcPath(ArcPathPrimitive),
    /// A text label.
    Text(TextPrimitive),
    /// A rectangle.
    Rect(RectPrimitive),
}

impl Primitive {
    /// Returns an approximate bounding box in scene coordinates.
    ///
    /// Stroke width is ignored. Text bounds are estimated with [`estimate_text_bounds`].
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Circle(c) => kurbo::Circle::new(c.center, c.radius).bounding_box(),
            Self::Line(l) => l.line.bounding_box(),
            Self::Polygon(p) => {
                let mut points = p.points.iter().copied();
                let Some(first) = points.next() else {
                    return Rect::ZERO;
                };
                points.fold(Rect::from_points(first, first), |r, pt| {
                    r.union_pt(pt)
                })
            }
            Self::ArcPath(a) => a.path.bounding_box(),
            Self::Text(t) => {
                estimate_text_bounds(t.pos, t.font_size, t.anchor, t.baseline, &t.text)
            }
            Self::Rect(r) => r.rect,
        }
    }

    /// Returns the fill paint, if the primitive has one.
    pub fn fill(&self) -> Option<&Brush> {
        match self {
            Self::Circle(c) => Some(&c.fill),
            Self::Line(_) => None,
            Self::Polygon(p) => Some(&p.fill),
            Self::ArcPath(a) => Some(&a.fill),
            Self::Text(t) => Some(&t.fill),
            Self::Rect(r) => Some(&r.fill),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    CirclePrimitive => Circle,
    LinePrimitive => Line,
    PolygonPrimitive => Polygon,
    ArcPathPrimitive => ArcPath,
    TextPrimitive => Text,
    RectPrimitive => Rect,
);

/// An ordered sequence of primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive on top of everything already in the scene.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Returns the primitives in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns an iterator over the primitives in paint order.
    pub fn iter(&self) -> core::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Returns the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Returns the union of all primitive bounds, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        self.primitives
            .iter()
            .map(Primitive::bounds)
            .reduce(|a, b| a.union(b))
    }

    /// Returns the text primitives in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = core::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

impl IntoIterator for Scene {
    type Item = Primitive;
    type IntoIter = alloc::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}

/// Estimates the extent of a line of text without shaping it.
///
/// Assumes an average glyph width of `0.6em` and a line box of `1em`. Good enough for view-box
/// computation; not suitable for collision checks.
pub fn estimate_text_bounds(
    pos: Point,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    let width = 0.6 * font_size * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_mid = match baseline {
        TextBaseline::Middle => pos.y,
        TextBaseline::Auto => pos.y - 0.3 * font_size,
        TextBaseline::Hanging => pos.y + 0.3 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (pos.x, pos.x + width),
        TextAnchor::Middle => (pos.x - 0.5 * width, pos.x + 0.5 * width),
        TextAnchor::End => (pos.x - width, pos.x),
    };
    Rect::new(x0, y_mid - half_height, x1, y_mid + half_height)
}

impl Default for TextPrimitive {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            text: String::new(),
            font_size: 12.0,
            bold: false,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Auto,
            fill: Brush::Solid(Color::BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn push_preserves_paint_order() {
        let mut scene = Scene::new();
        scene.push(RectPrimitive {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: css::RED.into(),
            stroke: None,
        });
        scene.push(CirclePrimitive {
            center: Point::new(5.0, 5.0),
            radius: 2.0,
            fill: css::BLUE.into(),
            stroke: None,
        });
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.primitives()[0], Primitive::Rect(_)));
        assert!(matches!(scene.primitives()[1], Primitive::Circle(_)));
    }

    #[test]
    fn bounds_union_covers_every_primitive() {
        let mut scene = Scene::new();
        scene.push(LinePrimitive {
            line: Line::new((0.0, 0.0), (10.0, 5.0)),
            stroke: StrokeStyle::solid(css::BLACK, 1.0),
        });
        scene.push(PolygonPrimitive {
            points: smallvec![
                Point::new(-5.0, 2.0),
                Point::new(3.0, 20.0),
                Point::new(4.0, 1.0)
            ],
            fill: css::GREEN.into(),
            stroke: None,
        });
        assert_eq!(scene.bounds(), Some(Rect::new(-5.0, 0.0, 10.0, 20.0)));
        assert_eq!(Scene::new().bounds(), None);
    }

    #[test]
    fn text_bounds_follow_anchor() {
        let pos = Point::new(100.0, 50.0);
        let start = estimate_text_bounds(pos, 10.0, TextAnchor::Start, TextBaseline::Middle, "ab");
        let end = estimate_text_bounds(pos, 10.0, TextAnchor::End, TextBaseline::Middle, "ab");
        assert_eq!(start, Rect::new(100.0, 45.0, 112.0, 55.0));
        assert_eq!(end, Rect::new(88.0, 45.0, 100.0, 55.0));
    }
}
