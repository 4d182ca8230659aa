// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `panelviz_charts_demo`.
//!
//! Primitives are written in scene order; later elements paint over earlier ones.

use std::fmt::Write as _;

use kurbo::Rect;
use panelviz_charts::Size;
use panelviz_core::{Primitive, Scene, StrokeStyle, TextAnchor, TextBaseline, TextPrimitive};
use peniko::Brush;

/// Padding added around the computed view box.
const VIEW_PAD: f64 = 10.0;

pub(crate) fn scene_to_svg(scene: &Scene, surface: Size) -> String {
    let surface_rect = Rect::new(0.0, 0.0, surface.width, surface.height);
    let view_box = scene
        .bounds()
        .map_or(surface_rect, |b| {
            surface_rect.union(b.inflate(VIEW_PAD, VIEW_PAD))
        });

    let mut out = open_svg(view_box);
    for primitive in scene {
        match primitive {
            Primitive::Circle(c) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    c.center.x, c.center.y, c.radius
                );
                write_paint_attr(&mut out, "fill", &c.fill);
                write_stroke(&mut out, c.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Line(l) => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    l.line.p0.x, l.line.p0.y, l.line.p1.x, l.line.p1.y
                );
                write_stroke(&mut out, Some(&l.stroke));
                out.push_str("/>\n");
            }
            Primitive::Polygon(p) => {
                let points: Vec<String> =
                    p.points.iter().map(|pt| format!("{},{}", pt.x, pt.y)).collect();
                let _ = write!(out, r#"<polygon points="{}""#, points.join(" "));
                write_paint_attr(&mut out, "fill", &p.fill);
                write_stroke(&mut out, p.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::ArcPath(a) => {
                let _ = write!(out, r#"<path d="{}""#, a.path.to_svg());
                write_paint_attr(&mut out, "fill", &a.fill);
                write_stroke(&mut out, a.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Rect(r) => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height()
                );
                write_paint_attr(&mut out, "fill", &r.fill);
                write_stroke(&mut out, r.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Text(t) => write_text(&mut out, t),
        }
    }
    out.push_str("</svg>\n");
    out
}

/// An SVG showing only a message, used when a render fails.
pub(crate) fn message_svg(message: &str, surface: Size) -> String {
    let mut out = open_svg(Rect::new(0.0, 0.0, surface.width, surface.height));
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill="#b00020">{}</text>"##,
        surface.width / 2.0,
        surface.height / 2.0,
        escape_xml(message)
    );
    out.push_str("</svg>\n");
    out
}

fn open_svg(view_box: Rect) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            "\n"
        ),
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    )
}

fn write_text(out: &mut String, t: &TextPrimitive) {
    let baseline = match t.baseline {
        TextBaseline::Auto => "auto",
        TextBaseline::Middle => "middle",
        TextBaseline::Hanging => "hanging",
    };
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        t.pos.x, t.pos.y, t.font_size
    );
    if t.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    if t.angle != 0.0 {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            t.angle, t.pos.x, t.pos.y
        );
    }
    write_paint_attr(out, "fill", &t.fill);
    out.push('>');
    out.push_str(&escape_xml(&t.text));
    out.push_str("</text>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn write_stroke(out: &mut String, stroke: Option<&StrokeStyle>) {
    let Some(stroke) = stroke else {
        return;
    };
    if stroke.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &stroke.brush);
        let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
