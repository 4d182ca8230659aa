// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_4, PI};

use kurbo::Point;
use panelviz_core::{
    ArcPathPrimitive, Field, PathSegment, PolygonPrimitive, Primitive, QueryResult,
    RectPrimitive, Row, Scene, TextAnchor,
};
use panelviz_transforms::ValidationErrorKind;
use peniko::Brush;

use crate::color::MISSING_COLOR;
use crate::{
    Chart, ChartError, ConfigError, GaugeChart, GaugeConfig, HeatmapChart, HeatmapConfig,
    RadarChart, RadarConfig, Size,
};

const SQUARE: Size = Size::new(400.0, 400.0);

fn close_pt(a: Point, b: Point) -> bool {
    (a - b).hypot() <= 1e-9
}

fn texts(scene: &Scene) -> Vec<&str> {
    scene.texts().map(|t| t.text.as_str()).collect()
}

fn arc_paths(scene: &Scene) -> Vec<&ArcPathPrimitive> {
    scene
        .iter()
        .filter_map(|p| match p {
            Primitive::ArcPath(a) => Some(a),
            _ => None,
        })
        .collect()
}

fn polygons(scene: &Scene) -> Vec<&PolygonPrimitive> {
    scene
        .iter()
        .filter_map(|p| match p {
            Primitive::Polygon(poly) => Some(poly),
            _ => None,
        })
        .collect()
}

fn rects(scene: &Scene) -> Vec<&RectPrimitive> {
    scene
        .iter()
        .filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

fn gauge_query(value: impl Into<panelviz_core::Value>) -> QueryResult {
    QueryResult::new(
        vec![Field::new("region")],
        vec![Field::new("sales")],
        vec![Row::new().with("region", "EU").with("sales", value)],
    )
}

fn gauge(size: Size) -> GaugeChart {
    let mut chart = GaugeChart::new();
    chart.initialize(size);
    chart
}

#[test]
fn gauge_fill_and_pointer_track_the_value() {
    let scene = gauge(SQUARE)
        .render(&gauge_query(75.0), &GaugeConfig::default())
        .unwrap();
    // background, fill, pointer, value, min, max, title
    assert_eq!(scene.len(), 7);

    // R = 200 · 0.65, center below the title.
    let radius = 130.0;
    let center = Point::new(200.0, 30.0 + 25.0 + radius);
    let at = |r: f64, a: f64| Point::new(center.x + r * a.cos(), center.y + r * a.sin());

    let arcs = arc_paths(&scene);
    assert_eq!(arcs.len(), 2);
    let fill = arcs[1].path.segments();
    let PathSegment::MoveTo(start) = fill[0] else {
        panic!("expected MoveTo, got {:?}", fill[0]);
    };
    assert!(close_pt(start, at(radius, PI)), "{start:?}");
    let PathSegment::ArcTo { to, .. } = fill[1] else {
        panic!("expected ArcTo, got {:?}", fill[1]);
    };
    assert!(close_pt(to, at(radius, -FRAC_PI_4)), "{to:?}");

    let pointer = polygons(&scene)[0];
    assert_eq!(pointer.points.len(), 3);
    assert!(
        close_pt(pointer.points[1], at(radius - 20.0 - 5.0, -FRAC_PI_4)),
        "{:?}",
        pointer.points[1]
    );

    assert_eq!(texts(&scene), ["75.0", "0.0", "100.0", "KPI Progress"]);
    let value_label = scene.texts().next().unwrap();
    assert!(close_pt(value_label.pos, Point::new(200.0, center.y + 0.4 * radius)));
    assert!(value_label.bold);
    assert_eq!(value_label.anchor, TextAnchor::Middle);
}

#[test]
fn gauge_background_then_fill_then_pointer() {
    let config = GaugeConfig::default();
    let scene = gauge(SQUARE).render(&gauge_query(10.0), &config).unwrap();
    let kinds: Vec<&str> = scene
        .iter()
        .map(|p| match p {
            Primitive::ArcPath(_) => "arc",
            Primitive::Polygon(_) => "polygon",
            Primitive::Text(_) => "text",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        ["arc", "arc", "polygon", "text", "text", "text", "text"]
    );
    let arcs = arc_paths(&scene);
    assert_eq!(arcs[0].fill, Brush::from(config.gauge_color_background));
    assert_eq!(arcs[1].fill, Brush::from(config.gauge_color_fill));
}

#[test]
fn gauge_clamps_out_of_range_values() {
    let scene = gauge(SQUARE)
        .render(&gauge_query("250"), &GaugeConfig::default())
        .unwrap();
    assert_eq!(texts(&scene)[0], "100.0");

    let scene = gauge(SQUARE)
        .render(&gauge_query("not a number"), &GaugeConfig::default())
        .unwrap();
    assert_eq!(texts(&scene)[0], "0.0");
}

#[test]
fn gauge_options_come_from_a_json_bag() {
    let config: GaugeConfig = serde_json::from_str(
        r##"{
            "gauge_min": -10,
            "gauge_max": 10,
            "value_format_string": 0,
            "show_min_max_labels": false,
            "title_display": false,
            "pointer_color": ["#000000"]
        }"##,
    )
    .unwrap();
    let scene = gauge(SQUARE).render(&gauge_query(2.4), &config).unwrap();
    assert_eq!(scene.len(), 4);
    assert_eq!(texts(&scene), ["2"]);
    assert_eq!(polygons(&scene)[0].fill, Brush::Solid(peniko::Color::BLACK));
}

#[test]
fn gauge_rejects_an_inverted_range() {
    let config = GaugeConfig {
        gauge_min: 100.0,
        gauge_max: 0.0,
        ..GaugeConfig::default()
    };
    let err = gauge(SQUARE).render(&gauge_query(5.0), &config).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Config(ConfigError::InvertedGaugeRange { .. })
    ));
}

#[test]
fn validation_failure_produces_no_scene() {
    let result = QueryResult::new(
        vec![Field::new("region")],
        vec![Field::new("sales")],
        vec![Row::new().with("sales", 1.0), Row::new().with("sales", 2.0)],
    );
    let err = gauge(SQUARE)
        .render(&result, &GaugeConfig::default())
        .unwrap_err();
    let ChartError::Validation(inner) = &err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(inner.kind(), ValidationErrorKind::TooManyRows);
    assert!(
        err.to_string()
            .starts_with("This Single-Value Gauge visualization is designed for a single value."),
        "{err}"
    );
}

fn radar_query(values: &[f64]) -> QueryResult {
    let measures: Vec<Field> = ["speed", "power", "skill", "stamina"]
        .iter()
        .take(values.len())
        .map(|name| Field::new(*name))
        .collect();
    let mut row = Row::new().with("player", "Ada");
    for (m, v) in measures.iter().zip(values) {
        row.insert(m.name.clone(), *v);
    }
    QueryResult::new(vec![Field::new("player")], measures, vec![row])
}

fn radar(size: Size) -> RadarChart {
    let mut chart = RadarChart::new();
    chart.initialize(size);
    chart
}

#[test]
fn radar_auto_max_pads_the_largest_value() {
    let values = [10.0, 20.0, 5.0, 15.0];
    let scene = radar(SQUARE)
        .render(&radar_query(&values), &RadarConfig::default())
        .unwrap();
    // 5 rings, 4 × (axis, label, 5 ticks), polygon, 4 dots, title.
    assert_eq!(scene.len(), 5 + 4 * 7 + 1 + 4 + 1);

    // R = 200 · 0.7, center below the title.
    let radius = 140.0;
    let center = Point::new(200.0, 30.0 + 50.0 + radius);
    let polygon = polygons(&scene)[0];
    assert_eq!(polygon.points.len(), 4);
    for (p, v) in polygon.points.iter().zip(values) {
        let r = (*p - center).hypot();
        assert!((r - radius * v / 22.0).abs() < 1e-9, "{r}");
    }
    // Slot 0 is straight up.
    assert!((polygon.points[0].x - center.x).abs() < 1e-9);
    assert!(polygon.points[0].y < center.y);

    let labels = texts(&scene);
    // Axis label, then ticks at 22/5 · k.
    assert_eq!(labels[..6], ["speed", "4.4", "8.8", "13.2", "17.6", "22.0"]);
    assert_eq!(*labels.last().unwrap(), "Performance Overview: Ada");
}

#[test]
fn radar_paints_rings_axes_polygon_dots_title() {
    let config = RadarConfig {
        show_value_labels: false,
        levels: 3.0,
        ..RadarConfig::default()
    };
    let scene = radar(SQUARE)
        .render(&radar_query(&[1.0, 2.0, 3.0]), &config)
        .unwrap();
    let kinds: Vec<&str> = scene
        .iter()
        .map(|p| match p {
            Primitive::Circle(c) if c.stroke.as_ref().is_some_and(|s| s.stroke_width == 0.5) => {
                "ring"
            }
            Primitive::Circle(_) => "dot",
            Primitive::Line(_) => "axis",
            Primitive::Text(_) => "text",
            Primitive::Polygon(_) => "polygon",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "ring", "ring", "ring", "axis", "text", "axis", "text", "axis", "text", "polygon",
            "dot", "dot", "dot", "text"
        ]
    );
}

#[test]
fn radar_fixed_max_overrides_the_data() {
    let config = RadarConfig {
        max_value: Some(40.0),
        show_value_labels: false,
        title_display: false,
        ..RadarConfig::default()
    };
    let scene = radar(SQUARE)
        .render(&radar_query(&[10.0, 20.0]), &config)
        .unwrap();
    let center = Point::new(200.0, 220.0);
    let polygon = polygons(&scene)[0];
    assert!(((polygon.points[1] - center).hypot() - 70.0).abs() < 1e-9);
}

#[test]
fn rendering_twice_gives_identical_scenes() {
    let chart = radar(Size::new(640.0, 480.0));
    let data = radar_query(&[3.0, 1.0, 4.0]);
    let config = RadarConfig::default();
    let a = chart.render(&data, &config).unwrap();
    let b = chart.render(&data, &config).unwrap();
    assert_eq!(a, b);
}

fn heatmap_query(rows: &[(&str, &str, f64)]) -> QueryResult {
    QueryResult::new(
        vec![Field::new("x"), Field::new("y")],
        vec![Field::new("v")],
        rows.iter()
            .map(|(x, y, v)| Row::new().with("x", *x).with("y", *y).with("v", *v))
            .collect(),
    )
}

fn heatmap(size: Size) -> HeatmapChart {
    let mut chart = HeatmapChart::new();
    chart.initialize(size);
    chart
}

#[test]
fn heatmap_extremes_get_the_end_colors() {
    let config = HeatmapConfig::default();
    let scene = heatmap(SQUARE)
        .render(&heatmap_query(&[("A", "P", 1.0), ("A", "Q", 3.0)]), &config)
        .unwrap();
    let cells = rects(&scene);
    assert_eq!(cells.len(), 2);
    // Row-major: (A, P) then (A, Q).
    assert_eq!(cells[0].fill, Brush::from(config.min_color));
    assert_eq!(cells[1].fill, Brush::from(config.max_color));
    assert_eq!(texts(&scene), ["1.0", "3.0", "P", "Q", "A"]);
}

#[test]
fn heatmap_missing_crossings_are_neutral_and_unlabeled() {
    let scene = heatmap(SQUARE)
        .render(
            &heatmap_query(&[("A", "P", 1.0), ("B", "Q", 2.0)]),
            &HeatmapConfig::default(),
        )
        .unwrap();
    let cells = rects(&scene);
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[1].fill, Brush::Solid(MISSING_COLOR));
    assert_eq!(cells[2].fill, Brush::Solid(MISSING_COLOR));
    assert_eq!(texts(&scene), ["1.0", "2.0", "P", "Q", "A", "B"]);
}

#[test]
fn heatmap_with_equal_values_uses_the_unit_domain() {
    let config = HeatmapConfig {
        show_cell_values: false,
        ..HeatmapConfig::default()
    };
    let scene = heatmap(SQUARE)
        .render(&heatmap_query(&[("A", "P", 5.0), ("B", "P", 5.0)]), &config)
        .unwrap();
    for cell in rects(&scene) {
        assert_eq!(cell.fill, Brush::from(config.max_color));
    }
}

#[test]
fn heatmap_rotates_crowded_x_labels() {
    let xs = ["a", "b", "c", "d", "e", "f"];
    let rows: Vec<(&str, &str, f64)> = xs.iter().map(|x| (*x, "row", 1.0)).collect();
    let config = HeatmapConfig {
        show_cell_values: false,
        show_y_axis_labels: false,
        ..HeatmapConfig::default()
    };
    let scene = heatmap(Size::new(520.0, 400.0))
        .render(&heatmap_query(&rows), &config)
        .unwrap();
    let labels: Vec<_> = scene.texts().collect();
    assert_eq!(labels.len(), 6);
    for label in labels {
        assert_eq!(label.angle, 45.0);
        assert_eq!(label.anchor, TextAnchor::Start);
    }
}

#[test]
fn heatmap_requires_two_dimensions() {
    let result = QueryResult::new(
        vec![Field::new("x")],
        vec![Field::new("v")],
        vec![Row::new().with("x", "A").with("v", 1.0)],
    );
    let err = heatmap(SQUARE)
        .render(&result, &HeatmapConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Validation(ref e) if e.kind() == ValidationErrorKind::MissingDimension
    ));
}

#[test]
fn heatmap_mid_color_marks_the_midpoint() {
    let config = HeatmapConfig {
        use_mid_color: true,
        show_cell_values: false,
        ..HeatmapConfig::default()
    };
    let scene = heatmap(SQUARE)
        .render(
            &heatmap_query(&[("A", "P", 0.0), ("B", "P", 5.0), ("C", "P", 10.0)]),
            &config,
        )
        .unwrap();
    let cells = rects(&scene);
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].fill, Brush::from(config.min_color));
    assert_eq!(cells[1].fill, Brush::from(config.mid_color));
    assert_eq!(cells[2].fill, Brush::from(config.max_color));
}

#[test]
fn heatmap_cell_labels_round_halves_up() {
    let scene = heatmap(SQUARE)
        .render(
            &heatmap_query(&[("A", "P", 0.25), ("A", "Q", 0.75)]),
            &HeatmapConfig::default(),
        )
        .unwrap();
    assert_eq!(texts(&scene), ["0.3", "0.8", "P", "Q", "A"]);
}

#[test]
fn gauge_value_label_rounds_halves_up() {
    let config = GaugeConfig {
        value_format_string: 0.0,
        ..GaugeConfig::default()
    };
    let scene = gauge(SQUARE).render(&gauge_query(2.5), &config).unwrap();
    assert_eq!(texts(&scene), ["3", "0", "100", "KPI Progress"]);
}
