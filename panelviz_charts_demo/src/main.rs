// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `panelviz_charts`.
//!
//! Renders each sample fixture to an SVG file in the directory given as the first argument
//! (default: the current directory). Set `RUST_LOG=panelviz_charts=debug` to see layout
//! events.

mod svg;

use std::path::{Path, PathBuf};

use panelviz_charts::{Chart, GaugeChart, HeatmapChart, RadarChart, Size};
use panelviz_core::QueryResult;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

struct Sample {
    name: &'static str,
    size: Size,
    data: &'static str,
    options: &'static str,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        name: "gauge",
        size: Size::new(400.0, 300.0),
        data: include_str!("../fixtures/gauge.json"),
        options: include_str!("../fixtures/gauge_options.json"),
    },
    Sample {
        name: "radar",
        size: Size::new(500.0, 500.0),
        data: include_str!("../fixtures/radar.json"),
        options: include_str!("../fixtures/radar_options.json"),
    },
    Sample {
        name: "heatmap",
        size: Size::new(640.0, 360.0),
        data: include_str!("../fixtures/heatmap.json"),
        options: include_str!("../fixtures/heatmap_options.json"),
    },
];

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> DemoResult<T> {
    serde_json::from_str(json).map_err(|e| format!("{what}: {e}").into())
}

fn render<C: Chart>(mut chart: C, sample: &Sample) -> DemoResult<String>
where
    C::Config: DeserializeOwned,
{
    let data: QueryResult = parse(sample.name, sample.data)?;
    let config: C::Config = parse(sample.name, sample.options)?;
    chart.initialize(sample.size);
    Ok(match chart.render(&data, &config) {
        Ok(scene) => svg::scene_to_svg(&scene, sample.size),
        Err(err) => {
            tracing::warn!(chart = sample.name, %err, "render failed");
            svg::message_svg(&err.to_string(), sample.size)
        }
    })
}

fn write_svg(dir: &Path, name: &str, svg: &str) -> DemoResult<()> {
    let path = dir.join(format!("panelviz_{name}.svg"));
    std::fs::write(&path, svg)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> DemoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&dir)?;

    let [gauge, radar, heatmap] = &SAMPLES;
    write_svg(&dir, gauge.name, &render(GaugeChart::new(), gauge)?)?;
    write_svg(&dir, radar.name, &render(RadarChart::new(), radar)?)?;
    write_svg(&dir, heatmap.name, &render(HeatmapChart::new(), heatmap)?)?;

    // A heatmap needs two dimensions; this shows the message a host would display instead.
    let invalid = Sample {
        name: "heatmap_invalid",
        data: include_str!("../fixtures/gauge.json"),
        ..SAMPLES[2]
    };
    write_svg(&dir, invalid.name, &render(HeatmapChart::new(), &invalid)?)?;

    Ok(())
}
