// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample range/bearing chart to `rangeplot_demo.svg`.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see step resolution and layout.

mod svg;

use std::path::PathBuf;

use kurbo::{Point, Size};
use peniko::color::palette::css;
use rangeplot_axis::{GridStyle, StrokeStyle};
use rangeplot_chart::{AxisConfig, Chart, ChartConfig, ChartError, Corner, SeriesKind};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

const OUTPUT: &str = "rangeplot_demo.svg";

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Chart(#[from] ChartError),
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut chart = sample_chart()?;
    let mut painter = svg::SvgPainter::new(Size::new(700.0, 300.0));
    chart.paint(&mut painter);

    let path = PathBuf::from(OUTPUT);
    std::fs::write(&path, painter.to_svg_string())
        .map_err(|source| DemoError::Write { path: path.clone(), source })?;
    tracing::info!(path = %path.display(), "wrote chart");

    for pointer in [
        Point::new(100.0, 270.0),
        Point::new(350.0, 150.0),
        Point::new(525.0, 40.0),
    ] {
        if let Some(readout) = chart.pointer_moved(pointer) {
            tracing::info!(
                x = readout.x,
                y = readout.y,
                bearing_deg = readout.angle.to_degrees(),
                "pointer at ({}, {})",
                pointer.x,
                pointer.y
            );
        }
    }
    Ok(())
}

fn sample_chart() -> Result<Chart, DemoError> {
    let zero_line = StrokeStyle::solid(css::RED, 1.0);
    let grid = GridStyle::default().with_zero_line(zero_line);
    let config = ChartConfig::default()
        .with_primary(AxisConfig::primary().with_grid(grid.clone()))
        .with_secondary(AxisConfig::secondary().with_grid(grid))
        .with_corner(Corner::BottomLeft)
        .with_angle_lines(true);
    let mut chart = Chart::new(config);

    let profile = chart.add_series(SeriesKind::Profile);
    let heights: Vec<_> = (0..5)
        .map(|i| {
            let offset = if i % 2 == 0 { 0.5 } else { -0.5 };
            Point::new(f64::from(i) - 3.0, f64::from(i) + offset)
        })
        .collect();
    if let Some(series) = chart.series_mut(profile) {
        series.set_data(heights);
    }
    chart.set_height_series(profile)?;

    let track = chart.add_series(SeriesKind::Trajectory);
    if let Some(series) = chart.series_mut(track) {
        series.set_data([
            Point::new(-2.8, 3.9),
            Point::new(-1.5, 3.2),
            Point::new(-0.2, 3.6),
            Point::new(0.8, 2.9),
        ]);
    }

    let contacts = chart.add_series(SeriesKind::Points);
    if let Some(series) = chart.series_mut(contacts) {
        series.set_data([Point::new(0.0, 0.5), Point::new(-2.2, 2.0), Point::new(0.6, 1.2)]);
    }

    chart.add_annotation(Point::new(-1.0, 2.5), "ridge");
    chart.replot();
    Ok(chart)
}
