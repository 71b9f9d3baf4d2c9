// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range/bearing charts built on [`rangeplot_axis`].
//!
//! A [`Chart`] owns a horizontal primary axis, an inverted vertical secondary
//! axis, a set of data series and a text layer. Painting goes through the
//! [`Painter`](rangeplot_axis::Painter) trait in three passes: data first, then
//! the grid, then all text (tick labels included) on top.
//!
//! Series kinds:
//! - [`PolygonSeries`]: closed dashed outlines, e.g. coverage areas.
//! - [`TrajectorySeries`]: polylines, e.g. a track.
//! - [`ProfileSeries`]: a filled height curve that can feed pointer readouts.
//! - [`PointSeries`]: square markers with a distinguished origin point.
//!
//! ```
//! use kurbo::{Point, Size};
//! use rangeplot_chart::{Chart, SeriesKind};
//!
//! let mut chart = Chart::default();
//! let track = chart.add_series(SeriesKind::Trajectory);
//! chart
//!     .series_mut(track)
//!     .unwrap()
//!     .set_data([Point::new(-3.0, 0.0), Point::new(1.0, 4.0)]);
//! chart.resize(Size::new(700.0, 300.0));
//! chart.replot();
//!
//! assert_eq!(chart.primary_axis().min(), -3.0);
//! let readout = chart.pointer_moved(Point::new(525.0, 150.0)).unwrap();
//! assert!((readout.y - 2.0).abs() < 1e-9);
//! ```

#![no_std]

extern crate alloc;

mod chart;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod points;
mod polygon;
mod profile;
mod series;
mod text_layer;
mod trajectory;

pub use chart::{Chart, LABEL_GAP_X, LABEL_GAP_Y, Readout};
pub use config::{AxisConfig, ChartConfig, Corner};
pub use error::ChartError;
pub use points::{MarkerStyle, PointSeries, PointStyle};
pub use polygon::{PolygonSeries, PolygonStyle};
pub use profile::{ProfileSeries, ProfileStyle};
pub use series::{MARKER_SIZE, Series, SeriesId, SeriesKind, SeriesSet};
pub use text_layer::{TextItem, TextLayer};
pub use trajectory::{TrajectorySeries, TrajectoryStyle};
