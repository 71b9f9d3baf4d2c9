// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracks drawn as polylines.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use rangeplot_axis::{DataBounds, FillStyle, FrameContext, Paintable, Painter, StrokeStyle};

use crate::series::MARKER_SIZE;

/// Styling for [`TrajectorySeries`].
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryStyle {
    /// Line stroke.
    pub stroke: StrokeStyle,
    /// Marker fill, used when the track has a single point.
    pub marker_fill: FillStyle,
}

impl Default for TrajectoryStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLUE, 1.0),
            marker_fill: FillStyle::new(css::BLUE),
        }
    }
}

impl TrajectoryStyle {
    /// Uses `color` for both line and marker.
    pub fn with_color(mut self, color: peniko::Color) -> Self {
        self.stroke.brush = color.into();
        self.marker_fill.brush = color.into();
        self
    }
}

/// A track through data space.
///
/// A one-point track is drawn as a small square marker, anything longer as a
/// polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectorySeries {
    points: Vec<Point>,
    bounds: Option<DataBounds>,
    /// Styling.
    pub style: TrajectoryStyle,
}

impl TrajectorySeries {
    /// Replaces the track. Empty input is ignored.
    pub fn set_data(&mut self, points: impl Into<Vec<Point>>) {
        let points = points.into();
        if points.is_empty() {
            return;
        }
        self.bounds = DataBounds::of_points(&points);
        self.points = points;
    }

    /// Drops the track.
    pub fn clear(&mut self) {
        self.points.clear();
        self.bounds = None;
    }

    /// Track points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the track is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data extents.
    pub fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }
}

impl Paintable for TrajectorySeries {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        match self.points.as_slice() {
            [] => {}
            [only] => {
                let marker = Rect::from_center_size(
                    frame.data_to_surface(*only),
                    (MARKER_SIZE, MARKER_SIZE),
                );
                painter.draw_rect(marker, &self.style.stroke, Some(&self.style.marker_fill));
            }
            points => {
                let line: Vec<_> = points.iter().map(|p| frame.data_to_surface(*p)).collect();
                painter.draw_polyline(&line, &self.style.stroke);
            }
        }
    }
}
