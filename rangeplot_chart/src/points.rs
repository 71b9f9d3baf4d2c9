// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scattered position markers.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use rangeplot_axis::{DataBounds, FillStyle, FrameContext, Paintable, Painter, StrokeStyle};

use crate::series::MARKER_SIZE;

/// Stroke and fill of one marker kind.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Outline.
    pub stroke: StrokeStyle,
    /// Interior.
    pub fill: FillStyle,
}

impl MarkerStyle {
    /// Outline and interior in one color.
    pub fn solid(color: peniko::Color) -> Self {
        Self {
            stroke: StrokeStyle::solid(color, 1.0),
            fill: FillStyle::new(color),
        }
    }
}

/// Styling for [`PointSeries`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    /// The first point (the origin, e.g. the observer's own position).
    pub origin: MarkerStyle,
    /// All other points.
    pub marker: MarkerStyle,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            origin: MarkerStyle::solid(css::GREEN),
            marker: MarkerStyle::solid(css::RED),
        }
    }
}

/// Square markers; the first point is the distinguished origin point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSeries {
    points: Vec<Point>,
    bounds: Option<DataBounds>,
    /// Styling.
    pub style: PointStyle,
}

impl PointSeries {
    /// Replaces the points. Empty input is ignored.
    pub fn set_data(&mut self, points: impl Into<Vec<Point>>) {
        let points = points.into();
        if points.is_empty() {
            return;
        }
        self.bounds = DataBounds::of_points(&points);
        self.points = points;
    }

    /// Drops the points.
    pub fn clear(&mut self) {
        self.points.clear();
        self.bounds = None;
    }

    /// The points, origin first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data extents.
    pub fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }
}

impl Paintable for PointSeries {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        for (i, p) in self.points.iter().enumerate() {
            let style = if i == 0 {
                &self.style.origin
            } else {
                &self.style.marker
            };
            let rect =
                Rect::from_center_size(frame.data_to_surface(*p), (MARKER_SIZE, MARKER_SIZE));
            painter.draw_rect(rect, &style.stroke, Some(&style.fill));
        }
    }
}
