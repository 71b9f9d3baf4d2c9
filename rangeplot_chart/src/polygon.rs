// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed outlines (coverage zones, sectors).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Fill;
use peniko::color::palette::css;
use rangeplot_axis::{
    DataBounds, FillStyle, FrameContext, LineDash, Paintable, Painter, StrokeStyle,
};

/// Styling for [`PolygonSeries`].
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonStyle {
    /// Outline stroke.
    pub stroke: StrokeStyle,
    /// Optional interior fill. Overlapping parts cancel out (even-odd).
    pub fill: Option<FillStyle>,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLUE, 1.0).with_dash(LineDash::Dash),
            fill: None,
        }
    }
}

impl PolygonStyle {
    /// Fills the interior with `brush` using the even-odd rule.
    pub fn with_fill(mut self, brush: impl Into<peniko::Brush>) -> Self {
        self.fill = Some(FillStyle::new(brush).with_rule(Fill::EvenOdd));
        self
    }
}

/// A single closed polygon in data coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSeries {
    points: Vec<Point>,
    bounds: Option<DataBounds>,
    /// Styling.
    pub style: PolygonStyle,
}

impl PolygonSeries {
    /// Replaces the outline. Empty input is ignored.
    pub fn set_data(&mut self, points: impl Into<Vec<Point>>) {
        let points = points.into();
        if points.is_empty() {
            return;
        }
        self.bounds = DataBounds::of_points(&points);
        self.points = points;
    }

    /// Drops the outline.
    pub fn clear(&mut self) {
        self.points.clear();
        self.bounds = None;
    }

    /// Outline vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether there is no outline.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data extents.
    pub fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }
}

impl Paintable for PolygonSeries {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        if self.points.is_empty() {
            return;
        }
        let outline: Vec<_> = self
            .points
            .iter()
            .map(|p| frame.data_to_surface(*p))
            .collect();
        painter.draw_polygon(&outline, &self.style.stroke, self.style.fill.as_ref());
    }
}
