// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height profiles along the primary axis.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use rangeplot_axis::{DataBounds, FillStyle, FrameContext, Paintable, Painter, StrokeStyle};

/// Styling for [`ProfileSeries`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileStyle {
    /// Outline stroke.
    pub stroke: StrokeStyle,
    /// Area fill.
    pub fill: FillStyle,
}

impl Default for ProfileStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::DARK_GREEN, 2.0),
            fill: FillStyle::new(css::GREEN),
        }
    }
}

/// A height curve `y(x)` drawn as a filled area down to `y = 0`.
///
/// The stored curve is closed to the baseline: `(first.x, 0)` is prepended and
/// `(last.x, 0)` appended. Bounds cover only the supplied points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSeries {
    curve: Vec<Point>,
    bounds: Option<DataBounds>,
    /// Styling.
    pub style: ProfileStyle,
}

impl ProfileSeries {
    /// Replaces the profile. Fewer than two points are ignored.
    pub fn set_data(&mut self, points: impl Into<Vec<Point>>) {
        let points = points.into();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        if points.len() < 2 {
            return;
        }
        self.bounds = DataBounds::of_points(&points);

        let mut curve = Vec::with_capacity(points.len() + 2);
        curve.push(Point::new(first.x, 0.0));
        curve.extend_from_slice(&points);
        curve.push(Point::new(last.x, 0.0));
        self.curve = curve;
    }

    /// Drops the profile.
    pub fn clear(&mut self) {
        self.curve.clear();
        self.bounds = None;
    }

    /// The closed curve, baseline points included.
    pub fn curve(&self) -> &[Point] {
        &self.curve
    }

    /// Whether no profile is set.
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Extents of the supplied points.
    pub fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }

    /// Height at `x`.
    ///
    /// Returns the `y` of the last curve vertex `i` with
    /// `curve[i].x <= x < curve[i + 1].x` (a step function over the vertices),
    /// or `0` when no segment contains `x`.
    pub fn height_value(&self, x: f64) -> f64 {
        self.curve
            .windows(2)
            .rev()
            .find(|w| w[0].x <= x && x < w[1].x)
            .map_or(0.0, |w| w[0].y)
    }
}

impl Paintable for ProfileSeries {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        if self.curve.is_empty() {
            return;
        }
        let area: Vec<_> = self
            .curve
            .iter()
            .map(|p| frame.data_to_surface(*p))
            .collect();
        painter.draw_polygon(&area, &self.style.stroke, Some(&self.style.fill));
    }
}
