// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame context shared by every layer.

use kurbo::{Point, Size};

use crate::axis::{AxisEngine, Orientation};

/// Read-only view of the chart for one paint pass.
///
/// Axes find their sibling through this instead of holding a pointer to the
/// chart that owns them.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    /// Drawing surface size in pixels.
    pub surface: Size,
    /// Extent of the widest tick label (width) and of one label line (height).
    pub label_band: Size,
    /// The horizontal axis.
    pub primary: &'a AxisEngine,
    /// The vertical axis.
    pub secondary: &'a AxisEngine,
    /// Whether any data series holds points.
    pub has_data: bool,
}

impl<'a> FrameContext<'a> {
    /// Creates a context with an empty label band and `has_data` set.
    pub fn new(surface: Size, primary: &'a AxisEngine, secondary: &'a AxisEngine) -> Self {
        Self {
            surface,
            label_band: Size::ZERO,
            primary,
            secondary,
            has_data: true,
        }
    }

    /// Sets the label band.
    pub fn with_label_band(mut self, label_band: Size) -> Self {
        self.label_band = label_band;
        self
    }

    /// Sets whether data is present.
    pub fn with_data(mut self, has_data: bool) -> Self {
        self.has_data = has_data;
        self
    }

    /// The axis with the given orientation.
    pub fn axis(&self, orientation: Orientation) -> &'a AxisEngine {
        match orientation {
            Orientation::Primary => self.primary,
            Orientation::Secondary => self.secondary,
        }
    }

    /// The other axis of the pair.
    pub fn sibling(&self, orientation: Orientation) -> &'a AxisEngine {
        self.axis(orientation.other())
    }

    /// Maps a data point to surface pixels.
    pub fn data_to_pixel(&self, point: Point) -> Point {
        Point::new(
            f64::from(self.primary.pixel_from_coord(point.x)),
            f64::from(self.secondary.pixel_from_coord(point.y)),
        )
    }

    /// Maps a data point to unrounded surface coordinates.
    pub fn data_to_surface(&self, point: Point) -> Point {
        Point::new(self.primary.map(point.x), self.secondary.map(point.y))
    }
}
