// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data extents for auto-scaling.

use kurbo::{Point, Rect};

/// Padding added on both ends of an axis whose data has zero extent.
pub const DEGENERATE_PADDING: f64 = 2.5;

/// Axis-aligned data extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    /// Smallest x.
    pub x_min: f64,
    /// Largest x.
    pub x_max: f64,
    /// Smallest y.
    pub y_min: f64,
    /// Largest y.
    pub y_max: f64,
}

impl DataBounds {
    /// Creates bounds from explicit extents.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Extents of `points`, or `None` for an empty slice.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self::new(first.x, first.x, first.y, first.y);
        Some(rest.iter().fold(seed, |b, p| {
            Self::new(b.x_min.min(p.x), b.x_max.max(p.x), b.y_min.min(p.y), b.y_max.max(p.y))
        }))
    }

    /// Smallest bounds containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        )
    }

    /// Widens any zero-extent axis by [`DEGENERATE_PADDING`] on both ends.
    #[must_use]
    pub fn padded(mut self) -> Self {
        if self.x_min == self.x_max {
            self.x_min -= DEGENERATE_PADDING;
            self.x_max += DEGENERATE_PADDING;
        }
        if self.y_min == self.y_max {
            self.y_min -= DEGENERATE_PADDING;
            self.y_max += DEGENERATE_PADDING;
        }
        self
    }

    /// The bounds as a rectangle in data space.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

/// Folds per-series bounds into chart bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsAccumulator {
    acc: DataBounds,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    /// Starts at the empty sentinel `(+inf, -inf, +inf, -inf)`.
    pub fn new() -> Self {
        Self {
            acc: DataBounds::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Folds one series' bounds in.
    pub fn include(&mut self, bounds: DataBounds) {
        self.acc = self.acc.union(bounds);
    }

    /// Whether nothing has been included yet.
    pub fn is_empty(&self) -> bool {
        self.acc.x_min > self.acc.x_max || self.acc.y_min > self.acc.y_max
    }

    /// The padded result, or `None` while still at the sentinel.
    pub fn finish(self) -> Option<DataBounds> {
        if self.is_empty() {
            None
        } else {
            Some(self.acc.padded())
        }
    }
}

/// Aggregates the bounds of several series; empty series contribute `None`.
pub fn aggregate_bounds(bounds: impl IntoIterator<Item = Option<DataBounds>>) -> Option<DataBounds> {
    let mut acc = BoundsAccumulator::new();
    for b in bounds.into_iter().flatten() {
        acc.include(b);
    }
    acc.finish()
}
