// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One axis' logical interval and its affine mapping to pixels.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::AxisError;

/// Which way pixels grow relative to coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pixel offsets grow with the coordinate.
    #[default]
    Forward,
    /// Pixel offsets grow against the coordinate (an inverted axis).
    Reverse,
}

impl Direction {
    /// Returns `Reverse` when `inverted` is set.
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted { Self::Reverse } else { Self::Forward }
    }

    /// `+1.0` for `Forward`, `-1.0` for `Reverse`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    /// Whether this is `Reverse`.
    pub fn is_inverted(self) -> bool {
        self == Self::Reverse
    }
}

/// A logical interval `[start, finish]` laid over `pixel_span` pixels.
///
/// `start` is the coordinate at pixel 0. The scale (data units per pixel) is
/// recomputed on every mutation. A zero pixel span yields a non-finite scale;
/// nothing panics, but mapped values are meaningless until the surface is
/// sized (see [`CoordinateRange::checked_scale`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateRange {
    start: f64,
    finish: f64,
    min: f64,
    max: f64,
    pixel_span: u32,
    scale: f64,
}

impl Default for CoordinateRange {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0)
    }
}

impl CoordinateRange {
    /// Creates a range over `pixel_span` pixels.
    pub fn new(start: f64, finish: f64, pixel_span: u32) -> Self {
        let mut range = Self {
            start: 0.0,
            finish: 0.0,
            min: 0.0,
            max: 0.0,
            pixel_span,
            scale: 0.0,
        };
        range.set_range(start, finish);
        range
    }

    /// Stores new bounds and recomputes the scale.
    ///
    /// Any inversion swap has already been applied by the caller.
    pub fn set_range(&mut self, start: f64, finish: f64) {
        self.start = start;
        self.finish = finish;
        self.min = start.min(finish);
        self.max = start.max(finish);
        self.update_scale();
    }

    /// Stores the pixel extent and recomputes the scale.
    pub fn set_pixel_span(&mut self, pixel_span: u32) {
        self.pixel_span = pixel_span;
        self.update_scale();
    }

    fn update_scale(&mut self) {
        self.scale = self.span() / f64::from(self.pixel_span);
    }

    /// Coordinate at pixel 0.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Coordinate at the far end of the pixel span.
    pub fn finish(&self) -> f64 {
        self.finish
    }

    /// Smaller of `start` and `finish`.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Larger of `start` and `finish`.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `|finish - start|`.
    pub fn span(&self) -> f64 {
        (self.finish - self.start).abs()
    }

    /// Pixel extent of the axis.
    pub fn pixel_span(&self) -> u32 {
        self.pixel_span
    }

    /// Data units per pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the scale, or why it cannot be used for mapping.
    pub fn checked_scale(&self) -> Result<f64, AxisError> {
        if self.pixel_span == 0 {
            return Err(AxisError::ZeroPixelSpan);
        }
        if !self.scale.is_finite() {
            return Err(AxisError::NonFiniteScale);
        }
        if self.scale == 0.0 {
            return Err(AxisError::DegenerateRange(self.min));
        }
        Ok(self.scale)
    }

    /// Maps a coordinate to an unrounded pixel offset.
    pub fn map(&self, coord: f64, direction: Direction) -> f64 {
        direction.sign() * (coord - self.start) / self.scale
    }

    /// Maps a coordinate to the nearest pixel.
    ///
    /// Non-finite offsets saturate (`NaN` becomes 0).
    pub fn pixel_from_coord(&self, coord: f64, direction: Direction) -> i32 {
        to_pixel(self.map(coord, direction))
    }

    /// Maps a pixel offset back to a coordinate.
    pub fn coord_from_pixel(&self, pixel: i32, direction: Direction) -> f64 {
        self.start + direction.sign() * f64::from(pixel) * self.scale
    }
}

/// Rounds an unrounded pixel offset to the nearest integer pixel.
pub(crate) fn to_pixel(offset: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; off-surface offsets are clipped by the painter"
    )]
    {
        offset.round() as i32
    }
}
