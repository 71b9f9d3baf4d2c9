// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick positions along one axis.
//!
//! Ticks are anchored at coordinate zero: the zero tick always comes first
//! (even when zero lies outside the visible range, so the axis line can be
//! drawn at the range edge), followed by an ascending walk and a descending
//! walk in steps of one grid cell.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::range::{CoordinateRange, Direction, to_pixel};

/// Upper bound on ticks emitted by a single walk direction.
pub const MAX_TICKS_PER_WALK: usize = 10_000;

/// What the grid cell is counted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickAnchor {
    /// Ticks sit on exact multiples of the cell in data coordinates.
    #[default]
    Coordinate,
    /// Ticks sit on integer pixels, one rounded cell width apart.
    ///
    /// Grid spacing stays perfectly even on screen; tick coordinates are
    /// whatever those pixels map back to.
    Pixel,
}

/// One tick: a coordinate and the pixel it lands on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPoint {
    /// Data coordinate of the tick.
    pub coord: f64,
    /// Pixel offset along the axis.
    pub pixel: i32,
}

/// Generates tick points for a cell size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickGenerator {
    /// Grid cell size in data units.
    pub cell_size: f64,
    /// How ticks are anchored.
    pub anchor: TickAnchor,
}

impl TickGenerator {
    /// Creates a coordinate-anchored generator.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            anchor: TickAnchor::Coordinate,
        }
    }

    /// Sets the anchor.
    pub fn with_anchor(mut self, anchor: TickAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Generates ticks: zero first, then ascending, then descending.
    ///
    /// A cell that is not a positive finite number, or a range without a finite
    /// scale, yields only the zero tick.
    pub fn generate(&self, range: &CoordinateRange, direction: Direction) -> Vec<TickPoint> {
        let zero = TickPoint {
            coord: 0.0,
            pixel: range.pixel_from_coord(0.0, direction),
        };
        let mut out = alloc::vec![zero];

        let cell = self.cell_size;
        if !(cell.is_finite() && cell > 0.0) || !range.scale().is_finite() {
            return out;
        }

        match self.anchor {
            TickAnchor::Coordinate => {
                let up = coord_walk(range, direction, cell, 1.0);
                let down = coord_walk(range, direction, cell, -1.0);
                push_distinct(&mut out, zero.pixel, up);
                push_distinct(&mut out, zero.pixel, down);
            }
            TickAnchor::Pixel => {
                if range.scale() == 0.0 {
                    return out;
                }
                let step = to_pixel(cell / range.scale()).max(1);
                let span = i32::try_from(range.pixel_span()).unwrap_or(i32::MAX);
                let up = pixel_walk(zero.pixel, step, 0, span, 1);
                let down = pixel_walk(zero.pixel, step, 0, span, -1);
                out.extend(up.chain(down).map(|pixel| TickPoint {
                    coord: range.coord_from_pixel(pixel, direction),
                    pixel,
                }));
            }
        }
        out
    }
}

/// Multiples `sign * k * cell` (`k >= 1`) inside `[min, max]`.
fn coord_walk(
    range: &CoordinateRange,
    direction: Direction,
    cell: f64,
    sign: f64,
) -> impl Iterator<Item = TickPoint> + '_ {
    let (min, max) = (range.min(), range.max());
    // First multiple on this side of zero that is inside the range.
    let edge = if sign > 0.0 { min } else { -max };
    let first = (edge / cell).ceil().max(1.0);

    (0..MAX_TICKS_PER_WALK)
        .map(move |i| sign * (first + i as f64) * cell)
        .take_while(move |&coord| coord >= min && coord <= max)
        .map(move |coord| TickPoint {
            coord,
            pixel: range.pixel_from_coord(coord, direction),
        })
}

/// Pixels `origin + sign * k * step` (`k >= 1`) inside `[lo, hi]`.
fn pixel_walk(origin: i32, step: i32, lo: i32, hi: i32, sign: i32) -> impl Iterator<Item = i32> {
    let (origin, step) = (i64::from(origin), i64::from(step));
    let distance = if sign > 0 {
        i64::from(lo) - origin
    } else {
        origin - i64::from(hi)
    };
    let first = distance.div_euclid(step) + i64::from(distance.rem_euclid(step) != 0);
    let first = first.max(1);

    (0..MAX_TICKS_PER_WALK as i64)
        .map(move |i| origin + i64::from(sign) * (first + i) * step)
        .take_while(move |&p| p >= i64::from(lo) && p <= i64::from(hi))
        .filter_map(|p| i32::try_from(p).ok())
}

fn push_distinct(out: &mut Vec<TickPoint>, zero_pixel: i32, walk: impl Iterator<Item = TickPoint>) {
    let mut last = zero_pixel;
    for tick in walk {
        if tick.pixel != last {
            out.push(tick);
            last = tick.pixel;
        }
    }
}
