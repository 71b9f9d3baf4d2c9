// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mapping and tick generation for range/bearing charts.
//!
//! This crate answers two questions for a 2-D instrument-style chart:
//! - **Where on screen?** [`CoordinateRange`] maps data coordinates to pixels
//!   and back along one axis, optionally inverted.
//! - **Where do grid lines go?** [`resolve_step`] picks a round grid cell that
//!   keeps labels apart, [`TickGenerator`] walks ticks outward from zero, and
//!   [`AxisEngine`] turns them into labelled ticks and grid segments.
//!
//! Drawing goes through the [`Painter`] trait; nothing here knows about a
//! concrete renderer. [`aggregate_bounds`] computes auto-scale extents from
//! per-series bounds.
//!
//! ```
//! use rangeplot_axis::{AxisEngine, resolve_step};
//!
//! let mut x = AxisEngine::primary();
//! x.set_pixel_span(700);
//! x.set_range(-3.0, 1.0);
//! assert_eq!(x.pixel_from_coord(0.0), 525);
//!
//! // 237 units per cell is snapped to 250.
//! assert_eq!(resolve_step(237.0, 40.0), 250.0);
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod bounds;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod grid;
mod paint;
mod range;
mod step;
mod ticks;

pub use axis::{
    AxisEngine, AxisLayout, AxisTick, DEFAULT_TICK_COUNT, LabelAlignment, Orientation,
    PRIMARY_DIVIDE_THRESHOLD, SECONDARY_DIVIDE_THRESHOLD,
};
pub use bounds::{BoundsAccumulator, DEGENERATE_PADDING, DataBounds, aggregate_bounds};
pub use error::AxisError;
pub use format::{format_coord, format_divided};
pub use frame::FrameContext;
pub use grid::{ANGLE_LINE_DEGREES, GridLineBuilder, GridStyle, angle_lines, grid_segments};
pub use paint::{FillStyle, LabelStyle, LineDash, Paintable, Painter, StrokeStyle};
pub use range::{CoordinateRange, Direction};
pub use rangeplot_text::{TextMeasurer, TextMetrics, TextStyle};
pub use step::{MAX_STEP_ITERATIONS, resolve_step};
pub use ticks::{MAX_TICKS_PER_WALK, TickAnchor, TickGenerator, TickPoint};
