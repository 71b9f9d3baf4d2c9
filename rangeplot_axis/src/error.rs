// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checked-query errors.
//!
//! The mapping operations themselves never fail: a zero pixel span or a
//! degenerate range just produces a non-finite scale. Callers that would
//! rather see why can use the `try_*` variants, which report one of these.

use thiserror::Error;

/// Why an axis cannot currently map between pixels and coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AxisError {
    /// The drawing surface has not been sized yet.
    #[error("axis has a zero pixel span; size the drawing surface first")]
    ZeroPixelSpan,
    /// `min == max`, so every coordinate maps onto the same pixel.
    #[error("axis range is degenerate at {0}")]
    DegenerateRange(f64),
    /// The range bounds themselves are not finite.
    #[error("axis scale is not finite")]
    NonFiniteScale,
}
