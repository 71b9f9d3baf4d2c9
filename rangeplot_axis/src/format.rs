// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a coordinate for a tick label.
///
/// Integral values print without decimals; fractional values print with at
/// most two decimals, trailing zeros trimmed. Negative zero prints as `0`.
pub fn format_coord(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = if value == value.trunc() {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.2}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    if text == "-0" { String::from("0") } else { text }
}

/// Formats a coordinate in thousands (`12_400` becomes `12`).
pub fn format_divided(value: f64) -> String {
    format_coord((value / 1000.0).round())
}
