// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Round" grid steps.
//!
//! Instrument displays want grid cells of 10, 15, 20, 50, 250, 1000... units,
//! never 37 or 1234. [`resolve_step`] snaps a raw step (typically
//! `span / tick_count`) onto that family while keeping it wider than the
//! coordinate extent of one label, so neighbouring labels never overlap.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on snap/nudge rounds in [`resolve_step`].
///
/// Every three rounds raise the candidate by at least one leading-digit unit,
/// so ordinary inputs finish in a handful of rounds; the cap only matters when
/// `min_spacing` dwarfs `raw_step`.
pub const MAX_STEP_ITERATIONS: usize = 256;

/// Raw steps at or above this are returned as-is (outside the exact integer
/// range the digit walk works in).
const MAX_INTEGRAL_STEP: f64 = 1e36;

/// Snaps `raw_step` to a round step strictly wider than `min_spacing`.
///
/// - `raw_step <= 1` (and non-finite input) is returned unchanged.
/// - `1 < raw_step < 10` is floored.
/// - Otherwise the integer part is processed on its two leading digits: a
///   second digit below 3 is zeroed, 3 to 7 becomes 5, 8 or 9 carries into the
///   leading digit. The result is truncated to a multiple of the second-digit
///   unit. If it is not wider than `min_spacing`, a candidate whose second digit
///   was 0 or 5 is nudged up by three units and the round repeats.
///
/// `min_spacing` is only consulted in the third case.
pub fn resolve_step(raw_step: f64, min_spacing: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 1.0 {
        return raw_step;
    }
    if raw_step < 10.0 {
        return raw_step.floor();
    }
    if raw_step >= MAX_INTEGRAL_STEP {
        tracing::debug!(raw_step, "step too large to round; using it unchanged");
        return raw_step;
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite and below 1e36, so the integer part fits an i128 exactly"
    )]
    let mut step = raw_step.trunc() as i128;

    let digits = step.ilog10() + 1;
    let high = 10_i128.pow(digits - 1);
    let second = 10_i128.pow(digits - 2);

    for _ in 0..MAX_STEP_ITERATIONS {
        let d2 = step / second % 10;

        if d2 < 3 {
            step -= d2 * second;
        } else if d2 < 8 {
            step += (5 - d2) * second;
        } else {
            step += high;
            step -= d2 * second;
        }

        step = step / second * second;

        let candidate = step as f64;
        if candidate > min_spacing {
            return candidate;
        }
        if d2 == 5 || d2 == 0 {
            step += 3 * second;
        }
    }

    let unit = (5 * second) as f64;
    let fallback = ((min_spacing / unit).floor() + 1.0) * unit;
    tracing::warn!(
        raw_step,
        min_spacing,
        fallback,
        "step rounding did not converge; using the next multiple of {unit}"
    );
    fallback
}
