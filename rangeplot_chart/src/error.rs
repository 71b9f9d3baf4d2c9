// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::series::{SeriesId, SeriesKind};

/// Misuse of the chart's series registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The id does not name a series of this chart.
    #[error("no series with id {0:?}")]
    UnknownSeries(SeriesId),
    /// Height readouts need a profile series.
    #[error("series {id:?} is a {kind:?} series, not a profile")]
    NotAProfile {
        /// The offending series.
        id: SeriesId,
        /// What it actually is.
        kind: SeriesKind,
    },
}
