// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data series and the ordered set a chart paints them from.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use rangeplot_axis::{DataBounds, FrameContext, Paintable, Painter, aggregate_bounds};

use crate::points::PointSeries;
use crate::polygon::PolygonSeries;
use crate::profile::ProfileSeries;
use crate::trajectory::TrajectorySeries;

/// Edge length of square point markers, in pixels.
pub const MARKER_SIZE: f64 = 4.0;

/// The kinds of data a chart can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// A closed outline.
    Polygon,
    /// A polyline track.
    Trajectory,
    /// A height profile closed to the baseline.
    Profile,
    /// Square markers.
    Points,
}

/// One data series.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// See [`PolygonSeries`].
    Polygon(PolygonSeries),
    /// See [`TrajectorySeries`].
    Trajectory(TrajectorySeries),
    /// See [`ProfileSeries`].
    Profile(ProfileSeries),
    /// See [`PointSeries`].
    Points(PointSeries),
}

impl Series {
    /// An empty series of the given kind with default styling.
    pub fn new(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Polygon => Self::Polygon(PolygonSeries::default()),
            SeriesKind::Trajectory => Self::Trajectory(TrajectorySeries::default()),
            SeriesKind::Profile => Self::Profile(ProfileSeries::default()),
            SeriesKind::Points => Self::Points(PointSeries::default()),
        }
    }

    /// What kind of series this is.
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Polygon(_) => SeriesKind::Polygon,
            Self::Trajectory(_) => SeriesKind::Trajectory,
            Self::Profile(_) => SeriesKind::Profile,
            Self::Points(_) => SeriesKind::Points,
        }
    }

    /// Replaces the data, following each kind's rules for short input.
    pub fn set_data(&mut self, points: impl Into<Vec<Point>>) {
        match self {
            Self::Polygon(s) => s.set_data(points),
            Self::Trajectory(s) => s.set_data(points),
            Self::Profile(s) => s.set_data(points),
            Self::Points(s) => s.set_data(points),
        }
    }

    /// Drops the data; styling is kept.
    pub fn clear(&mut self) {
        match self {
            Self::Polygon(s) => s.clear(),
            Self::Trajectory(s) => s.clear(),
            Self::Profile(s) => s.clear(),
            Self::Points(s) => s.clear(),
        }
    }

    /// Whether the series holds no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Polygon(s) => s.is_empty(),
            Self::Trajectory(s) => s.is_empty(),
            Self::Profile(s) => s.is_empty(),
            Self::Points(s) => s.is_empty(),
        }
    }

    /// Data extents, `None` while empty.
    pub fn bounds(&self) -> Option<DataBounds> {
        match self {
            Self::Polygon(s) => s.bounds(),
            Self::Trajectory(s) => s.bounds(),
            Self::Profile(s) => s.bounds(),
            Self::Points(s) => s.bounds(),
        }
    }

    /// The profile, if this is one.
    pub fn as_profile(&self) -> Option<&ProfileSeries> {
        match self {
            Self::Profile(s) => Some(s),
            _ => None,
        }
    }
}

impl Paintable for Series {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        match self {
            Self::Polygon(s) => s.paint(painter, frame),
            Self::Trajectory(s) => s.paint(painter, frame),
            Self::Profile(s) => s.paint(painter, frame),
            Self::Points(s) => s.paint(painter, frame),
        }
    }
}

impl From<PolygonSeries> for Series {
    fn from(s: PolygonSeries) -> Self {
        Self::Polygon(s)
    }
}

impl From<TrajectorySeries> for Series {
    fn from(s: TrajectorySeries) -> Self {
        Self::Trajectory(s)
    }
}

impl From<ProfileSeries> for Series {
    fn from(s: ProfileSeries) -> Self {
        Self::Profile(s)
    }
}

impl From<PointSeries> for Series {
    fn from(s: PointSeries) -> Self {
        Self::Points(s)
    }
}

/// Stable handle of a series within one [`SeriesSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub u32);

/// Series in insertion (paint) order, addressable by [`SeriesId`].
#[derive(Clone, Debug, Default)]
pub struct SeriesSet {
    entries: Vec<(SeriesId, Series)>,
    index: HashMap<SeriesId, usize>,
    next_id: u32,
}

impl SeriesSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series and returns its id.
    pub fn insert(&mut self, series: impl Into<Series>) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.index.insert(id, self.entries.len());
        self.entries.push((id, series.into()));
        id
    }

    /// Looks up a series.
    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        let &i = self.index.get(&id)?;
        self.entries.get(i).map(|(_, s)| s)
    }

    /// Looks up a series mutably.
    pub fn get_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        let &i = self.index.get(&id)?;
        self.entries.get_mut(i).map(|(_, s)| s)
    }

    /// Removes a series, keeping the order of the rest.
    pub fn remove(&mut self, id: SeriesId) -> Option<Series> {
        let i = self.index.remove(&id)?;
        let (_, series) = self.entries.remove(i);
        for (later, _) in &self.entries[i..] {
            if let Some(slot) = self.index.get_mut(later) {
                *slot -= 1;
            }
        }
        Some(series)
    }

    /// Number of series, empty ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no series at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any series holds data.
    pub fn has_data(&self) -> bool {
        self.entries.iter().any(|(_, s)| !s.is_empty())
    }

    /// Series in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.entries.iter().map(|(id, s)| (*id, s))
    }

    /// Removes every series. Ids are not reused.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Padded extents of all non-empty series.
    pub fn bounds(&self) -> Option<DataBounds> {
        aggregate_bounds(self.entries.iter().map(|(_, s)| s.bounds()))
    }
}

impl Paintable for SeriesSet {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        for (_, series) in &self.entries {
            series.paint(painter, frame);
        }
    }
}
