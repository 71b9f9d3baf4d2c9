// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis engine.
//!
//! An [`AxisEngine`] owns one [`CoordinateRange`] plus everything needed to
//! turn it into ticks, tick labels and grid lines: the grid cell, label
//! alignment, "divided" (thousands) labelling and the grid styles.
//!
//! A chart owns two engines, a horizontal primary axis and a vertical
//! secondary axis. Centered labels need the sibling axis; it is reached
//! through the [`FrameContext`] handed to [`AxisEngine::layout`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Line, Point};

use crate::error::AxisError;
use crate::format::{format_coord, format_divided};
use crate::frame::FrameContext;
use crate::grid::{GridLineBuilder, grid_segments};
use crate::paint::{LabelStyle, Paintable, Painter};
use crate::range::{CoordinateRange, Direction};
use crate::ticks::{TickAnchor, TickGenerator, TickPoint};

/// Default tick count for a fresh axis.
pub const DEFAULT_TICK_COUNT: u32 = 5;

/// Default divide threshold of the primary (horizontal) axis.
pub const PRIMARY_DIVIDE_THRESHOLD: f64 = 20_000.0;

/// Default divide threshold of the secondary (vertical) axis.
pub const SECONDARY_DIVIDE_THRESHOLD: f64 = 6_000.0;

/// Which axis of the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The horizontal axis. Its ticks are x pixels.
    Primary,
    /// The vertical axis. Its ticks are y pixels.
    Secondary,
}

impl Orientation {
    /// The other axis of the pair.
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Where tick labels sit.
///
/// Discriminants follow the usual alignment-flag values. An axis accepts only
/// the contiguous run meaningful for it; see [`LabelAlignment::is_legal_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LabelAlignment {
    /// Labels along the left edge.
    Left = 0x01,
    /// Labels along the right edge.
    Right = 0x02,
    /// Labels follow the sibling axis' zero line (vertical axes).
    HCenter = 0x04,
    /// Labels along the top edge.
    Top = 0x20,
    /// Labels along the bottom edge.
    Bottom = 0x40,
    /// Labels follow the sibling axis' zero line (horizontal axes).
    VCenter = 0x80,
}

impl LabelAlignment {
    /// Raw flag value.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// `Top..=VCenter` for the primary axis, `Left..=HCenter` for the secondary.
    pub fn is_legal_for(self, orientation: Orientation) -> bool {
        let (lo, hi) = match orientation {
            Orientation::Primary => (Self::Top, Self::VCenter),
            Orientation::Secondary => (Self::Left, Self::HCenter),
        };
        (lo.bits()..=hi.bits()).contains(&self.bits())
    }
}

/// One laid-out tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Data coordinate.
    pub coord: f64,
    /// Pixel offset along the axis.
    pub pixel: i32,
    /// Label text.
    pub label: String,
    /// Left end of the label baseline, in surface pixels.
    pub label_origin: Point,
}

/// Ticks, grid segments and label line for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLayout {
    /// Ticks, zero first.
    pub ticks: Vec<AxisTick>,
    /// One grid segment per tick, zero line first.
    pub grid: Vec<Line>,
    /// Position of the label line across the axis.
    pub label_pos: f64,
}

/// Coordinate mapping, ticks, labels and grid for one axis.
#[derive(Clone, Debug)]
pub struct AxisEngine {
    range: CoordinateRange,
    orientation: Orientation,
    direction: Direction,
    alignment: LabelAlignment,
    cell_size: f64,
    tick_count: u32,
    divide_threshold: f64,
    dividing: bool,
    anchor: TickAnchor,
    label_style: LabelStyle,
    grid: GridLineBuilder,
    auto_step: bool,
    label_pos: Cell<f64>,
}

impl AxisEngine {
    /// Creates an axis.
    ///
    /// The primary axis defaults to bottom labels and a divide threshold of
    /// 20000; the secondary to left labels and 6000.
    pub fn new(orientation: Orientation, inverted: bool) -> Self {
        let (alignment, divide_threshold) = match orientation {
            Orientation::Primary => (LabelAlignment::Bottom, PRIMARY_DIVIDE_THRESHOLD),
            Orientation::Secondary => (LabelAlignment::Left, SECONDARY_DIVIDE_THRESHOLD),
        };
        Self {
            range: CoordinateRange::default(),
            orientation,
            direction: Direction::from_inverted(inverted),
            alignment,
            cell_size: 0.0,
            tick_count: DEFAULT_TICK_COUNT,
            divide_threshold,
            dividing: false,
            anchor: TickAnchor::Coordinate,
            label_style: LabelStyle::default(),
            grid: GridLineBuilder::default(),
            auto_step: true,
            label_pos: Cell::new(0.0),
        }
    }

    /// A horizontal, non-inverted axis.
    pub fn primary() -> Self {
        Self::new(Orientation::Primary, false)
    }

    /// A vertical, inverted axis (coordinates grow upwards on screen).
    pub fn secondary() -> Self {
        Self::new(Orientation::Secondary, true)
    }

    /// Which axis of the pair this is.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pixel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether pixels grow against coordinates.
    pub fn is_inverted(&self) -> bool {
        self.direction.is_inverted()
    }

    /// The underlying range.
    pub fn range(&self) -> &CoordinateRange {
        &self.range
    }

    /// Sets the logical bounds. An inverted axis stores them as `(finish, start)`.
    pub fn set_range(&mut self, start: f64, finish: f64) {
        if self.is_inverted() {
            self.range.set_range(finish, start);
        } else {
            self.range.set_range(start, finish);
        }
    }

    /// Sets the pixel extent.
    pub fn set_pixel_span(&mut self, pixel_span: u32) {
        self.range.set_pixel_span(pixel_span);
    }

    /// Smaller range bound.
    pub fn min(&self) -> f64 {
        self.range.min()
    }

    /// Larger range bound.
    pub fn max(&self) -> f64 {
        self.range.max()
    }

    /// Range span.
    pub fn span(&self) -> f64 {
        self.range.span()
    }

    /// Pixel extent.
    pub fn pixel_span(&self) -> u32 {
        self.range.pixel_span()
    }

    /// Data units per pixel.
    pub fn scale(&self) -> f64 {
        self.range.scale()
    }

    /// Maps a coordinate to an unrounded pixel offset.
    pub fn map(&self, coord: f64) -> f64 {
        self.range.map(coord, self.direction)
    }

    /// Maps a coordinate to the nearest pixel.
    pub fn pixel_from_coord(&self, coord: f64) -> i32 {
        self.range.pixel_from_coord(coord, self.direction)
    }

    /// Maps a pixel back to a coordinate.
    pub fn coord_from_pixel(&self, pixel: i32) -> f64 {
        self.range.coord_from_pixel(pixel, self.direction)
    }

    /// Like [`Self::pixel_from_coord`], but fails on an unusable scale.
    pub fn try_pixel_from_coord(&self, coord: f64) -> Result<i32, AxisError> {
        self.range.checked_scale()?;
        Ok(self.pixel_from_coord(coord))
    }

    /// Like [`Self::coord_from_pixel`], but fails on an unusable scale.
    pub fn try_coord_from_pixel(&self, pixel: i32) -> Result<f64, AxisError> {
        self.range.checked_scale()?;
        Ok(self.coord_from_pixel(pixel))
    }

    /// Current label alignment.
    pub fn alignment(&self) -> LabelAlignment {
        self.alignment
    }

    /// Sets the label alignment. Values not legal for this axis are ignored.
    pub fn set_alignment(&mut self, alignment: LabelAlignment) {
        if alignment.is_legal_for(self.orientation) {
            self.alignment = alignment;
        } else {
            tracing::debug!(
                ?alignment,
                orientation = ?self.orientation,
                "ignoring label alignment"
            );
        }
    }

    /// Grid cell size in data units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Pins the grid cell size. Automatic step resolution is off until
    /// [`Self::reset_step`].
    pub fn set_cell_size(&mut self, cell_size: f64) {
        self.cell_size = cell_size;
        self.auto_step = false;
    }

    /// Stores a cell size picked by automatic step resolution.
    ///
    /// Ignored while the cell is pinned by [`Self::set_cell_size`].
    pub fn set_resolved_cell_size(&mut self, cell_size: f64) {
        if self.auto_step {
            self.cell_size = cell_size;
        }
    }

    /// Whether the cell size is left to automatic step resolution.
    pub fn is_auto_step(&self) -> bool {
        self.auto_step
    }

    /// Returns the cell size to automatic step resolution.
    pub fn reset_step(&mut self) {
        self.auto_step = true;
    }

    /// Target number of grid cells across the span.
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Sets the target tick count.
    pub fn set_tick_count(&mut self, tick_count: u32) {
        self.tick_count = tick_count;
    }

    /// Span above which divided labels kick in.
    pub fn divide_threshold(&self) -> f64 {
        self.divide_threshold
    }

    /// Sets the divide threshold.
    pub fn set_divide_threshold(&mut self, threshold: f64) {
        self.divide_threshold = threshold;
    }

    /// Whether divided labels are enabled at all.
    pub fn is_dividing(&self) -> bool {
        self.dividing
    }

    /// Enables or disables divided labels.
    pub fn set_dividing(&mut self, dividing: bool) {
        self.dividing = dividing;
    }

    /// Whether labels are currently shown in thousands.
    pub fn is_divided(&self) -> bool {
        self.dividing && self.span() > self.divide_threshold
    }

    /// Tick anchoring mode.
    pub fn anchor(&self) -> TickAnchor {
        self.anchor
    }

    /// Sets the tick anchoring mode.
    pub fn set_anchor(&mut self, anchor: TickAnchor) {
        self.anchor = anchor;
    }

    /// Label paint and font.
    pub fn label_style(&self) -> &LabelStyle {
        &self.label_style
    }

    /// Sets the label paint and font.
    pub fn set_label_style(&mut self, style: LabelStyle) {
        self.label_style = style;
    }

    /// Grid styling.
    pub fn grid(&self) -> &GridLineBuilder {
        &self.grid
    }

    /// Mutable grid styling.
    pub fn grid_mut(&mut self) -> &mut GridLineBuilder {
        &mut self.grid
    }

    /// Label text for a tick coordinate.
    pub fn format_label(&self, coord: f64, has_data: bool) -> String {
        if has_data && self.is_divided() {
            format_divided(coord)
        } else {
            format_coord(coord)
        }
    }

    /// Label line position resolved by the last layout.
    pub fn label_pos(&self) -> f64 {
        self.label_pos.get()
    }

    /// Resolves where the label line sits across this axis.
    ///
    /// For a primary axis this is a y pixel, for a secondary axis an x pixel.
    /// Centered labels track the sibling's zero line, clamped between the
    /// label-band height and the sibling's pixel span.
    pub fn update_label_pos(&self, frame: &FrameContext<'_>) -> f64 {
        let pos = match self.alignment {
            LabelAlignment::Top => frame.label_band.height,
            LabelAlignment::Bottom => frame.surface.height,
            LabelAlignment::Left => 0.0,
            LabelAlignment::Right => frame.surface.width - frame.label_band.width,
            LabelAlignment::VCenter | LabelAlignment::HCenter => {
                let sibling = frame.sibling(self.orientation);
                let zero = f64::from(sibling.pixel_from_coord(0.0));
                zero.max(frame.label_band.height)
                    .min(f64::from(sibling.pixel_span()))
            }
        };
        self.label_pos.set(pos);
        pos
    }

    /// Raw tick points for the current range and cell.
    pub fn ticks(&self) -> Vec<TickPoint> {
        TickGenerator::new(self.cell_size)
            .with_anchor(self.anchor)
            .generate(&self.range, self.direction)
    }

    /// Lays out ticks, labels and grid segments for one frame.
    ///
    /// The result depends only on the current range, pixel span, cell and
    /// frame.
    pub fn layout(&self, frame: &FrameContext<'_>) -> AxisLayout {
        let points = self.ticks();
        let label_pos = self.update_label_pos(frame);
        let ticks: Vec<_> = points
            .iter()
            .map(|t| {
                let pixel = f64::from(t.pixel);
                let label_origin = match self.orientation {
                    Orientation::Primary => Point::new(pixel, label_pos),
                    Orientation::Secondary => Point::new(label_pos, pixel),
                };
                AxisTick {
                    coord: t.coord,
                    pixel: t.pixel,
                    label: self.format_label(t.coord, frame.has_data),
                    label_origin,
                }
            })
            .collect();
        let grid = grid_segments(
            self.orientation,
            ticks.iter().map(|t| t.pixel),
            frame.surface,
        );

        tracing::trace!(
            orientation = ?self.orientation,
            ticks = ticks.len(),
            cell = self.cell_size,
            label_pos,
            "axis layout"
        );
        AxisLayout {
            ticks,
            grid,
            label_pos,
        }
    }

    /// Strokes the grid of a finished layout.
    pub fn paint_grid(
        &self,
        painter: &mut dyn Painter,
        layout: &AxisLayout,
        frame: &FrameContext<'_>,
    ) {
        self.grid.paint(painter, &layout.grid, frame.surface.height);
    }
}

impl Paintable for AxisEngine {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        if !frame.has_data {
            return;
        }
        let layout = self.layout(frame);
        self.paint_grid(painter, &layout, frame);
        for tick in &layout.ticks {
            painter.draw_text(tick.label_origin, &tick.label, &self.label_style);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String, ToString};
    use std::vec::Vec;

    use float_cmp::approx_eq;
    use kurbo::{Rect, Size};
    use peniko::color::palette::css;
    use rangeplot_text::{FixedCellMeasurer, TextMeasurer, TextMetrics, TextStyle};

    use super::*;
    use crate::paint::{FillStyle, StrokeStyle};

    const SURFACE: Size = Size::new(700.0, 300.0);

    fn sized_pair() -> (AxisEngine, AxisEngine) {
        let mut x = AxisEngine::primary();
        let mut y = AxisEngine::secondary();
        x.set_pixel_span(700);
        y.set_pixel_span(300);
        (x, y)
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Line, StrokeStyle)>,
        texts: Vec<(Point, String)>,
    }

    impl TextMeasurer for Recorder {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            FixedCellMeasurer::new(6.0, 10.0).measure(text, style)
        }
    }

    impl Painter for Recorder {
        fn surface_size(&self) -> Size {
            SURFACE
        }

        fn stroke_line(&mut self, line: Line, stroke: &StrokeStyle) {
            self.lines.push((line, stroke.clone()));
        }

        fn draw_text(&mut self, origin: Point, text: &str, _style: &LabelStyle) {
            self.texts.push((origin, text.to_string()));
        }

        fn draw_polyline(&mut self, _points: &[Point], _stroke: &StrokeStyle) {}

        fn draw_polygon(
            &mut self,
            _points: &[Point],
            _stroke: &StrokeStyle,
            _fill: Option<&FillStyle>,
        ) {
        }

        fn draw_rect(&mut self, _rect: Rect, _stroke: &StrokeStyle, _fill: Option<&FillStyle>) {}
    }

    #[test]
    fn defaults_depend_on_orientation() {
        let x = AxisEngine::primary();
        let y = AxisEngine::secondary();
        assert_eq!(x.alignment(), LabelAlignment::Bottom);
        assert_eq!(y.alignment(), LabelAlignment::Left);
        assert_eq!(x.divide_threshold(), 20_000.0);
        assert_eq!(y.divide_threshold(), 6_000.0);
        assert_eq!(x.tick_count(), 5);
        assert!(!x.is_dividing());
        assert!(!x.is_inverted());
        assert!(y.is_inverted());
    }

    #[test]
    fn inverted_axis_swaps_bounds() {
        let (_, mut y) = sized_pair();
        y.set_range(0.0, 100.0);
        assert_eq!(y.range().start(), 100.0);
        assert_eq!(y.range().finish(), 0.0);
        assert_eq!(y.pixel_from_coord(100.0), 0);
        assert_eq!(y.pixel_from_coord(0.0), 300);
        assert!(approx_eq!(f64, y.coord_from_pixel(150), 50.0, epsilon = 1e-9));
    }

    #[test]
    fn illegal_alignments_are_ignored() {
        let (mut x, mut y) = sized_pair();
        x.set_alignment(LabelAlignment::Left);
        assert_eq!(x.alignment(), LabelAlignment::Bottom);
        x.set_alignment(LabelAlignment::HCenter);
        assert_eq!(x.alignment(), LabelAlignment::Bottom);
        x.set_alignment(LabelAlignment::Top);
        assert_eq!(x.alignment(), LabelAlignment::Top);
        x.set_alignment(LabelAlignment::VCenter);
        assert_eq!(x.alignment(), LabelAlignment::VCenter);

        y.set_alignment(LabelAlignment::Bottom);
        assert_eq!(y.alignment(), LabelAlignment::Left);
        y.set_alignment(LabelAlignment::Right);
        assert_eq!(y.alignment(), LabelAlignment::Right);
        y.set_alignment(LabelAlignment::HCenter);
        assert_eq!(y.alignment(), LabelAlignment::HCenter);
    }

    #[test]
    fn division_needs_flag_and_large_span() {
        let (_, mut y) = sized_pair();
        y.set_range(0.0, 7_000.0);
        assert!(!y.is_divided());

        y.set_dividing(true);
        assert!(y.is_divided());
        assert_eq!(y.format_label(7_000.0, true), "7");
        assert_eq!(y.format_label(7_000.0, false), "7000");

        y.set_range(0.0, 6_000.0);
        assert!(!y.is_divided());
        y.set_range(0.0, 5_000.0);
        assert!(!y.is_divided());
        assert_eq!(y.format_label(2_500.0, true), "2500");
    }

    #[test]
    fn edge_label_positions() {
        let (mut x, mut y) = sized_pair();
        x.set_range(-20.0, 50.0);
        y.set_range(-10.0, 50.0);
        let band = Size::new(30.0, 12.0);

        let frame = FrameContext::new(SURFACE, &x, &y).with_label_band(band);
        assert_eq!(x.update_label_pos(&frame), 300.0);
        assert_eq!(y.update_label_pos(&frame), 0.0);

        x.set_alignment(LabelAlignment::Top);
        y.set_alignment(LabelAlignment::Right);
        let frame = FrameContext::new(SURFACE, &x, &y).with_label_band(band);
        assert_eq!(x.update_label_pos(&frame), 12.0);
        assert_eq!(y.update_label_pos(&frame), 670.0);
        assert_eq!(y.label_pos(), 670.0);
    }

    #[test]
    fn centered_labels_follow_the_sibling_zero_line() {
        let (mut x, mut y) = sized_pair();
        x.set_alignment(LabelAlignment::VCenter);
        y.set_alignment(LabelAlignment::HCenter);
        x.set_range(-20.0, 50.0);
        let band = Size::new(30.0, 12.0);

        y.set_range(-10.0, 50.0);
        let frame = FrameContext::new(SURFACE, &x, &y).with_label_band(band);
        assert_eq!(x.update_label_pos(&frame), 250.0);
        assert_eq!(y.update_label_pos(&frame), 200.0);

        // Zero below the surface: pinned to the bottom.
        y.set_range(10.0, 50.0);
        let frame = FrameContext::new(SURFACE, &x, &y).with_label_band(band);
        assert_eq!(x.update_label_pos(&frame), 300.0);

        // Zero above the surface: pinned one label height down.
        y.set_range(-50.0, -10.0);
        let frame = FrameContext::new(SURFACE, &x, &y).with_label_band(band);
        assert_eq!(x.update_label_pos(&frame), 12.0);
    }

    #[test]
    fn layout_places_labels_on_the_label_line() {
        let (mut x, mut y) = sized_pair();
        x.set_range(-20.0, 50.0);
        x.set_cell_size(10.0);
        y.set_range(-10.0, 50.0);
        y.set_cell_size(10.0);
        let frame = FrameContext::new(SURFACE, &x, &y);

        let lx = x.layout(&frame);
        assert_eq!(lx.ticks[0].coord, 0.0);
        assert_eq!(lx.ticks[0].pixel, 200);
        assert_eq!(lx.ticks[0].label, "0");
        assert_eq!(lx.ticks[0].label_origin, Point::new(200.0, 300.0));
        assert_eq!(lx.ticks.len(), 1 + 5 + 2);
        assert_eq!(lx.grid.len(), lx.ticks.len());
        assert_eq!(lx.grid[0], Line::new((200.0, 0.0), (200.0, 300.0)));

        let ly = y.layout(&frame);
        assert_eq!(ly.ticks[0].pixel, 250);
        assert_eq!(ly.ticks[0].label_origin, Point::new(0.0, 250.0));
        assert_eq!(ly.ticks[1].label, "10");
        assert_eq!(ly.ticks[1].pixel, 200);
        assert_eq!(ly.grid[0], Line::new((0.0, 250.0), (700.0, 250.0)));
    }

    #[test]
    fn layout_is_idempotent() {
        let (mut x, mut y) = sized_pair();
        x.set_range(-1234.0, 5678.0);
        x.set_cell_size(1000.0);
        y.set_range(-3.0, 17.0);
        y.set_cell_size(5.0);
        let frame = FrameContext::new(SURFACE, &x, &y);
        assert_eq!(x.layout(&frame), x.layout(&frame));
        assert_eq!(y.layout(&frame), y.layout(&frame));
    }

    #[test]
    fn layout_does_not_depend_on_earlier_ranges() {
        let y = AxisEngine::secondary();
        let mut seasoned = AxisEngine::primary();
        seasoned.set_pixel_span(100);
        seasoned.set_cell_size(1.0);
        seasoned.set_range(-50.0, 50.0);
        let _ = seasoned.layout(&FrameContext::new(SURFACE, &seasoned, &y));
        seasoned.set_range(-51.0, 49.0);

        let mut fresh = AxisEngine::primary();
        fresh.set_pixel_span(100);
        fresh.set_cell_size(1.0);
        fresh.set_range(-51.0, 49.0);

        let a = seasoned.layout(&FrameContext::new(SURFACE, &seasoned, &y));
        let b = fresh.layout(&FrameContext::new(SURFACE, &fresh, &y));
        assert_eq!(a, b);
        assert_eq!(a.ticks[0].pixel, 51);
        assert_eq!(a.grid[0].p0.x, 51.0);
    }

    #[test]
    fn re_ranged_layouts_keep_zero_exact_and_pixels_unique() {
        let y = AxisEngine::secondary();
        let mut x = AxisEngine::primary();
        x.set_pixel_span(100);
        x.set_cell_size(0.5);

        for (lo, hi) in [
            (-50.0, 50.0),
            (-51.0, 49.0),
            (-50.4, 49.6),
            (-49.6, 50.4),
            (-3.3, 96.7),
            (-96.7, 3.3),
        ] {
            x.set_range(lo, hi);
            let layout = x.layout(&FrameContext::new(SURFACE, &x, &y));
            assert_eq!(layout.ticks[0].coord, 0.0);
            assert_eq!(layout.ticks[0].pixel, x.pixel_from_coord(0.0));

            let mut pixels: Vec<_> = layout.ticks.iter().map(|t| t.pixel).collect();
            let count = pixels.len();
            pixels.sort_unstable();
            pixels.dedup();
            assert_eq!(pixels.len(), count, "duplicate tick pixel for range ({lo}, {hi})");
            for tick in &layout.ticks {
                assert_eq!(tick.pixel, x.pixel_from_coord(tick.coord));
            }
        }
    }

    #[test]
    fn pinned_cell_ignores_resolved_steps() {
        let mut x = AxisEngine::primary();
        assert!(x.is_auto_step());
        x.set_resolved_cell_size(0.8);
        assert_eq!(x.cell_size(), 0.8);

        x.set_cell_size(2.0);
        assert!(!x.is_auto_step());
        x.set_resolved_cell_size(0.8);
        assert_eq!(x.cell_size(), 2.0);

        x.reset_step();
        x.set_resolved_cell_size(0.8);
        assert_eq!(x.cell_size(), 0.8);
    }

    #[test]
    fn paint_without_data_draws_nothing() {
        let (mut x, mut y) = sized_pair();
        x.set_range(-20.0, 50.0);
        x.set_cell_size(10.0);
        y.set_range(-10.0, 50.0);
        let frame = FrameContext::new(SURFACE, &x, &y).with_data(false);

        let mut rec = Recorder::default();
        x.paint(&mut rec, &frame);
        assert!(rec.lines.is_empty());
        assert!(rec.texts.is_empty());
    }

    #[test]
    fn checked_queries_report_unsized_axes() {
        let mut x = AxisEngine::primary();
        x.set_range(0.0, 10.0);
        assert_eq!(x.try_pixel_from_coord(5.0), Err(AxisError::ZeroPixelSpan));
        x.set_pixel_span(10);
        assert_eq!(x.try_pixel_from_coord(5.0), Ok(5));
        assert_eq!(x.try_coord_from_pixel(10), Ok(10.0));
    }

    #[test]
    fn paint_strokes_zero_line_first_then_draws_labels() {
        let (mut x, mut y) = sized_pair();
        x.set_range(-20.0, 50.0);
        x.set_cell_size(10.0);
        y.set_range(-10.0, 50.0);
        x.grid_mut().draw_angles = true;
        x.grid_mut().style.zero_line = StrokeStyle::solid(css::RED, 1.0);
        let frame = FrameContext::new(SURFACE, &x, &y);

        let mut rec = Recorder::default();
        x.paint(&mut rec, &frame);

        assert_eq!(rec.lines.len(), 8 + 5);
        assert_eq!(rec.lines[0].1, x.grid().style.zero_line);
        assert_eq!(rec.lines[1].1, x.grid().style.grid);
        assert_eq!(rec.lines[8].1, x.grid().style.angle);
        assert_eq!(rec.texts.len(), 8);
        assert_eq!(rec.texts[0], (Point::new(200.0, 300.0), String::from("0")));
    }
}
