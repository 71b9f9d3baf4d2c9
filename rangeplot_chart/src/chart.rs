// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart container.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Size};
use rangeplot_axis::{
    AxisEngine, FrameContext, Paintable, Painter, TextMeasurer, format_coord, resolve_step,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::{AxisConfig, ChartConfig, Corner};
use crate::error::ChartError;
use crate::series::{Series, SeriesId, SeriesKind, SeriesSet};
use crate::text_layer::TextLayer;

/// Extra horizontal pixels kept between neighbouring primary-axis labels.
pub const LABEL_GAP_X: f64 = 10.0;

/// Extra vertical pixels kept between neighbouring secondary-axis labels.
pub const LABEL_GAP_Y: f64 = 2.0;

/// What the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    /// Primary-axis coordinate.
    pub x: f64,
    /// Secondary-axis coordinate, or the profile height at `x` when a height
    /// series is registered.
    pub y: f64,
    /// Bearing of the pointer from the origin, in radians, computed from the
    /// raw axis coordinates.
    pub angle: f64,
}

/// A 2-D range/bearing chart.
///
/// Owns the axis pair, the data series and the text layer. Axis ranges come
/// from the data (auto-scaling) until [`Chart::set_extremes`] pins them; grid
/// cells are resolved on every paint until [`Chart::set_grid_step`] pins them.
#[derive(Clone, Debug)]
pub struct Chart {
    primary: AxisEngine,
    secondary: AxisEngine,
    series: SeriesSet,
    height_series: Option<SeriesId>,
    text: TextLayer,
    size: Size,
    label_band: Size,
    recalc_bounds: bool,
    tracking: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl Chart {
    /// Creates an empty, unsized chart.
    pub fn new(config: ChartConfig) -> Self {
        let mut primary = AxisEngine::primary();
        let mut secondary = AxisEngine::secondary();
        configure_axis(&mut primary, &config.primary, &config);
        configure_axis(&mut secondary, &config.secondary, &config);
        primary.grid_mut().draw_angles = config.angle_lines;

        let mut text = TextLayer::default();
        text.style = config.label_style.clone();

        let mut chart = Self {
            primary,
            secondary,
            series: SeriesSet::new(),
            height_series: None,
            text,
            size: Size::ZERO,
            label_band: Size::ZERO,
            recalc_bounds: true,
            tracking: false,
        };
        chart.set_corner(config.corner);
        chart
    }

    /// Sets the drawing surface size.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.primary.set_pixel_span(pixel_span(size.width));
        self.secondary.set_pixel_span(pixel_span(size.height));
    }

    /// Drawing surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Label extent measured by the last paint.
    pub fn label_band(&self) -> Size {
        self.label_band
    }

    /// The horizontal axis.
    pub fn primary_axis(&self) -> &AxisEngine {
        &self.primary
    }

    /// The horizontal axis, mutably.
    pub fn primary_axis_mut(&mut self) -> &mut AxisEngine {
        &mut self.primary
    }

    /// The vertical axis.
    pub fn secondary_axis(&self) -> &AxisEngine {
        &self.secondary
    }

    /// The vertical axis, mutably.
    pub fn secondary_axis_mut(&mut self) -> &mut AxisEngine {
        &mut self.secondary
    }

    /// All series in paint order.
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// Adds an empty series of `kind`.
    pub fn add_series(&mut self, kind: SeriesKind) -> SeriesId {
        self.series.insert(Series::new(kind))
    }

    /// Adds a prepared series.
    pub fn insert_series(&mut self, series: impl Into<Series>) -> SeriesId {
        self.series.insert(series)
    }

    /// Looks up a series for editing.
    pub fn series_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.get_mut(id)
    }

    /// Removes a series. Removing the height series unregisters it.
    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series> {
        if self.height_series == Some(id) {
            self.height_series = None;
        }
        self.series.remove(id)
    }

    /// Registers the profile whose height replaces `y` in pointer readouts.
    pub fn set_height_series(&mut self, id: SeriesId) -> Result<(), ChartError> {
        let series = self.series.get(id).ok_or(ChartError::UnknownSeries(id))?;
        if series.as_profile().is_none() {
            return Err(ChartError::NotAProfile {
                id,
                kind: series.kind(),
            });
        }
        self.height_series = Some(id);
        Ok(())
    }

    /// Unregisters the height series.
    pub fn clear_height_series(&mut self) {
        self.height_series = None;
    }

    /// The registered height series.
    pub fn height_series(&self) -> Option<SeriesId> {
        self.height_series
    }

    /// Profile height at `x`, if a height series is registered.
    pub fn height_value(&self, x: f64) -> Option<f64> {
        let id = self.height_series?;
        let profile = self.series.get(id)?.as_profile()?;
        Some(profile.height_value(x))
    }

    /// Adds a text annotation at a data point.
    pub fn add_annotation(&mut self, position: Point, text: impl Into<String>) {
        self.text.add_annotation(position, text);
    }

    /// The text layer.
    pub fn text_layer(&self) -> &TextLayer {
        &self.text
    }

    /// The text layer, mutably.
    pub fn text_layer_mut(&mut self) -> &mut TextLayer {
        &mut self.text
    }

    /// Whether any series holds data.
    pub fn has_data(&self) -> bool {
        self.series.has_data()
    }

    /// Whether ranges follow the data.
    pub fn is_auto_bounds(&self) -> bool {
        self.recalc_bounds
    }

    /// Whether both grid cells are resolved on paint.
    pub fn is_auto_step(&self) -> bool {
        self.primary.is_auto_step() && self.secondary.is_auto_step()
    }

    /// Whether pointer readouts are produced.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Updates axis ranges.
    ///
    /// With auto bounds, ranges become the aggregated (padded) data bounds;
    /// without data the axes are left as they are. With pinned bounds, the
    /// current ranges are re-applied.
    pub fn rescale_axes(&mut self) {
        if self.recalc_bounds {
            let Some(bounds) = self.series.bounds() else {
                tracing::debug!("no data bounds; axis ranges left unchanged");
                return;
            };
            self.primary.set_range(bounds.x_min, bounds.x_max);
            self.secondary.set_range(bounds.y_min, bounds.y_max);
            tracing::debug!(
                x_min = bounds.x_min,
                x_max = bounds.x_max,
                y_min = bounds.y_min,
                y_max = bounds.y_max,
                "rescaled axes to data"
            );
        } else {
            let (x_min, x_max) = (self.primary.min(), self.primary.max());
            let (y_min, y_max) = (self.secondary.min(), self.secondary.max());
            self.primary.set_range(x_min, x_max);
            self.secondary.set_range(y_min, y_max);
        }
    }

    /// Rescales and turns pointer tracking on.
    pub fn replot(&mut self) {
        self.tracking = true;
        self.rescale_axes();
    }

    /// Pins the axis ranges. Minimums are floored and maximums ceiled.
    pub fn set_extremes(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
        self.primary.set_range(x_min.floor(), x_max.ceil());
        self.secondary.set_range(y_min.floor(), y_max.ceil());
        self.recalc_bounds = false;
    }

    /// Collapses both ranges and returns to auto bounds.
    pub fn reset_bounds(&mut self) {
        self.primary.set_range(0.0, 0.0);
        self.secondary.set_range(0.0, 0.0);
        self.recalc_bounds = true;
    }

    /// Pins the grid cells.
    ///
    /// Pinning a single axis through [`AxisEngine::set_cell_size`] works too;
    /// the other axis keeps being resolved on paint.
    pub fn set_grid_step(&mut self, x_step: f64, y_step: f64) {
        self.primary.set_cell_size(x_step);
        self.secondary.set_cell_size(y_step);
    }

    /// Returns both axes to grid cells resolved on paint.
    pub fn reset_step(&mut self) {
        self.primary.reset_step();
        self.secondary.reset_step();
    }

    /// Enables or disables angle lines.
    pub fn set_angles(&mut self, enabled: bool) {
        self.primary.grid_mut().draw_angles = enabled;
    }

    /// Applies a label placement preset.
    pub fn set_corner(&mut self, corner: Corner) {
        let (primary, secondary) = corner.alignments();
        self.primary.set_alignment(primary);
        self.secondary.set_alignment(secondary);
    }

    /// Drops all series and text, collapses the ranges, and stops tracking.
    pub fn clear(&mut self) {
        self.tracking = false;
        self.series.clear();
        self.height_series = None;
        self.text.clear_annotations();
        self.text.clear_absolute();
        self.primary.set_range(0.0, 0.0);
        self.secondary.set_range(0.0, 0.0);
        self.recalc_bounds = true;
        self.reset_step();
    }

    /// Measures the widest primary label and resolves the grid cell of every
    /// axis left on auto step so neighbouring labels do not overlap.
    pub fn update_grid<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) {
        let widest = self.primary.min().abs().max(self.primary.max().abs()).trunc();
        let sample = format_coord(-widest);
        let metrics = measurer.measure(&sample, &self.text.style.text);
        self.label_band = Size::new(metrics.advance_width, metrics.line_height());

        if !self.primary.is_auto_step() && !self.secondary.is_auto_step() {
            return;
        }
        let min_dx = ((self.label_band.width + LABEL_GAP_X) * self.primary.scale()).abs();
        let min_dy = ((self.label_band.height + LABEL_GAP_Y) * self.secondary.scale()).abs();
        let x_cell = resolve_step(raw_step(&self.primary), min_dx);
        let y_cell = resolve_step(raw_step(&self.secondary), min_dy);
        self.primary.set_resolved_cell_size(x_cell);
        self.secondary.set_resolved_cell_size(y_cell);
        tracing::debug!(
            x_cell = self.primary.cell_size(),
            y_cell = self.secondary.cell_size(),
            min_dx,
            min_dy,
            "resolved grid steps"
        );
    }

    /// Paints data, then grid, then text.
    ///
    /// The chart adopts the painter's surface size. Nothing is drawn without
    /// data or on a zero-sized surface.
    pub fn paint(&mut self, painter: &mut dyn Painter) {
        let surface = painter.surface_size();
        if surface != self.size {
            self.resize(surface);
        }
        if !self.series.has_data() {
            tracing::trace!("no data; skipping paint");
            return;
        }
        if self.primary.pixel_span() == 0 || self.secondary.pixel_span() == 0 {
            tracing::debug!(?surface, "zero-sized surface; skipping paint");
            return;
        }

        self.update_grid(&*painter);
        self.text.clear_absolute();

        let frame = FrameContext::new(self.size, &self.primary, &self.secondary)
            .with_label_band(self.label_band);
        self.series.paint(painter, &frame);
        for axis in [&self.primary, &self.secondary] {
            let layout = axis.layout(&frame);
            axis.paint_grid(painter, &layout, &frame);
            for tick in layout.ticks {
                self.text.add_absolute(tick.label_origin, tick.label);
            }
        }
        self.text.paint(painter, &frame);
    }

    /// Reads out the data under a pointer position.
    ///
    /// `None` until [`Chart::replot`] has run, or when there is no data.
    pub fn pointer_moved(&self, pointer: Point) -> Option<Readout> {
        if !self.tracking || !self.series.has_data() {
            return None;
        }
        let x = self.primary.coord_from_pixel(round_pixel(pointer.x));
        let y_axis = self.secondary.coord_from_pixel(round_pixel(pointer.y));
        let y = self.height_value(x).unwrap_or(y_axis);
        let readout = Readout {
            x,
            y,
            angle: y_axis.atan2(x),
        };
        tracing::trace!(?pointer, ?readout, "pointer readout");
        Some(readout)
    }
}

fn configure_axis(axis: &mut AxisEngine, cfg: &AxisConfig, chart: &ChartConfig) {
    axis.set_tick_count(cfg.tick_count);
    axis.set_divide_threshold(cfg.divide_threshold);
    axis.set_dividing(cfg.dividing);
    axis.set_anchor(chart.anchor);
    axis.set_label_style(chart.label_style.clone());
    axis.grid_mut().style = cfg.grid.clone();
}

fn raw_step(axis: &AxisEngine) -> f64 {
    axis.span() / f64::from(axis.tick_count().max(1))
}

fn pixel_span(extent: f64) -> u32 {
    if !(extent.is_finite() && extent > 0.0) {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "positive, finite and clamped to the u32 range"
    )]
    {
        extent.round().min(f64::from(u32::MAX)) as u32
    }
}

fn round_pixel(v: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; pointer positions are on-surface"
    )]
    {
        v.round() as i32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;
    use std::vec::Vec;

    use float_cmp::approx_eq;
    use kurbo::{Line, Rect};
    use peniko::Brush;
    use peniko::color::palette::css;
    use rangeplot_axis::{FillStyle, LabelAlignment, LabelStyle, StrokeStyle, TextStyle};
    use rangeplot_text::{FixedCellMeasurer, TextMetrics};

    use super::*;
    use crate::points::PointSeries;

    #[derive(Default)]
    struct Recorder {
        size: Size,
        lines: Vec<Line>,
        texts: Vec<(Point, String)>,
        polylines: usize,
        polygons: usize,
        rects: Vec<(Rect, Option<Brush>)>,
    }

    impl Recorder {
        fn new(width: f64, height: f64) -> Self {
            Self {
                size: Size::new(width, height),
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.lines.len() + self.texts.len() + self.polylines + self.polygons + self.rects.len()
        }
    }

    impl TextMeasurer for Recorder {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            FixedCellMeasurer::new(6.0, 10.0).measure(text, style)
        }
    }

    impl Painter for Recorder {
        fn surface_size(&self) -> Size {
            self.size
        }

        fn stroke_line(&mut self, line: Line, _stroke: &StrokeStyle) {
            self.lines.push(line);
        }

        fn draw_text(&mut self, origin: Point, text: &str, _style: &LabelStyle) {
            self.texts.push((origin, text.to_string()));
        }

        fn draw_polyline(&mut self, _points: &[Point], _stroke: &StrokeStyle) {
            self.polylines += 1;
        }

        fn draw_polygon(
            &mut self,
            _points: &[Point],
            _stroke: &StrokeStyle,
            _fill: Option<&FillStyle>,
        ) {
            self.polygons += 1;
        }

        fn draw_rect(&mut self, rect: Rect, _stroke: &StrokeStyle, fill: Option<&FillStyle>) {
            self.rects.push((rect, fill.map(|f| f.brush.clone())));
        }
    }

    /// The profile from the demo: five points zig-zagging upwards.
    fn profile_chart() -> (Chart, SeriesId) {
        let mut chart = Chart::default();
        let id = chart.add_series(SeriesKind::Profile);
        let points: Vec<_> = (0..5)
            .map(|i| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                Point::new(f64::from(i) - 3.0, f64::from(i) + sign * 0.5)
            })
            .collect();
        if let Some(s) = chart.series_mut(id) {
            s.set_data(points);
        }
        chart.resize(Size::new(700.0, 300.0));
        chart.replot();
        (chart, id)
    }

    #[test]
    fn nothing_is_painted_without_data_or_size() {
        let mut chart = Chart::default();
        chart.add_series(SeriesKind::Trajectory);
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);
        assert_eq!(rec.call_count(), 0);

        let (mut chart, _) = profile_chart();
        let mut rec = Recorder::new(0.0, 0.0);
        chart.paint(&mut rec);
        assert_eq!(rec.call_count(), 0);
        assert_eq!(chart.primary_axis().pixel_span(), 0);
    }

    #[test]
    fn replot_scales_axes_to_the_data() {
        let (chart, _) = profile_chart();
        let x = chart.primary_axis();
        let y = chart.secondary_axis();
        assert_eq!((x.min(), x.max()), (-3.0, 1.0));
        assert_eq!((y.min(), y.max()), (0.5, 4.5));
        // The vertical axis is inverted: its top pixel is the maximum.
        assert_eq!(y.range().start(), 4.5);
    }

    #[test]
    fn paint_resolves_steps_and_routes_labels_through_the_text_layer() {
        let (mut chart, _) = profile_chart();
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);

        // "-3" in 6x10 cells.
        assert_eq!(chart.label_band(), Size::new(12.0, 10.0));
        assert_eq!(chart.primary_axis().cell_size(), 0.8);
        assert_eq!(chart.secondary_axis().cell_size(), 0.8);

        assert_eq!(rec.polygons, 1);
        assert_eq!(rec.lines.len(), 5 + 6);
        assert_eq!(rec.texts.len(), 5 + 6);
        assert_eq!(rec.texts[0], (Point::new(525.0, 300.0), "0".to_string()));
        let x_labels: Vec<_> = rec.texts[..5].iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(x_labels, ["0", "0.8", "-0.8", "-1.6", "-2.4"]);
        assert_eq!(chart.text_layer().absolute().len(), 11);

        // Repainting replaces the absolute labels instead of piling them up.
        chart.paint(&mut rec);
        assert_eq!(chart.text_layer().absolute().len(), 11);
    }

    #[test]
    fn annotations_follow_the_data() {
        let (mut chart, _) = profile_chart();
        chart.add_annotation(Point::new(0.0, 2.5), "peak");
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);
        let last = rec.texts.last().cloned();
        assert_eq!(last, Some((Point::new(525.0, 150.0), "peak".to_string())));
    }

    #[test]
    fn angle_lines_are_drawn_after_the_primary_grid() {
        let (mut chart, _) = profile_chart();
        chart.set_angles(true);
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);
        assert_eq!(rec.lines.len(), 5 + 5 + 6);
        assert_eq!(rec.lines[5].p0, Point::new(0.0, 300.0));
    }

    #[test]
    fn pinned_extremes_survive_rescale() {
        let (mut chart, _) = profile_chart();
        chart.set_extremes(-3.2, 1.7, 0.4, 4.6);
        assert!(!chart.is_auto_bounds());
        chart.rescale_axes();
        assert_eq!(chart.primary_axis().min(), -4.0);
        assert_eq!(chart.primary_axis().max(), 2.0);
        assert_eq!(chart.secondary_axis().min(), 0.0);
        assert_eq!(chart.secondary_axis().max(), 5.0);

        chart.reset_bounds();
        assert_eq!(chart.primary_axis().span(), 0.0);
        chart.rescale_axes();
        assert_eq!(chart.primary_axis().min(), -3.0);
        assert_eq!(chart.secondary_axis().max(), 4.5);
    }

    #[test]
    fn pinned_grid_step_is_not_recomputed() {
        let (mut chart, _) = profile_chart();
        chart.set_grid_step(1.0, 0.5);
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);
        assert_eq!(chart.primary_axis().cell_size(), 1.0);
        assert_eq!(chart.secondary_axis().cell_size(), 0.5);

        chart.reset_step();
        chart.paint(&mut rec);
        assert_eq!(chart.primary_axis().cell_size(), 0.8);
    }

    #[test]
    fn cell_pinned_on_one_axis_survives_paint() {
        let (mut chart, _) = profile_chart();
        chart.primary_axis_mut().set_cell_size(2.0);
        assert!(!chart.is_auto_step());

        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);
        assert_eq!(chart.primary_axis().cell_size(), 2.0);
        assert_eq!(chart.secondary_axis().cell_size(), 0.8);

        chart.clear();
        assert!(chart.is_auto_step());
    }

    #[test]
    fn large_spans_get_thousands_labels() {
        let config = ChartConfig::default()
            .with_primary(AxisConfig::primary().with_dividing(true));
        let mut chart = Chart::new(config);
        let id = chart.add_series(SeriesKind::Trajectory);
        if let Some(s) = chart.series_mut(id) {
            s.set_data([Point::new(0.0, 0.0), Point::new(30_000.0, 100.0)]);
        }
        chart.replot();
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);

        assert_eq!(rec.polylines, 1);
        assert_eq!(chart.primary_axis().cell_size(), 6000.0);
        let x_labels: Vec<_> = chart.text_layer().absolute()[..6]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(x_labels, ["0", "6", "12", "18", "24", "30"]);
    }

    #[test]
    fn pointer_readout_uses_the_height_series() {
        let (mut chart, id) = profile_chart();

        let r = chart.pointer_moved(Point::new(100.0, 270.0));
        let Some(r) = r else {
            panic!("tracking is on after replot");
        };
        assert!(approx_eq!(f64, r.x, -3.0 + 100.0 * 4.0 / 700.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, r.y, 0.9, epsilon = 1e-9));

        chart.set_height_series(id).unwrap();
        let r = chart.pointer_moved(Point::new(100.0, 270.0)).unwrap();
        assert_eq!(r.y, 0.5);
        assert!(approx_eq!(f64, r.angle, 0.9_f64.atan2(r.x), epsilon = 1e-9));

        let r = chart.pointer_moved(Point::new(525.0, 150.0)).unwrap();
        assert!(r.x.abs() < 1e-9);
        assert_eq!(r.y, 2.5);
        assert!(approx_eq!(f64, r.angle, core::f64::consts::FRAC_PI_2, epsilon = 1e-9));
    }

    #[test]
    fn pointer_readout_needs_replot_and_data() {
        let mut chart = Chart::default();
        let id = chart.add_series(SeriesKind::Points);
        if let Some(s) = chart.series_mut(id) {
            s.set_data([Point::new(1.0, 1.0)]);
        }
        chart.resize(Size::new(100.0, 100.0));
        assert_eq!(chart.pointer_moved(Point::new(10.0, 10.0)), None);

        chart.replot();
        assert!(chart.pointer_moved(Point::new(10.0, 10.0)).is_some());

        chart.clear();
        assert!(!chart.has_data());
        assert_eq!(chart.pointer_moved(Point::new(10.0, 10.0)), None);
        assert!(chart.series().is_empty());
        assert_eq!(chart.height_series(), None);
    }

    #[test]
    fn height_series_must_be_a_profile() {
        let (mut chart, profile) = profile_chart();
        let polygon = chart.add_series(SeriesKind::Polygon);
        assert_eq!(
            chart.set_height_series(polygon),
            Err(ChartError::NotAProfile {
                id: polygon,
                kind: SeriesKind::Polygon,
            })
        );
        assert_eq!(
            chart.set_height_series(SeriesId(99)),
            Err(ChartError::UnknownSeries(SeriesId(99)))
        );

        assert_eq!(chart.set_height_series(profile), Ok(()));
        assert!(chart.remove_series(profile).is_some());
        assert_eq!(chart.height_series(), None);
        assert_eq!(chart.height_value(0.0), None);
    }

    #[test]
    fn origin_point_has_its_own_style() {
        let mut chart = Chart::default();
        let mut points = PointSeries::default();
        points.set_data([
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(-4.0, 8.0),
        ]);
        chart.insert_series(points);
        chart.replot();
        let mut rec = Recorder::new(700.0, 300.0);
        chart.paint(&mut rec);

        assert_eq!(rec.rects.len(), 3);
        assert_eq!(rec.rects[0].1, Some(Brush::Solid(css::GREEN)));
        assert_eq!(rec.rects[1].1, Some(Brush::Solid(css::RED)));
        assert_eq!(rec.rects[2].1, Some(Brush::Solid(css::RED)));
        assert_eq!(rec.rects[0].0.width(), 4.0);
    }

    #[test]
    fn corner_presets_set_label_alignment() {
        let mut chart = Chart::new(ChartConfig::default().with_corner(Corner::Center));
        assert_eq!(chart.primary_axis().alignment(), LabelAlignment::VCenter);
        assert_eq!(chart.secondary_axis().alignment(), LabelAlignment::HCenter);

        chart.set_corner(Corner::TopLeft);
        assert_eq!(chart.primary_axis().alignment(), LabelAlignment::Top);
        assert_eq!(chart.secondary_axis().alignment(), LabelAlignment::Left);
    }
}
