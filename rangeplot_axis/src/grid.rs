// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid lines and bearing (angle) lines.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Point, Size};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::Orientation;
use crate::paint::{LineDash, Painter, StrokeStyle};

/// Bearings, in degrees from the primary axis, of the angle lines.
pub const ANGLE_LINE_DEGREES: [f64; 5] = [15.0, 30.0, 45.0, 60.0, 75.0];

/// One full-span segment per tick pixel.
///
/// Primary axis ticks give vertical lines across the surface height; secondary
/// axis ticks give horizontal lines across the width. Order is preserved, so
/// when the zero tick leads the input it leads the output.
pub fn grid_segments(
    orientation: Orientation,
    pixels: impl IntoIterator<Item = i32>,
    surface: Size,
) -> Vec<Line> {
    pixels
        .into_iter()
        .map(|p| {
            let p = f64::from(p);
            match orientation {
                Orientation::Primary => Line::new((p, 0.0), (p, surface.height)),
                Orientation::Secondary => Line::new((0.0, p), (surface.width, p)),
            }
        })
        .collect()
}

/// Lines fanning out from the bottom-left corner at [`ANGLE_LINE_DEGREES`].
///
/// Each runs from `(0, h)` to `(h / tan θ, 0)`.
pub fn angle_lines(surface_height: f64) -> SmallVec<[Line; 5]> {
    ANGLE_LINE_DEGREES
        .iter()
        .map(|deg| {
            let x = surface_height / deg.to_radians().tan();
            Line::new(Point::new(0.0, surface_height), Point::new(x, 0.0))
        })
        .collect()
}

/// Stroke styles for the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// The line through coordinate zero.
    pub zero_line: StrokeStyle,
    /// Every other grid line.
    pub grid: StrokeStyle,
    /// Angle lines.
    pub angle: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        let grid = StrokeStyle {
            brush: Brush::Solid(css::GRAY),
            stroke_width: 0.8,
            dash: LineDash::DashDotDot,
        };
        Self {
            zero_line: grid.clone(),
            angle: StrokeStyle {
                brush: Brush::Solid(css::DARK_GRAY),
                ..grid.clone()
            },
            grid,
        }
    }
}

impl GridStyle {
    /// Sets the zero line stroke.
    pub fn with_zero_line(mut self, stroke: StrokeStyle) -> Self {
        self.zero_line = stroke;
        self
    }

    /// Sets the regular grid stroke.
    pub fn with_grid(mut self, stroke: StrokeStyle) -> Self {
        self.grid = stroke;
        self
    }

    /// Sets the angle line stroke.
    pub fn with_angle(mut self, stroke: StrokeStyle) -> Self {
        self.angle = stroke;
        self
    }
}

/// Strokes grid segments for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLineBuilder {
    /// Grid strokes.
    pub style: GridStyle,
    /// Whether angle lines are drawn after the grid.
    pub draw_angles: bool,
}

impl GridLineBuilder {
    /// Strokes `segments` (the first with the zero line style), then the angle
    /// lines when enabled. Nothing is drawn for an empty slice.
    pub fn paint(&self, painter: &mut dyn Painter, segments: &[Line], surface_height: f64) {
        let Some((zero, rest)) = segments.split_first() else {
            return;
        };
        painter.stroke_line(*zero, &self.style.zero_line);
        for line in rest {
            painter.stroke_line(*line, &self.style.grid);
        }
        if self.draw_angles {
            for line in angle_lines(surface_height) {
                painter.stroke_line(line, &self.style.angle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn primary_segments_are_vertical() {
        let lines = grid_segments(Orientation::Primary, [50, 10, 90], Size::new(100.0, 40.0));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new((50.0, 0.0), (50.0, 40.0)));
        assert_eq!(lines[2], Line::new((90.0, 0.0), (90.0, 40.0)));
    }

    #[test]
    fn secondary_segments_are_horizontal() {
        let lines = grid_segments(Orientation::Secondary, [7], Size::new(100.0, 40.0));
        assert_eq!(lines, [Line::new((0.0, 7.0), (100.0, 7.0))]);
    }

    #[test]
    fn angle_lines_hit_the_top_edge_at_the_bearing() {
        let h = 300.0;
        let lines = angle_lines(h);
        assert_eq!(lines.len(), 5);
        for (line, deg) in lines.iter().zip(ANGLE_LINE_DEGREES) {
            assert_eq!(line.p0, Point::new(0.0, h));
            assert_eq!(line.p1.y, 0.0);
            let rise = line.p0.y - line.p1.y;
            let run = line.p1.x - line.p0.x;
            assert!(approx_eq!(f64, rise / run, deg.to_radians().tan(), epsilon = 1e-9));
        }
        assert!(approx_eq!(f64, lines[2].p1.x, h, epsilon = 1e-9));
        // Steeper bearings land closer to the left edge.
        assert!(lines.windows(2).all(|w| w[0].p1.x > w[1].p1.x));
    }

    #[test]
    fn default_style_uses_dash_dot_dot() {
        let style = GridStyle::default();
        assert_eq!(style.grid.dash, LineDash::DashDotDot);
        assert_eq!(style.zero_line, style.grid);
        assert_ne!(style.angle.brush, style.grid.brush);
    }
}
