// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer seam.
//!
//! Everything in this workspace draws through [`Painter`], in surface pixels
//! with the origin at the top-left corner. Renderers (SVG, a GPU scene, a test
//! recorder) implement it; layers implement [`Paintable`].

use kurbo::{Line, Point, Rect, Size};
use peniko::color::palette::css;
use peniko::{Brush, Fill};
use rangeplot_text::{TextMeasurer, TextStyle};

use crate::frame::FrameContext;

/// Dash pattern of a stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineDash {
    /// A continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dash,
    /// A dash followed by two dots.
    DashDotDot,
}

impl LineDash {
    /// On/off lengths in multiples of the stroke width (empty for solid).
    pub fn pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dash => &[4.0, 2.0],
            Self::DashDotDot => &[4.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        }
    }
}

/// A paint, width and dash for stroked lines and outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Dash pattern.
    pub dash: LineDash,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: LineDash::Solid,
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A fill paint plus the rule deciding what is "inside".
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    /// Fill paint.
    pub brush: Brush,
    /// Winding rule.
    pub rule: Fill,
}

impl FillStyle {
    /// A non-zero fill with the given paint.
    pub fn new(brush: impl Into<Brush>) -> Self {
        Self {
            brush: brush.into(),
            rule: Fill::NonZero,
        }
    }

    /// Sets the winding rule.
    pub fn with_rule(mut self, rule: Fill) -> Self {
        self.rule = rule;
        self
    }
}

/// How a text run is painted.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Glyph paint.
    pub fill: Brush,
    /// Font inputs, also used for measurement.
    pub text: TextStyle,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(css::GRAY),
            text: TextStyle::default(),
        }
    }
}

/// A drawing surface.
///
/// Text measurement is part of the contract: label spacing depends on it.
pub trait Painter: TextMeasurer {
    /// Size of the drawing surface in pixels.
    fn surface_size(&self) -> Size;

    /// Strokes a straight segment.
    fn stroke_line(&mut self, line: Line, stroke: &StrokeStyle);

    /// Draws a single line of text with `origin` at the left end of its baseline.
    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle);

    /// Strokes an open polyline.
    fn draw_polyline(&mut self, points: &[Point], stroke: &StrokeStyle);

    /// Fills (when `fill` is set) and strokes a closed polygon.
    fn draw_polygon(&mut self, points: &[Point], stroke: &StrokeStyle, fill: Option<&FillStyle>);

    /// Fills (when `fill` is set) and strokes a rectangle.
    fn draw_rect(&mut self, rect: Rect, stroke: &StrokeStyle, fill: Option<&FillStyle>);
}

/// A layer that knows how to draw itself for one frame.
pub trait Paintable {
    /// Draws onto `painter`.
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>);
}
