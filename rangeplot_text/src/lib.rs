// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis labels.
//!
//! Tick spacing in `rangeplot` depends on how large a label is on screen: two
//! neighbouring labels must not collide. Shaping and glyph rendering live in
//! the renderer, so the axis engine only talks to a tiny measurement trait.
//!
//! This crate is `no_std` and has no dependencies. Renderers implement
//! [`TextMeasurer`] on top of whatever font stack they use; tests and demos can
//! use [`HeuristicTextMeasurer`] or [`FixedCellMeasurer`].

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface.
///
/// `text` is a single line. Implementations report metrics in the same units
/// as the drawing surface (pixels).
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface units.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"DejaVu Sans"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name as used in CSS/SVG `font-family` attributes.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic measurer: ~0.6em per glyph, baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// A measurer where every glyph occupies a fixed `cell_width x cell_height` box.
///
/// The font size is ignored. Handy for terminal-like surfaces and for
/// deterministic label spacing in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedCellMeasurer {
    /// Advance per glyph.
    pub cell_width: f64,
    /// Line height.
    pub cell_height: f64,
}

impl FixedCellMeasurer {
    /// Creates a measurer with the given glyph cell.
    #[must_use]
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }
}

impl TextMeasurer for FixedCellMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: self.cell_width * text.chars().count() as f64,
            ascent: self.cell_height,
            descent: 0.0,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_grows_with_glyph_count() {
        let style = TextStyle::new(10.0);
        let short = HeuristicTextMeasurer.measure("-50", &style);
        let long = HeuristicTextMeasurer.measure("-5000", &style);
        assert!(long.advance_width > short.advance_width);
        assert_eq!(short.line_height(), long.line_height());
    }

    #[test]
    fn fixed_cell_ignores_font_size() {
        let m = FixedCellMeasurer::new(7.0, 12.0);
        let a = m.measure("-120", &TextStyle::new(8.0));
        let b = m.measure("-120", &TextStyle::new(30.0));
        assert_eq!(a, b);
        assert_eq!(a.advance_width, 28.0);
        assert_eq!(a.line_height(), 12.0);
    }

    #[test]
    fn measurer_is_usable_through_a_reference() {
        fn width(m: impl TextMeasurer) -> f64 {
            m.measure("10", &TextStyle::default()).advance_width
        }
        let m = FixedCellMeasurer::new(5.0, 10.0);
        assert_eq!(width(&m), 10.0);
    }

    #[test]
    fn css_family_names() {
        assert_eq!(FontFamily::SansSerif.as_css_family(), "sans-serif");
        assert_eq!(FontFamily::Named(Arc::from("Inter")).as_css_family(), "Inter");
    }
}
