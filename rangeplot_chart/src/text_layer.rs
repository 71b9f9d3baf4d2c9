// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-standing text: data annotations and pixel-positioned labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use rangeplot_axis::{FrameContext, LabelStyle, Paintable, Painter};

/// A text run anchored at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// Anchor (left end of the baseline).
    pub position: Point,
    /// The text.
    pub text: String,
}

/// Annotations in data coordinates plus labels in absolute pixels.
///
/// Absolute labels are drawn first; axis tick labels are routed here each
/// frame so they sit on top of the data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayer {
    annotations: Vec<TextItem>,
    absolute: Vec<TextItem>,
    /// Paint and font for every item.
    pub style: LabelStyle,
}

impl TextLayer {
    /// Adds an annotation at a data point.
    pub fn add_annotation(&mut self, position: Point, text: impl Into<String>) {
        self.annotations.push(TextItem {
            position,
            text: text.into(),
        });
    }

    /// Adds a label at a surface pixel.
    pub fn add_absolute(&mut self, position: Point, text: impl Into<String>) {
        self.absolute.push(TextItem {
            position,
            text: text.into(),
        });
    }

    /// Annotations in insertion order.
    pub fn annotations(&self) -> &[TextItem] {
        &self.annotations
    }

    /// Absolute labels in insertion order.
    pub fn absolute(&self) -> &[TextItem] {
        &self.absolute
    }

    /// Drops all annotations.
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    /// Drops all absolute labels.
    pub fn clear_absolute(&mut self) {
        self.absolute.clear();
    }
}

impl Paintable for TextLayer {
    fn paint(&self, painter: &mut dyn Painter, frame: &FrameContext<'_>) {
        for item in &self.absolute {
            painter.draw_text(item.position, &item.text, &self.style);
        }
        for item in &self.annotations {
            let origin = frame.data_to_pixel(item.position);
            painter.draw_text(origin, &item.text, &self.style);
        }
    }
}
