// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG painter for `rangeplot_demo`.

use std::fmt::Write as _;

use kurbo::{Line, Point, Rect, Size};
use peniko::{Brush, Fill};
use rangeplot_axis::{FillStyle, LabelStyle, Painter, StrokeStyle};
use rangeplot_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// Collects painter calls as SVG elements, in call order.
#[derive(Debug)]
pub(crate) struct SvgPainter {
    size: Size,
    measurer: HeuristicTextMeasurer,
    body: String,
}

impl SvgPainter {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            measurer: HeuristicTextMeasurer,
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="xMinYMin meet">"#,
            w = self.size.width,
            h = self.size.height,
        );
        out.push('\n');
        let _ = writeln!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            self.size.width, self.size.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_stroke(&mut self, stroke: &StrokeStyle) {
        write_paint_attr(&mut self.body, "stroke", &stroke.brush);
        let _ = write!(self.body, r#" stroke-width="{}""#, stroke.stroke_width);
        let pattern = stroke.dash.pattern();
        if !pattern.is_empty() {
            let dashes: Vec<String> = pattern
                .iter()
                .map(|d| (d * stroke.stroke_width).to_string())
                .collect();
            let _ = write!(self.body, r#" stroke-dasharray="{}""#, dashes.join(" "));
        }
    }

    fn write_fill(&mut self, fill: Option<&FillStyle>) {
        match fill {
            Some(fill) => {
                write_paint_attr(&mut self.body, "fill", &fill.brush);
                let rule = if fill.rule == Fill::EvenOdd {
                    "evenodd"
                } else {
                    "nonzero"
                };
                let _ = write!(self.body, r#" fill-rule="{rule}""#);
            }
            None => self.body.push_str(r#" fill="none""#),
        }
    }
}

impl TextMeasurer for SvgPainter {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}

impl Painter for SvgPainter {
    fn surface_size(&self) -> Size {
        self.size
    }

    fn stroke_line(&mut self, line: Line, stroke: &StrokeStyle) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
        self.write_stroke(stroke);
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}""#,
            origin.x,
            origin.y,
            style.text.font_size,
            style.text.font_family.as_css_family(),
            style.text.font_weight.0,
        );
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &StrokeStyle) {
        let _ = write!(self.body, r#"<polyline points="{}""#, points_attr(points));
        self.write_stroke(stroke);
        self.body.push_str(r#" fill="none"/>"#);
        self.body.push('\n');
    }

    fn draw_polygon(&mut self, points: &[Point], stroke: &StrokeStyle, fill: Option<&FillStyle>) {
        let _ = write!(self.body, r#"<polygon points="{}""#, points_attr(points));
        self.write_fill(fill);
        self.write_stroke(stroke);
        self.body.push_str("/>\n");
    }

    fn draw_rect(&mut self, rect: Rect, stroke: &StrokeStyle, fill: Option<&FillStyle>) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        self.write_fill(fill);
        self.write_stroke(stroke);
        self.body.push_str("/>\n");
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
