// Copyright 2025 the Rangeplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use rangeplot_axis::{
    DEFAULT_TICK_COUNT, GridStyle, LabelAlignment, LabelStyle, PRIMARY_DIVIDE_THRESHOLD,
    SECONDARY_DIVIDE_THRESHOLD, TickAnchor,
};

/// Default label placement for the axis pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Labels follow the zero lines through the middle of the chart.
    Center,
    /// Primary labels along the bottom, secondary along the left.
    #[default]
    BottomLeft,
    /// Primary labels along the top, secondary along the left.
    TopLeft,
}

impl Corner {
    /// `(primary, secondary)` label alignments for this corner.
    pub fn alignments(self) -> (LabelAlignment, LabelAlignment) {
        match self {
            Self::Center => (LabelAlignment::VCenter, LabelAlignment::HCenter),
            Self::BottomLeft => (LabelAlignment::Bottom, LabelAlignment::Left),
            Self::TopLeft => (LabelAlignment::Top, LabelAlignment::Left),
        }
    }
}

/// Per-axis settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Target number of grid cells across the span.
    pub tick_count: u32,
    /// Span above which labels switch to thousands.
    pub divide_threshold: f64,
    /// Whether thousands labels are allowed at all.
    pub dividing: bool,
    /// Grid strokes.
    pub grid: GridStyle,
}

impl AxisConfig {
    /// Defaults for the horizontal axis.
    pub fn primary() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            divide_threshold: PRIMARY_DIVIDE_THRESHOLD,
            dividing: false,
            grid: GridStyle::default(),
        }
    }

    /// Defaults for the vertical axis.
    pub fn secondary() -> Self {
        Self {
            divide_threshold: SECONDARY_DIVIDE_THRESHOLD,
            ..Self::primary()
        }
    }

    /// Sets the tick count.
    pub fn with_tick_count(mut self, tick_count: u32) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the divide threshold.
    pub fn with_divide_threshold(mut self, threshold: f64) -> Self {
        self.divide_threshold = threshold;
        self
    }

    /// Enables or disables thousands labels.
    pub fn with_dividing(mut self, dividing: bool) -> Self {
        self.dividing = dividing;
        self
    }

    /// Sets the grid strokes.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }
}

/// Everything a [`Chart`](crate::Chart) is created from.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Horizontal axis.
    pub primary: AxisConfig,
    /// Vertical axis.
    pub secondary: AxisConfig,
    /// Whether bearing lines are drawn from the bottom-left corner.
    pub angle_lines: bool,
    /// Label placement.
    pub corner: Corner,
    /// Paint and font for tick labels and annotations.
    pub label_style: LabelStyle,
    /// Tick anchoring for both axes.
    pub anchor: TickAnchor,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            primary: AxisConfig::primary(),
            secondary: AxisConfig::secondary(),
            angle_lines: false,
            corner: Corner::default(),
            label_style: LabelStyle::default(),
            anchor: TickAnchor::default(),
        }
    }
}

impl ChartConfig {
    /// Sets the horizontal axis settings.
    pub fn with_primary(mut self, primary: AxisConfig) -> Self {
        self.primary = primary;
        self
    }

    /// Sets the vertical axis settings.
    pub fn with_secondary(mut self, secondary: AxisConfig) -> Self {
        self.secondary = secondary;
        self
    }

    /// Enables or disables angle lines.
    pub fn with_angle_lines(mut self, enabled: bool) -> Self {
        self.angle_lines = enabled;
        self
    }

    /// Sets the label placement.
    pub fn with_corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
        self
    }

    /// Sets the label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Sets the tick anchoring.
    pub fn with_anchor(mut self, anchor: TickAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}
