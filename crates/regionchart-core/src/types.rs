// File: crates/regionchart-core/src/types.rs
// Summary: Shared constants and the immutable chart options (margins, gap color, ticks).

use serde::Serialize;

/// Line color used when a single line has no fill setting.
pub const DEFAULT_LINE_COLOR: &str = "#01B8AA";
/// Nominal color of gap bands.
pub const DEFAULT_GAP_COLOR: &str = "#FFFFFF";
/// Color given to gaps with a negative thickness somewhere.
pub const TRANSPARENT: &str = "transparent";
/// Name of the aggregated bar series.
pub const COLUMN_SERIES_KEY: &str = "Column values";
/// Host date pattern used when the category column has none.
pub const DEFAULT_DATE_FORMAT: &str = "MM/DD/YYYY";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Margin that fits a label `label_px` wide: label + 40px, at least 60px.
    pub fn for_label(label_px: f32) -> u32 {
        let w = if label_px.is_finite() { label_px.max(0.0) } else { 0.0 };
        (w + 40.0).max(60.0).ceil() as u32
    }

    /// Margins sized from measured label widths. `legend_px` is the height of
    /// a rendered legend, if any; it pushes the top margin down.
    pub fn from_measured(left_label_px: f32, right_label_px: f32, x_label_px: f32, legend_px: Option<f32>) -> Self {
        let top = match legend_px {
            Some(h) if h.is_finite() && h > 0.0 => (h + 20.0).ceil() as u32,
            _ => Self::default().top,
        };
        Self::new(Self::for_label(left_label_px), Self::for_label(right_label_px), top, Self::for_label(x_label_px))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 40, 50, 50)
    }
}

/// Immutable per-chart options passed into every update.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub margin: Insets,
    pub gap_color: String,
    /// Axis tick length in pixels.
    pub tick_size: u32,
    /// Y ticks requested per value axis.
    pub y_ticks: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { margin: Insets::default(), gap_color: DEFAULT_GAP_COLOR.to_string(), tick_size: 10, y_ticks: 10 }
    }
}
