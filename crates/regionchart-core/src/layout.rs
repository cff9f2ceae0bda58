// File: crates/regionchart-core/src/layout.rs
// Summary: Axis layout handed to the renderer: domains, formats, ticks and label strings.
// Notes:
// - Label pixel widths are measured by the renderer; this module only
//   produces the strings worth measuring.

use serde::Serialize;

use crate::axis::{AxisBounds, AxisDomain, NumberFormat};
use crate::format::DateFormat;
use crate::grid::{linspace, nice_ticks};
use crate::series::CategoryColumn;
use crate::settings::AxesSettings;

/// Below this viewport width the category axis shows only two ticks.
pub const NARROW_VIEWPORT_PX: f64 = 300.0;
/// Upper bound on category ticks.
pub const MAX_X_TICKS: usize = 15;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLayout {
    pub left: AxisDomain,
    pub right: AxisDomain,
    pub left_format: NumberFormat,
    pub right_format: NumberFormat,
    pub date_format: DateFormat,
    pub left_ticks: Vec<Tick>,
    pub right_ticks: Vec<Tick>,
    /// Category indices that carry a label.
    pub x_ticks: Vec<usize>,
    /// Longest formatted category label.
    pub widest_x_label: Option<String>,
}

/// Number of category ticks for a viewport `width` px wide.
pub fn x_tick_count(width: f64, categories: usize) -> usize {
    if width > NARROW_VIEWPORT_PX { categories.min(MAX_X_TICKS) } else { 2 }
}

/// Evenly spread category indices, at most `count` of them.
pub fn x_tick_indices(categories: usize, count: usize) -> Vec<usize> {
    if categories == 0 || count == 0 { return Vec::new(); }
    if categories == 1 { return vec![0]; }
    let mut idx: Vec<usize> = linspace(0.0, (categories - 1) as f64, count.max(2).min(categories))
        .into_iter()
        .map(|v| v.round() as usize)
        .collect();
    idx.dedup();
    idx
}

/// Formatted label of every category; missing keys give empty labels.
pub fn category_labels(categories: &CategoryColumn, format: &DateFormat) -> Vec<String> {
    categories
        .values
        .iter()
        .map(|v| v.as_ref().map(|c| format.format_category(c)).unwrap_or_default())
        .collect()
}

fn ticks(domain: AxisDomain, count: usize, format: &NumberFormat) -> Vec<Tick> {
    nice_ticks(domain, count).into_iter().map(|value| Tick { value, label: format.format(value) }).collect()
}

pub fn axis_layout(bounds: &AxisBounds, axes: &AxesSettings, categories: &CategoryColumn, viewport_width: f64, y_ticks: usize) -> AxisLayout {
    let left = bounds.left();
    let right = bounds.right();
    let left_format = NumberFormat::left(axes, left);
    let right_format = NumberFormat::right(axes, right);
    let date_format = DateFormat::or_default(categories.format.as_deref());

    let widest_x_label = category_labels(categories, &date_format)
        .into_iter()
        .fold(None::<String>, |best, l| match best {
            Some(b) if b.chars().count() >= l.chars().count() => Some(b),
            _ => Some(l),
        });

    AxisLayout {
        left_ticks: ticks(left, y_ticks, &left_format),
        right_ticks: ticks(right, y_ticks, &right_format),
        x_ticks: x_tick_indices(categories.len(), x_tick_count(viewport_width, categories.len())),
        left,
        right,
        left_format,
        right_format,
        date_format,
        widest_x_label,
    }
}
