// File: crates/regionchart-core/src/tooltip.rs
// Summary: Tooltip rows for bar and line hover targets.

use serde::Serialize;

use crate::axis::format_plain;
use crate::format::DateFormat;
use crate::input::ChartInput;
use crate::series::Role;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub display_name: Option<String>,
    pub value: String,
}

fn category_row(input: &ChartInput, category_index: usize) -> TooltipItem {
    let format = DateFormat::or_default(input.categories.format.as_deref());
    TooltipItem {
        display_name: input.categories.display_name.clone(),
        value: input.categories.get(category_index).map(|c| format.format_category(c)).unwrap_or_default(),
    }
}

/// Rows for a bar: the category, the bar value, then extra tooltip measures.
///
/// Extra measures are tooltip-role series that are not column series, taken
/// once per display name, and shown only where their sample is present.
pub fn bar_tooltip(input: &ChartInput, category_index: usize, value: f64) -> Vec<TooltipItem> {
    let mut rows = vec![
        category_row(input, category_index),
        TooltipItem {
            display_name: input.column_series().next().map(|s| s.display_name.clone()),
            value: format_plain(value),
        },
    ];

    let mut seen: Vec<&str> = Vec::new();
    for s in input.tooltip_series().filter(|s| !s.has_role(Role::ColumnValues)) {
        if seen.contains(&s.display_name.as_str()) { continue; }
        seen.push(&s.display_name);
        if let Some(v) = s.sample(category_index) {
            rows.push(TooltipItem { display_name: Some(s.display_name.clone()), value: format_plain(v) });
        }
    }
    rows
}

/// Rows for a line point: the category and the point value.
pub fn line_tooltip(input: &ChartInput, category_index: usize, value: f64) -> Vec<TooltipItem> {
    vec![
        category_row(input, category_index),
        TooltipItem {
            display_name: input.line_series().next().map(|s| s.display_name.clone()),
            value: format_plain(value),
        },
    ]
}
