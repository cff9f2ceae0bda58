// File: crates/regionchart-core/src/column.rs
// Summary: Column aggregation; every column series summed into one bar series.

use tracing::debug;

use crate::geometry::{BarPoint, BarSeries};
use crate::input::ChartInput;
use crate::resolve::column_sums;
use crate::settings::ColumnsSettings;
use crate::types::COLUMN_SERIES_KEY;

/// One bar per category holding the sum of all column samples there.
/// Returns `None` when the input has no column series.
pub fn aggregate_columns(input: &ChartInput, columns: &ColumnsSettings) -> Option<BarSeries> {
    let sums = column_sums(input)?;
    let points = sums
        .into_iter()
        .enumerate()
        .map(|(i, y)| BarPoint { category_index: i, x: input.categories.position(i), y, visible: y != 0.0 })
        .collect::<Vec<_>>();
    debug!(bars = points.len(), sources = input.column_series().count(), "aggregated columns");
    Some(BarSeries { key: COLUMN_SERIES_KEY.to_string(), color: columns.columns_color.clone(), points })
}

/// Re-apply the bar color from settings.
pub fn restyle(bar: &mut BarSeries, columns: &ColumnsSettings) {
    bar.color = columns.columns_color.clone();
}
