// File: crates/regionchart-core/src/resolve.rs
// Summary: Settings resolution; fills unset axis bounds from the data.
// Notes:
// - A persisted (non-null) bound always wins over the computed one.
// - Bounds are stored as found; ordering happens where they are consumed.

use tracing::{debug, warn};

use crate::axis::{AxisBounds, DEFAULT_LEFT_DOMAIN};
use crate::input::ChartInput;
use crate::settings::ChartSettings;

/// (min, max) over every present sample of every line series.
pub fn line_extent(input: &ChartInput) -> Option<(f64, f64)> {
    input
        .line_series()
        .flat_map(|s| s.present())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Per-category sum of every column series; missing samples add 0.
/// `None` when the input carries no column series.
pub fn column_sums(input: &ChartInput) -> Option<Vec<f64>> {
    let mut columns = input.column_series().peekable();
    columns.peek()?;
    let mut sums = vec![0.0f64; input.len()];
    for s in columns {
        for (sum, sample) in sums.iter_mut().zip(&s.samples) {
            *sum += sample.unwrap_or(0.0);
        }
    }
    Some(sums)
}

/// (min, max) of the per-category column sums.
pub fn column_extent(input: &ChartInput) -> Option<(f64, f64)> {
    let sums = column_sums(input)?;
    let lo = sums.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sums.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((lo, hi))
}

/// Effective bounds for both axes.
pub fn resolve_bounds(settings: &ChartSettings, input: &ChartInput) -> AxisBounds {
    let axes = &settings.axises_settings;
    let left = line_extent(input).unwrap_or_else(|| {
        warn!("no line samples; left axis falls back to default domain");
        DEFAULT_LEFT_DOMAIN
    });
    // without columns the right axis mirrors the left data extent
    let right = column_extent(input).unwrap_or(left);

    let bounds = AxisBounds {
        left_min: axes.left_min.unwrap_or(left.0),
        left_max: axes.left_max.unwrap_or(left.1),
        right_min: axes.right_min.unwrap_or(right.0),
        right_max: axes.right_max.unwrap_or(right.1),
    };
    debug!(?bounds, "resolved axis bounds");
    bounds
}

/// Settings with every axis bound populated.
pub fn resolve_settings(mut settings: ChartSettings, input: &ChartInput) -> ChartSettings {
    let b = resolve_bounds(&settings, input);
    let axes = &mut settings.axises_settings;
    axes.left_min = Some(b.left_min);
    axes.left_max = Some(b.left_max);
    axes.right_min = Some(b.right_min);
    axes.right_max = Some(b.right_max);
    settings
}
