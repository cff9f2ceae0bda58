// File: crates/regionchart-core/src/change.rs
// Summary: Change detection between consecutive inputs; decides when multichart geometry is rebuilt.

use crate::input::ChartInput;
use crate::series::{Sample, ValueSeries};

/// Why the host triggered an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateKind {
    Data,
    Resize,
    ViewMode,
    Style,
    #[default]
    All,
}

impl UpdateKind {
    /// Whether the host meant this update to deliver new data.
    pub fn carries_data(&self) -> bool {
        matches!(self, UpdateKind::Data | UpdateKind::All)
    }
}

fn same_sample(a: Sample, b: Sample) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => false,
    }
}

fn same_series(a: &ValueSeries, b: &ValueSeries) -> bool {
    a.display_name == b.display_name
        && a.group == b.group
        && a.roles == b.roles
        && a.samples.len() == b.samples.len()
        && a.samples.iter().zip(&b.samples).all(|(x, y)| same_sample(*x, *y))
}

/// True when `next` differs from `prev` in series count, categories, or any
/// series compared by position. Style overrides are not compared.
pub fn data_changed(prev: &ChartInput, next: &ChartInput) -> bool {
    if prev.series.len() != next.series.len() {
        return true;
    }
    if prev.categories != next.categories {
        return true;
    }
    prev.series.iter().zip(&next.series).any(|(a, b)| !same_series(a, b))
}
