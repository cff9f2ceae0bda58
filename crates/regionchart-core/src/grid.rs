// File: crates/regionchart-core/src/grid.rs
// Summary: Tick layout helpers for the value axes.

use crate::axis::AxisDomain;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round tick values (1, 2, 5 x 10^k steps) inside `domain`, roughly `count`
/// of them. A zero-span domain yields its single value.
pub fn nice_ticks(domain: AxisDomain, count: usize) -> Vec<f64> {
    let (min, max) = (domain.min, domain.max);
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return vec![min];
    }

    let rough = span / count as f64;
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;
    let step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
