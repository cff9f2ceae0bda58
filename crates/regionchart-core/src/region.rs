// File: crates/regionchart-core/src/region.rs
// Summary: Region thresholds and the stacked region/gap bands derived from them.
// Notes:
// - Boundaries are clamped into the left axis domain before any band math.
// - A missing boundary sample passes the clamp untouched and counts as 0 in
//   thickness math.
// - Nothing here fails: inverted or partial configuration degrades to
//   clamped, zero-width or transparent bands.

use tracing::{debug, trace};

use crate::axis::{AxisBounds, AxisDomain};
use crate::geometry::{clamp, BandKind, BandPoint, BandSeries};
use crate::input::ChartInput;
use crate::series::{CategoryColumn, Sample, REGION_COUNT};
use crate::settings::RegionsSettings;
use crate::types::TRANSPARENT;

/// Clamped lower/upper boundaries of one region across all categories.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionThreshold {
    /// 1-based region number.
    pub index: usize,
    pub min_values: Vec<Sample>,
    pub max_values: Vec<Sample>,
    /// True when the boundaries came from data rather than settings.
    pub data_driven: bool,
}

impl RegionThreshold {
    fn min_at(&self, j: usize) -> f64 { self.min_values.get(j).copied().flatten().unwrap_or(0.0) }
    fn max_at(&self, j: usize) -> f64 { self.max_values.get(j).copied().flatten().unwrap_or(0.0) }
}

/// Clamp one boundary sample into `domain`; missing samples stay missing.
pub fn clamp_sample(sample: Sample, domain: AxisDomain) -> Sample {
    sample.map(|v| clamp(v, domain.min, domain.max))
}

/// Clamp a static threshold from settings; non-numeric values become 0.
pub fn clamp_scalar(value: f64, domain: AxisDomain) -> f64 {
    if value.is_finite() { clamp(value, domain.min, domain.max) } else { 0.0 }
}

/// Boundaries for regions 1..=5, clamped into the left axis domain.
pub fn thresholds(input: &ChartInput, regions: &RegionsSettings, bounds: &AxisBounds) -> Vec<RegionThreshold> {
    let domain = bounds.left();
    let n = input.len();
    (1..=REGION_COUNT)
        .map(|k| match input.region_pair(k) {
            Some((min, max)) => RegionThreshold {
                index: k,
                min_values: min.samples.iter().map(|&s| clamp_sample(s, domain)).collect(),
                max_values: max.samples.iter().map(|&s| clamp_sample(s, domain)).collect(),
                data_driven: true,
            },
            None => {
                let (lo, hi) = regions.threshold(k);
                let (lo, hi) = (clamp_scalar(lo, domain), clamp_scalar(hi, domain));
                trace!(region = k, lo, hi, "static region threshold");
                RegionThreshold { index: k, min_values: vec![Some(lo); n], max_values: vec![Some(hi); n], data_driven: false }
            }
        })
        .collect()
}

/// Turn consecutive thresholds into bands, bottom first: gap, region, gap, ...
///
/// Gap `i` spans from the top of region `i-1` (or 0 for the first) to the
/// bottom of region `i`. A gap that is zero everywhere is skipped; a gap that
/// is negative anywhere keeps its geometry but is drawn transparent. Every
/// region is emitted, even when it has no thickness.
pub fn stack_bands(categories: &CategoryColumn, thresholds: &[RegionThreshold], regions: &RegionsSettings, gap_color: &str) -> Vec<BandSeries> {
    let n = categories.len();
    let mut bands = Vec::with_capacity(thresholds.len() * 2);

    for (i, t) in thresholds.iter().enumerate() {
        let gap_points: Vec<BandPoint> = (0..n)
            .map(|j| {
                let y = match i {
                    0 => t.min_at(j),
                    _ => t.min_at(j) - thresholds[i - 1].max_at(j),
                };
                BandPoint { category_index: j, x: categories.position(j), y }
            })
            .collect();

        if gap_points.iter().any(|p| p.y != 0.0) {
            let inverted = gap_points.iter().any(|p| p.y < 0.0);
            if inverted { debug!(gap = i, "negative gap thickness; drawing transparent"); }
            bands.push(BandSeries {
                key: format!("gap - {i}"),
                kind: BandKind::Gap,
                color: if inverted { TRANSPARENT.to_string() } else { gap_color.to_string() },
                threshold: t.index,
                points: gap_points,
            });
        }

        let region_points = (0..n)
            .map(|j| BandPoint { category_index: j, x: categories.position(j), y: t.max_at(j) - t.min_at(j) })
            .collect();
        bands.push(BandSeries {
            key: format!("region - {i}"),
            kind: BandKind::Region,
            color: regions.color(t.index).to_string(),
            threshold: t.index,
            points: region_points,
        });
    }
    bands
}

/// Full region pass: thresholds, then bands.
pub fn compute_bands(input: &ChartInput, regions: &RegionsSettings, bounds: &AxisBounds, gap_color: &str) -> Vec<BandSeries> {
    let ts = thresholds(input, regions, bounds);
    let bands = stack_bands(&input.categories, &ts, regions, gap_color);
    debug!(bands = bands.len(), data_driven = ts.iter().filter(|t| t.data_driven).count(), "computed region bands");
    bands
}

/// Re-apply region colors from settings to previously computed bands.
pub fn restyle(bands: &mut [BandSeries], regions: &RegionsSettings) {
    for b in bands.iter_mut().filter(|b| b.is_region()) {
        b.color = regions.color(b.threshold).to_string();
    }
}
