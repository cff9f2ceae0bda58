// File: crates/regionchart-core/src/geometry.rs
// Summary: Render-ready geometry: bands, bars, line points and the per-cycle bundle.

use serde::Serialize;

use crate::layout::AxisLayout;
use crate::line::Line;

/// Clamp `v` into `[lo, hi]`. Callers pass ordered bounds.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    Region,
    Gap,
}

/// One category slot of a stacked band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPoint {
    pub category_index: usize,
    pub x: f64,
    /// Thickness; negative only on suppressed gaps.
    pub y: f64,
}

/// A region or gap band across all categories.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandSeries {
    pub key: String,
    pub kind: BandKind,
    pub color: String,
    /// Region threshold this band belongs to (1-based).
    pub threshold: usize,
    pub points: Vec<BandPoint>,
}

impl BandSeries {
    pub fn is_region(&self) -> bool { self.kind == BandKind::Region }
    pub fn is_gap(&self) -> bool { self.kind == BandKind::Gap }

    pub fn thickness(&self, category_index: usize) -> Option<f64> {
        self.points.get(category_index).map(|p| p.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPoint {
    pub category_index: usize,
    pub x: f64,
    pub y: f64,
    /// Zero-height bars are hidden by the renderer.
    pub visible: bool,
}

/// The aggregated column series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarSeries {
    pub key: String,
    pub color: String,
    pub points: Vec<BarPoint>,
}

impl BarSeries {
    pub fn values(&self) -> Vec<f64> { self.points.iter().map(|p| p.y).collect() }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub category_index: usize,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct ChartGeometry {
    /// Region and gap bands in stacking order (bottom first).
    pub bands: Vec<BandSeries>,
    pub bar: Option<BarSeries>,
    pub lines: Vec<Line>,
    pub axes: AxisLayout,
}

impl ChartGeometry {
    pub fn regions(&self) -> impl Iterator<Item = &BandSeries> + '_ {
        self.bands.iter().filter(|b| b.is_region())
    }

    pub fn gaps(&self) -> impl Iterator<Item = &BandSeries> + '_ {
        self.bands.iter().filter(|b| b.is_gap())
    }
}
