// File: crates/regionchart-core/src/line.rs
// Summary: Line series assembly: one polyline per legend group with resolved style.
// Notes:
// - Only missing samples are dropped. Zero and negative values are points.
// - A line's point list may be shorter than the category count and its
//   category indices need not be contiguous.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::LinePoint;
use crate::input::{Fill, ChartInput, LinesObject, ObjectOverrides};
use crate::palette::ColorPalette;
use crate::series::ValueSeries;
use crate::settings::LinesSettings;
use crate::types::DEFAULT_LINE_COLOR;

/// Stroke pattern of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashStyle {
    #[default]
    #[serde(rename = "solid")]
    Solid,
    #[serde(rename = "dotted")]
    Dotted,
    #[serde(rename = "dashed")]
    Dashed,
    #[serde(rename = "dash-dot")]
    DashDot,
}

impl DashStyle {
    /// Lenient parse: anything unrecognised is solid.
    pub fn parse_or_solid(s: &str) -> Self { s.parse().unwrap_or_default() }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashStyle::Solid => "solid",
            DashStyle::Dotted => "dotted",
            DashStyle::Dashed => "dashed",
            DashStyle::DashDot => "dash-dot",
        }
    }

    /// SVG-style dash array; `None` draws a continuous stroke.
    pub fn dash_array(&self) -> Option<&'static [f32]> {
        match self {
            DashStyle::Solid => None,
            DashStyle::Dotted => Some(&[1.0, 15.0]),
            DashStyle::Dashed => Some(&[15.0, 15.0]),
            DashStyle::DashDot => Some(&[10.0, 10.0, 1.0, 10.0]),
        }
    }

    /// Patterned lines get round caps.
    pub fn round_cap(&self) -> bool { !matches!(self, DashStyle::Solid) }
}

impl FromStr for DashStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(DashStyle::Solid),
            "dotted" => Ok(DashStyle::Dotted),
            "dashed" => Ok(DashStyle::Dashed),
            "dash-dot" => Ok(DashStyle::DashDot),
            other => Err(format!("unknown line type '{other}'")),
        }
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Stable selection key of a legend group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    pub fn for_group(legend_query_name: Option<&str>, group: &str) -> Self {
        Self(format!("{}={}", legend_query_name.unwrap_or("lineValues"), group))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub key: String,
    pub color: String,
    pub stroke_width: f64,
    pub dash_style: DashStyle,
    pub identity: SelectionId,
    pub points: Vec<LinePoint>,
}

impl Line {
    /// Stroke of the hover markers drawn on each point.
    pub fn marker_stroke_width(&self) -> f64 { self.stroke_width.min(7.0) + 2.0 }
}

/// A legend group and the line series that feeds it.
struct Group<'a> {
    key: String,
    source: &'a ValueSeries,
}

/// Groups in first-seen order; the first line series of a group feeds it.
fn groups(input: &ChartInput) -> Vec<Group<'_>> {
    let mut out: Vec<Group<'_>> = Vec::new();
    for s in input.line_series() {
        let key = s.group.clone().unwrap_or_else(|| s.display_name.clone());
        if !out.iter().any(|g| g.key == key) {
            out.push(Group { key, source: s });
        }
    }
    out
}

/// Points for every category that exists and has a sample.
pub fn line_points(input: &ChartInput, series: &ValueSeries) -> Vec<LinePoint> {
    series
        .samples
        .iter()
        .enumerate()
        .filter_map(|(i, sample)| {
            let category = input.categories.get(i)?;
            let y = (*sample)?;
            let x = category.position().unwrap_or(i as f64);
            Some(LinePoint { x, y, category_index: i })
        })
        .collect()
}

/// Build one line per legend group.
///
/// With exactly one line, style falls back to the visual-level settings
/// (fill, then `#01B8AA`; line type, then solid). With several, each group
/// falls back to a palette color keyed by its name and to solid.
/// Per-group overrides win in both cases.
pub fn build_lines(input: &ChartInput, lines: &LinesSettings, palette: &mut dyn ColorPalette) -> Vec<Line> {
    let groups = groups(input);
    let single = groups.len() == 1;
    let stroke_width = if lines.lines_width.is_finite() { lines.lines_width.max(0.0) } else { 0.0 };

    let built: Vec<Line> = groups
        .into_iter()
        .map(|g| {
            let own = input.group_overrides(&g.key);
            let own_fill = own.and_then(ObjectOverrides::line_fill);
            let own_type = own.and_then(ObjectOverrides::line_type);

            let color = match own_fill {
                Some(c) => c.to_string(),
                None if single => input.objects.line_fill().unwrap_or(DEFAULT_LINE_COLOR).to_string(),
                None => palette.color_for(&g.key),
            };
            let dash_style = match own_type {
                Some(t) => DashStyle::parse_or_solid(t),
                None if single => input.objects.line_type().map(DashStyle::parse_or_solid).unwrap_or_default(),
                None => DashStyle::Solid,
            };

            Line {
                identity: SelectionId::for_group(input.legend_query_name.as_deref(), &g.key),
                points: line_points(input, g.source),
                key: g.key,
                color,
                stroke_width,
                dash_style,
            }
        })
        .collect();
    debug!(lines = built.len(), "built lines");
    built
}

/// One property-pane entry for a line.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleInstance {
    pub object_name: &'static str,
    pub display_name: String,
    pub selector: SelectionId,
    pub properties: LinesObject,
}

/// Fill and line-type instances for every line, addressed by identity, so
/// the host can persist per-group overrides that `build_lines` reads back.
pub fn style_instances(lines: &[Line]) -> Vec<StyleInstance> {
    lines
        .iter()
        .flat_map(|line| {
            [
                StyleInstance {
                    object_name: "linesSettings",
                    display_name: line.key.clone(),
                    selector: line.identity.clone(),
                    properties: LinesObject { fill: Some(Fill::solid(line.color.clone())), line_type: None },
                },
                StyleInstance {
                    object_name: "linesSettings",
                    display_name: format!("Type of line ({})", line.key),
                    selector: line.identity.clone(),
                    properties: LinesObject { fill: None, line_type: Some(line.dash_style.as_str().to_string()) },
                },
            ]
        })
        .collect()
}
