// File: crates/regionchart-core/src/input.rs
// Summary: Host data view (raw) and its validated, role-indexed form.
// Notes:
// - `DataView` mirrors what the host hands over: role names are strings and
//   style overrides are loose property bags.
// - `ChartInput::from_data_view` validates once; engines downstream work on
//   typed optionals and never re-check existence of roles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{CategoryColumn, Role, Sample, ValueSeries, REGION_COUNT};

/// `{ "solid": { "color": "#RRGGBB" } }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub solid: SolidColor,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolidColor {
    pub color: String,
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self { solid: SolidColor { color: color.into() } }
    }
}

/// The `linesSettings` object as persisted per group or per visual.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinesObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
}

/// Style overrides attached to a group or to the whole visual.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_settings: Option<LinesObject>,
}

impl ObjectOverrides {
    pub fn line_fill(&self) -> Option<&str> {
        self.lines_settings.as_ref()?.fill.as_ref().map(|f| f.solid.color.as_str())
    }

    pub fn line_type(&self) -> Option<&str> {
        self.lines_settings.as_ref()?.line_type.as_deref()
    }
}

/// One measure column as delivered by the host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValueColumn {
    pub display_name: String,
    #[serde(default)]
    pub group_name: Option<String>,
    pub roles: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// Categorical payload of one host update.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    pub categories: CategoryColumn,
    pub values: Vec<RawValueColumn>,
    /// Query name of the legend column, used to build line identities.
    #[serde(default)]
    pub legend_query_name: Option<String>,
    /// Visual-level objects (`metadata.objects`).
    #[serde(default)]
    pub objects: ObjectOverrides,
    /// Per-group objects keyed by group name.
    #[serde(default)]
    pub group_objects: BTreeMap<String, ObjectOverrides>,
}

/// Positions of series by role, resolved once.
#[derive(Clone, Debug, Default)]
struct RoleIndex {
    lines: Vec<usize>,
    columns: Vec<usize>,
    tooltips: Vec<usize>,
    region_min: [Option<usize>; REGION_COUNT],
    region_max: [Option<usize>; REGION_COUNT],
}

impl RoleIndex {
    fn build(series: &[ValueSeries]) -> Self {
        let mut idx = RoleIndex::default();
        for (i, s) in series.iter().enumerate() {
            for role in &s.roles {
                match *role {
                    Role::LineValues => idx.lines.push(i),
                    Role::ColumnValues => idx.columns.push(i),
                    Role::TooltipValue => idx.tooltips.push(i),
                    // first series tagged with a boundary role wins
                    Role::RegionMin(k) => {
                        if let Some(slot) = (k as usize).checked_sub(1).and_then(|j| idx.region_min.get_mut(j)) {
                            slot.get_or_insert(i);
                        }
                    }
                    Role::RegionMax(k) => {
                        if let Some(slot) = (k as usize).checked_sub(1).and_then(|j| idx.region_max.get_mut(j)) {
                            slot.get_or_insert(i);
                        }
                    }
                    Role::Legend => {}
                }
            }
        }
        idx
    }
}

/// Validated input of one update cycle.
#[derive(Clone, Debug)]
pub struct ChartInput {
    pub categories: CategoryColumn,
    pub series: Vec<ValueSeries>,
    pub legend_query_name: Option<String>,
    pub objects: ObjectOverrides,
    pub group_objects: BTreeMap<String, ObjectOverrides>,
    roles: RoleIndex,
}

impl ChartInput {
    /// Validate a host data view.
    ///
    /// Fails when there are no categories, no series, a series without
    /// samples, a series whose length differs from the category count, or an
    /// unrecognised role name. Non-finite samples become missing samples.
    pub fn from_data_view(view: DataView) -> Result<Self> {
        let n = view.categories.len();
        if n == 0 { return Err(ChartError::MissingCategories); }
        if view.values.is_empty() { return Err(ChartError::MissingValues); }

        let mut series = Vec::with_capacity(view.values.len());
        for col in view.values {
            if col.values.is_empty() {
                return Err(ChartError::EmptySeries { name: col.display_name });
            }
            if col.values.len() != n {
                return Err(ChartError::LengthMismatch { name: col.display_name, expected: n, found: col.values.len() });
            }
            let roles = col.roles.iter().map(|r| r.parse::<Role>()).collect::<Result<Vec<_>>>()?;
            let samples: Vec<Sample> = col.values.into_iter().map(|v| v.filter(|x| x.is_finite())).collect();
            series.push(ValueSeries { display_name: col.display_name, group: col.group_name, roles, samples });
        }

        debug!(categories = n, series = series.len(), "ingested data view");
        Ok(Self::assemble(view.categories, series, view.legend_query_name, view.objects, view.group_objects))
    }

    /// Build from already-typed series (same length checks as `from_data_view`).
    pub fn new(categories: CategoryColumn, series: Vec<ValueSeries>) -> Result<Self> {
        let n = categories.len();
        if n == 0 { return Err(ChartError::MissingCategories); }
        if series.is_empty() { return Err(ChartError::MissingValues); }
        for s in &series {
            if s.samples.is_empty() { return Err(ChartError::EmptySeries { name: s.display_name.clone() }); }
            if s.samples.len() != n {
                return Err(ChartError::LengthMismatch { name: s.display_name.clone(), expected: n, found: s.samples.len() });
            }
        }
        let series = series
            .into_iter()
            .map(|mut s| {
                for v in s.samples.iter_mut() {
                    if v.is_some_and(|x| !x.is_finite()) { *v = None; }
                }
                s
            })
            .collect();
        Ok(Self::assemble(categories, series, None, ObjectOverrides::default(), BTreeMap::new()))
    }

    fn assemble(
        categories: CategoryColumn,
        series: Vec<ValueSeries>,
        legend_query_name: Option<String>,
        objects: ObjectOverrides,
        group_objects: BTreeMap<String, ObjectOverrides>,
    ) -> Self {
        let roles = RoleIndex::build(&series);
        Self { categories, series, legend_query_name, objects, group_objects, roles }
    }

    pub fn with_objects(mut self, objects: ObjectOverrides) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_group_objects(mut self, group: impl Into<String>, objects: ObjectOverrides) -> Self {
        self.group_objects.insert(group.into(), objects);
        self
    }

    pub fn with_legend_query_name(mut self, name: impl Into<String>) -> Self {
        self.legend_query_name = Some(name.into());
        self
    }

    /// Number of categories (N).
    pub fn len(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    pub fn line_series(&self) -> impl Iterator<Item = &ValueSeries> + '_ {
        self.roles.lines.iter().map(move |&i| &self.series[i])
    }

    pub fn column_series(&self) -> impl Iterator<Item = &ValueSeries> + '_ {
        self.roles.columns.iter().map(move |&i| &self.series[i])
    }

    pub fn tooltip_series(&self) -> impl Iterator<Item = &ValueSeries> + '_ {
        self.roles.tooltips.iter().map(move |&i| &self.series[i])
    }

    /// Data-driven (min, max) boundary pair of region `k` (1-based); `None`
    /// unless both boundaries are present.
    pub fn region_pair(&self, k: usize) -> Option<(&ValueSeries, &ValueSeries)> {
        if k == 0 || k > REGION_COUNT { return None; }
        let min = self.roles.region_min[k - 1]?;
        let max = self.roles.region_max[k - 1]?;
        Some((&self.series[min], &self.series[max]))
    }

    /// Style overrides of a legend group.
    pub fn group_overrides(&self, group: &str) -> Option<&ObjectOverrides> {
        self.group_objects.get(group)
    }
}
