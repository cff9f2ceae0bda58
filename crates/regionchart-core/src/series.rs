// File: crates/regionchart-core/src/series.rs
// Summary: Series model: roles, categories and role-tagged value series.
// Notes:
// - A sample is `Option<f64>`; `None` means "no data point". Zero is a real
//   sample and must never be confused with a missing one.
// - Category index is the only key joining series together.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Number of region thresholds a chart carries.
pub const REGION_COUNT: usize = 5;

/// One numeric-or-missing sample.
pub type Sample = Option<f64>;

/// Semantic purpose of a value series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    LineValues,
    ColumnValues,
    /// Lower boundary of region `1..=5`.
    RegionMin(u8),
    /// Upper boundary of region `1..=5`.
    RegionMax(u8),
    TooltipValue,
    Legend,
}

impl Role {
    /// Lower boundary role of region `index` (1-based).
    pub fn region_min(index: usize) -> Self { Role::RegionMin(region_number(index)) }
    /// Upper boundary role of region `index` (1-based).
    pub fn region_max(index: usize) -> Self { Role::RegionMax(region_number(index)) }
}

/// Region numbers outside `1..=REGION_COUNT` map to 0, which no region uses.
fn region_number(index: usize) -> u8 {
    match u8::try_from(index) {
        Ok(k) if (1..=REGION_COUNT).contains(&index) => k,
        _ => 0,
    }
}

impl FromStr for Role {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lineValues" => return Ok(Role::LineValues),
            "columnValues" => return Ok(Role::ColumnValues),
            "tooltipValue" => return Ok(Role::TooltipValue),
            "legend" => return Ok(Role::Legend),
            _ => {}
        }
        // region{k}ValuesMin / region{k}ValuesMax
        let parsed = s.strip_prefix("region").and_then(|rest| {
            let (digit, tail) = rest.split_at(rest.find(|c: char| !c.is_ascii_digit())?);
            // one canonical spelling per region: no leading zeros
            if digit.starts_with('0') { return None; }
            let k: u8 = digit.parse().ok()?;
            if k == 0 || k as usize > REGION_COUNT { return None; }
            match tail {
                "ValuesMin" => Some(Role::RegionMin(k)),
                "ValuesMax" => Some(Role::RegionMax(k)),
                _ => None,
            }
        });
        parsed.ok_or_else(|| ChartError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::LineValues => f.write_str("lineValues"),
            Role::ColumnValues => f.write_str("columnValues"),
            Role::RegionMin(k) => write!(f, "region{k}ValuesMin"),
            Role::RegionMax(k) => write!(f, "region{k}ValuesMax"),
            Role::TooltipValue => f.write_str("tooltipValue"),
            Role::Legend => f.write_str("legend"),
        }
    }
}

/// A single category key as delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Time(DateTime<Utc>),
    Number(f64),
    Text(String),
}

impl CategoryValue {
    /// Category as a point in time, when it can be read as one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CategoryValue::Time(t) => Some(*t),
            CategoryValue::Number(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
            CategoryValue::Number(_) => None,
            CategoryValue::Text(s) => parse_date_text(s),
        }
    }

    /// Position on the category axis: epoch milliseconds for time-like keys,
    /// the raw number for numeric keys.
    pub fn position(&self) -> Option<f64> {
        match self {
            CategoryValue::Time(t) => Some(t.timestamp_millis() as f64),
            CategoryValue::Number(n) if n.is_finite() => Some(*n),
            CategoryValue::Number(_) => None,
            CategoryValue::Text(s) => parse_date_text(s).map(|t| t.timestamp_millis() as f64),
        }
    }
}

fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// The shared category axis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColumn {
    pub display_name: Option<String>,
    /// Host format string for category labels (e.g. `MM/DD/YYYY`).
    pub format: Option<String>,
    pub values: Vec<Option<CategoryValue>>,
}

impl CategoryColumn {
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn get(&self, index: usize) -> Option<&CategoryValue> {
        self.values.get(index).and_then(|v| v.as_ref())
    }

    /// Axis position of category `index`; falls back to the index itself when
    /// the key is missing or cannot be placed on a numeric axis.
    pub fn position(&self, index: usize) -> f64 {
        self.get(index).and_then(CategoryValue::position).unwrap_or(index as f64)
    }
}

/// A role-tagged sequence of samples aligned with the categories.
#[derive(Clone, Debug)]
pub struct ValueSeries {
    pub display_name: String,
    /// Legend group this series belongs to, if the data is grouped.
    pub group: Option<String>,
    pub roles: Vec<Role>,
    pub samples: Vec<Sample>,
}

impl ValueSeries {
    pub fn new(display_name: impl Into<String>, roles: Vec<Role>, samples: Vec<Sample>) -> Self {
        Self { display_name: display_name.into(), group: None, roles, samples }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn has_role(&self, role: Role) -> bool { self.roles.contains(&role) }

    /// Sample at `index`, `None` when missing or out of range.
    pub fn sample(&self, index: usize) -> Sample {
        self.samples.get(index).copied().flatten()
    }

    /// Non-missing samples only.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| *s)
    }
}
