// File: crates/regionchart-core/src/settings.rs
// Summary: Persisted chart settings (serde) with the host's property names and defaults.
// Notes:
// - Every axis bound is nullable; `None` means "compute from data".
// - Documents may be partial; missing objects/properties take defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::REGION_COUNT;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    pub lines_settings: LinesSettings,
    pub columns_settings: ColumnsSettings,
    pub regions_settings: RegionsSettings,
    pub axises_settings: AxesSettings,
    pub tooltips_settings: TooltipsSettings,
}

impl ChartSettings {
    pub fn from_json(doc: &str) -> Result<Self> {
        Ok(serde_json::from_str(doc)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinesSettings {
    pub lines_width: f64,
}

impl Default for LinesSettings {
    fn default() -> Self { Self { lines_width: 4.0 } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnsSettings {
    /// Bar width as a percentage of the category slot.
    pub columns_width: f64,
    pub columns_color: String,
}

impl Default for ColumnsSettings {
    fn default() -> Self { Self { columns_width: 90.0, columns_color: "red".to_string() } }
}

impl ColumnsSettings {
    /// Width fraction in `[0, 1]`.
    pub fn width_fraction(&self) -> f64 {
        if !self.columns_width.is_finite() { return 0.9; }
        (self.columns_width / 100.0).clamp(0.0, 1.0)
    }

    /// Bar width and the spacing left beside it, for a slot of `slot_px`.
    pub fn bar_width(&self, slot_px: f64) -> (f64, f64) {
        let w = slot_px * self.width_fraction();
        (w, slot_px - w)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsSettings {
    #[serde(rename = "region1Color")] pub region1_color: String,
    #[serde(rename = "region2Color")] pub region2_color: String,
    #[serde(rename = "region3Color")] pub region3_color: String,
    #[serde(rename = "region4Color")] pub region4_color: String,
    #[serde(rename = "region5Color")] pub region5_color: String,
    #[serde(rename = "region1ValuesMin")] pub region1_values_min: f64,
    #[serde(rename = "region1ValuesMax")] pub region1_values_max: f64,
    #[serde(rename = "region2ValuesMin")] pub region2_values_min: f64,
    #[serde(rename = "region2ValuesMax")] pub region2_values_max: f64,
    #[serde(rename = "region3ValuesMin")] pub region3_values_min: f64,
    #[serde(rename = "region3ValuesMax")] pub region3_values_max: f64,
    #[serde(rename = "region4ValuesMin")] pub region4_values_min: f64,
    #[serde(rename = "region4ValuesMax")] pub region4_values_max: f64,
    #[serde(rename = "region5ValuesMin")] pub region5_values_min: f64,
    #[serde(rename = "region5ValuesMax")] pub region5_values_max: f64,
}

impl Default for RegionsSettings {
    fn default() -> Self {
        Self {
            region1_color: "#00B050".to_string(),
            region2_color: "#C6E0B4".to_string(),
            region3_color: "#FFFFFF".to_string(),
            region4_color: "#FFC000".to_string(),
            region5_color: "#FF0000".to_string(),
            region1_values_min: 0.0,
            region1_values_max: 20.0,
            region2_values_min: 20.0,
            region2_values_max: 40.0,
            region3_values_min: 40.0,
            region3_values_max: 60.0,
            region4_values_min: 60.0,
            region4_values_max: 80.0,
            region5_values_min: 80.0,
            region5_values_max: 100.0,
        }
    }
}

impl RegionsSettings {
    /// Fill color of region `k` (1-based).
    pub fn color(&self, k: usize) -> &str {
        match k {
            1 => &self.region1_color,
            2 => &self.region2_color,
            3 => &self.region3_color,
            4 => &self.region4_color,
            _ => &self.region5_color,
        }
    }

    /// Static (min, max) threshold of region `k` (1-based).
    pub fn threshold(&self, k: usize) -> (f64, f64) {
        match k {
            1 => (self.region1_values_min, self.region1_values_max),
            2 => (self.region2_values_min, self.region2_values_max),
            3 => (self.region3_values_min, self.region3_values_max),
            4 => (self.region4_values_min, self.region4_values_max),
            _ => (self.region5_values_min, self.region5_values_max),
        }
    }

    pub fn thresholds(&self) -> [(f64, f64); REGION_COUNT] {
        std::array::from_fn(|i| self.threshold(i + 1))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesSettings {
    #[serde(rename = "LeftYAxisMaxValue")] pub left_max: Option<f64>,
    #[serde(rename = "LeftYAxisMinValue")] pub left_min: Option<f64>,
    #[serde(rename = "RightYAxisMaxValue")] pub right_max: Option<f64>,
    #[serde(rename = "RightYAxisMinValue")] pub right_min: Option<f64>,
    #[serde(rename = "LeftYAxisLabelDisplayUnits")] pub left_display_units: f64,
    #[serde(rename = "LeftYAxisLabelPrecision")] pub left_precision: u32,
    #[serde(rename = "RightYAxisLabelDisplayUnits")] pub right_display_units: f64,
    #[serde(rename = "RightYAxisLabelPrecision")] pub right_precision: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipsSettings {
    pub tooltip_value: Vec<String>,
}
