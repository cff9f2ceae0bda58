// File: crates/regionchart-core/src/axis.rs
// Summary: Axis bounds, ordered domains and number label formats.

use serde::{Deserialize, Serialize};

use crate::settings::AxesSettings;

/// Fallback left domain used when no line sample exists.
pub const DEFAULT_LEFT_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Effective bounds of both value axes, as stored (not yet ordered).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub left_min: f64,
    pub left_max: f64,
    pub right_min: f64,
    pub right_max: f64,
}

impl AxisBounds {
    pub fn left(&self) -> AxisDomain { AxisDomain::new(self.left_min, self.left_max) }
    pub fn right(&self) -> AxisDomain { AxisDomain::new(self.right_min, self.right_max) }
}

/// A value-axis domain with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Build a domain, swapping the ends when they arrive inverted.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Largest absolute value inside the domain.
    pub fn magnitude(&self) -> f64 { self.min.abs().max(self.max.abs()) }
}

/// Scale applied to axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnits {
    Auto,
    None,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl DisplayUnits {
    /// Decode the host's numeric code (0 = auto, 1 = none, 1e3 ... 1e12).
    pub fn from_code(code: f64) -> Self {
        match code {
            c if c == 1.0 => DisplayUnits::None,
            c if c == 1e3 => DisplayUnits::Thousands,
            c if c == 1e6 => DisplayUnits::Millions,
            c if c == 1e9 => DisplayUnits::Billions,
            c if c == 1e12 => DisplayUnits::Trillions,
            _ => DisplayUnits::Auto,
        }
    }

    /// Pick concrete units for values up to `magnitude`.
    pub fn for_magnitude(magnitude: f64) -> Self {
        match magnitude {
            m if m >= 1e12 => DisplayUnits::Trillions,
            m if m >= 1e9 => DisplayUnits::Billions,
            m if m >= 1e6 => DisplayUnits::Millions,
            m if m >= 1e3 => DisplayUnits::Thousands,
            _ => DisplayUnits::None,
        }
    }

    pub fn divisor(&self) -> f64 {
        match self {
            DisplayUnits::Auto | DisplayUnits::None => 1.0,
            DisplayUnits::Thousands => 1e3,
            DisplayUnits::Millions => 1e6,
            DisplayUnits::Billions => 1e9,
            DisplayUnits::Trillions => 1e12,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DisplayUnits::Auto | DisplayUnits::None => "",
            DisplayUnits::Thousands => "K",
            DisplayUnits::Millions => "M",
            DisplayUnits::Billions => "bn",
            DisplayUnits::Trillions => "T",
        }
    }
}

/// Label format of one value axis. `units` is never `Auto` once built by
/// `for_domain`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub units: DisplayUnits,
    pub precision: u32,
}

impl NumberFormat {
    pub fn new(units: DisplayUnits, precision: u32) -> Self { Self { units, precision } }

    /// Resolve `Auto` units against the domain the axis will show.
    pub fn for_domain(units: DisplayUnits, precision: u32, domain: AxisDomain) -> Self {
        let units = match units {
            DisplayUnits::Auto => DisplayUnits::for_magnitude(domain.magnitude()),
            u => u,
        };
        Self { units, precision }
    }

    pub fn left(axes: &AxesSettings, domain: AxisDomain) -> Self {
        Self::for_domain(DisplayUnits::from_code(axes.left_display_units), axes.left_precision, domain)
    }

    pub fn right(axes: &AxesSettings, domain: AxisDomain) -> Self {
        Self::for_domain(DisplayUnits::from_code(axes.right_display_units), axes.right_precision, domain)
    }

    pub fn format(&self, value: f64) -> String {
        let scaled = value / self.units.divisor();
        let prec = self.precision.min(15) as usize;
        let mut s = format!("{:.prec$}", scaled, prec = prec);
        // avoid "-0"
        if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
            s.remove(0);
        }
        s.push_str(self.units.suffix());
        s
    }
}

/// Plain number label used by tooltips: integers without a fraction,
/// everything else in shortest round-trip form.
pub fn format_plain(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
