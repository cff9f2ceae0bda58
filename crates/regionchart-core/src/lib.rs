// File: crates/regionchart-core/src/lib.rs
// Summary: Core library entry point; exports the data-to-geometry API for region/column/line charts.

pub mod error;
pub mod series;
pub mod input;
pub mod settings;
pub mod axis;
pub mod resolve;
pub mod geometry;
pub mod region;
pub mod column;
pub mod palette;
pub mod line;
pub mod change;
pub mod format;
pub mod grid;
pub mod layout;
pub mod tooltip;
pub mod types;
pub mod chart;

pub use chart::{ComboChart, Update};
pub use error::{ChartError, Result};
pub use series::{CategoryColumn, CategoryValue, Role, Sample, ValueSeries};
pub use input::{ChartInput, DataView, ObjectOverrides};
pub use settings::ChartSettings;
pub use axis::{AxisBounds, AxisDomain, DisplayUnits, NumberFormat};
pub use geometry::{BandKind, BandSeries, BarSeries, ChartGeometry};
pub use line::{DashStyle, Line, SelectionId};
pub use change::{data_changed, UpdateKind};
pub use palette::{ColorPalette, SequentialPalette};
pub use types::ChartOptions;
