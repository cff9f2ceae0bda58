// File: crates/regionchart-core/src/chart.rs
// Summary: ComboChart; runs one update cycle and keeps the state carried between cycles.
// Notes:
// - Region/column geometry is reused only while the payload is identical to the
//   one it was built from, whatever the update kind. Lines are rebuilt every cycle.
// - Colors from settings are re-applied to reused geometry every cycle.
// - Each cycle replaces derived state wholesale; nothing is merged.

use tracing::{debug, debug_span};

use crate::axis::AxisBounds;
use crate::change::{data_changed, UpdateKind};
use crate::column::{self, aggregate_columns};
use crate::geometry::{BandSeries, BarSeries, ChartGeometry};
use crate::input::ChartInput;
use crate::layout::axis_layout;
use crate::line::{build_lines, style_instances, Line, StyleInstance};
use crate::palette::{ColorPalette, SequentialPalette};
use crate::region::{self, compute_bands};
use crate::resolve::resolve_bounds;
use crate::series::REGION_COUNT;
use crate::settings::ChartSettings;
use crate::tooltip::{bar_tooltip, line_tooltip, TooltipItem};
use crate::types::ChartOptions;

/// Everything region geometry depends on besides the data.
#[derive(Clone, Debug, PartialEq)]
struct RegionInputs {
    left: (f64, f64),
    thresholds: [(f64, f64); REGION_COUNT],
}

impl RegionInputs {
    fn of(settings: &ChartSettings, bounds: &AxisBounds) -> Self {
        Self { left: (bounds.left_min, bounds.left_max), thresholds: settings.regions_settings.thresholds() }
    }
}

#[derive(Clone, Debug)]
struct Multichart {
    bands: Vec<BandSeries>,
    bar: Option<BarSeries>,
    region_inputs: RegionInputs,
}

/// One update from the host.
pub struct Update<'a> {
    pub input: ChartInput,
    pub settings: &'a ChartSettings,
    pub kind: UpdateKind,
    pub viewport_width: f64,
}

pub struct ComboChart<P: ColorPalette = SequentialPalette> {
    options: ChartOptions,
    palette: P,
    /// Input the cached multichart geometry was derived from.
    previous: Option<ChartInput>,
    /// Input of the latest cycle, for tooltips.
    current: Option<ChartInput>,
    multichart: Option<Multichart>,
    lines: Vec<Line>,
}

impl ComboChart<SequentialPalette> {
    pub fn new() -> Self { Self::with_palette(ChartOptions::default(), SequentialPalette::default()) }
}

impl Default for ComboChart<SequentialPalette> {
    fn default() -> Self { Self::new() }
}

impl<P: ColorPalette> ComboChart<P> {
    pub fn with_palette(options: ChartOptions, palette: P) -> Self {
        Self { options, palette, previous: None, current: None, multichart: None, lines: Vec::new() }
    }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Run one update cycle and return the geometry to draw.
    pub fn update(&mut self, update: Update<'_>) -> ChartGeometry {
        let Update { input, settings, kind, viewport_width } = update;
        let _span = debug_span!("update", ?kind, categories = input.len()).entered();

        let bounds = resolve_bounds(settings, &input);
        let region_inputs = RegionInputs::of(settings, &bounds);

        let refresh = match (&self.multichart, &self.previous) {
            (Some(_), Some(prev)) => data_changed(prev, &input),
            _ => true,
        };

        if refresh {
            if !kind.carries_data() && self.multichart.is_some() {
                debug!("non-data update carried a new payload");
            }
            debug!("recomputing regions and columns");
            self.multichart = Some(Multichart {
                bands: compute_bands(&input, &settings.regions_settings, &bounds, &self.options.gap_color),
                bar: aggregate_columns(&input, &settings.columns_settings),
                region_inputs,
            });
            self.previous = Some(input.clone());
        } else if let Some(mc) = self.multichart.as_mut() {
            if mc.region_inputs != region_inputs {
                debug!("region settings changed; recomputing regions");
                mc.bands = compute_bands(&input, &settings.regions_settings, &bounds, &self.options.gap_color);
                mc.region_inputs = region_inputs;
            } else {
                debug!("reusing cached regions and columns");
            }
        }

        let (bands, bar) = match self.multichart.as_mut() {
            Some(mc) => {
                region::restyle(&mut mc.bands, &settings.regions_settings);
                if let Some(bar) = mc.bar.as_mut() { column::restyle(bar, &settings.columns_settings); }
                (mc.bands.clone(), mc.bar.clone())
            }
            None => (Vec::new(), None),
        };

        self.lines = build_lines(&input, &settings.lines_settings, &mut self.palette);
        let axes = axis_layout(&bounds, &settings.axises_settings, &input.categories, viewport_width, self.options.y_ticks);
        self.current = Some(input);

        ChartGeometry { bands, bar, lines: self.lines.clone(), axes }
    }

    /// Lines of the latest cycle.
    pub fn lines(&self) -> &[Line] { &self.lines }

    /// Property-pane entries for the latest lines.
    pub fn style_instances(&self) -> Vec<StyleInstance> { style_instances(&self.lines) }

    pub fn bar_tooltip(&self, category_index: usize, value: f64) -> Vec<TooltipItem> {
        self.current.as_ref().map(|i| bar_tooltip(i, category_index, value)).unwrap_or_default()
    }

    pub fn line_tooltip(&self, category_index: usize, value: f64) -> Vec<TooltipItem> {
        self.current.as_ref().map(|i| line_tooltip(i, category_index, value)).unwrap_or_default()
    }
}
