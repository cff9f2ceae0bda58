// File: crates/demo/src/main.rs
// Summary: Demo loads a role-annotated CSV, runs one chart update and writes the geometry as JSON.
// Notes:
// - Header cells after the first read `role[+role][@group]:Display Name`,
//   e.g. `lineValues@North:Temperature` or `columnValues+tooltipValue:Rainfall`.
// - The first column holds the category keys. Empty cells are missing samples.

use anyhow::{Context, Result};
use regionchart_core::input::RawValueColumn;
use regionchart_core::resolve::resolve_settings;
use regionchart_core::{CategoryColumn, CategoryValue, ChartInput, ChartSettings, ComboChart, DataView, Update, UpdateKind};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv");
const VIEWPORT_WIDTH: f64 = 960.0;

fn main() -> Result<()> {
    init_logging();

    // demo <data.csv> [settings.json]
    let mut args = std::env::args().skip(1);
    let data_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_DATA.to_string()));
    let settings_path = args.next().map(PathBuf::from);

    let view = load_data_view(&data_path)
        .with_context(|| format!("failed to load CSV '{}'", data_path.display()))?;
    info!(categories = view.categories.len(), series = view.values.len(), "loaded data view");

    let settings = match &settings_path {
        Some(p) => {
            let doc = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            ChartSettings::from_json(&doc).with_context(|| format!("parsing settings '{}'", p.display()))?
        }
        None => ChartSettings::default(),
    };

    let input = ChartInput::from_data_view(view).context("input rejected")?;
    let mut chart = ComboChart::new();
    let geometry = chart.update(Update { input: input.clone(), settings: &settings, kind: UpdateKind::All, viewport_width: VIEWPORT_WIDTH });
    info!(
        bands = geometry.bands.len(),
        bars = geometry.bar.as_ref().map_or(0, |b| b.points.len()),
        lines = geometry.lines.len(),
        "computed geometry"
    );
    for line in chart.lines() {
        info!(key = %line.key, color = %line.color, dash = %line.dash_style, points = line.points.len(), "line");
    }
    if let Some(first) = geometry.bar.as_ref().and_then(|b| b.points.first()) {
        for row in chart.bar_tooltip(first.category_index, first.y) {
            info!(name = row.display_name.as_deref().unwrap_or(""), value = %row.value, "tooltip row");
        }
    }

    let out_geometry = out_name_with(&data_path, "geometry");
    write_json(&out_geometry, &geometry)?;
    println!("Wrote {}", out_geometry.display());

    // persist the bounds the chart settled on, as the host would
    let resolved = resolve_settings(settings, &input);
    let out_settings = out_name_with(&data_path, "settings");
    std::fs::write(&out_settings, resolved.to_json()?).with_context(|| format!("writing {}", out_settings.display()))?;
    println!("Wrote {}", out_settings.display());

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
}

/// Produce output file name like target/out/<stem>_<suffix>.json
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.json"));
    out
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, value).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// One measure column described by a header cell.
struct ColumnSpec {
    display_name: String,
    group_name: Option<String>,
    roles: Vec<String>,
}

fn parse_header(cell: &str) -> Option<ColumnSpec> {
    let (spec, name) = cell.split_once(':')?;
    let (roles, group) = match spec.split_once('@') {
        Some((r, g)) => (r, Some(g.trim().to_string())),
        None => (spec, None),
    };
    let roles: Vec<String> = roles.split('+').map(|r| r.trim().to_string()).filter(|r| !r.is_empty()).collect();
    if roles.is_empty() {
        return None;
    }
    Some(ColumnSpec { display_name: name.trim().to_string(), group_name: group, roles })
}

fn parse_category(s: &str) -> Option<CategoryValue> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    match s.parse::<f64>() {
        Ok(n) => Some(CategoryValue::Number(n)),
        Err(_) => Some(CategoryValue::Text(s.to_string())),
    }
}

/// Load a role-annotated CSV into a host-style data view.
fn load_data_view(path: &Path) -> Result<DataView> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let category_name = headers.get(0).map(|h| h.trim().to_string());

    // (csv column index, spec)
    let mut specs: Vec<(usize, ColumnSpec)> = Vec::new();
    for (i, cell) in headers.iter().enumerate().skip(1) {
        match parse_header(cell) {
            Some(spec) => specs.push((i, spec)),
            None => warn!(column = i, header = cell, "header has no role; column ignored"),
        }
    }
    if specs.is_empty() {
        anyhow::bail!("no role-annotated columns in {}", path.display());
    }

    let mut categories = Vec::new();
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); specs.len()];
    for rec in rdr.records() {
        let rec = rec?;
        categories.push(rec.get(0).and_then(parse_category));
        for (slot, (i, _)) in values.iter_mut().zip(&specs) {
            slot.push(rec.get(*i).and_then(|s| s.trim().parse::<f64>().ok()));
        }
    }

    let values = specs
        .into_iter()
        .zip(values)
        .map(|((_, spec), values)| RawValueColumn {
            display_name: spec.display_name,
            group_name: spec.group_name,
            roles: spec.roles,
            values,
        })
        .collect();

    Ok(DataView {
        categories: CategoryColumn { display_name: category_name, format: None, values: categories },
        values,
        legend_query_name: Some("legend".to_string()),
        ..DataView::default()
    })
}
