// File: crates/regionchart-core/tests/layout.rs
// Purpose: Axis layout: date/number label formats, tick selection, margins.

use chrono::{TimeZone, Utc};
use regionchart_core::format::DateFormat;
use regionchart_core::grid::{linspace, nice_ticks};
use regionchart_core::layout::{axis_layout, category_labels, x_tick_count, x_tick_indices};
use regionchart_core::settings::AxesSettings;
use regionchart_core::types::Insets;
use regionchart_core::{AxisBounds, AxisDomain, CategoryColumn, CategoryValue, DisplayUnits, NumberFormat};

const JAN_1_2024_MS: f64 = 1_704_067_200_000.0;
const DAY_MS: f64 = 86_400_000.0;

fn days(n: usize) -> CategoryColumn {
    CategoryColumn {
        display_name: Some("Date".to_string()),
        format: None,
        values: (0..n).map(|i| Some(CategoryValue::Number(JAN_1_2024_MS + i as f64 * DAY_MS))).collect(),
    }
}

#[test]
fn host_date_patterns_translate_to_chrono() {
    assert_eq!(DateFormat::new("MM/DD/YYYY").strftime(), "%m/%d/%Y");
    assert_eq!(DateFormat::new("dd.MM.yyyy HH:mm").strftime(), "%d.%m.%Y %H:%M");
    assert_eq!(DateFormat::new("yyyy 'at' h tt").strftime(), "%Y at %-I %p");
    assert_eq!(DateFormat::new("d\\%").strftime(), "%-d%%");

    let t = Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap();
    assert_eq!(DateFormat::default().format(&t), "01/05/2024");
    assert_eq!(DateFormat::new("dd.MM.yyyy HH:mm").format(&t), "05.01.2024 14:30");
}

#[test]
fn category_labels_follow_column_format() {
    let mut cats = days(2);
    assert_eq!(category_labels(&cats, &DateFormat::or_default(None)), vec!["01/01/2024", "01/02/2024"]);

    cats.values[1] = None;
    cats.format = Some("yyyy-MM-dd".to_string());
    let format = DateFormat::or_default(cats.format.as_deref());
    assert_eq!(category_labels(&cats, &format), vec!["2024-01-01".to_string(), String::new()]);
}

#[test]
fn numeric_pattern_keeps_numbers_plain() {
    let f = DateFormat::new("0.00");
    assert!(!f.is_date_pattern());
    assert_eq!(f.format_category(&CategoryValue::Number(3.5)), "3.5");
    assert_eq!(f.format_category(&CategoryValue::Text("North".into())), "North");
}

#[test]
fn number_labels_scale_and_round() {
    assert_eq!(NumberFormat::new(DisplayUnits::Thousands, 1).format(12_345.0), "12.3K");
    assert_eq!(NumberFormat::new(DisplayUnits::None, 1).format(-0.04), "0.0");
    assert_eq!(NumberFormat::new(DisplayUnits::None, 0).format(-7.0), "-7");

    let auto = NumberFormat::for_domain(DisplayUnits::Auto, 1, AxisDomain::new(0.0, 2_000_000.0));
    assert_eq!(auto.units, DisplayUnits::Millions);
    assert_eq!(auto.format(1_500_000.0), "1.5M");

    assert_eq!(DisplayUnits::from_code(0.0), DisplayUnits::Auto);
    assert_eq!(DisplayUnits::from_code(1e9), DisplayUnits::Billions);
    assert_eq!(DisplayUnits::Billions.suffix(), "bn");
}

#[test]
fn value_ticks_are_round_and_inside_the_domain() {
    let ticks = nice_ticks(AxisDomain::new(0.0, 100.0), 10);
    assert_eq!(ticks, linspace(0.0, 100.0, 11));
    let ticks = nice_ticks(AxisDomain::new(3.0, 47.0), 10);
    assert_eq!(ticks, vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0]);
    assert_eq!(nice_ticks(AxisDomain::new(5.0, 5.0), 10), vec![5.0]);
}

#[test]
fn narrow_viewports_get_two_category_ticks() {
    assert_eq!(x_tick_count(800.0, 40), 15);
    assert_eq!(x_tick_count(800.0, 4), 4);
    assert_eq!(x_tick_count(300.0, 40), 2);

    assert_eq!(x_tick_indices(5, 3), vec![0, 2, 4]);
    assert_eq!(x_tick_indices(10, 2), vec![0, 9]);
    assert_eq!(x_tick_indices(1, 2), vec![0]);
    assert!(x_tick_indices(0, 2).is_empty());
}

#[test]
fn each_axis_uses_its_own_label_settings() {
    let bounds = AxisBounds { left_min: 0.0, left_max: 50.0, right_min: 0.0, right_max: 2_000.0 };
    let axes = AxesSettings { left_precision: 2, right_precision: 0, ..AxesSettings::default() };
    let layout = axis_layout(&bounds, &axes, &days(3), 800.0, 10);

    assert_eq!(layout.left_ticks.first().map(|t| t.label.as_str()), Some("0.00"));
    assert_eq!(layout.left_ticks.last().map(|t| t.label.as_str()), Some("50.00"));
    assert_eq!(layout.right_format.units, DisplayUnits::Thousands);
    assert_eq!(layout.right_ticks.last().map(|t| t.label.as_str()), Some("2K"));
    assert_eq!(layout.x_ticks, vec![0, 1, 2]);
    assert_eq!(layout.widest_x_label.as_deref(), Some("01/01/2024"));
    assert_eq!(layout.date_format.pattern, "MM/DD/YYYY");
}

#[test]
fn margins_fit_measured_labels() {
    assert_eq!(Insets::for_label(10.0), 60);
    assert_eq!(Insets::for_label(35.5), 76);
    assert_eq!(Insets::for_label(f32::NAN), 60);
    let m = Insets::from_measured(50.0, 0.0, 70.0, Some(30.0));
    assert_eq!(m, Insets::new(90, 60, 50, 110));
    assert_eq!((m.hsum(), m.vsum()), (150, 160));
    assert_eq!(Insets::from_measured(0.0, 0.0, 0.0, None).top, Insets::default().top);
}
