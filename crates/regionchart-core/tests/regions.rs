// File: crates/regionchart-core/tests/regions.rs
// Purpose: Region thresholds, clamping and the stacked region/gap bands.

use regionchart_core::region::{clamp_sample, clamp_scalar, compute_bands, restyle, thresholds};
use regionchart_core::types::{DEFAULT_GAP_COLOR, TRANSPARENT};
use regionchart_core::{AxisBounds, AxisDomain, BandKind, CategoryColumn, CategoryValue, ChartInput, ChartSettings, Role, ValueSeries};

fn categories(n: usize) -> CategoryColumn {
    CategoryColumn {
        display_name: Some("Date".to_string()),
        format: None,
        values: (0..n).map(|i| Some(CategoryValue::Number(i as f64 * 1000.0))).collect(),
    }
}

fn bounds(lo: f64, hi: f64) -> AxisBounds {
    AxisBounds { left_min: lo, left_max: hi, right_min: 0.0, right_max: 1.0 }
}

fn series(name: &str, role: Role, samples: &[f64]) -> ValueSeries {
    ValueSeries::new(name, vec![role], samples.iter().map(|&v| Some(v)).collect())
}

fn line_only(n: usize) -> ChartInput {
    ChartInput::new(categories(n), vec![series("l", Role::LineValues, &vec![1.0; n])]).unwrap()
}

#[test]
fn static_thresholds_fill_every_category() {
    let input = line_only(4);
    let settings = ChartSettings::default();
    let bands = compute_bands(&input, &settings.regions_settings, &bounds(0.0, 100.0), DEFAULT_GAP_COLOR);

    // default thresholds touch each other: no gaps, five regions of 20
    assert_eq!(bands.len(), 5);
    for (i, b) in bands.iter().enumerate() {
        assert_eq!(b.kind, BandKind::Region);
        assert_eq!(b.key, format!("region - {i}"));
        assert_eq!(b.threshold, i + 1);
        assert_eq!(b.points.len(), 4);
        let idx: Vec<usize> = b.points.iter().map(|p| p.category_index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
        assert!(b.points.iter().all(|p| p.y == 20.0));
    }
    assert_eq!(bands[0].color, "#00B050");
    assert_eq!(bands[4].color, "#FF0000");
}

#[test]
fn static_thresholds_are_clamped_into_left_domain() {
    let input = line_only(2);
    let settings = ChartSettings::default();
    let bands = compute_bands(&input, &settings.regions_settings, &bounds(10.0, 30.0), DEFAULT_GAP_COLOR);

    // gap 0 lifts the stack to 10; regions 3..5 collapse onto 30
    assert_eq!(bands.len(), 6);
    assert_eq!(bands[0].kind, BandKind::Gap);
    assert_eq!(bands[0].key, "gap - 0");
    assert_eq!(bands[0].color, DEFAULT_GAP_COLOR);
    assert_eq!(bands[0].thickness(1), Some(10.0));
    assert_eq!(bands[1].thickness(0), Some(10.0));
    assert_eq!(bands[2].thickness(0), Some(10.0));
    for b in &bands[3..] {
        assert_eq!(b.kind, BandKind::Region);
        assert!(b.points.iter().all(|p| p.y == 0.0));
    }
}

#[test]
fn data_driven_boundaries_are_clamped_and_nulls_pass_through() {
    let input = ChartInput::new(
        categories(3),
        vec![
            series("l", Role::LineValues, &[1.0, 2.0, 3.0]),
            ValueSeries::new("min", vec![Role::region_min(1)], vec![Some(-5.0), Some(5.0), None]),
            series("max", Role::region_max(1), &[50.0, 15.0, 8.0]),
        ],
    )
    .unwrap();
    let settings = ChartSettings::default();
    let ts = thresholds(&input, &settings.regions_settings, &bounds(0.0, 20.0));

    assert_eq!(ts.len(), 5);
    assert!(ts[0].data_driven);
    assert_eq!(ts[0].min_values, vec![Some(0.0), Some(5.0), None]);
    assert_eq!(ts[0].max_values, vec![Some(20.0), Some(15.0), Some(8.0)]);
    assert!(!ts[1].data_driven);
    assert_eq!(ts[1].min_values, vec![Some(20.0); 3]);
}

#[test]
fn half_configured_region_falls_back_to_settings() {
    let input = ChartInput::new(
        categories(2),
        vec![series("l", Role::LineValues, &[1.0, 2.0]), series("min", Role::region_min(2), &[1.0, 1.0])],
    )
    .unwrap();
    let settings = ChartSettings::default();
    let ts = thresholds(&input, &settings.regions_settings, &bounds(0.0, 100.0));
    assert!(!ts[1].data_driven);
    assert_eq!(ts[1].min_values, vec![Some(20.0), Some(20.0)]);
    assert_eq!(ts[1].max_values, vec![Some(40.0), Some(40.0)]);
}

#[test]
fn clamping_is_idempotent() {
    let domain = AxisDomain::new(-3.0, 7.0);
    for v in [Some(-10.0), Some(-3.0), Some(0.5), Some(7.0), Some(99.0), None] {
        let once = clamp_sample(v, domain);
        assert_eq!(clamp_sample(once, domain), once);
    }
    let once = clamp_scalar(42.0, domain);
    assert_eq!(clamp_scalar(once, domain), once);
    assert_eq!(clamp_scalar(f64::NAN, domain), 0.0);
}

#[test]
fn inverted_bounds_clamp_like_ordered_bounds() {
    let input = line_only(1);
    let settings = ChartSettings::default();
    let a = thresholds(&input, &settings.regions_settings, &bounds(30.0, 10.0));
    let b = thresholds(&input, &settings.regions_settings, &bounds(10.0, 30.0));
    assert_eq!(a, b);
}

#[test]
fn inverted_region_produces_transparent_gap() {
    let input = ChartInput::new(
        categories(2),
        vec![
            series("l", Role::LineValues, &[1.0, 2.0]),
            series("r1min", Role::region_min(1), &[0.0, 0.0]),
            series("r1max", Role::region_max(1), &[10.0, 3.0]),
            series("r2min", Role::region_min(2), &[5.0, 5.0]),
            series("r2max", Role::region_max(2), &[12.0, 12.0]),
        ],
    )
    .unwrap();
    let settings = ChartSettings::default();
    let bands = compute_bands(&input, &settings.regions_settings, &bounds(0.0, 100.0), DEFAULT_GAP_COLOR);

    let gap1 = bands.iter().find(|b| b.key == "gap - 1").expect("gap between regions 1 and 2");
    assert_eq!(gap1.color, TRANSPARENT);
    assert_eq!(gap1.thickness(0), Some(-5.0));
    assert_eq!(gap1.thickness(1), Some(2.0));
    assert!(bands.iter().flat_map(|b| &b.points).all(|p| p.y.is_finite()));
}

#[test]
fn stack_is_lossless() {
    let mins = [[2.0, 1.0, 0.0], [6.0, 4.0, 3.0], [9.0, 8.0, 5.0], [12.0, 9.0, 7.0], [15.0, 11.0, 10.0]];
    let maxs = [[5.0, 3.0, 2.0], [8.0, 6.0, 4.0], [11.0, 8.0, 6.0], [14.0, 10.0, 9.0], [20.0, 13.0, 12.0]];
    let mut all = vec![series("l", Role::LineValues, &[0.0, 10.0, 20.0])];
    for k in 0..5 {
        all.push(series(&format!("min{k}"), Role::region_min(k + 1), &mins[k]));
        all.push(series(&format!("max{k}"), Role::region_max(k + 1), &maxs[k]));
    }
    let input = ChartInput::new(categories(3), all).unwrap();
    let settings = ChartSettings::default();
    let bands = compute_bands(&input, &settings.regions_settings, &bounds(0.0, 20.0), DEFAULT_GAP_COLOR);

    for j in 0..3 {
        let total: f64 = bands
            .iter()
            .filter(|b| b.kind == BandKind::Region || b.threshold > 1)
            .map(|b| b.points[j].y)
            .sum();
        assert_eq!(total, maxs[4][j] - mins[0][j], "category {j}");
    }
}

#[test]
fn zero_width_regions_are_still_emitted() {
    let input = line_only(2);
    let mut settings = ChartSettings::default();
    settings.regions_settings.region3_values_min = 50.0;
    settings.regions_settings.region3_values_max = 50.0;
    let bands = compute_bands(&input, &settings.regions_settings, &bounds(0.0, 100.0), DEFAULT_GAP_COLOR);
    let r3 = bands.iter().find(|b| b.key == "region - 2").unwrap();
    assert!(r3.points.iter().all(|p| p.y == 0.0));
    assert_eq!(bands.iter().filter(|b| b.kind == BandKind::Region).count(), 5);
}

#[test]
fn restyle_applies_current_region_colors() {
    let input = line_only(1);
    let mut settings = ChartSettings::default();
    let mut bands = compute_bands(&input, &settings.regions_settings, &bounds(0.0, 100.0), DEFAULT_GAP_COLOR);
    settings.regions_settings.region2_color = "#123456".to_string();
    restyle(&mut bands, &settings.regions_settings);
    let r2 = bands.iter().find(|b| b.kind == BandKind::Region && b.threshold == 2).unwrap();
    assert_eq!(r2.color, "#123456");
}
