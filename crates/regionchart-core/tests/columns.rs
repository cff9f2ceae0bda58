// File: crates/regionchart-core/tests/columns.rs
// Purpose: Column aggregation into a single bar series.

use regionchart_core::column::aggregate_columns;
use regionchart_core::settings::ColumnsSettings;
use regionchart_core::{CategoryColumn, CategoryValue, ChartInput, Role, ValueSeries};

fn categories(n: usize) -> CategoryColumn {
    CategoryColumn {
        display_name: None,
        format: None,
        values: (0..n).map(|i| Some(CategoryValue::Number(i as f64 * 10.0))).collect(),
    }
}

fn series(name: &str, role: Role, samples: Vec<Option<f64>>) -> ValueSeries {
    ValueSeries::new(name, vec![role], samples)
}

#[test]
fn two_columns_sum_per_category() {
    let input = ChartInput::new(
        categories(3),
        vec![
            series("a", Role::ColumnValues, vec![Some(1.0), Some(2.0), Some(3.0)]),
            series("b", Role::ColumnValues, vec![Some(10.0), Some(20.0), Some(30.0)]),
        ],
    )
    .unwrap();

    let bar = aggregate_columns(&input, &ColumnsSettings::default()).expect("bar series");
    assert_eq!(bar.values(), vec![11.0, 22.0, 33.0]);
    assert_eq!(bar.key, "Column values");
    assert_eq!(bar.color, "red");
    let idx: Vec<usize> = bar.points.iter().map(|p| p.category_index).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(bar.points[2].x, 20.0);
}

#[test]
fn no_column_series_means_no_bar() {
    let input = ChartInput::new(categories(2), vec![series("l", Role::LineValues, vec![Some(1.0), Some(2.0)])]).unwrap();
    assert!(aggregate_columns(&input, &ColumnsSettings::default()).is_none());
}

#[test]
fn missing_samples_add_nothing_and_zero_bars_are_hidden() {
    let input = ChartInput::new(
        categories(3),
        vec![
            series("a", Role::ColumnValues, vec![None, Some(2.0), None]),
            series("b", Role::ColumnValues, vec![None, Some(-1.0), Some(4.0)]),
        ],
    )
    .unwrap();
    let settings = ColumnsSettings { columns_width: 50.0, columns_color: "#336699".to_string() };
    let bar = aggregate_columns(&input, &settings).unwrap();

    assert_eq!(bar.values(), vec![0.0, 1.0, 4.0]);
    assert!(bar.points.iter().all(|p| p.y.is_finite()));
    assert!(!bar.points[0].visible);
    assert!(bar.points[1].visible);
    assert_eq!(bar.color, "#336699");
}

#[test]
fn series_with_several_roles_counts_once_as_column() {
    let input = ChartInput::new(
        categories(2),
        vec![ValueSeries::new("both", vec![Role::ColumnValues, Role::TooltipValue], vec![Some(2.0), Some(3.0)])],
    )
    .unwrap();
    let bar = aggregate_columns(&input, &ColumnsSettings::default()).unwrap();
    assert_eq!(bar.values(), vec![2.0, 3.0]);
}

#[test]
fn column_width_fraction_is_bounded() {
    let mut s = ColumnsSettings::default();
    assert_eq!(s.width_fraction(), 0.9);
    let (w, gap) = s.bar_width(20.0);
    assert!((w - 18.0).abs() < 1e-9);
    assert!((gap - 2.0).abs() < 1e-9);
    s.columns_width = 250.0;
    assert_eq!(s.width_fraction(), 1.0);
    s.columns_width = -5.0;
    assert_eq!(s.width_fraction(), 0.0);
}
