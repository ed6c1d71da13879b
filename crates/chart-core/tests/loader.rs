// File: crates/chart-core/tests/loader.rs
// Purpose: CSV loading: NaN degradation, percent stripping, and load failures.

use cpi_chart_core::loader::parse_cell;
use cpi_chart_core::{load_path, load_str, Dataset, LoadError, LoadOptions, Record};

fn opts() -> LoadOptions {
    LoadOptions::default()
}

#[test]
fn loads_records_in_order() {
    let ds = load_str("year,A,B\n1950年1月,100,50\n1955年1月,110,\n", &opts()).expect("load");
    assert_eq!(ds.series_names(), ["A", "B"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].label, "1950年1月");
    assert_eq!(ds.records()[1].values[0], 110.0);
    assert!(ds.records()[1].values[1].is_nan());
    assert!(ds.records()[0].t < ds.records()[1].t);
}

#[test]
fn non_numeric_cells_become_nan() {
    assert_eq!(parse_cell(" 12.5 ", false), 12.5);
    assert_eq!(parse_cell("-3", false), -3.0);
    for raw in ["", "-", "x", "n/a", "inf", "NaN", "12abc"] {
        assert!(parse_cell(raw, false).is_nan(), "{raw:?} should load as NaN");
    }
}

#[test]
fn strips_percent_only_when_enabled() {
    assert_eq!(parse_cell("3.2%", true), 3.2);
    assert_eq!(parse_cell(" -0.5 % ", true), -0.5);
    assert!(parse_cell("3.2%", false).is_nan());

    let strip = LoadOptions { strip_percent: true, ..opts() };
    let ds = load_str("year,rate\n2020年1月,0.5%\n2021年1月,%\n", &strip).expect("load");
    assert_eq!(ds.records()[0].values[0], 0.5);
    assert!(ds.records()[1].values[0].is_nan());
}

#[test]
fn missing_date_column_is_an_error() {
    let err = load_str("date,A\n1950年1月,1\n", &opts()).unwrap_err();
    assert!(matches!(err, LoadError::MissingDateColumn(ref c) if c == "year"), "{err:?}");
}

#[test]
fn custom_date_column() {
    let o = LoadOptions { date_column: "date".to_string(), ..opts() };
    let ds = load_str("A,date\n1,1950/01\n2,1950/02\n", &o).expect("load");
    assert_eq!(ds.series_names(), ["A"]);
    assert_eq!(ds.records()[1].values[0], 2.0);
}

#[test]
fn header_only_is_empty() {
    assert!(matches!(load_str("year,A\n", &opts()), Err(LoadError::Empty)));
    assert!(matches!(load_str("", &opts()), Err(LoadError::MissingDateColumn(_))));
}

#[test]
fn date_column_alone_has_no_series() {
    assert!(matches!(load_str("year\n1950年1月\n", &opts()), Err(LoadError::NoSeries(_))));
}

#[test]
fn bad_date_label_reports_row() {
    let err = load_str("year,A\n1950年1月,1\nsomeday,2\n", &opts()).unwrap_err();
    match err {
        LoadError::BadDate { row, label } => {
            assert_eq!(row, 1);
            assert_eq!(label, "someday");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn short_rows_and_blank_rows() {
    let ds = load_str("year,A,B\n1950年1月,1\n,,\n1951年1月,2,3\n", &opts()).expect("load");
    assert_eq!(ds.len(), 2);
    assert!(ds.records()[0].values[1].is_nan());
    assert_eq!(ds.records()[1].values, vec![2.0, 3.0]);
}

#[test]
fn out_of_order_rows_are_sorted() {
    let ds = load_str("year,A\n1960年1月,3\n1950年1月,1\n1955年1月,2\n", &opts()).expect("load");
    let labels: Vec<_> = ds.records().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["1950年1月", "1955年1月", "1960年1月"]);
    assert_eq!(ds.series("A").unwrap().value_at(2), 3.0);
}

#[test]
fn dataset_rejects_ragged_records() {
    let r = Record::from_label("1950年1月", vec![1.0, 2.0]).unwrap();
    let err = Dataset::new(vec!["A".to_string()], vec![r]).unwrap_err();
    assert!(matches!(err, LoadError::Shape { row: 0, got: 2, expected: 1 }));
}

#[test]
fn loads_fixture_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/indices.csv");
    let ds = load_path(path, &opts()).expect("fixture loads");
    assert_eq!(ds.len(), 74);
    assert_eq!(ds.series_names().len(), 4);
    assert_eq!(ds.first().label, "1950年1月");
    assert_eq!(ds.last().label, "2023年1月");
    let housing = ds.series("住居").expect("series present");
    assert!(housing.value_at(0).is_nan());
    assert!(!housing.value_at(ds.len() - 1).is_nan());
    assert_eq!(ds.find_label("1974年1月"), Some(24));
    assert!(ds.series("光熱・水道").unwrap().value_at(24).is_nan());
}

#[test]
fn built_dataset_is_never_empty() {
    let ds = load_str("year,A\n2000年1月,1\n", &LoadOptions::default()).expect("load");
    assert!(!ds.is_empty());
    assert_eq!(ds.len(), 1);
    assert!(matches!(Dataset::new(vec!["A".to_string()], Vec::new()), Err(LoadError::Empty)));
}
