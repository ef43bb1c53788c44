// File: crates/chartkit-dashboard/tests/dataset.rs
// Purpose: CSV parsing of chart and heatmap datasets.

use chartkit_core::ChartDatum;
use chartkit_dashboard::dataset::{load_chart_csv, read_chart_csv, read_heatmap_csv};

#[test]
fn chart_rows_with_optional_color() {
    let csv = "label,value,color\nJan, 30 ,#ff0000\nFeb,45,\n";
    let data = read_chart_csv(csv.as_bytes()).unwrap();
    assert_eq!(data, vec![ChartDatum::new("Jan", 30.0).with_color("#ff0000"), ChartDatum::new("Feb", 45.0)]);
}

#[test]
fn chart_rows_without_color_column() {
    let data = read_chart_csv("label,value\nA,1.5\n".as_bytes()).unwrap();
    assert_eq!(data, vec![ChartDatum::new("A", 1.5)]);
}

#[test]
fn bad_value_reports_row() {
    let err = read_chart_csv("label,value\nA,1\nB,lots\n".as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("chart row 2"), "{err:#}");
}

#[test]
fn heatmap_rows_parse_dates() {
    let data = read_heatmap_csv("date,value\n2024-01-01,3\n2024-01-02,4\n".as_bytes()).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[1].value, 4.0);
    let err = read_heatmap_csv("date,value\n01/02/2024,3\n".as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid date"), "{err:#}");
}

#[test]
fn loading_a_file_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.csv");
    std::fs::write(&path, "label,value\nA,1\nB,2\n").unwrap();
    assert_eq!(load_chart_csv(&path).unwrap().len(), 2);
    let err = load_chart_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("absent.csv"), "{err:#}");
}
