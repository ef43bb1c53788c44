// File: crates/chartkit-core/tests/data.rs
// Purpose: Chart kinds, heatmap dates and series helpers.

use chrono::NaiveDate;

use chartkit_core::data::max_value;
use chartkit_core::{ChartDatum, ChartError, ChartKind, HeatmapDatum};

#[test]
fn kind_parses_case_insensitively() {
    assert_eq!("Doughnut".parse::<ChartKind>().unwrap(), ChartKind::Doughnut);
    assert_eq!(" line ".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert!(matches!("radar".parse::<ChartKind>(), Err(ChartError::UnknownKind(_))));
    assert_eq!(ChartKind::Pie.to_string(), "pie");
}

#[test]
fn heatmap_datum_parses_iso_dates() {
    let d = HeatmapDatum::parse("2024-02-29", 3.0).unwrap();
    assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert!(HeatmapDatum::parse("2023-02-29", 1.0).is_err());
    assert!(HeatmapDatum::parse("yesterday", 1.0).is_err());
}

#[test]
fn max_value_of_series() {
    let data = vec![ChartDatum::new("a", 3.0), ChartDatum::new("b", 7.5), ChartDatum::new("c", 1.0)];
    assert_eq!(max_value(&data), Some(7.5));
    assert_eq!(max_value(&[]), None);
}
