// File: crates/chartkit-dashboard/src/dataset.rs
// Summary: CSV loaders for chart data (label,value[,color]) and heatmap data (date,value).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chartkit_core::{ChartDatum, HeatmapDatum};
use serde::Deserialize;

#[derive(Deserialize)]
struct HeatmapRow {
    date: String,
    value: f64,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input)
}

/// Parse chart rows from any reader. A missing or empty `color` column means "use the palette".
pub fn read_chart_csv<R: Read>(input: R) -> Result<Vec<ChartDatum>> {
    let mut rdr = reader(input);
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<ChartDatum>().enumerate() {
        let mut datum = rec.with_context(|| format!("chart row {}", i + 1))?;
        if datum.color.as_deref().is_some_and(str::is_empty) {
            datum.color = None;
        }
        out.push(datum);
    }
    Ok(out)
}

/// Parse heatmap rows from any reader; dates must be `YYYY-MM-DD`.
pub fn read_heatmap_csv<R: Read>(input: R) -> Result<Vec<HeatmapDatum>> {
    let mut rdr = reader(input);
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<HeatmapRow>().enumerate() {
        let row = rec.with_context(|| format!("heatmap row {}", i + 1))?;
        out.push(HeatmapDatum::parse(&row.date, row.value).with_context(|| format!("heatmap row {}", i + 1))?);
    }
    Ok(out)
}

pub fn load_chart_csv(path: &Path) -> Result<Vec<ChartDatum>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let data = read_chart_csv(file).with_context(|| format!("loading {}", path.display()))?;
    log::info!("Loaded {} chart rows from {}", data.len(), path.display());
    Ok(data)
}

pub fn load_heatmap_csv(path: &Path) -> Result<Vec<HeatmapDatum>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let data = read_heatmap_csv(file).with_context(|| format!("loading {}", path.display()))?;
    log::info!("Loaded {} heatmap rows from {}", data.len(), path.display());
    Ok(data)
}
