// File: crates/chart-core/src/loader.rs
// Summary: CSV loader: a date column plus one numeric column per series.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::date::YearMonth;
use crate::error::LoadError;
use crate::series::{Dataset, Record};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Header of the column holding the period labels.
    pub date_column: String,
    /// Strip a `%` suffix from cells before parsing (e.g. "3.2%").
    pub strip_percent: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { date_column: "year".to_string(), strip_percent: false }
    }
}

pub fn load_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading CSV");
    let rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    load_csv(rdr, opts)
}

pub fn load_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    load_csv(rdr, opts)
}

pub fn load_str(text: &str, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    load_reader(text.as_bytes(), opts)
}

/// Parse one cell. Empty, non-numeric and non-finite cells become NaN.
pub fn parse_cell(raw: &str, strip_percent: bool) -> f64 {
    let mut s = raw.trim();
    if strip_percent {
        s = s.trim_end_matches('%').trim_end();
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(f64::NAN)
}

fn load_csv<R: Read>(mut rdr: csv::Reader<R>, opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let headers = rdr.headers()?.clone();
    let date_ix = headers
        .iter()
        .position(|h| h.trim() == opts.date_column)
        .ok_or_else(|| LoadError::MissingDateColumn(opts.date_column.clone()))?;

    let value_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != date_ix)
        .map(|(i, h)| (i, h.trim().to_string()))
        .collect();
    if value_cols.is_empty() {
        return Err(LoadError::NoSeries(opts.date_column.clone()));
    }

    let mut records = Vec::new();
    let mut nan_cells = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(date_ix).unwrap_or("").trim();
        if label.is_empty() && rec.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let date = YearMonth::parse(label)
            .map_err(|_| LoadError::BadDate { row, label: label.to_string() })?;
        let values: Vec<f64> = value_cols
            .iter()
            .map(|&(i, _)| parse_cell(rec.get(i).unwrap_or(""), opts.strip_percent))
            .collect();
        nan_cells += values.iter().filter(|v| v.is_nan()).count();
        records.push(Record::new(label, date, values));
    }

    if nan_cells > 0 {
        warn!(cells = nan_cells, "missing or non-numeric cells loaded as NaN");
    }
    let names = value_cols.into_iter().map(|(_, name)| name).collect();
    let ds = Dataset::new(names, records)?;
    debug!(records = ds.len(), series = ds.series_names().len(), "dataset loaded");
    Ok(ds)
}
