// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for loading, configuration and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// A date label that matches none of the accepted year/month formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date label {0:?}")]
pub struct DateLabelError(pub String);

/// Failures while turning CSV text into a dataset. Numeric anomalies are not
/// errors; they load as NaN.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("date column {0:?} not found in header")]
    MissingDateColumn(String),
    #[error("no series columns besides the date column {0:?}")]
    NoSeries(String),
    #[error("no data rows")]
    Empty,
    #[error("row {row}: unrecognized date label {label:?}")]
    BadDate { row: usize, label: String },
    #[error("record {row} has {got} values, expected {expected}")]
    Shape { row: usize, got: usize, expected: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid year label format {0:?}")]
    YearFormat(String),
    #[error("value domain [{min}, {max}] is empty or not finite")]
    ValueDomain { min: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown series {0:?}")]
    UnknownSeries(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
