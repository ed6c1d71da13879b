// File: crates/chart-core/src/series.rs
// Summary: Data model: period records, the dataset that owns them, and borrowed per-series views.

use tracing::warn;

use crate::date::YearMonth;
use crate::error::LoadError;

/// One period (CSV row): its label as written, the parsed period, and one value per series.
/// Missing or non-numeric values are NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub date: YearMonth,
    /// Cached time coordinate of `date`.
    pub t: f64,
    pub values: Vec<f64>,
}

impl Record {
    pub fn new(label: impl Into<String>, date: YearMonth, values: Vec<f64>) -> Self {
        Self { label: label.into(), t: date.timestamp(), date, values }
    }

    /// Parse `label` and build a record from it.
    pub fn from_label(label: &str, values: Vec<f64>) -> Result<Self, crate::error::DateLabelError> {
        Ok(Self::new(label, YearMonth::parse(label)?, values))
    }
}

/// Records ordered ascending by date, all sharing the same series keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    series_names: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, enforcing the shape invariants. Out-of-order records are
    /// stably sorted by date.
    pub fn new(series_names: Vec<String>, mut records: Vec<Record>) -> Result<Self, LoadError> {
        if series_names.is_empty() {
            return Err(LoadError::NoSeries(String::new()));
        }
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        let expected = series_names.len();
        if let Some((row, r)) = records.iter().enumerate().find(|(_, r)| r.values.len() != expected) {
            return Err(LoadError::Shape { row, got: r.values.len(), expected });
        }
        if !records.windows(2).all(|w| w[0].date <= w[1].date) {
            warn!(rows = records.len(), "records out of date order; sorting");
            records.sort_by_key(|r| r.date);
        }
        Ok(Self { series_names, records })
    }

    pub fn series_names(&self) -> &[String] { &self.series_names }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    /// Whether there are no records. `new` rejects empty input, so this is false for any built dataset.
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn first(&self) -> &Record { &self.records[0] }
    pub fn last(&self) -> &Record { &self.records[self.records.len() - 1] }

    pub fn series_index(&self, name: &str) -> Option<usize> {
        self.series_names.iter().position(|n| n == name)
    }

    pub fn series(&self, name: &str) -> Option<Series<'_>> {
        self.series_index(name).map(|index| self.series_at(index))
    }

    fn series_at(&self, index: usize) -> Series<'_> {
        Series { name: &self.series_names[index], index, records: &self.records }
    }

    /// All series, in column order.
    pub fn iter_series(&self) -> impl Iterator<Item = Series<'_>> + '_ {
        (0..self.series_names.len()).map(move |i| self.series_at(i))
    }

    /// Time coordinates of the first and last record.
    pub fn time_extent(&self) -> (f64, f64) {
        (self.first().t, self.last().t)
    }

    /// Index of the record labelled `label`, if any.
    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.records.iter().position(|r| r.label == label)
    }
}

/// Projection of every record onto one series column. Cheap to copy; never stored.
#[derive(Clone, Copy, Debug)]
pub struct Series<'a> {
    name: &'a str,
    index: usize,
    records: &'a [Record],
}

impl<'a> Series<'a> {
    pub fn name(&self) -> &'a str { self.name }
    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Value at record `i` (NaN when missing or out of range).
    pub fn value_at(&self, i: usize) -> f64 {
        self.records.get(i).map_or(f64::NAN, |r| r.values[self.index])
    }

    /// `(t, value)` for every record, NaN values included.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let index = self.index;
        self.records.iter().map(move |r| (r.t, r.values[index]))
    }

    /// Maximal runs of consecutive defined (non-NaN) points. A missing value
    /// always ends a run, so no segment ever spans it.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out = Vec::new();
        let mut run: Vec<(f64, f64)> = Vec::new();
        for (t, v) in self.points() {
            if v.is_nan() {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            } else {
                run.push((t, v));
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }
}
