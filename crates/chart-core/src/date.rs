// File: crates/chart-core/src/date.rs
// Summary: Year/month date labels ("1950年1月", "1950/01", "1950-01", "1950年") and their time coordinate.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::DateLabelError;

/// Canonical form of a period label. Ordering is chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is 1..=12 and the date exists in chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn parse(label: &str) -> Result<Self, DateLabelError> {
        parse_label(label.trim()).ok_or_else(|| DateLabelError(label.to_string()))
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Constructors guarantee the date exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Seconds since the Unix epoch at midnight UTC on the first day of the month.
    pub fn timestamp(&self) -> f64 {
        date_timestamp(self.first_day())
    }
}

impl FromStr for YearMonth {
    type Err = DateLabelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月", self.year, self.month)
    }
}

/// Time coordinate of January 1st of `year`.
pub fn year_start(year: i32) -> Option<f64> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(date_timestamp)
}

/// Calendar year containing the time coordinate `t`.
pub fn year_of(t: f64) -> Option<i32> {
    if !t.is_finite() {
        return None;
    }
    chrono::DateTime::from_timestamp(t.floor() as i64, 0).map(|dt| dt.year())
}

fn date_timestamp(d: NaiveDate) -> f64 {
    d.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp() as f64)
        .unwrap_or(f64::NAN)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_label(s: &str) -> Option<YearMonth> {
    let (year, rest) = split_digits(s);
    if year.is_empty() || year.len() > 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    let month_part = if let Some(r) = rest.strip_prefix('年') {
        if r.is_empty() {
            return YearMonth::new(year, 1);
        }
        // "年" labels close the month with "月"; it may be omitted.
        r.strip_suffix('月').unwrap_or(r)
    } else if let Some(r) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('-')) {
        r
    } else if rest.is_empty() {
        return YearMonth::new(year, 1);
    } else {
        return None;
    };

    let (month, tail) = split_digits(month_part);
    if month.is_empty() || month.len() > 2 || !tail.is_empty() {
        return None;
    }
    YearMonth::new(year, month.parse().ok()?)
}
