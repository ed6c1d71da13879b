// File: crates/chart-core/src/axis.rs
// Summary: Axis model: year ticks along time, value ticks with a distinguished baseline.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::year_start;
use crate::error::ConfigError;
use crate::grid::{nice_ticks, year_ticks};
use crate::scale::{TimeScale, ValueScale};

/// Which year closes the time axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalTick {
    /// Year of the last record.
    LastDataYear,
    /// A fixed year, regardless of the data.
    Year(i32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub value_min: f64,
    pub value_max: f64,
    /// Tick count hint for the value axis.
    pub value_ticks: usize,
    /// Value whose grid line is drawn emphasized (the index base period).
    pub baseline: Option<f64>,
    pub year_step: u32,
    pub final_tick: FinalTick,
    /// Drop the tick line (not the label) of the last year tick.
    pub hide_last_tick_line: bool,
    /// strftime pattern for year tick labels.
    pub year_format: String,
    pub value_caption: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            value_min: 0.0,
            value_max: 150.0,
            value_ticks: 10,
            baseline: Some(100.0),
            year_step: 5,
            final_tick: FinalTick::LastDataYear,
            hide_last_tick_line: false,
            year_format: "%Y年".to_string(),
            value_caption: "↑ 消費者物価指数（2010年＝100）".to_string(),
        }
    }
}

impl AxisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.value_min.is_finite() && self.value_max.is_finite()) || self.value_min >= self.value_max {
            return Err(ConfigError::ValueDomain { min: self.value_min, max: self.value_max });
        }
        if StrftimeItems::new(&self.year_format).any(|i| matches!(i, Item::Error)) {
            return Err(ConfigError::YearFormat(self.year_format.clone()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in plot pixels.
    pub px: f64,
    pub label: String,
    /// Drawn with the baseline style.
    pub emphasized: bool,
    pub show_line: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Year ticks for the time axis. Ticks falling outside the plotted range are dropped.
    pub fn time(scale: &TimeScale, first_year: i32, last_year: i32, cfg: &AxisConfig) -> Self {
        let end = match cfg.final_tick {
            FinalTick::LastDataYear => last_year,
            FinalTick::Year(y) => y,
        };
        let mut ticks: Vec<Tick> = year_ticks(first_year, end, cfg.year_step)
            .into_iter()
            .filter_map(|year| {
                let t = year_start(year)?;
                let px = scale.to_px(t);
                scale.contains_px(px).then(|| Tick {
                    value: year as f64,
                    px,
                    label: year_label(year, &cfg.year_format),
                    emphasized: false,
                    show_line: true,
                })
            })
            .collect();
        if cfg.hide_last_tick_line {
            if let Some(last) = ticks.last_mut() {
                last.show_line = false;
            }
        }
        Self { label: String::new(), ticks }
    }

    /// Value ticks over the scale's domain; the baseline tick is emphasized.
    pub fn value(scale: &ValueScale, cfg: &AxisConfig) -> Self {
        let ticks = nice_ticks(scale.vmin, scale.vmax, cfg.value_ticks)
            .into_iter()
            .map(|v| Tick {
                value: v,
                px: scale.to_px(v),
                label: format_value(v),
                emphasized: cfg.baseline.is_some_and(|b| (b - v).abs() < 1e-9),
                show_line: true,
            })
            .collect();
        Self { label: cfg.value_caption.clone(), ticks }
    }
}

fn year_label(year: i32, format: &str) -> String {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d.format(format).to_string(),
        None => year.to_string(),
    }
}

/// Shortest text that reads back as `v`; integral values print without a fraction.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{v}")
}
