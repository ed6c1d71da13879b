// File: crates/chart-core/src/state.rs
// Summary: Selection state: the highlighted series and the hit-test width mode.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ChartError;
use crate::series::Dataset;

/// Width mode of the invisible hit-test strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitMode {
    /// Generous target: the pointer anywhere near a line tracks the selected series.
    Wide,
    /// Near-zero target for precise picking among overlapping lines.
    Narrow,
}

impl HitMode {
    pub fn toggled(self) -> Self {
        match self {
            HitMode::Wide => HitMode::Narrow,
            HitMode::Narrow => HitMode::Wide,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitConfig {
    pub wide_width: f64,
    pub narrow_width: f64,
    /// Stroke width of the per-series hover targets that name a line.
    pub hover_width: f64,
    pub initial_mode: HitMode,
    /// Toggle button text while in wide mode.
    pub wide_label: String,
    /// Toggle button text while in narrow mode.
    pub narrow_label: String,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            wide_width: 150.0,
            narrow_width: 0.0,
            hover_width: 5.0,
            initial_mode: HitMode::Wide,
            wide_label: "それぞれの線が示す項目をマウスを動かしながら調べる".to_string(),
            narrow_label: "プルダウンから選択した項目の推移をマウスを動かしながら調べる".to_string(),
        }
    }
}

impl HitConfig {
    pub fn width(&self, mode: HitMode) -> f64 {
        match mode {
            HitMode::Wide => self.wide_width,
            HitMode::Narrow => self.narrow_width,
        }
    }

    pub fn label(&self, mode: HitMode) -> &str {
        match mode {
            HitMode::Wide => &self.wide_label,
            HitMode::Narrow => &self.narrow_label,
        }
    }
}

/// User-controlled state. Written only by the dropdown and toggle handlers;
/// renderer and dispatcher borrow it per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    selected: String,
    mode: HitMode,
}

impl SelectionState {
    /// First series selected, in `mode`.
    pub fn initial(dataset: &Dataset, mode: HitMode) -> Self {
        Self { selected: dataset.series_names()[0].clone(), mode }
    }

    pub fn selected(&self) -> &str { &self.selected }
    pub fn mode(&self) -> HitMode { self.mode }

    /// Dropdown change. Names outside the dataset are rejected and leave the state untouched.
    pub fn select(&mut self, dataset: &Dataset, name: &str) -> Result<(), ChartError> {
        if dataset.series_index(name).is_none() {
            return Err(ChartError::UnknownSeries(name.to_string()));
        }
        self.selected = name.to_string();
        Ok(())
    }

    /// Toggle click. Returns the new mode.
    pub fn toggle_hit_width(&mut self) -> HitMode {
        self.mode = self.mode.toggled();
        info!(mode = ?self.mode, "hit width toggled");
        self.mode
    }

    pub fn hit_width(&self, cfg: &HitConfig) -> f64 { cfg.width(self.mode) }

    pub fn toggle_label<'c>(&self, cfg: &'c HitConfig) -> &'c str { cfg.label(self.mode) }
}
