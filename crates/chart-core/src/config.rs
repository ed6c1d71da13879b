// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (canvas, axes, hit-testing, tooltip, loading), loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::AxisConfig;
use crate::error::ConfigError;
use crate::loader::LoadOptions;
use crate::state::HitConfig;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Theme preset name; unknown names fall back to light.
    pub theme: String,
    pub marker_radius: f64,
    pub font_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "light".to_string(),
            marker_radius: 6.0,
            font_size: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Offset of the point tooltip from its marker, in pixels.
    pub point_offset: (f64, f64),
    /// Offset of the series-name tooltip from the pointer, in pixels.
    pub name_offset: (f64, f64),
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { point_offset: (-40.0, 30.0), name_offset: (20.0, 20.0) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub render: RenderOptions,
    pub axis: AxisConfig,
    pub hit: HitConfig,
    pub tooltip: TooltipConfig,
    pub load: LoadOptions,
}

impl ChartConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ChartConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.axis.validate()
    }
}
