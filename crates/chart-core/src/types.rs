// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins).

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels, margins included.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels, margins included.
pub const HEIGHT: u32 = 400;

/// Margins between the canvas edge and the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot width left over inside a canvas of `width` pixels (never below 1).
    pub fn plot_width(&self, width: u32) -> f64 {
        (width.saturating_sub(self.hsum()) as f64).max(1.0)
    }

    /// Plot height left over inside a canvas of `height` pixels (never below 1).
    pub fn plot_height(&self, height: u32) -> f64 {
        (height.saturating_sub(self.vsum()) as f64).max(1.0)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 20, 20, 30)
    }
}
