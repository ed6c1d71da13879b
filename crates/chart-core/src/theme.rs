// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub fn is_transparent(&self) -> bool { self.a == 0 }
}

/// CSS color syntax: `#rrggbb` when opaque, `rgba(...)` otherwise.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else if self.a == 0 {
            f.write_str("transparent")
        } else {
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub grid: Rgba,
    pub grid_opacity: f64,
    pub baseline: Rgba,
    pub baseline_width: f64,
    pub line_stroke: Rgba,
    pub line_width: f64,
    pub temporary_highlight: Rgba,
    pub highlight_stroke: Rgba,
    pub highlight_width: f64,
    pub marker: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            grid: Rgba::rgb(211, 211, 211),   // lightgray
            grid_opacity: 0.5,
            baseline: Rgba::rgb(169, 169, 169), // darkgray
            baseline_width: 1.5,
            line_stroke: Rgba::rgb(200, 200, 200),
            line_width: 1.5,
            temporary_highlight: Rgba::rgb(90, 90, 90),
            highlight_stroke: Rgba::rgb(214, 39, 40),
            highlight_width: 2.5,
            marker: Rgba::rgb(214, 39, 40),
            tooltip_background: Rgba::rgba(255, 255, 255, 230),
            tooltip_text: Rgba::rgb(20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            grid: Rgba::rgb(70, 70, 78),
            grid_opacity: 0.5,
            baseline: Rgba::rgb(150, 150, 160),
            baseline_width: 1.5,
            line_stroke: Rgba::rgb(85, 85, 95),
            line_width: 1.5,
            temporary_highlight: Rgba::rgb(200, 200, 210),
            highlight_stroke: Rgba::rgb(64, 160, 255),
            highlight_width: 2.5,
            marker: Rgba::rgb(255, 230, 70),
            tooltip_background: Rgba::rgba(30, 30, 36, 230),
            tooltip_text: Rgba::rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
