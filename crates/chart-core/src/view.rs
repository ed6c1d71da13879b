// File: crates/chart-core/src/view.rs
// Summary: Ephemeral view state: hover marker, tooltip, and the temporarily highlighted series.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::svg::escape;

/// Circular marker on the selected series, in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Index of the record under the marker.
    pub record: usize,
    pub center: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipKind {
    /// Series name, date label and value of the tracked point.
    Point,
    /// Just the name of a hovered, non-selected series.
    SeriesName,
}

/// Tooltip content and its position in host (screen) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub kind: TooltipKind,
    pub lines: Vec<String>,
    pub left: f64,
    pub top: f64,
}

/// Recomputed on every pointer event; never persisted. The default value
/// shows nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub marker: Option<Marker>,
    pub tooltip: Option<Tooltip>,
    pub hovered: Option<String>,
}

impl ViewState {
    pub fn is_tooltip_visible(&self) -> bool { self.tooltip.is_some() }

    /// Copy of this state with marker and tooltip hidden.
    pub fn hide_pointer(&self) -> Self {
        Self { marker: None, tooltip: None, hovered: self.hovered.clone() }
    }

    /// Tooltip inner HTML: escaped lines separated by `<br>`.
    pub fn tooltip_html(&self) -> String {
        match &self.tooltip {
            Some(t) => t.lines.iter().map(|l| escape(l)).collect::<Vec<_>>().join("<br>"),
            None => String::new(),
        }
    }

    /// Inline style for the tooltip element.
    pub fn tooltip_style(&self) -> String {
        let mut s = String::new();
        match &self.tooltip {
            Some(t) => {
                let _ = write!(s, "opacity:1;left:{}px;top:{}px", t.left, t.top);
            }
            None => s.push_str("opacity:0"),
        }
        s
    }
}
