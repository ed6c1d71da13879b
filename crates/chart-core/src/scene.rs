// File: crates/chart-core/src/scene.rs
// Summary: View renderer: turns (chart, selection, view) into an ordered list of drawing nodes.
// Notes:
// - Node order is z-order. The selected path, the hit-test layers and the marker
//   come after every plain line, so they always stay on top.
// - Coordinates are plot-local pixels; `Scene::insets` gives the plot origin on the canvas.

use crate::axis::Axis;
use crate::chart::Chart;
use crate::geometry::{within_stroke, Point};
use crate::state::SelectionState;
use crate::theme::Rgba;
use crate::types::Insets;
use crate::view::ViewState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathRole {
    /// Every series, unhighlighted.
    Line,
    /// The selected series, drawn above all lines.
    Selected,
    /// Invisible stroke of the hit width; pointer moves over it track the selected series.
    HitArea,
    /// Invisible narrow stroke; hovering it names a non-selected series.
    HoverArea,
}

impl PathRole {
    pub fn class(self) -> &'static str {
        match self {
            PathRole::Line => "line",
            PathRole::Selected => "selected highlight",
            PathRole::HitArea => "hit-area",
            PathRole::HoverArea => "interaction-area",
        }
    }

    pub fn is_invisible(self) -> bool {
        matches!(self, PathRole::HitArea | PathRole::HoverArea)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    pub opacity: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width, opacity: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub role: PathRole,
    pub series: String,
    /// One polyline per run of defined values; NaN gaps separate them.
    pub subpaths: Vec<Vec<Point>>,
    pub stroke: Stroke,
    /// Set on the plain line of the hovered series.
    pub temporary_highlight: bool,
}

impl SeriesPath {
    pub fn class(&self) -> String {
        if self.temporary_highlight {
            format!("{} temporary-highlight", self.role.class())
        } else {
            self.role.class().to_string()
        }
    }

    /// Whether the stroke covers `p`. Zero-width strokes cover nothing; nothing
    /// is covered past the first and last point of a subpath.
    pub fn covers(&self, p: Point) -> bool {
        let half = self.stroke.width * 0.5;
        half > 0.0 && self.subpaths.iter().any(|sp| within_stroke(p, sp, half))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Line { from: Point, to: Point, stroke: Stroke, class: &'static str },
    /// `dy_em` shifts the text vertically by a fraction of the font size.
    Text { at: Point, text: String, anchor: Anchor, dy_em: f64, size: f64, fill: Rgba, class: &'static str },
    Path(SeriesPath),
    Circle { center: Point, radius: f64, fill: Rgba, class: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub background: Rgba,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn series_paths(&self, role: PathRole) -> impl DoubleEndedIterator<Item = &SeriesPath> + '_ {
        self.nodes.iter().filter_map(move |n| match n {
            Node::Path(p) if p.role == role => Some(p),
            _ => None,
        })
    }

    /// Marker center, when shown.
    pub fn marker(&self) -> Option<Point> {
        self.nodes.iter().find_map(|n| match n {
            Node::Circle { center, class: "marker", .. } => Some(*center),
            _ => None,
        })
    }
}

pub fn build(chart: &Chart, state: &SelectionState, view: &ViewState) -> Scene {
    let theme = chart.theme();
    let opts = &chart.config().render;
    let mut nodes = Vec::new();

    push_time_axis(&mut nodes, chart, chart.x_axis());
    push_value_axis(&mut nodes, chart, chart.y_axis());

    let geometry: Vec<(&str, Vec<Vec<Point>>)> = chart
        .dataset()
        .iter_series()
        .map(|s| (s.name(), chart.series_subpaths(&s)))
        .collect();
    let path = |role, name: &str, subpaths: &Vec<Vec<Point>>, stroke| {
        Node::Path(SeriesPath {
            role,
            series: name.to_string(),
            subpaths: subpaths.clone(),
            stroke,
            temporary_highlight: false,
        })
    };

    // Plain lines; the hovered one is raised above its siblings.
    let hovered = view.hovered.as_deref();
    let line = Stroke::new(theme.line_stroke, theme.line_width);
    for (name, sub) in geometry.iter().filter(|(n, _)| Some(*n) != hovered) {
        nodes.push(path(PathRole::Line, name, sub, line));
    }
    if let Some((name, sub)) = geometry.iter().find(|(n, _)| Some(*n) == hovered) {
        let stroke = Stroke::new(theme.temporary_highlight, theme.line_width);
        if let Node::Path(mut p) = path(PathRole::Line, name, sub, stroke) {
            p.temporary_highlight = true;
            nodes.push(Node::Path(p));
        }
    }

    if let Some((name, sub)) = geometry.iter().find(|(n, _)| *n == state.selected()) {
        let stroke = Stroke::new(theme.highlight_stroke, theme.highlight_width);
        nodes.push(path(PathRole::Selected, name, sub, stroke));
    }

    let hit = Stroke::new(Rgba::TRANSPARENT, state.hit_width(&chart.config().hit));
    for (name, sub) in &geometry {
        nodes.push(path(PathRole::HitArea, name, sub, hit));
    }
    let hover = Stroke::new(Rgba::TRANSPARENT, chart.config().hit.hover_width);
    for (name, sub) in &geometry {
        nodes.push(path(PathRole::HoverArea, name, sub, hover));
    }

    if let Some(m) = view.marker {
        nodes.push(Node::Circle { center: m.center, radius: opts.marker_radius, fill: theme.marker, class: "marker" });
    }

    Scene {
        width: opts.width,
        height: opts.height,
        insets: opts.insets,
        background: theme.background,
        nodes,
    }
}

fn push_time_axis(nodes: &mut Vec<Node>, chart: &Chart, axis: &Axis) {
    let theme = chart.theme();
    let size = chart.config().render.font_size;
    let (w, h) = (chart.plot_width(), chart.plot_height());
    let stroke = Stroke::new(theme.axis_line, 1.0);
    nodes.push(Node::Line { from: Point::new(0.0, h), to: Point::new(w, h), stroke, class: "domain" });
    for tick in &axis.ticks {
        if tick.show_line {
            nodes.push(Node::Line {
                from: Point::new(tick.px, h),
                to: Point::new(tick.px, h + 6.0),
                stroke,
                class: "tick",
            });
        }
        nodes.push(Node::Text {
            at: Point::new(tick.px, h + 9.0),
            text: tick.label.clone(),
            anchor: Anchor::Middle,
            dy_em: 0.71,
            size,
            fill: theme.axis_label,
            class: "tick",
        });
    }
}

fn push_value_axis(nodes: &mut Vec<Node>, chart: &Chart, axis: &Axis) {
    let theme = chart.theme();
    let size = chart.config().render.font_size;
    let w = chart.plot_width();
    for tick in &axis.ticks {
        let (stroke, class) = if tick.emphasized {
            (Stroke::new(theme.baseline, theme.baseline_width), "tick baseline")
        } else {
            (Stroke { opacity: theme.grid_opacity, ..Stroke::new(theme.grid, 1.0) }, "tick")
        };
        nodes.push(Node::Line { from: Point::new(0.0, tick.px), to: Point::new(w, tick.px), stroke, class });
        nodes.push(Node::Text {
            at: Point::new(-5.0, tick.px),
            text: tick.label.clone(),
            anchor: Anchor::End,
            dy_em: 0.32,
            size,
            fill: theme.axis_label,
            class: "tick",
        });
    }
    if !axis.label.is_empty() {
        nodes.push(Node::Text {
            at: Point::new(0.0, 10.0),
            text: axis.label.clone(),
            anchor: Anchor::Start,
            dy_em: 0.0,
            size,
            fill: theme.axis_label,
            class: "caption",
        });
    }
}
