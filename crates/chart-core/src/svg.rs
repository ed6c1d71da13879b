// File: crates/chart-core/src/svg.rs
// Summary: SVG and HTML serializers for a rendered scene.
// Notes:
// - `html_page` lays out the host contract: #selectItem, #toggleButton,
//   #retailprices and #tooltip.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::chart::Chart;
use crate::geometry::Point;
use crate::scene::{Anchor, Node, Scene, SeriesPath, Stroke};
use crate::state::SelectionState;
use crate::view::ViewState;

/// Escape text for XML/HTML content and attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Coordinate text rounded to 1/100 px.
pub fn fmt_num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

/// Path data with one `M ... L ...` run per subpath.
pub fn path_data(subpaths: &[Vec<Point>]) -> String {
    let mut d = String::new();
    for sub in subpaths {
        for (i, p) in sub.iter().enumerate() {
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push_str(&fmt_num(p.x));
            d.push(',');
            d.push_str(&fmt_num(p.y));
        }
    }
    d
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut a = format!("stroke=\"{}\" stroke-width=\"{}\"", s.color, fmt_num(s.width));
    if s.opacity < 1.0 {
        let _ = write!(a, " stroke-opacity=\"{}\"", fmt_num(s.opacity));
    }
    a
}

fn write_path(out: &mut String, p: &SeriesPath) {
    let _ = writeln!(
        out,
        "    <path class=\"{}\" data-series=\"{}\" fill=\"none\" {} d=\"{}\"/>",
        p.class(),
        escape(&p.series),
        stroke_attrs(&p.stroke),
        path_data(&p.subpaths),
    );
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Line { from, to, stroke, class } => {
            let _ = writeln!(
                out,
                "    <line class=\"{class}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                stroke_attrs(stroke),
            );
        }
        Node::Text { at, text, anchor, dy_em, size, fill, class } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let _ = writeln!(
                out,
                "    <text class=\"{class}\" x=\"{}\" y=\"{}\" dy=\"{dy_em}em\" text-anchor=\"{anchor}\" font-size=\"{}\" font-family=\"sans-serif\" fill=\"{fill}\">{}</text>",
                fmt_num(at.x),
                fmt_num(at.y),
                fmt_num(*size),
                escape(text),
            );
        }
        Node::Path(p) => write_path(out, p),
        Node::Circle { center, radius, fill, class } => {
            let _ = writeln!(
                out,
                "    <circle class=\"{class}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
            );
        }
    }
}

/// The plot group: every node inside a `<g>` translated to the plot origin.
pub fn svg_body(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  <rect class=\"background\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        scene.width, scene.height, scene.background
    );
    let _ = writeln!(out, "  <g transform=\"translate({},{})\">", scene.insets.left, scene.insets.top);
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    out.push_str("  </g>\n");
    out
}

/// `<svg>` element for embedding, with an optional `id`.
pub fn svg_element(scene: &Scene, id: Option<&str>) -> String {
    let id_attr = id.map(|id| format!(" id=\"{}\"", escape(id))).unwrap_or_default();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\"{id_attr} width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
        svg_body(scene),
        w = scene.width,
        h = scene.height,
    )
}

/// Standalone SVG file contents.
pub fn svg_document(scene: &Scene) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", svg_element(scene, Some("retailprices")))
}

/// Static HTML page carrying the chart, its controls and the tooltip in their current state.
pub fn html_page(chart: &Chart, state: &SelectionState, view: &ViewState, scene: &Scene) -> String {
    let theme = chart.theme();
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>消費者物価指数</title>\n<style>\n");
    let _ = writeln!(out, "body {{ font-family: sans-serif; background: {}; }}", theme.background);
    out.push_str(".chart { position: relative; }\n");
    let _ = writeln!(
        out,
        "#tooltip {{ position: absolute; pointer-events: none; padding: 4px 6px; border-radius: 4px; font-size: 12px; background: {}; color: {}; }}",
        theme.tooltip_background, theme.tooltip_text
    );
    out.push_str("</style>\n</head>\n<body>\n<div class=\"controls\">\n<select id=\"selectItem\">\n");
    for name in chart.dataset().series_names() {
        let selected = if name == state.selected() { " selected" } else { "" };
        let name = escape(name);
        let _ = writeln!(out, "  <option value=\"{name}\"{selected}>{name}</option>");
    }
    out.push_str("</select>\n");
    let _ = writeln!(
        out,
        "<button id=\"toggleButton\">{}</button>\n</div>",
        escape(state.toggle_label(&chart.config().hit))
    );
    out.push_str("<div class=\"chart\">\n");
    out.push_str(&svg_element(scene, Some("retailprices")));
    let _ = writeln!(out, "<div id=\"tooltip\" style=\"{}\">{}</div>", view.tooltip_style(), view.tooltip_html());
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
