// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end smoke test: load the fixture, interact, write SVG and HTML files.

use cpi_chart_core::{Chart, ChartConfig, HostFrame, ViewState};

#[test]
fn render_smoke_files() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/indices.csv");
    let chart = Chart::from_csv_path(path, ChartConfig::default()).expect("chart from fixture");
    assert_eq!(chart.dataset().len(), 74);
    assert_eq!(chart.dataset().series_names().len(), 4);

    let mut state = chart.initial_state();
    state.select(chart.dataset(), "食料").expect("select");
    let idx = chart.dataset().find_label("2010年1月").expect("2010 row");
    let view = chart.dispatcher(HostFrame::default()).show_record(&state, &ViewState::default(), idx);
    assert!(view.is_tooltip_visible());

    let out = std::path::PathBuf::from("target/test_out");
    let svg_path = out.join("smoke.svg");
    let html_path = out.join("smoke.html");
    chart.render_to_svg(&state, &view, &svg_path).expect("write svg");
    chart.render_to_html(&state, &view, &html_path).expect("write html");

    let svg = std::fs::read_to_string(&svg_path).expect("svg exists");
    assert!(svg.contains("class=\"marker\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    let html = std::fs::read_to_string(&html_path).expect("html exists");
    assert!(html.contains("食料<br>2010年1月<br>"));
    assert!(html.contains("id=\"tooltip\""));
}
