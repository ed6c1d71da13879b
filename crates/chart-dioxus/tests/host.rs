// File: crates/chart-dioxus/tests/host.rs
// Purpose: Host-side helpers shared by the component: coordinate mapping and tooltip styling.

use cpi_chart_core::{load_str, Chart, ChartConfig, HostFrame, LoadOptions, Point, ViewState};
use cpi_chart_dioxus::{plot_local, tooltip_css};

fn chart() -> Chart {
    let ds = load_str("year,A,B\n1950年1月,100,50\n1955年1月,110,NaN\n", &LoadOptions::default()).expect("load");
    Chart::new(ds, ChartConfig::default()).expect("chart")
}

#[test]
fn canvas_points_shift_by_the_margins() {
    let chart = chart();
    assert_eq!(plot_local(&chart, Point::new(50.0, 20.0)), Point::new(0.0, 0.0));
    assert_eq!(plot_local(&chart, Point::new(780.0, 370.0)), Point::new(730.0, 350.0));
}

#[test]
fn tooltip_css_carries_view_position() {
    let chart = chart();
    let state = chart.initial_state();
    let hidden = tooltip_css(&chart, &ViewState::default().tooltip_style());
    assert!(hidden.ends_with("opacity:0"));

    let view = chart.dispatcher(HostFrame::default()).track(&state, &ViewState::default(), 0.0);
    let shown = tooltip_css(&chart, &view.tooltip_style());
    assert!(shown.contains("position:absolute"));
    assert!(shown.contains("opacity:1;left:10px;"));
}
