// File: crates/chart-core/tests/png.rs
// Purpose: Raster output smoke test (feature `png`).
#![cfg(feature = "png")]

use cpi_chart_core::{Chart, ChartConfig, HostFrame, ViewState};

#[test]
fn render_png_decodes_at_canvas_size() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/indices.csv");
    let chart = Chart::from_csv_path(path, ChartConfig::default()).expect("chart");
    let state = chart.initial_state();
    let view = chart.dispatcher(HostFrame::default()).track(&state, &ViewState::default(), 500.0);

    let bytes = chart.render_to_png_bytes(&state, &view).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (800, 400));

    // Background corner is the light theme's white.
    assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&state, &view, &out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
