// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the scenario chart with a tracked point to an SVG document.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the text exactly.
// - Else, logs a note and returns (skips) without failing to ease first run.

use cpi_chart_core::{load_str, Chart, ChartConfig, HostFrame, LoadOptions, ViewState};

fn render_svg() -> String {
    let csv = "year,A,B\n1950年1月,100,50\n1955年1月,110,NaN\n1960年1月,120,70\n";
    let ds = load_str(csv, &LoadOptions::default()).expect("load");
    let chart = Chart::new(ds, ChartConfig::default()).expect("chart");
    let state = chart.initial_state();
    let view = chart.dispatcher(HostFrame::default()).track(&state, &ViewState::default(), 365.0);
    chart.render_to_svg_string(&state, &view)
}

#[test]
fn golden_scenario_svg() {
    let svg = render_svg();
    assert!(svg.contains("<circle class=\"marker\" cx=\"365\" cy=\"93.33\""));
    assert!(svg.contains("data-series=\"B\" fill=\"none\" stroke=\"#c8c8c8\" stroke-width=\"1.5\" d=\"M0,233.33M730,186.67\""));
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("scenario.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        // Line endings may be rewritten on checkout.
        assert_eq!(svg, want.replace("\r\n", "\n"), "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
