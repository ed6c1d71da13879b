// File: crates/chart-core/tests/ticks.rs
// Purpose: Scales and axis tick policy.

use cpi_chart_core::grid::{nice_ticks, year_ticks};
use cpi_chart_core::scene::Node;
use cpi_chart_core::{load_str, Chart, ChartConfig, FinalTick, LoadOptions};

fn yearly_chart(first: i32, last: i32, cfg: ChartConfig) -> Chart {
    let mut csv = String::from("year,A\n");
    for y in first..=last {
        csv.push_str(&format!("{y}年1月,{}\n", 50 + (y - first)));
    }
    let ds = load_str(&csv, &LoadOptions::default()).expect("load");
    Chart::new(ds, cfg).expect("chart")
}

fn labels(chart: &Chart) -> Vec<String> {
    chart.x_axis().ticks.iter().map(|t| t.label.clone()).collect()
}

#[test]
fn five_year_ticks_plus_final_year() {
    let mut want: Vec<i32> = (1950..=2020).step_by(5).collect();
    want.push(2023);
    assert_eq!(year_ticks(1950, 2023, 5), want);

    let chart = yearly_chart(1950, 2023, ChartConfig::default());
    let got = labels(&chart);
    assert_eq!(got.first().map(String::as_str), Some("1950年"));
    assert_eq!(got.len(), want.len());
    assert_eq!(got[got.len() - 2], "2020年");
    assert_eq!(got[got.len() - 1], "2023年");
}

#[test]
fn final_year_on_the_step_is_not_duplicated() {
    assert_eq!(year_ticks(1950, 1965, 5), vec![1950, 1955, 1960, 1965]);
    assert_eq!(year_ticks(2000, 2000, 5), vec![2000]);
}

#[test]
fn fixed_final_tick_year() {
    let mut cfg = ChartConfig::default();
    cfg.axis.final_tick = FinalTick::Year(2012);
    let chart = yearly_chart(1950, 2023, cfg);
    let got = labels(&chart);
    assert_eq!(got.last().map(String::as_str), Some("2012年"));
    assert_eq!(got[got.len() - 2], "2010年");

    // A fixed year beyond the data falls off the plotted range.
    let mut cfg = ChartConfig::default();
    cfg.axis.final_tick = FinalTick::Year(2030);
    let chart = yearly_chart(1950, 2023, cfg);
    assert_eq!(labels(&chart).last().map(String::as_str), Some("2020年"));
}

#[test]
fn hidden_last_tick_line_keeps_label() {
    let mut cfg = ChartConfig::default();
    cfg.axis.hide_last_tick_line = true;
    let chart = yearly_chart(1950, 2023, cfg);
    let last = chart.x_axis().ticks.last().expect("ticks").clone();
    assert!(!last.show_line);
    assert!(chart.x_axis().ticks[..chart.x_axis().ticks.len() - 1].iter().all(|t| t.show_line));

    let scene = chart.render(&chart.initial_state(), &Default::default());
    let h = chart.plot_height();
    let tick_lines = scene
        .nodes
        .iter()
        .filter(|n| matches!(n, Node::Line { from, to, class: "tick", .. } if from.y == h && to.y == h + 6.0))
        .count();
    assert_eq!(tick_lines, chart.x_axis().ticks.len() - 1);
    assert!(scene.nodes.iter().any(|n| matches!(n, Node::Text { text, .. } if *text == last.label)));
}

#[test]
fn value_ticks_emphasize_baseline() {
    let chart = yearly_chart(1950, 1960, ChartConfig::default());
    let ticks = &chart.y_axis().ticks;
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0]);
    let emphasized: Vec<f64> = ticks.iter().filter(|t| t.emphasized).map(|t| t.value).collect();
    assert_eq!(emphasized, vec![100.0]);
    assert_eq!(ticks[5].label, "100");
    assert_eq!(chart.y_axis().label, "↑ 消費者物価指数（2010年＝100）");
}

#[test]
fn nice_ticks_steps() {
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(nice_ticks(0.0, 150.0, 10).len(), 8);
    assert_eq!(nice_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    assert_eq!(nice_ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(nice_ticks(0.0, f64::NAN, 10).is_empty());
}

#[test]
fn scales_map_domain_to_plot() {
    let chart = yearly_chart(1950, 2023, ChartConfig::default());
    let ts = chart.time_scale();
    let vs = chart.value_scale();
    let ds = chart.dataset();
    assert_eq!(chart.plot_width(), 730.0);
    assert_eq!(chart.plot_height(), 350.0);
    assert_eq!(ts.to_px(ds.first().t), 0.0);
    assert!((ts.to_px(ds.last().t) - 730.0).abs() < 1e-9);
    let mid = ds.records()[30].t;
    assert!((ts.from_px(ts.to_px(mid)) - mid).abs() < 1e-3);
    // Larger values sit higher on screen.
    assert_eq!(vs.to_px(0.0), 350.0);
    assert_eq!(vs.to_px(150.0), 0.0);
    assert!((vs.from_px(vs.to_px(100.0)) - 100.0).abs() < 1e-9);
}

#[test]
fn single_record_sits_mid_plot() {
    let chart = yearly_chart(2000, 2000, ChartConfig::default());
    assert_eq!(chart.time_scale().to_px(chart.dataset().first().t), 365.0);
    assert_eq!(labels(&chart), vec!["2000年".to_string()]);
}
