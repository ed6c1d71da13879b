// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop PriceChart demo.

use anyhow::{Context, Result};
use cpi_chart_core::{Chart, ChartConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "crates/demo/data/indices.csv".to_string());
    let config = match std::env::args().nth(2) {
        Some(p) => ChartConfig::load(&p).with_context(|| format!("loading config '{p}'"))?,
        None => ChartConfig::default(),
    };
    let chart = Chart::from_csv_path(&input, config).with_context(|| format!("failed to load CSV '{input}'"))?;
    tracing::info!(records = chart.dataset().len(), "chart loaded");

    launch(chart)
}

#[cfg(feature = "desktop")]
fn launch(chart: Chart) -> Result<()> {
    cpi_chart_dioxus::ui::run_demo_ui(chart).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(not(feature = "desktop"))]
fn launch(chart: Chart) -> Result<()> {
    if let Err(e) = cpi_chart_dioxus::run_demo_ui(chart) {
        eprintln!("{e}");
    }
    Ok(())
}
