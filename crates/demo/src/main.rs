// File: crates/demo/src/main.rs
// Summary: Loads a CPI CSV, replays selection/toggle/pointer input and writes the resulting chart as SVG, HTML and PNG.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use cpi_chart_core::{Chart, ChartConfig, HostFrame, Point, PointerTracker, SelectionState, ViewState};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Render the consumer price index chart and replay pointer input")]
struct Cli {
    /// CSV input: a `year` column plus one column per series
    #[arg(default_value = "data/indices.csv", value_hint = ValueHint::FilePath)]
    input: String,

    /// TOML chart configuration
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Series to select (defaults to the first column)
    #[arg(short, long)]
    select: Option<String>,

    /// Start in narrow hit mode (same as clicking the toggle once)
    #[arg(long, action = ArgAction::SetTrue)]
    narrow: bool,

    /// Theme preset, overriding the config
    #[arg(long)]
    theme: Option<String>,

    /// Show the marker and tooltip at the record with this date label
    #[arg(long, conflicts_with = "pointer")]
    hover: Option<String>,

    /// Pointer sample in canvas pixels as `X,Y`; repeat to replay a path
    #[arg(long, value_parser = parse_point)]
    pointer: Vec<Point>,

    /// Move the pointer off the chart after the last sample
    #[arg(long, action = ArgAction::SetTrue)]
    leave: bool,

    /// Output directory
    #[arg(short, long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let (path, used_alt) = resolve_path(&cli.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        warn!("extension swapped between .csv/.cvs");
    }

    let mut config = match &cli.config {
        Some(p) => ChartConfig::load(p).with_context(|| format!("loading config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = &cli.theme {
        config.render.theme = theme.clone();
    }

    let chart = Chart::from_csv_path(&path, config)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} records, series: {}",
        chart.dataset().len(),
        chart.dataset().series_names().join(", ")
    );

    let mut state = chart.initial_state();
    if let Some(name) = &cli.select {
        state.select(chart.dataset(), name).context("--select")?;
    }
    if cli.narrow {
        state.toggle_hit_width();
    }
    println!("Selected: {} ({})", state.selected(), state.toggle_label(&chart.config().hit));

    let view = replay(&chart, &state, &cli)?;
    report(&view);

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out_svg = cli.out_dir.join(format!("{stem}.svg"));
    chart.render_to_svg(&state, &view, &out_svg)?;
    println!("Wrote {}", out_svg.display());
    let out_html = cli.out_dir.join(format!("{stem}.html"));
    chart.render_to_html(&state, &view, &out_html)?;
    println!("Wrote {}", out_html.display());

    #[cfg(feature = "png")]
    {
        let out_png = cli.out_dir.join(format!("{stem}.png"));
        chart.render_to_png(&state, &view, &out_png)?;
        println!("Wrote {}", out_png.display());
    }

    Ok(())
}

/// Apply `--hover` or the `--pointer` sequence to an empty view.
fn replay(chart: &Chart, state: &SelectionState, cli: &Cli) -> Result<ViewState> {
    let dispatcher = chart.dispatcher(HostFrame::default());
    let mut view = ViewState::default();

    if let Some(label) = &cli.hover {
        let i = chart
            .dataset()
            .find_label(label)
            .ok_or_else(|| anyhow!("no record labelled '{label}'"))?;
        view = dispatcher.show_record(state, &view, i);
    }

    let insets = chart.config().render.insets;
    let origin = Point::new(insets.left as f64, insets.top as f64);
    let mut tracker = PointerTracker::default();
    let mut last = Point::new(0.0, 0.0);
    for &page in &cli.pointer {
        last = page;
        view = dispatcher.pointer_move(state, &view, &mut tracker, page - origin, page);
    }
    if cli.leave {
        view = dispatcher.pointer_leave(state, &view, &mut tracker, last - origin, last);
    }
    Ok(view)
}

fn report(view: &ViewState) {
    match &view.marker {
        Some(m) => println!("Marker: record {} at ({:.1}, {:.1})", m.record, m.center.x, m.center.y),
        None => println!("Marker: hidden"),
    }
    match &view.tooltip {
        Some(t) => println!("Tooltip: {} at ({:.1}, {:.1})", t.lines.join(" / "), t.left, t.top),
        None => println!("Tooltip: hidden"),
    }
    if let Some(h) = &view.hovered {
        println!("Highlighted: {h}");
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let num = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}"));
    Ok(Point::new(num(x)?, num(y)?))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_pairs() {
        assert_eq!(parse_point("120, 45.5"), Ok(Point::new(120.0, 45.5)));
        assert!(parse_point("120").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn swaps_csv_extension() {
        assert_eq!(swap_ext(Path::new("x.cvs")), Some(PathBuf::from("x.csv")));
        assert_eq!(swap_ext(Path::new("x.CSV")), Some(PathBuf::from("x.cvs")));
        assert_eq!(swap_ext(Path::new("x.txt")), None);
    }
}
