// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: dataset + scales + axes, with SVG/HTML render entry points.

use std::path::Path;

use tracing::debug;

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::geometry::Point;
use crate::interaction::{Dispatcher, HostFrame};
use crate::loader::load_path;
use crate::scale::{TimeScale, ValueScale};
use crate::scene::{self, Scene};
use crate::series::{Dataset, Series};
use crate::state::SelectionState;
use crate::svg;
use crate::theme::{self, Theme};
use crate::view::ViewState;

/// A loaded dataset with its scales and axes laid out for one canvas size.
#[derive(Clone, Debug)]
pub struct Chart {
    dataset: Dataset,
    config: ChartConfig,
    theme: Theme,
    time_scale: TimeScale,
    value_scale: ValueScale,
    x_axis: Axis,
    y_axis: Axis,
}

impl Chart {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let insets = config.render.insets;
        let plot_w = insets.plot_width(config.render.width);
        let plot_h = insets.plot_height(config.render.height);

        let (t_min, t_max) = dataset.time_extent();
        let time_scale = TimeScale::new(0.0, plot_w, t_min, t_max);
        let value_scale = ValueScale::new_linear(0.0, plot_h, config.axis.value_min, config.axis.value_max);

        let first_year = dataset.first().date.year;
        let last_year = dataset.last().date.year;
        let x_axis = Axis::time(&time_scale, first_year, last_year, &config.axis);
        let y_axis = Axis::value(&value_scale, &config.axis);
        debug!(
            first_year,
            last_year,
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "chart laid out"
        );

        Ok(Self {
            theme: theme::find(&config.render.theme),
            dataset,
            config,
            time_scale,
            value_scale,
            x_axis,
            y_axis,
        })
    }

    /// Load a CSV with the config's loader options and lay it out.
    pub fn from_csv_path(path: impl AsRef<Path>, config: ChartConfig) -> Result<Self, ChartError> {
        let dataset = load_path(path, &config.load)?;
        Self::new(dataset, config)
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn time_scale(&self) -> &TimeScale { &self.time_scale }
    pub fn value_scale(&self) -> &ValueScale { &self.value_scale }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    pub fn plot_width(&self) -> f64 { self.time_scale.right_px - self.time_scale.left_px }
    pub fn plot_height(&self) -> f64 { self.value_scale.bottom_px - self.value_scale.top_px }

    /// First series selected, in the configured initial hit mode.
    pub fn initial_state(&self) -> SelectionState {
        SelectionState::initial(&self.dataset, self.config.hit.initial_mode)
    }

    /// Plot-local position of record `i` on `series`; `None` when the value is missing.
    pub fn point_px(&self, series: &Series<'_>, i: usize) -> Option<Point> {
        let v = series.value_at(i);
        let r = self.dataset.records().get(i)?;
        (!v.is_nan()).then(|| Point::new(self.time_scale.to_px(r.t), self.value_scale.to_px(v)))
    }

    /// Polylines of `series` in plot pixels, split at missing values.
    pub fn series_subpaths(&self, series: &Series<'_>) -> Vec<Vec<Point>> {
        series
            .segments()
            .into_iter()
            .map(|seg| {
                seg.into_iter()
                    .map(|(t, v)| Point::new(self.time_scale.to_px(t), self.value_scale.to_px(v)))
                    .collect()
            })
            .collect()
    }

    pub fn render(&self, state: &SelectionState, view: &ViewState) -> Scene {
        scene::build(self, state, view)
    }

    pub fn render_to_svg_string(&self, state: &SelectionState, view: &ViewState) -> String {
        svg::svg_document(&self.render(state, view))
    }

    /// Write a standalone SVG document to `path`.
    pub fn render_to_svg(
        &self,
        state: &SelectionState,
        view: &ViewState,
        path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        write_file(path.as_ref(), &self.render_to_svg_string(state, view))
    }

    /// Write an HTML page with the select, toggle button, chart and tooltip elements.
    pub fn render_to_html(
        &self,
        state: &SelectionState,
        view: &ViewState,
        path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let scene = self.render(state, view);
        write_file(path.as_ref(), &svg::html_page(self, state, view, &scene))
    }

    pub fn dispatcher(&self, frame: HostFrame) -> Dispatcher<'_> {
        Dispatcher::new(self, frame)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ChartError> {
    let wrap = |source| ChartError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
