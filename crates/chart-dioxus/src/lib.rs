// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop host for the CPI chart: dropdown, hit-mode toggle, live pointer tracking.
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The component owns SelectionState, ViewState and the PointerTracker as signals;
//   every event re-runs the pure renderer with the current state.

use cpi_chart_core::{Chart, Point};

/// Convert a position relative to the chart canvas into plot-local pixels.
pub fn plot_local(chart: &Chart, canvas: Point) -> Point {
    let insets = chart.config().render.insets;
    canvas - Point::new(insets.left as f64, insets.top as f64)
}

/// Inline style for the tooltip element: themed box plus the view's position/opacity.
pub fn tooltip_css(chart: &Chart, view_style: &str) -> String {
    let theme = chart.theme();
    format!(
        "position:absolute; pointer-events:none; padding:4px 6px; border-radius:4px; font-size:12px; background:{}; color:{}; {view_style}",
        theme.tooltip_background, theme.tooltip_text
    )
}

#[cfg(feature = "desktop")]
pub mod ui {
    use std::sync::Arc;

    use cpi_chart_core::svg::svg_element;
    use cpi_chart_core::{Chart, HostFrame, Point, PointerTracker, ViewState};
    use dioxus::prelude::*;
    use tracing::warn;

    /// Select, toggle button, chart and tooltip, wired to the chart in context.
    /// The tooltip lives inside the chart wrapper, so wrapper-relative pointer
    /// coordinates stand in for page coordinates and the host frame sits at the origin.
    #[component]
    pub fn PriceChart() -> Element {
        let chart = use_context::<Arc<Chart>>();
        let mut selection = use_signal({
            let chart = chart.clone();
            move || chart.initial_state()
        });
        let mut view = use_signal(ViewState::default);
        let mut tracker = use_signal(PointerTracker::default);

        let (width, height) = (chart.config().render.width, chart.config().render.height);
        let svg = svg_element(&chart.render(&selection.read(), &view.read()), Some("retailprices"));
        let label = selection.read().toggle_label(&chart.config().hit).to_string();
        let selected = selection.read().selected().to_string();
        let names = chart.dataset().series_names().to_vec();
        let tip_style = super::tooltip_css(&chart, &view.read().tooltip_style());
        let tip_html = view.read().tooltip_html();

        let on_select = {
            let chart = chart.clone();
            move |evt: FormEvent| {
                let name = evt.value();
                if let Err(e) = selection.write().select(chart.dataset(), &name) {
                    warn!(error = %e, "ignoring selection");
                    return;
                }
                view.set(ViewState::default());
                tracker.set(PointerTracker::default());
            }
        };

        let on_toggle = move |_: MouseEvent| {
            selection.write().toggle_hit_width();
        };

        let on_move = {
            let chart = chart.clone();
            move |evt: MouseEvent| {
                let p = evt.element_coordinates();
                let here = Point::new(p.x, p.y);
                let next = chart.dispatcher(HostFrame::default()).pointer_move(
                    &selection.read(),
                    &view.read(),
                    &mut tracker.write(),
                    super::plot_local(&chart, here),
                    here,
                );
                view.set(next);
            }
        };

        let on_leave = {
            let chart = chart.clone();
            move |evt: MouseEvent| {
                let p = evt.element_coordinates();
                let here = Point::new(p.x, p.y);
                let next = chart.dispatcher(HostFrame::default()).pointer_leave(
                    &selection.read(),
                    &view.read(),
                    &mut tracker.write(),
                    super::plot_local(&chart, here),
                    here,
                );
                view.set(next);
            }
        };

        rsx! {
            div { class: "controls", style: "display:flex; gap:8px; margin-bottom:8px;",
                select { id: "selectItem", onchange: on_select,
                    for name in names {
                        option { key: "{name}", value: "{name}", selected: name == selected, "{name}" }
                    }
                }
                button { id: "toggleButton", onclick: on_toggle, "{label}" }
            }
            div { class: "chart", style: "position:relative; width:{width}px; height:{height}px;",
                div { dangerous_inner_html: svg }
                // Transparent overlay receiving pointer events for the whole canvas.
                div {
                    style: "position:absolute; left:0; top:0; width:{width}px; height:{height}px;",
                    onmousemove: on_move,
                    onmouseleave: on_leave,
                }
                div { id: "tooltip", style: "{tip_style}", dangerous_inner_html: tip_html }
            }
        }
    }

    #[component]
    fn App() -> Element {
        rsx! { PriceChart {} }
    }

    /// Open a desktop window showing `chart`.
    pub fn run_demo_ui(chart: Chart) -> Result<(), String> {
        let window = dioxus_desktop::WindowBuilder::new()
            .with_title("消費者物価指数")
            .with_inner_size(dioxus_desktop::LogicalSize::new(
                chart.config().render.width as f64 + 40.0,
                chart.config().render.height as f64 + 120.0,
            ));
        let cfg = dioxus_desktop::Config::new().with_window(window);
        LaunchBuilder::desktop().with_cfg(cfg).with_context(Arc::new(chart)).launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui(_chart: Chart) -> Result<(), &'static str> {
    Err("cpi-chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
