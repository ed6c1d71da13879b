// File: crates/chart-core/src/interaction.rs
// Summary: Pointer dispatch: nearest-record lookup and the (event, state, view) -> view transition.

use tracing::trace;

use crate::axis::format_value;
use crate::chart::Chart;
use crate::geometry::Point;
use crate::hit::PointerTracker;
use crate::series::Record;
use crate::state::SelectionState;
use crate::view::{Marker, Tooltip, TooltipKind, ViewState};

/// Index of the record nearest to time `t`.
///
/// Binary search for the left insertion point, then compare the two neighbours;
/// an exact tie picks the earlier record. Times outside the data clamp to the
/// first or last record. `None` for an empty slice or a NaN time.
pub fn nearest_index(records: &[Record], t: f64) -> Option<usize> {
    if records.is_empty() || t.is_nan() {
        return None;
    }
    let i = records.partition_point(|r| r.t < t);
    if i == 0 {
        return Some(0);
    }
    if i >= records.len() {
        return Some(records.len() - 1);
    }
    let before = t - records[i - 1].t;
    let after = records[i].t - t;
    Some(if before > after { i } else { i - 1 })
}

/// Which invisible path layer an event was delivered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Hit-width strokes: moves track the selected series.
    Tracking,
    /// Narrow strokes: hovering names the series under the pointer.
    Hover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Over,
    Move,
    Out,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub layer: Layer,
    /// Series whose path received the event.
    pub series: String,
    /// Pointer in plot-local pixels.
    pub local: Point,
    /// Pointer in host page coordinates.
    pub page: Point,
}

/// Where the chart canvas sits in host coordinates (bounding-box origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostFrame {
    pub origin: Point,
}

impl HostFrame {
    pub fn at(x: f64, y: f64) -> Self {
        Self { origin: Point::new(x, y) }
    }
}

fn hover_owns_pointer(state: &SelectionState, view: &ViewState) -> bool {
    view.hovered.as_deref().is_some_and(|h| h != state.selected())
}

/// Maps pointer events to new view states. Holds no selection state of its
/// own: every call takes the current one.
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'a> {
    chart: &'a Chart,
    frame: HostFrame,
}

impl<'a> Dispatcher<'a> {
    pub fn new(chart: &'a Chart, frame: HostFrame) -> Self {
        Self { chart, frame }
    }

    /// Hover targets sit above the hit areas: while a non-selected series is
    /// hovered, tracking events are swallowed.
    pub fn dispatch(&self, state: &SelectionState, view: &ViewState, ev: &PointerEvent) -> ViewState {
        trace!(kind = ?ev.kind, layer = ?ev.layer, series = %ev.series, "pointer event");
        if ev.layer == Layer::Tracking && hover_owns_pointer(state, view) {
            return view.clone();
        }
        match (ev.layer, ev.kind) {
            (Layer::Tracking, EventKind::Over | EventKind::Move) => self.track(state, view, ev.local.x),
            (Layer::Tracking, EventKind::Out) => view.hide_pointer(),
            (Layer::Hover, EventKind::Over) => self.hover_over(state, view, ev),
            (Layer::Hover, EventKind::Out) => self.hover_out(state, view, ev),
            (Layer::Hover, EventKind::Move) => view.clone(),
        }
    }

    /// Marker and tooltip for the record nearest to plot x `local_x`.
    pub fn track(&self, state: &SelectionState, view: &ViewState, local_x: f64) -> ViewState {
        let t = self.chart.time_scale().from_px(local_x);
        match nearest_index(self.chart.dataset().records(), t) {
            Some(i) => self.show_record(state, view, i),
            None => view.hide_pointer(),
        }
    }

    /// Marker and tooltip for record `i` of the selected series; hidden when
    /// that value is missing.
    pub fn show_record(&self, state: &SelectionState, view: &ViewState, i: usize) -> ViewState {
        let dataset = self.chart.dataset();
        let (Some(series), Some(record)) = (dataset.series(state.selected()), dataset.records().get(i)) else {
            return view.hide_pointer();
        };
        let Some(center) = self.chart.point_px(&series, i) else {
            return view.hide_pointer();
        };

        let insets = self.chart.config().render.insets;
        let (dx, dy) = self.chart.config().tooltip.point_offset;
        let tooltip = Tooltip {
            kind: TooltipKind::Point,
            lines: vec![
                series.name().to_string(),
                record.label.clone(),
                format_value(series.value_at(i)),
            ],
            left: self.frame.origin.x + insets.left as f64 + center.x + dx,
            top: self.frame.origin.y + insets.top as f64 + center.y + dy,
        };
        ViewState {
            marker: Some(Marker { record: i, center }),
            tooltip: Some(tooltip),
            hovered: view.hovered.clone(),
        }
    }

    fn hover_over(&self, state: &SelectionState, view: &ViewState, ev: &PointerEvent) -> ViewState {
        if ev.series == state.selected() {
            return view.clone();
        }
        let (dx, dy) = self.chart.config().tooltip.name_offset;
        ViewState {
            marker: None,
            tooltip: Some(Tooltip {
                kind: TooltipKind::SeriesName,
                lines: vec![ev.series.clone()],
                left: ev.page.x + dx,
                top: ev.page.y + dy,
            }),
            hovered: Some(ev.series.clone()),
        }
    }

    fn hover_out(&self, state: &SelectionState, view: &ViewState, ev: &PointerEvent) -> ViewState {
        if ev.series == state.selected() {
            return view.clone();
        }
        let hovered = view.hovered.clone().filter(|h| *h != ev.series);
        ViewState { marker: view.marker, tooltip: None, hovered }
    }

    /// Feed one raw pointer sample through hit-testing and dispatch the
    /// resulting events in order.
    pub fn pointer_move(
        &self,
        state: &SelectionState,
        view: &ViewState,
        tracker: &mut PointerTracker,
        local: Point,
        page: Point,
    ) -> ViewState {
        let scene = self.chart.render(state, view);
        tracker
            .sample(&scene, local, page)
            .iter()
            .fold(view.clone(), |v, ev| self.dispatch(state, &v, ev))
    }

    /// The pointer left the chart: close every open target.
    pub fn pointer_leave(
        &self,
        state: &SelectionState,
        view: &ViewState,
        tracker: &mut PointerTracker,
        local: Point,
        page: Point,
    ) -> ViewState {
        tracker
            .leave(local, page)
            .iter()
            .fold(view.clone(), |v, ev| self.dispatch(state, &v, ev))
    }
}
