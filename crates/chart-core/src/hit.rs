// File: crates/chart-core/src/hit.rs
// Summary: Geometric hit-testing of the invisible path layers and over/move/out synthesis.

use crate::geometry::Point;
use crate::interaction::{EventKind, Layer, PointerEvent};
use crate::scene::{PathRole, Scene};

/// Layers from top to bottom.
const STACK: [Layer; 2] = [Layer::Hover, Layer::Tracking];

/// Topmost series path of `layer` whose stroke covers `p`.
pub fn hit_test<'s>(scene: &'s Scene, layer: Layer, p: Point) -> Option<&'s str> {
    let role = match layer {
        Layer::Tracking => PathRole::HitArea,
        Layer::Hover => PathRole::HoverArea,
    };
    scene
        .series_paths(role)
        .rev()
        .find(|path| path.covers(p))
        .map(|path| path.series.as_str())
}

/// Remembers which series each layer is currently over, so raw pointer
/// positions become the over / move / out sequence a DOM would deliver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerTracker {
    tracking: Option<String>,
    hover: Option<String>,
}

impl PointerTracker {
    pub fn current(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Tracking => self.tracking.as_deref(),
            Layer::Hover => self.hover.as_deref(),
        }
    }

    /// Events for one pointer sample. The hover layer is stacked above the
    /// tracking layer and is reported first.
    pub fn sample(&mut self, scene: &Scene, local: Point, page: Point) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        for layer in STACK {
            let hit = hit_test(scene, layer, local).map(str::to_string);
            self.step(layer, hit, local, page, &mut out);
        }
        out
    }

    /// Events for the pointer leaving the chart entirely.
    pub fn leave(&mut self, local: Point, page: Point) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        for layer in STACK {
            self.step(layer, None, local, page, &mut out);
        }
        out
    }

    fn step(&mut self, layer: Layer, hit: Option<String>, local: Point, page: Point, out: &mut Vec<PointerEvent>) {
        let slot = match layer {
            Layer::Tracking => &mut self.tracking,
            Layer::Hover => &mut self.hover,
        };
        let event = |kind, series: &str| PointerEvent { kind, layer, series: series.to_string(), local, page };
        match (slot.as_deref(), hit.as_deref()) {
            (Some(prev), Some(now)) if prev == now => out.push(event(EventKind::Move, now)),
            (prev, now) => {
                if let Some(prev) = prev {
                    out.push(event(EventKind::Out, prev));
                }
                if let Some(now) = now {
                    out.push(event(EventKind::Over, now));
                }
            }
        }
        *slot = hit;
    }
}
