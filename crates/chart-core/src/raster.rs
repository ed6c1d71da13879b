// File: crates/chart-core/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::chart::Chart;
use crate::scene::{Node, Scene, Stroke};
use crate::state::SelectionState;
use crate::text::TextShaper;
use crate::theme::{Rgba, Theme};
use crate::view::ViewState;

impl Rgba {
    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

impl Chart {
    /// Rasterize the current scene; the tooltip is drawn onto the canvas as well,
    /// treating the canvas origin as the host frame origin.
    pub fn render_to_png_bytes(&self, state: &SelectionState, view: &ViewState) -> Result<Vec<u8>> {
        let scene = self.render(state, view);
        rasterize(&scene, view, self.theme())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        state: &SelectionState,
        view: &ViewState,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(state, view)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(s.color.to_skia());
    paint.set_alpha_f(s.opacity as f32 * (s.color.a as f32 / 255.0));
    paint
}

pub fn rasterize(scene: &Scene, view: &ViewState, theme: &Theme) -> Result<Vec<u8>> {
    let size = (scene.width as i32, scene.height as i32);
    let mut surface = skia::surfaces::raster_n32_premul(size)
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    let canvas = surface.canvas();
    canvas.clear(scene.background.to_skia());

    canvas.save();
    canvas.translate((scene.insets.left as f32, scene.insets.top as f32));
    for node in &scene.nodes {
        match node {
            Node::Line { from, to, stroke, .. } => {
                canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke_paint(stroke));
            }
            Node::Text { at, text, anchor, dy_em, size, fill, .. } => {
                let y = at.y + dy_em * size;
                shaper.draw(canvas, text, at.x as f32, y as f32, *size as f32, fill.to_skia(), *anchor);
            }
            Node::Path(p) => {
                if p.role.is_invisible() || p.stroke.color.is_transparent() {
                    continue;
                }
                let mut path = skia::Path::new();
                for sub in &p.subpaths {
                    for (i, pt) in sub.iter().enumerate() {
                        let xy = (pt.x as f32, pt.y as f32);
                        if i == 0 { path.move_to(xy); } else { path.line_to(xy); }
                    }
                }
                canvas.draw_path(&path, &stroke_paint(&p.stroke));
            }
            Node::Circle { center, radius, fill, .. } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(fill.to_skia());
                canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &paint);
            }
        }
    }
    canvas.restore();

    if let Some(tip) = &view.tooltip {
        let font = 12.0f32;
        let line_h = font * 1.3;
        let width = tip.lines.iter().map(|l| shaper.measure_width(l, font)).fold(0.0f32, f32::max);
        let rect = skia::Rect::from_xywh(
            tip.left as f32,
            tip.top as f32,
            width + 12.0,
            line_h * tip.lines.len() as f32 + 8.0,
        );
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.tooltip_background.to_skia());
        canvas.draw_round_rect(rect, 4.0, 4.0, &bg);
        for (i, line) in tip.lines.iter().enumerate() {
            let y = rect.top + 4.0 + line_h * (i as f32 + 1.0) - (line_h - font);
            shaper.draw(canvas, line, rect.left + 6.0, y, font, theme.tooltip_text.to_skia(), crate::scene::Anchor::Start);
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}
