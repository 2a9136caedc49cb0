//! Rendering der Szene über den egui-Painter.

mod shape_painter;
mod types;

pub use crate::shared::{RenderQuality, RenderScene};
pub use types::{color32, ScreenTransform};

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
///
/// Reihenfolge: Szenenhintergrund, Item-Pfade, Selektionsrahmen.
/// Die Render-Qualität der Szene wird vorher auf den Tessellator übertragen.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    apply_render_quality(painter.ctx(), scene.render_quality);

    let transform = ScreenTransform::new(rect, &scene.camera, scene.viewport_size);
    let options = &scene.options;

    let (scene_min, scene_max) = scene.scene_bounds;
    painter.rect_filled(
        transform.rect(scene_min, scene_max),
        0.0,
        color32(options.scene_background_color),
    );

    let shape_color = color32(options.shape_color);
    for item in &scene.items {
        for path in &item.paths {
            shape_painter::paint_path(painter, &transform, path, shape_color);
        }
    }

    let selection_stroke = egui::Stroke::new(
        options.selection_frame_width_px,
        color32(options.selection_color),
    );
    for item in scene.items.iter().filter(|item| item.selected) {
        let (min, max) = item.bounds;
        painter.rect_stroke(
            transform.rect(min, max),
            0.0,
            selection_stroke,
            egui::StrokeKind::Outside,
        );
    }
}

/// Überträgt die Render-Qualität auf das Anti-Aliasing des Tessellators.
///
/// Schreibt die Context-Optionen nur bei einer Änderung.
pub fn apply_render_quality(ctx: &egui::Context, quality: RenderQuality) {
    let (feathering, size) = feathering_for(quality);
    let current = ctx.options(|options| {
        (
            options.tessellation_options.feathering,
            options.tessellation_options.feathering_size_in_pixels,
        )
    });
    if current == (feathering, size) {
        return;
    }
    ctx.options_mut(|options| {
        options.tessellation_options.feathering = feathering;
        options.tessellation_options.feathering_size_in_pixels = size;
    });
}

fn feathering_for(quality: RenderQuality) -> (bool, f32) {
    match quality {
        RenderQuality::Low => (false, 1.0),
        RenderQuality::Medium => (true, 0.5),
        RenderQuality::High => (true, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_quality_disables_feathering() {
        assert!(!feathering_for(RenderQuality::Low).0);
        assert!(feathering_for(RenderQuality::High).0);
    }

    #[test]
    fn apply_render_quality_updates_context_options() {
        let ctx = egui::Context::default();

        apply_render_quality(&ctx, RenderQuality::Low);
        assert!(!ctx.options(|o| o.tessellation_options.feathering));

        apply_render_quality(&ctx, RenderQuality::Medium);
        assert!(ctx.options(|o| o.tessellation_options.feathering));
    }

    #[test]
    fn paint_scene_applies_scene_render_quality() {
        let ctx = egui::Context::default();
        let mut state = crate::app::AppState::new();
        state.view.render_quality = RenderQuality::Low;
        let scene = crate::app::render_scene::build(&state, [800.0, 600.0]);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
            let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            paint_scene(&painter, rect, &scene);
        });

        assert!(!ctx.options(|o| o.tessellation_options.feathering));
    }
}
