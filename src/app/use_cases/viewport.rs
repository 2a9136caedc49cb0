//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::shared::RenderQuality;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Aktualisiert die Render-Qualitätsstufe.
pub fn set_render_quality(state: &mut AppState, quality: RenderQuality) {
    state.view.render_quality = quality;
}
