//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderItem, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let items = state
        .scene
        .items()
        .map(|item| RenderItem {
            id: item.id(),
            selected: state.selection.is_selected(item.id()),
            paths: item.scene_paths(),
            bounds: item.scene_bounding_rect(),
        })
        .collect();

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        render_quality: state.view.render_quality,
        scene_bounds: state.scene.bounds(),
        items,
        options: state.options.clone(),
    }
}
