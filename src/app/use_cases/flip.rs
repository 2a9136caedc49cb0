//! Use-Case: Topologie-Rechteck spiegeln.

use crate::app::AppState;
use crate::core::Axis;

/// Spiegelt das Topologie-Rechteck der Szene am eigenen Mittelpunkt.
///
/// Selektierte Items werden nur zur Diagnose aufgelistet; gespiegelt wird
/// immer das eine Rechteck der Szene.
pub fn flip_topology(state: &mut AppState, axis: Axis) {
    log_selected_items(state);

    let item = state.scene.topology_mut();
    item.flip(axis);

    let orientations: Vec<&str> = item
        .rail_point()
        .connection_points()
        .iter()
        .map(|cp| cp.orientation().label())
        .collect();
    log::info!(
        "Item {} {} gespiegelt, Anschlüsse: {:?}",
        item.id(),
        axis.label(),
        orientations
    );
}

fn log_selected_items(state: &AppState) {
    for id in &state.selection.selected_item_ids {
        if let Some(item) = state.scene.item(*id) {
            let (min, max) = item.scene_bounding_rect();
            log::debug!(
                "Selektiert: Item {} x={:.1} y={:.1} h={:.1} w={:.1}",
                id,
                min.x,
                min.y,
                max.y - min.y,
                max.x - min.x
            );
        }
    }
}
