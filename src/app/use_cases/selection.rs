//! Use-Case-Funktionen für Item-Selektion und Verschieben.

use crate::app::AppState;

/// Selektiert das oberste Item unter `world_pos`.
///
/// Nicht-additiv ersetzt die Selektion (leere Fläche hebt sie auf),
/// additiv schaltet das getroffene Item um.
pub fn select_item_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32, additive: bool) {
    let before = state.selection.clone();
    let hit = state.scene.item_at(world_pos, tolerance);

    log::debug!(
        "Pick bei ({:.1}, {:.1}): items_at={:?}",
        world_pos.x,
        world_pos.y,
        state.scene.items_at(world_pos, tolerance)
    );

    let ids = &mut state.selection.selected_item_ids;
    match (hit, additive) {
        (Some(id), true) => {
            if !ids.shift_remove(&id) {
                ids.insert(id);
            }
        }
        (Some(id), false) => {
            ids.clear();
            ids.insert(id);
        }
        (None, true) => {}
        (None, false) => ids.clear(),
    }

    log_if_selection_changed(state, &before.selected_item_ids);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    let before = state.selection.clone();
    state.selection.selected_item_ids.clear();
    log_if_selection_changed(state, &before.selected_item_ids);
}

/// Selektiert alle Items der Szene.
pub fn select_all(state: &mut AppState) {
    let before = state.selection.clone();
    let ids: Vec<u64> = state.scene.items().map(|item| item.id()).collect();
    state.selection.selected_item_ids.extend(ids);
    log_if_selection_changed(state, &before.selected_item_ids);
}

/// Verschiebt alle selektierten Items um `delta_world`.
pub fn move_selected(state: &mut AppState, delta_world: glam::Vec2) {
    if delta_world == glam::Vec2::ZERO {
        return;
    }
    let ids: Vec<u64> = state.selection.selected_item_ids.iter().copied().collect();
    for id in ids {
        if let Some(item) = state.scene.item_mut(id) {
            item.move_by(delta_world);
        }
    }
}

/// Protokolliert den Beginn eines Verschiebe-Drags.
pub fn begin_move(state: &AppState) {
    log::debug!(
        "Move gestartet: {} Item(s)",
        state.selection.selected_item_ids.len()
    );
}

/// Protokolliert das Ende eines Verschiebe-Drags mit den neuen Positionen.
pub fn end_move(state: &AppState) {
    for id in &state.selection.selected_item_ids {
        if let Some(item) = state.scene.item(*id) {
            log::debug!(
                "Move beendet: Item {} bei ({:.1}, {:.1})",
                id,
                item.position.x,
                item.position.y
            );
        }
    }
}

fn log_if_selection_changed(state: &AppState, before: &indexmap::IndexSet<u64>) {
    if *before != state.selection.selected_item_ids {
        log::debug!(
            "Selektion geändert: {:?}",
            state.selection.selected_item_ids
        );
    }
}
