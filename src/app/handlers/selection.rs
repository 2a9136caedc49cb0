//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert das Item unter dem Klickpunkt.
pub fn select_item_at(state: &mut AppState, world_pos: glam::Vec2, tolerance: f32, additive: bool) {
    use_cases::selection::select_item_at(state, world_pos, tolerance, additive);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Selektiert alle Items der Szene.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
    log::info!("Alle {} Items selektiert", state.selected_count());
}

/// Startet einen Move-Lifecycle.
pub fn begin_move(state: &mut AppState) {
    use_cases::selection::begin_move(state);
}

/// Verschiebt alle selektierten Items um ein Delta.
pub fn move_selected(state: &mut AppState, delta_world: glam::Vec2) {
    use_cases::selection::move_selected(state, delta_world);
}

/// Beendet einen Move-Lifecycle.
pub fn end_move(state: &mut AppState) {
    use_cases::selection::end_move(state);
}
