//! Drag-Start/-Ende: Item-Move oder Kamera-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus (Move oder Pan).
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let hit = press_pos.and_then(|pointer_pos| {
            let world_pos = ctx.to_world(pointer_pos);
            ctx.scene
                .item_at(world_pos, ctx.pick_tolerance())
                .map(|id| (id, world_pos))
        });

        if let Some((hit_id, world_pos)) = hit {
            if !ctx.selected_item_ids.contains(&hit_id) {
                events.push(AppIntent::ItemPickRequested {
                    world_pos,
                    additive: modifiers.command,
                });
            }

            events.push(AppIntent::BeginMoveSelectedRequested);
            self.primary_drag_mode = PrimaryDragMode::SelectionMove;
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Beendet einen Drag und emittiert das Move-Ende.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::SelectionMove {
            events.push(AppIntent::EndMoveSelectedRequested);
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
