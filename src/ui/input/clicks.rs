//! Klick-Events und Maus-Diagnose.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Einfach-Klicks im Viewport.
    ///
    /// Klick auf ein Item selektiert es (Ctrl = additiv umschalten),
    /// Klick auf leere Fläche hebt die Selektion auf.
    pub(crate) fn handle_clicks(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                log_pointer_event(ctx, "Doppelklick", pointer_pos);
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::ItemPickRequested {
                    world_pos: ctx.to_world(pointer_pos),
                    additive: modifiers.command,
                });
            }

            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }

    /// Protokolliert Drücken und Loslassen von Maustasten im Viewport.
    pub(crate) fn log_pointer_buttons(&self, ctx: &ViewportContext) {
        if !log::log_enabled!(log::Level::Debug) || !ctx.response.hovered() {
            return;
        }

        let (pressed, released, pointer_pos) = ctx.ui.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        if pressed {
            log_pointer_event(ctx, "Maus gedrückt", pointer_pos);
        }
        if released {
            log_pointer_event(ctx, "Maus losgelassen", pointer_pos);
        }
    }
}

/// Loggt ein Maus-Ereignis mit Szenenposition und den Items darunter.
fn log_pointer_event(ctx: &ViewportContext, label: &str, pointer_pos: egui::Pos2) {
    let world = ctx.to_world(pointer_pos);
    log::debug!(
        "{} bei Szene ({:.1}, {:.1}), items_at={:?}",
        label,
        world.x,
        world.y,
        ctx.scene.items_at(world, ctx.pick_tolerance())
    );
}
