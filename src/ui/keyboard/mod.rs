//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_h_pressed, key_j_pressed, key_a_pressed, key_escape_pressed) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::J),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::Escape),
            )
        });

    // Ctrl+H / Ctrl+J: Spiegeln
    if modifiers.command && key_h_pressed {
        events.push(AppIntent::FlipHorizontalRequested);
    }

    if modifiers.command && key_j_pressed {
        events.push(AppIntent::FlipVerticalRequested);
    }

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    if key_escape_pressed && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    // Ctrl +/- : Zoom-Stufen
    let (key_plus_pressed, key_minus_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if modifiers.command && key_plus_pressed {
        events.push(AppIntent::ZoomInRequested);
    }

    if modifiers.command && key_minus_pressed {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}
