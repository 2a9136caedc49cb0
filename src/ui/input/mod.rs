//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Einfach-/Doppel-Klick) und Maus-Diagnose
//! - `drag_primary` — Drag-Start/-Ende (Item-Move oder Kamera-Pan)
//! - `pointer_delta` — Pan/Move-Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::core::Scene;
use crate::shared::EditorOptions;
use indexmap::IndexSet;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    SelectionMove,
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub scene: &'a Scene,
    pub selected_item_ids: &'a IndexSet<u64>,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Pick-Toleranz in Szeneneinheiten für den aktuellen Zoom.
    pub(crate) fn pick_tolerance(&self) -> f32 {
        self.camera
            .pick_radius_world(self.options.selection_pick_tolerance_px)
    }

    /// Rechnet eine Bildschirmposition in Szenenkoordinaten um.
    pub(crate) fn to_world(&self, pointer_pos: egui::Pos2) -> glam::Vec2 {
        screen_pos_to_world(pointer_pos, self.response, self.viewport_size, self.camera)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        scene: &Scene,
        selected_item_ids: &IndexSet<u64>,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            scene,
            selected_item_ids,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            !selected_item_ids.is_empty(),
        ));

        let modifiers = ui.input(|i| i.modifiers);

        self.log_pointer_buttons(&ctx);
        self.handle_drag_start(&ctx, modifiers, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
