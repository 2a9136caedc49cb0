use crate::app::CommandLog;
use crate::core::{Camera2D, Scene};
use crate::shared::EditorOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Diagramm mit dem Topologie-Rechteck
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Zoom, Selektion)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardszene und Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    ///
    /// Die Kamera startet auf die Szenenmitte zentriert mit der
    /// konfigurierten Start-Skalierung.
    pub fn with_options(options: EditorOptions) -> Self {
        let scene = Scene::new();
        let mut view = ViewState::new();
        view.camera =
            Camera2D::centered_on(scene.bounds_center(), options.clamped_initial_view_scale());

        Self {
            scene,
            view,
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Items zurück (für UI-Anzeige)
    pub fn item_count(&self) -> usize {
        self.scene.item_count()
    }

    /// Gibt die Anzahl selektierter Items zurück (für UI-Anzeige)
    pub fn selected_count(&self) -> usize {
        self.selection.selected_item_ids.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
