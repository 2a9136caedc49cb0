use crate::shared::EditorOptions;
use crate::shared::RenderQuality;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Topologie-Rechteck horizontal am eigenen Mittelpunkt spiegeln
    FlipItemHorizontal,
    /// Topologie-Rechteck vertikal am eigenen Mittelpunkt spiegeln
    FlipItemVertical,

    /// Item unter der Position selektieren (leere Fläche hebt Selektion auf)
    SelectItemAt {
        world_pos: glam::Vec2,
        tolerance: f32,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Items selektieren
    SelectAll,
    /// Move-Lifecycle Start
    BeginMoveSelected,
    /// Selektierte Items verschieben
    MoveSelected { delta_world: glam::Vec2 },
    /// Move-Lifecycle Ende
    EndMoveSelected,

    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera auf Fokuspunkt zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Render-Qualität setzen
    SetRenderQuality { quality: RenderQuality },

    /// Anwendung kontrolliert beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
