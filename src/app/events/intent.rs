use crate::shared::EditorOptions;
use crate::shared::RenderQuality;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,

    /// Topologie-Rechteck horizontal spiegeln (Item → Flip horizontal, Ctrl+H)
    FlipHorizontalRequested,
    /// Topologie-Rechteck vertikal spiegeln (Item → Flip vertical, Ctrl+J)
    FlipVerticalRequested,

    /// Item per Klick selektieren
    ItemPickRequested {
        world_pos: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Items selektieren
    SelectAllRequested,

    /// Move-Lifecycle Start: Drag-Verschieben selektierter Items beginnen
    BeginMoveSelectedRequested,
    /// Move-Lifecycle Update: Selektierte Items um Delta verschieben
    MoveSelectedRequested { delta_world: glam::Vec2 },
    /// Move-Lifecycle Ende: Drag-Verschieben abgeschlossen
    EndMoveSelectedRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Szenen-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Render-Qualitätsstufe ändern
    RenderQualityChanged { quality: RenderQuality },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
