//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use super::RenderQuality;
use crate::core::{Camera2D, ShapePath};
use glam::Vec2;

/// Ein Szenen-Item, fertig für den Renderer.
#[derive(Debug, Clone)]
pub struct RenderItem {
    /// Item-ID in der Szene
    pub id: u64,
    /// Ob das Item selektiert ist (Rahmen wird gezeichnet)
    pub selected: bool,
    /// Render-Pfade aller Kinder in Szenenkoordinaten, in Zeichenreihenfolge
    pub paths: Vec<ShapePath>,
    /// Bounding-Rect in Szenenkoordinaten `(min, max)`
    pub bounds: (Vec2, Vec2),
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Render-Qualitätsstufe (Anti-Aliasing)
    pub render_quality: RenderQuality,
    /// Szenengrenzen `(min, max)`
    pub scene_bounds: (Vec2, Vec2),
    /// Items in Zeichenreihenfolge
    pub items: Vec<RenderItem>,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Anzahl selektierter Items in diesem Frame.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }
}
