//! Diagramm-Szene mit festen Grenzen und dem Weichensymbol.

use glam::Vec2;

use super::topology_rect::TopologyRectangle;

/// Standard-Szenengröße (Zeicheneinheiten).
pub const SCENE_SIZE: Vec2 = Vec2::new(1800.0, 900.0);
/// Objekttyp in der Kopfzeile des Symbols.
pub const DEFAULT_HEADER_TEXT: &str = "Point";
/// Kennung in der Fußzeile des Symbols.
pub const DEFAULT_FOOTER_TEXT: &str = "1";

/// Ein Dokument: Szenengrenzen plus das eine Topologie-Rechteck.
#[derive(Debug, Clone)]
pub struct Scene {
    bounds_min: Vec2,
    bounds_max: Vec2,
    topology: TopologyRectangle,
}

impl Scene {
    /// ID des Topologie-Rechtecks der Standardszene.
    pub const TOPOLOGY_ID: u64 = 1;

    /// Baut die Standardszene: Symbol in der linken oberen Ecke.
    pub fn new() -> Self {
        Self {
            bounds_min: Vec2::ZERO,
            bounds_max: SCENE_SIZE,
            topology: TopologyRectangle::new(
                Self::TOPOLOGY_ID,
                DEFAULT_HEADER_TEXT,
                DEFAULT_FOOTER_TEXT,
                Vec2::ZERO,
            ),
        }
    }

    /// Szenengrenzen `(min, max)`
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.bounds_min, self.bounds_max)
    }

    /// Mittelpunkt der Szenengrenzen
    pub fn bounds_center(&self) -> Vec2 {
        (self.bounds_min + self.bounds_max) * 0.5
    }

    /// Das Topologie-Rechteck der Szene
    pub fn topology(&self) -> &TopologyRectangle {
        &self.topology
    }

    /// Mutable Zugriff auf das Topologie-Rechteck
    pub fn topology_mut(&mut self) -> &mut TopologyRectangle {
        &mut self.topology
    }

    /// Alle Items in Zeichenreihenfolge.
    pub fn items(&self) -> impl Iterator<Item = &TopologyRectangle> {
        std::iter::once(&self.topology)
    }

    /// Anzahl der Items in der Szene
    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    /// Sucht ein Item per ID.
    pub fn item(&self, id: u64) -> Option<&TopologyRectangle> {
        self.items().find(|item| item.id() == id)
    }

    /// Sucht ein Item per ID (mutable).
    pub fn item_mut(&mut self, id: u64) -> Option<&mut TopologyRectangle> {
        if self.topology.id() == id {
            Some(&mut self.topology)
        } else {
            None
        }
    }

    /// Oberstes Item unter einem Szenenpunkt.
    pub fn item_at(&self, point: Vec2, tolerance: f32) -> Option<u64> {
        self.items_at(point, tolerance).last().copied()
    }

    /// Alle Items unter einem Szenenpunkt, unterstes zuerst.
    pub fn items_at(&self, point: Vec2, tolerance: f32) -> Vec<u64> {
        self.items()
            .filter(|item| item.contains_scene_point(point, tolerance))
            .map(|item| item.id())
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
