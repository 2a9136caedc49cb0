//! Hilfstypen für die Umrechnung Szene → Bildschirm.

use crate::core::Camera2D;
use glam::Vec2;

/// Abbildung von Szenenkoordinaten auf Painter-Koordinaten eines Viewports.
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    origin: egui::Pos2,
    camera_position: Vec2,
    zoom: f32,
    viewport_size: Vec2,
}

impl ScreenTransform {
    /// Erstellt die Abbildung für das Viewport-Rechteck `rect`.
    pub fn new(rect: egui::Rect, camera: &Camera2D, viewport_size: [f32; 2]) -> Self {
        Self {
            origin: rect.min,
            camera_position: camera.position,
            zoom: camera.zoom,
            viewport_size: Vec2::from(viewport_size),
        }
    }

    /// Rechnet einen Szenenpunkt in eine Painter-Position um.
    pub fn pos(&self, world: Vec2) -> egui::Pos2 {
        let screen = (world - self.camera_position) * self.zoom + self.viewport_size * 0.5;
        egui::pos2(self.origin.x + screen.x, self.origin.y + screen.y)
    }

    /// Rechnet eine Szenen-Länge (Strichbreite, Radius, Schriftgröße) in Pixel um.
    pub fn length(&self, world: f32) -> f32 {
        world * self.zoom
    }

    /// Rechnet ein Szenen-Rechteck in ein Painter-Rechteck um.
    pub fn rect(&self, min: Vec2, max: Vec2) -> egui::Rect {
        egui::Rect::from_two_pos(self.pos(min), self.pos(max))
    }
}

/// Konvertiert eine RGBA-Farbe (0.0–1.0) in `egui::Color32`.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pos_matches_camera_world_to_screen() {
        let camera = Camera2D::centered_on(Vec2::new(900.0, 450.0), 0.5);
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));
        let transform = ScreenTransform::new(rect, &camera, [800.0, 600.0]);

        let world = Vec2::new(150.0, 250.0);
        let expected = camera.world_to_screen(world, Vec2::new(800.0, 600.0));
        let actual = transform.pos(world);

        assert_relative_eq!(actual.x, 10.0 + expected.x);
        assert_relative_eq!(actual.y, 20.0 + expected.y);
    }

    #[test]
    fn scene_center_lands_in_viewport_center() {
        let camera = Camera2D::centered_on(Vec2::new(900.0, 450.0), 0.5);
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let transform = ScreenTransform::new(rect, &camera, [800.0, 600.0]);

        let center = transform.pos(Vec2::new(900.0, 450.0));

        assert_relative_eq!(center.x, 400.0);
        assert_relative_eq!(center.y, 300.0);
        assert_relative_eq!(transform.length(4.0), 2.0);
    }

    #[test]
    fn color32_converts_and_clamps() {
        assert_eq!(color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(color32([2.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
    }
}
