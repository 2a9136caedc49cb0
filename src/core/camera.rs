//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
///
/// `position` ist der Szenenpunkt in der Viewport-Mitte, `zoom` die Anzahl
/// Bildschirm-Pixel pro Szeneneinheit. Beide Räume haben y nach unten.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Szenen-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = eine Szeneneinheit pro Pixel)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.05;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 20.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Erstellt eine Kamera, die auf `target` zentriert ist.
    pub fn centered_on(target: Vec2, zoom: f32) -> Self {
        Self {
            position: target,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierbarer Grenzen.
    ///
    /// Vertauschte Grenzen lösen keine Panik aus, `max` gewinnt.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).max(min).min(max);
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Szenen-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Szenen-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Szeneneinheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }

    /// Rechnet einen Pixel-Radius in Szeneneinheiten um.
    pub fn pick_radius_world(&self, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel()
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(0.5);
        assert_relative_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by_clamped(100.0, 0.1, 4.0);
        assert_relative_eq!(camera.zoom, 4.0);
    }

    #[test]
    fn test_zoom_with_inverted_limits_does_not_panic() {
        let mut camera = Camera2D::new();
        camera.zoom_by_clamped(1.2, 5.0, 1.0);
        assert_relative_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::centered_on(Vec2::new(900.0, 450.0), 0.5);
        let screen_size = Vec2::new(800.0, 600.0);
        // Bildschirm-Mitte → Kameraposition
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 900.0);
        assert_relative_eq!(world.y, 450.0);
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let camera = Camera2D::centered_on(Vec2::new(120.0, -40.0), 2.0);
        let screen_size = Vec2::new(1280.0, 720.0);
        let world = Vec2::new(37.0, 12.5);
        let back = camera.screen_to_world(camera.world_to_screen(world, screen_size), screen_size);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel();
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel();
        // Doppelter Zoom → halb so viele Szeneneinheiten pro Pixel
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
