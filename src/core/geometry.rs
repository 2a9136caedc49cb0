//! Punkt-Spiegelung an einem Zentrum.
//!
//! Alle Koordinaten liegen im Zeichenraum des Symbols (y zeigt nach unten).

use glam::Vec2;

/// Spiegelachse einer Flip-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal spiegeln: x-Abstand zum Zentrum wird negiert
    Horizontal,
    /// Vertikal spiegeln: y-Abstand zum Zentrum wird negiert
    Vertical,
}

impl Axis {
    /// Anzeigename für Log-Ausgaben und UI.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Spiegelt `point` horizontal an `center`: `x' = 2*cx - x`, `y' = y`.
#[inline]
pub fn flip_horizontal(point: Vec2, center: Vec2) -> Vec2 {
    Vec2::new(2.0 * center.x - point.x, point.y)
}

/// Spiegelt `point` vertikal an `center`: `x' = x`, `y' = 2*cy - y`.
#[inline]
pub fn flip_vertical(point: Vec2, center: Vec2) -> Vec2 {
    Vec2::new(point.x, 2.0 * center.y - point.y)
}

/// Spiegelt `point` an `center` entlang der gegebenen Achse.
#[inline]
pub fn reflect(point: Vec2, center: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => flip_horizontal(point, center),
        Axis::Vertical => flip_vertical(point, center),
    }
}

/// Formen, die sich an einem vom Aufrufer vorgegebenen Zentrum spiegeln lassen.
///
/// Implementierungen spiegeln alle eigenen Punkte (und rekursiv die ihrer
/// Kinder) und bauen danach ihren Render-Pfad neu auf.
pub trait Flippable {
    /// Spiegelt die Form an `center` entlang `axis`.
    fn flip(&mut self, axis: Axis, center: Vec2);

    /// Horizontal an `center` spiegeln.
    fn flip_horizontal(&mut self, center: Vec2) {
        self.flip(Axis::Horizontal, center);
    }

    /// Vertikal an `center` spiegeln.
    fn flip_vertical(&mut self, center: Vec2) {
        self.flip(Axis::Vertical, center);
    }
}
