//! Feste Abmessungen des Topologie-Symbols (Zeicheneinheiten).

/// Goldener Schnitt, bestimmt die Höhe von Kopf- und Fußzeile.
pub const GOLDEN_RATIO: f32 = 1.618;

/// Breite der Kontur.
pub const TR_CONTOUR_WIDTH: f32 = 300.0;
/// Höhe der Kontur.
pub const TR_CONTOUR_HEIGHT: f32 = 500.0;
/// Eckenradius der abgerundeten Kontur.
pub const TR_CONTOUR_CORNER_ROUND: f32 = 20.0;
/// Linienstärke der Kontur.
pub const TR_CONTOUR_LINES_WIDTH: f32 = 4.0;

/// Höhe der Kopfzeile.
pub const TR_HEADER_HEIGHT: f32 = TR_CONTOUR_HEIGHT * (1.0 - 1.0 / GOLDEN_RATIO) / 2.0;
/// Höhe der Fußzeile.
pub const TR_FOOTER_HEIGHT: f32 = TR_HEADER_HEIGHT;

/// Schriftgröße von Kopf- und Fußzeile.
pub const TR_HEADER_FOOTER_FONT_SIZE: f32 = 40.0;

/// Linienstärke der Weichen-Innengeometrie.
pub const TR_INTERNAL_GEOMETRY_LINES_WIDTH: f32 = 4.0;
/// Kantenlänge des Bereichs, den die Innengeometrie einnimmt.
pub const TR_INTERNAL_GEOMETRY_REGION_SIZE: f32 = 200.0;
/// Breite der Pfeilspitze relativ zur halben Bereichsgröße.
pub const TR_ARROW_WIDTH_KOEFF: f32 = 0.3;

/// Radius eines Anschlusspunkts.
pub const TR_CONN_POINT_RAD: f32 = 10.0;
/// Schriftgröße der Anschlusspunkt-Beschriftung.
pub const TR_CONN_POINT_FONT_SIZE: f32 = 30.0;
/// Abstand zwischen Anschlusspunkt und Beschriftung.
pub const TR_CONN_POINT_LABEL_GAP: f32 = 10.0;

/// Umriss-Stärke gefüllter Primitive (Pfeil, Anschlusspunkt).
pub const TR_OUTLINE_WIDTH: f32 = 1.0;
