//! Zeichenbare Primitive und ihr abgeleiteter Render-Pfad.
//!
//! Jede Form hält ihre definierenden Punkte und einen daraus berechneten
//! [`ShapePath`]. Der Pfad wird nach jeder Punktänderung neu aufgebaut und
//! ist die einzige Quelle, aus der gerendert wird.

use glam::Vec2;

use super::dimensions::TR_OUTLINE_WIDTH;
use super::geometry::{reflect, Axis, Flippable};

/// Verankerung eines Textes relativ zu seinem Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Linke untere Ecke der Textbox liegt auf dem Anker
    LeftBottom,
    /// Rechte untere Ecke der Textbox liegt auf dem Anker
    RightBottom,
    /// Rechte obere Ecke der Textbox liegt auf dem Anker
    RightTop,
    /// Mittelpunkt der Textbox liegt auf dem Anker
    CenterCenter,
}

/// Einzelnes Element eines Render-Pfads.
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    /// Offener Linienzug
    Polyline { points: Vec<Vec2>, width: f32 },
    /// Geschlossenes, gefülltes Polygon mit Umriss
    Polygon { points: Vec<Vec2>, width: f32 },
    /// Gefüllter Kreis mit Umriss
    Circle {
        center: Vec2,
        radius: f32,
        width: f32,
    },
    /// Rechteck-Umriss mit abgerundeten Ecken (`corner_radius = 0` für scharfe Ecken)
    Rect {
        min: Vec2,
        max: Vec2,
        corner_radius: f32,
        width: f32,
    },
    /// Gefüllter Text
    Text {
        anchor: Vec2,
        align: TextAnchor,
        text: String,
        size: f32,
        bold: bool,
    },
}

impl PathElement {
    fn translated(&self, offset: Vec2) -> Self {
        match self {
            PathElement::Polyline { points, width } => PathElement::Polyline {
                points: points.iter().map(|p| *p + offset).collect(),
                width: *width,
            },
            PathElement::Polygon { points, width } => PathElement::Polygon {
                points: points.iter().map(|p| *p + offset).collect(),
                width: *width,
            },
            PathElement::Circle {
                center,
                radius,
                width,
            } => PathElement::Circle {
                center: *center + offset,
                radius: *radius,
                width: *width,
            },
            PathElement::Rect {
                min,
                max,
                corner_radius,
                width,
            } => PathElement::Rect {
                min: *min + offset,
                max: *max + offset,
                corner_radius: *corner_radius,
                width: *width,
            },
            PathElement::Text {
                anchor,
                align,
                text,
                size,
                bold,
            } => PathElement::Text {
                anchor: *anchor + offset,
                align: *align,
                text: text.clone(),
                size: *size,
                bold: *bold,
            },
        }
    }
}

/// Renderbare Darstellung einer Form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePath {
    elements: Vec<PathElement>,
}

impl ShapePath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Element an.
    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    /// Read-only Sicht auf alle Elemente.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Gibt `true` zurück, wenn der Pfad nichts zeichnet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Liefert eine um `offset` verschobene Kopie (Symbol-lokal → Szene).
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            elements: self.elements.iter().map(|e| e.translated(offset)).collect(),
        }
    }
}

/// Gemeinsame Schnittstelle aller zeichenbaren Formen und Komposita.
pub trait Shape {
    /// Sammelt die Render-Pfade dieser Form und aller Kinder in Zeichenreihenfolge.
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>);
}

// ── Linie ───────────────────────────────────────────────────────────

/// Gerades Liniensegment mit fester Strichstärke.
#[derive(Debug, Clone)]
pub struct Line {
    width: f32,
    start: Vec2,
    end: Vec2,
    path: ShapePath,
}

impl Line {
    /// Erstellt eine Linie von `start` nach `end`.
    pub fn new(width: f32, start: Vec2, end: Vec2) -> Self {
        let mut line = Self {
            width,
            start,
            end,
            path: ShapePath::new(),
        };
        line.rebuild_path();
        line
    }

    /// Startpunkt
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Endpunkt
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Strichstärke
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Aktueller Render-Pfad
    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    fn rebuild_path(&mut self) {
        let mut path = ShapePath::new();
        path.push(PathElement::Polyline {
            points: vec![self.start, self.end],
            width: self.width,
        });
        self.path = path;
    }
}

impl Flippable for Line {
    fn flip(&mut self, axis: Axis, center: Vec2) {
        self.start = reflect(self.start, center, axis);
        self.end = reflect(self.end, center, axis);
        self.rebuild_path();
    }
}

impl Shape for Line {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        out.push(&self.path);
    }
}

// ── Dreieck ─────────────────────────────────────────────────────────

/// Gefülltes Dreieck (Pfeilspitze der Weiche).
#[derive(Debug, Clone)]
pub struct Triangle {
    points: [Vec2; 3],
    path: ShapePath,
}

impl Triangle {
    /// Erstellt ein Dreieck aus drei Eckpunkten.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        let mut triangle = Self {
            points: [a, b, c],
            path: ShapePath::new(),
        };
        triangle.rebuild_path();
        triangle
    }

    /// Die drei Eckpunkte in Konstruktionsreihenfolge.
    pub fn points(&self) -> [Vec2; 3] {
        self.points
    }

    /// Aktueller Render-Pfad
    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    fn rebuild_path(&mut self) {
        let mut path = ShapePath::new();
        path.push(PathElement::Polygon {
            points: self.points.to_vec(),
            width: TR_OUTLINE_WIDTH,
        });
        self.path = path;
    }
}

impl Flippable for Triangle {
    fn flip(&mut self, axis: Axis, center: Vec2) {
        for point in &mut self.points {
            *point = reflect(*point, center, axis);
        }
        self.rebuild_path();
    }
}

impl Shape for Triangle {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        out.push(&self.path);
    }
}

// ── Ellipse ─────────────────────────────────────────────────────────

/// Gefüllter Kreis eines Anschlusspunkts.
#[derive(Debug, Clone)]
pub struct ConnPointEllipse {
    center: Vec2,
    radius: f32,
    path: ShapePath,
}

impl ConnPointEllipse {
    /// Erstellt einen Kreis um `center`.
    pub fn new(center: Vec2, radius: f32) -> Self {
        let mut ellipse = Self {
            center,
            radius,
            path: ShapePath::new(),
        };
        ellipse.rebuild_path();
        ellipse
    }

    /// Mittelpunkt
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Aktueller Render-Pfad
    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    /// Setzt den Mittelpunkt neu und baut den Pfad auf.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.rebuild_path();
    }

    fn rebuild_path(&mut self) {
        let mut path = ShapePath::new();
        path.push(PathElement::Circle {
            center: self.center,
            radius: self.radius,
            width: TR_OUTLINE_WIDTH,
        });
        self.path = path;
    }
}

impl Flippable for ConnPointEllipse {
    fn flip(&mut self, axis: Axis, center: Vec2) {
        self.set_center(reflect(self.center, center, axis));
    }
}

impl Shape for ConnPointEllipse {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        out.push(&self.path);
    }
}

// ── Text ────────────────────────────────────────────────────────────

/// Text-Lauf mit Ankerpunkt und Ausrichtung (Kopf-/Fußzeile, Beschriftungen).
#[derive(Debug, Clone)]
pub struct TextRun {
    text: String,
    anchor: Vec2,
    align: TextAnchor,
    size: f32,
    bold: bool,
    path: ShapePath,
}

impl TextRun {
    /// Erstellt einen Text-Lauf.
    pub fn new(text: impl Into<String>, anchor: Vec2, align: TextAnchor, size: f32) -> Self {
        let mut run = Self {
            text: text.into(),
            anchor,
            align,
            size,
            bold: false,
            path: ShapePath::new(),
        };
        run.rebuild_path();
        run
    }

    /// Setzt den Text fett.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self.rebuild_path();
        self
    }

    /// Textinhalt
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ankerpunkt
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Ausrichtung relativ zum Anker
    pub fn align(&self) -> TextAnchor {
        self.align
    }

    /// Schriftgröße
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Fettschrift
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Aktueller Render-Pfad
    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    /// Verschiebt den Anker und ändert die Ausrichtung.
    pub fn place(&mut self, anchor: Vec2, align: TextAnchor) {
        self.anchor = anchor;
        self.align = align;
        self.rebuild_path();
    }

    fn rebuild_path(&mut self) {
        let mut path = ShapePath::new();
        path.push(PathElement::Text {
            anchor: self.anchor,
            align: self.align,
            text: self.text.clone(),
            size: self.size,
            bold: self.bold,
        });
        self.path = path;
    }
}

impl Shape for TextRun {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        out.push(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_flip_rebuilds_path() {
        let mut line = Line::new(4.0, Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
        line.flip_horizontal(Vec2::new(20.0, 0.0));

        assert_eq!(line.start(), Vec2::new(40.0, 0.0));
        assert_eq!(line.end(), Vec2::new(30.0, 5.0));
        assert_eq!(
            line.path().elements(),
            &[PathElement::Polyline {
                points: vec![Vec2::new(40.0, 0.0), Vec2::new(30.0, 5.0)],
                width: 4.0,
            }]
        );
    }

    #[test]
    fn triangle_flip_mirrors_every_corner() {
        let mut triangle = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(5.0, 5.0),
        );
        triangle.flip_vertical(Vec2::new(0.0, 10.0));

        assert_eq!(
            triangle.points(),
            [
                Vec2::new(0.0, 20.0),
                Vec2::new(0.0, 10.0),
                Vec2::new(5.0, 15.0),
            ]
        );
        match &triangle.path().elements()[0] {
            PathElement::Polygon { points, .. } => assert_eq!(points[2], Vec2::new(5.0, 15.0)),
            other => panic!("Unerwartetes Element: {other:?}"),
        }
    }

    #[test]
    fn ellipse_keeps_radius_when_flipped() {
        let mut ellipse = ConnPointEllipse::new(Vec2::new(3.0, 4.0), 10.0);
        ellipse.flip_horizontal(Vec2::ZERO);
        assert_relative_eq!(ellipse.center().x, -3.0);
        assert_relative_eq!(ellipse.radius(), 10.0);
    }

    #[test]
    fn translated_path_moves_all_points() {
        let line = Line::new(1.0, Vec2::ZERO, Vec2::new(1.0, 1.0));
        let moved = line.path().translated(Vec2::new(5.0, -5.0));
        assert_eq!(
            moved.elements(),
            &[PathElement::Polyline {
                points: vec![Vec2::new(5.0, -5.0), Vec2::new(6.0, -4.0)],
                width: 1.0,
            }]
        );
    }

    #[test]
    fn text_run_place_updates_path() {
        let mut run = TextRun::new("0", Vec2::ZERO, TextAnchor::LeftBottom, 30.0);
        run.place(Vec2::new(1.0, 2.0), TextAnchor::RightTop);
        match &run.path().elements()[0] {
            PathElement::Text { anchor, align, .. } => {
                assert_eq!(*anchor, Vec2::new(1.0, 2.0));
                assert_eq!(*align, TextAnchor::RightTop);
            }
            other => panic!("Unerwartetes Element: {other:?}"),
        }
    }

    #[test]
    fn bold_text_run_keeps_flag_when_placed() {
        let mut run = TextRun::new("2", Vec2::ZERO, TextAnchor::RightBottom, 30.0).bold();
        run.place(Vec2::new(4.0, 4.0), TextAnchor::LeftBottom);

        assert!(run.is_bold());
        match &run.path().translated(Vec2::ONE).elements()[0] {
            PathElement::Text { bold, anchor, .. } => {
                assert!(*bold);
                assert_eq!(*anchor, Vec2::new(5.0, 5.0));
            }
            other => panic!("Unerwartetes Element: {other:?}"),
        }
    }
}
