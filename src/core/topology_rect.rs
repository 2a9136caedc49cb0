//! Topologie-Rechteck: Kontur, Kopf-/Fußzeile und Weichen-Innengeometrie.
//!
//! Alle Kinder liegen im Symbol-lokalen Raum (Ursprung = linke obere Ecke der
//! Kontur). Die Szenenposition wird erst beim Rendern und Hit-Test addiert.

use glam::Vec2;

use super::dimensions::{
    TR_CONTOUR_CORNER_ROUND, TR_CONTOUR_HEIGHT, TR_CONTOUR_LINES_WIDTH, TR_CONTOUR_WIDTH,
    TR_FOOTER_HEIGHT, TR_HEADER_FOOTER_FONT_SIZE, TR_HEADER_HEIGHT,
    TR_INTERNAL_GEOMETRY_REGION_SIZE,
};
use super::geometry::{Axis, Flippable};
use super::rail_point::RailPoint;
use super::shape::{PathElement, Shape, ShapePath, TextAnchor, TextRun};

/// Abgerundeter Rahmen mit abgetrenntem Kopf- und Fußbereich.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    size: Vec2,
    path: ShapePath,
}

impl Contour {
    /// Erstellt die Standard-Kontur des Symbols.
    pub fn new() -> Self {
        let size = Vec2::new(TR_CONTOUR_WIDTH, TR_CONTOUR_HEIGHT);
        let mut path = ShapePath::new();
        path.push(PathElement::Rect {
            min: Vec2::ZERO,
            max: size,
            corner_radius: TR_CONTOUR_CORNER_ROUND,
            width: TR_CONTOUR_LINES_WIDTH,
        });
        path.push(PathElement::Rect {
            min: Vec2::new(0.0, TR_HEADER_HEIGHT),
            max: Vec2::new(TR_CONTOUR_WIDTH, TR_CONTOUR_HEIGHT - TR_FOOTER_HEIGHT),
            corner_radius: 0.0,
            width: TR_CONTOUR_LINES_WIDTH,
        });
        Self { size, path }
    }

    /// Außenmaße der Kontur
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl Default for Contour {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Contour {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        out.push(&self.path);
    }
}

/// Ein Weichensymbol im Diagramm.
#[derive(Debug, Clone)]
pub struct TopologyRectangle {
    id: u64,
    /// Position der linken oberen Konturecke in Szenenkoordinaten
    pub position: Vec2,
    center: Vec2,
    contour: Contour,
    header: TextRun,
    footer: TextRun,
    rail_point: RailPoint,
}

impl TopologyRectangle {
    /// Baut das Symbol mit Kopf- und Fußzeilentext an der Szenenposition `position`.
    pub fn new(id: u64, header_text: &str, footer_text: &str, position: Vec2) -> Self {
        let center = Vec2::new(TR_CONTOUR_WIDTH / 2.0, TR_CONTOUR_HEIGHT / 2.0);
        let header = TextRun::new(
            header_text,
            Vec2::new(TR_CONTOUR_WIDTH / 2.0, TR_HEADER_HEIGHT / 2.0),
            TextAnchor::CenterCenter,
            TR_HEADER_FOOTER_FONT_SIZE,
        )
        .bold();
        let footer = TextRun::new(
            footer_text,
            Vec2::new(
                TR_CONTOUR_WIDTH / 2.0,
                TR_CONTOUR_HEIGHT - TR_FOOTER_HEIGHT / 2.0,
            ),
            TextAnchor::CenterCenter,
            TR_HEADER_FOOTER_FONT_SIZE,
        );

        Self {
            id,
            position,
            center,
            contour: Contour::new(),
            header,
            footer,
            rail_point: RailPoint::new(TR_INTERNAL_GEOMETRY_REGION_SIZE, center),
        }
    }

    /// Eindeutige ID in der Szene
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Mittelpunkt der Kontur im Symbol-lokalen Raum
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Mittelpunkt der Kontur in Szenenkoordinaten
    pub fn scene_center(&self) -> Vec2 {
        self.position + self.center
    }

    /// Rahmen
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Kopfzeile
    pub fn header(&self) -> &TextRun {
        &self.header
    }

    /// Fußzeile
    pub fn footer(&self) -> &TextRun {
        &self.footer
    }

    /// Weichen-Innengeometrie
    pub fn rail_point(&self) -> &RailPoint {
        &self.rail_point
    }

    /// Bounding-Rect in Szenenkoordinaten (inkl. halber Konturstärke).
    pub fn scene_bounding_rect(&self) -> (Vec2, Vec2) {
        let pad = Vec2::splat(TR_CONTOUR_LINES_WIDTH / 2.0);
        (
            self.position - pad,
            self.position + self.contour.size() + pad,
        )
    }

    /// Prüft, ob ein Szenenpunkt (mit Toleranz) auf dem Symbol liegt.
    pub fn contains_scene_point(&self, point: Vec2, tolerance: f32) -> bool {
        let (min, max) = self.scene_bounding_rect();
        let tol = Vec2::splat(tolerance.max(0.0));
        let min = min - tol;
        let max = max + tol;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Verschiebt das Symbol in der Szene.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Spiegelt die Innengeometrie am eigenen Konturmittelpunkt.
    ///
    /// Kontur und Beschriftungen bleiben stehen: die Kontur ist zum Zentrum
    /// symmetrisch, Kopf- und Fußzeile behalten ihre Leserichtung.
    pub fn flip(&mut self, axis: Axis) {
        let center = self.center;
        self.rail_point.flip(axis, center);
    }

    /// Horizontal am eigenen Mittelpunkt spiegeln.
    pub fn flip_horizontal(&mut self) {
        self.flip(Axis::Horizontal);
    }

    /// Vertikal am eigenen Mittelpunkt spiegeln.
    pub fn flip_vertical(&mut self) {
        self.flip(Axis::Vertical);
    }

    /// Render-Pfade aller Kinder in Szenenkoordinaten.
    pub fn scene_paths(&self) -> Vec<ShapePath> {
        let mut local = Vec::new();
        self.collect_paths(&mut local);
        local
            .into_iter()
            .map(|path| path.translated(self.position))
            .collect()
    }
}

impl Shape for TopologyRectangle {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        self.contour.collect_paths(out);
        self.header.collect_paths(out);
        self.footer.collect_paths(out);
        self.rail_point.collect_paths(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn leaf_paths(tr: &TopologyRectangle) -> Vec<ShapePath> {
        let mut paths = Vec::new();
        tr.collect_paths(&mut paths);
        paths.into_iter().cloned().collect()
    }

    #[test]
    fn header_height_follows_golden_ratio() {
        assert_relative_eq!(TR_HEADER_HEIGHT, 500.0 * (1.0 - 1.0 / 1.618) / 2.0);
        assert_relative_eq!(TR_HEADER_HEIGHT, 95.488, epsilon = 1e-2);
    }

    #[test]
    fn center_is_middle_of_contour() {
        let tr = TopologyRectangle::new(1, "Point", "1", Vec2::new(10.0, 20.0));
        assert_eq!(tr.center(), Vec2::new(150.0, 250.0));
        assert_eq!(tr.scene_center(), Vec2::new(160.0, 270.0));
        assert_eq!(tr.rail_point().center(), tr.center());
    }

    #[test]
    fn double_flip_restores_every_leaf() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let mut tr = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
            let before = leaf_paths(&tr);

            tr.flip(axis);
            assert_ne!(leaf_paths(&tr), before);
            tr.flip(axis);

            assert_eq!(leaf_paths(&tr), before);
        }
    }

    #[test]
    fn flip_keeps_contour_and_captions() {
        let mut tr = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
        let header_before = tr.header().anchor();
        let footer_before = tr.footer().anchor();

        tr.flip_vertical();

        assert_eq!(tr.header().anchor(), header_before);
        assert_eq!(tr.footer().anchor(), footer_before);
        assert_eq!(tr.contour().size(), Vec2::new(300.0, 500.0));
    }

    #[test]
    fn hit_test_uses_scene_position() {
        let mut tr = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
        assert!(tr.contains_scene_point(Vec2::new(150.0, 250.0), 0.0));
        assert!(!tr.contains_scene_point(Vec2::new(400.0, 250.0), 0.0));

        tr.move_by(Vec2::new(300.0, 0.0));
        assert!(tr.contains_scene_point(Vec2::new(400.0, 250.0), 0.0));
        assert!(tr.contains_scene_point(Vec2::new(296.0, 250.0), 3.0));
        assert!(!tr.contains_scene_point(Vec2::new(290.0, 250.0), 3.0));
    }

    #[test]
    fn scene_paths_are_translated() {
        let tr = TopologyRectangle::new(1, "Point", "1", Vec2::new(100.0, 0.0));
        let paths = tr.scene_paths();
        match &paths[0].elements()[0] {
            PathElement::Rect { min, .. } => assert_eq!(*min, Vec2::new(100.0, 0.0)),
            other => panic!("Unerwartetes Element: {other:?}"),
        }
    }

    #[test]
    fn header_and_connection_labels_are_bold() {
        let mut tr = TopologyRectangle::new(1, "Point", "1", Vec2::ZERO);
        tr.flip_horizontal();

        assert!(tr.header().is_bold());
        assert!(!tr.footer().is_bold());
        for cp in tr.rail_point().connection_points() {
            assert!(cp.label().is_bold(), "Label {}", cp.label_text());
        }
    }
}
