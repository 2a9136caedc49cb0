//! Beschrifteter Anschlusspunkt am Rand des Symbols.

use glam::Vec2;

use super::dimensions::{
    TR_CONN_POINT_FONT_SIZE, TR_CONN_POINT_LABEL_GAP, TR_CONN_POINT_RAD, TR_CONTOUR_HEIGHT,
    TR_CONTOUR_WIDTH,
};
use super::geometry::{reflect, Axis, Flippable};
use super::shape::{ConnPointEllipse, Shape, ShapePath, TextAnchor, TextRun};

/// Seite der Kontur, an der ein Anschlusspunkt sitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Top,
    Bottom,
}

impl Orientation {
    /// Versatz des Anschlusspunkts vom Bezugszentrum.
    pub fn offset(self) -> Vec2 {
        match self {
            Orientation::Left => Vec2::new(-TR_CONTOUR_WIDTH / 2.0, 0.0),
            Orientation::Right => Vec2::new(TR_CONTOUR_WIDTH / 2.0, 0.0),
            Orientation::Top => Vec2::new(0.0, -TR_CONTOUR_HEIGHT / 2.0),
            Orientation::Bottom => Vec2::new(0.0, TR_CONTOUR_HEIGHT / 2.0),
        }
    }

    /// Achse, entlang der der Versatz liegt.
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Left | Orientation::Right => Axis::Horizontal,
            Orientation::Top | Orientation::Bottom => Axis::Vertical,
        }
    }

    /// Gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
        }
    }

    /// Orientierung nach Spiegelung entlang `axis`.
    ///
    /// Nur die passende Achse tauscht die Seite, die orthogonale lässt sie unverändert.
    pub fn mirrored(self, axis: Axis) -> Self {
        if self.axis() == axis {
            self.opposite()
        } else {
            self
        }
    }

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
        }
    }

    /// Ankerpunkt und Ausrichtung der Beschriftung relativ zum Punktmittelpunkt.
    ///
    /// Links und unten steht der Text links vom Punkt, rechts und oben rechts davon.
    fn label_placement(self, point: Vec2) -> (Vec2, TextAnchor) {
        let gap = TR_CONN_POINT_LABEL_GAP;
        match self {
            Orientation::Left => (Vec2::new(point.x - gap, point.y - gap), TextAnchor::RightBottom),
            Orientation::Right | Orientation::Top => {
                (Vec2::new(point.x + gap, point.y - gap), TextAnchor::LeftBottom)
            }
            Orientation::Bottom => (Vec2::new(point.x - gap, point.y + gap), TextAnchor::RightTop),
        }
    }
}

/// Anschlusspunkt: Kreis plus Beschriftung, versetzt von einem Bezugszentrum.
#[derive(Debug, Clone)]
pub struct ConnectionPoint {
    reference_center: Vec2,
    orientation: Orientation,
    ellipse: ConnPointEllipse,
    label: TextRun,
}

impl ConnectionPoint {
    /// Erstellt einen Anschlusspunkt an der Seite `orientation` von `reference_center`.
    pub fn new(reference_center: Vec2, orientation: Orientation, label_text: &str) -> Self {
        let position = reference_center + orientation.offset();
        let (anchor, align) = orientation.label_placement(position);
        Self {
            reference_center,
            orientation,
            ellipse: ConnPointEllipse::new(position, TR_CONN_POINT_RAD),
            label: TextRun::new(label_text, anchor, align, TR_CONN_POINT_FONT_SIZE).bold(),
        }
    }

    /// Aktuelle Seite
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Bezugszentrum, von dem aus versetzt wird
    pub fn reference_center(&self) -> Vec2 {
        self.reference_center
    }

    /// Mittelpunkt des Anschlusskreises
    pub fn position(&self) -> Vec2 {
        self.ellipse.center()
    }

    /// Beschriftungstext
    pub fn label_text(&self) -> &str {
        self.label.text()
    }

    /// Kreis-Primitive
    pub fn ellipse(&self) -> &ConnPointEllipse {
        &self.ellipse
    }

    /// Beschriftungs-Primitive
    pub fn label(&self) -> &TextRun {
        &self.label
    }

    fn reposition(&mut self) {
        let position = self.reference_center + self.orientation.offset();
        self.ellipse.set_center(position);
        let (anchor, align) = self.orientation.label_placement(position);
        self.label.place(anchor, align);
    }
}

impl Flippable for ConnectionPoint {
    /// Spiegelt das Bezugszentrum und tauscht die Seite.
    ///
    /// Unter der orthogonalen Achse bleibt der Punkt unverändert.
    fn flip(&mut self, axis: Axis, center: Vec2) {
        if axis != self.orientation.axis() {
            return;
        }
        self.reference_center = reflect(self.reference_center, center, axis);
        self.orientation = self.orientation.mirrored(axis);
        self.reposition();
    }
}

impl Shape for ConnectionPoint {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        self.label.collect_paths(out);
        self.ellipse.collect_paths(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CENTER: Vec2 = Vec2::new(150.0, 250.0);

    #[test]
    fn offsets_follow_contour_half_extents() {
        assert_eq!(
            ConnectionPoint::new(CENTER, Orientation::Left, "0").position(),
            Vec2::new(0.0, 250.0)
        );
        assert_eq!(
            ConnectionPoint::new(CENTER, Orientation::Right, "1").position(),
            Vec2::new(300.0, 250.0)
        );
        assert_eq!(
            ConnectionPoint::new(CENTER, Orientation::Top, "2").position(),
            Vec2::new(150.0, 0.0)
        );
        assert_eq!(
            ConnectionPoint::new(CENTER, Orientation::Bottom, "3").position(),
            Vec2::new(150.0, 500.0)
        );
    }

    #[test]
    fn left_flipped_horizontally_becomes_right() {
        let mut cp = ConnectionPoint::new(CENTER, Orientation::Left, "0");
        let before = cp.position();

        cp.flip_horizontal(CENTER);

        assert_eq!(cp.orientation(), Orientation::Right);
        let expected = crate::core::geometry::flip_horizontal(before, CENTER);
        assert_relative_eq!(cp.position().x, expected.x);
        assert_relative_eq!(cp.position().y, expected.y);
        assert_eq!(cp.label().align(), TextAnchor::LeftBottom);
    }

    #[test]
    fn left_flipped_vertically_is_unchanged() {
        let mut cp = ConnectionPoint::new(CENTER, Orientation::Left, "0");
        let before = cp.position();
        let label_before = cp.label().anchor();

        cp.flip_vertical(CENTER);

        assert_eq!(cp.orientation(), Orientation::Left);
        assert_eq!(cp.position(), before);
        assert_eq!(cp.label().anchor(), label_before);
    }

    #[test]
    fn top_flipped_vertically_becomes_bottom() {
        let mut cp = ConnectionPoint::new(CENTER, Orientation::Top, "2");
        cp.flip_vertical(CENTER);
        assert_eq!(cp.orientation(), Orientation::Bottom);
        assert_eq!(cp.position(), Vec2::new(150.0, 500.0));
        assert_eq!(cp.label().align(), TextAnchor::RightTop);
    }

    #[test]
    fn top_flipped_horizontally_is_unchanged() {
        let mut cp = ConnectionPoint::new(CENTER, Orientation::Top, "2");
        cp.flip_horizontal(CENTER);
        assert_eq!(cp.orientation(), Orientation::Top);
        assert_eq!(cp.position(), Vec2::new(150.0, 0.0));
    }

    #[test]
    fn off_center_reference_ignores_orthogonal_axis() {
        let reference = Vec2::new(100.0, 200.0);

        let mut left = ConnectionPoint::new(reference, Orientation::Left, "0");
        let left_before = left.position();
        let label_before = left.label().anchor();
        left.flip_vertical(CENTER);
        assert_eq!(left.orientation(), Orientation::Left);
        assert_eq!(left.position(), left_before);
        assert_eq!(left.reference_center(), reference);
        assert_eq!(left.label().anchor(), label_before);

        let mut top = ConnectionPoint::new(reference, Orientation::Top, "2");
        let top_before = top.position();
        top.flip_horizontal(CENTER);
        assert_eq!(top.orientation(), Orientation::Top);
        assert_eq!(top.position(), top_before);
        assert_eq!(top.reference_center(), reference);
    }

    #[test]
    fn off_center_reference_is_mirrored_on_matching_axis() {
        let reference = Vec2::new(100.0, 200.0);

        let mut left = ConnectionPoint::new(reference, Orientation::Left, "0");
        let left_before = left.position();
        left.flip_horizontal(CENTER);
        assert_eq!(left.orientation(), Orientation::Right);
        assert_eq!(left.reference_center(), Vec2::new(200.0, 200.0));
        assert_eq!(
            left.position(),
            crate::core::geometry::flip_horizontal(left_before, CENTER)
        );

        let mut top = ConnectionPoint::new(reference, Orientation::Top, "2");
        let top_before = top.position();
        top.flip_vertical(CENTER);
        assert_eq!(top.orientation(), Orientation::Bottom);
        assert_eq!(top.reference_center(), Vec2::new(100.0, 300.0));
        assert_eq!(
            top.position(),
            crate::core::geometry::flip_vertical(top_before, CENTER)
        );
    }

    #[test]
    fn label_sits_outside_the_point() {
        let cp = ConnectionPoint::new(CENTER, Orientation::Left, "0");
        let anchor = cp.label().anchor();
        assert_relative_eq!(anchor.x, cp.position().x - TR_CONN_POINT_LABEL_GAP);
        assert_relative_eq!(anchor.y, cp.position().y - TR_CONN_POINT_LABEL_GAP);
        assert_eq!(cp.label_text(), "0");
    }

    #[test]
    fn mirrored_only_swaps_on_matching_axis() {
        assert_eq!(Orientation::Left.mirrored(Axis::Horizontal), Orientation::Right);
        assert_eq!(Orientation::Left.mirrored(Axis::Vertical), Orientation::Left);
        assert_eq!(Orientation::Bottom.mirrored(Axis::Vertical), Orientation::Top);
        assert_eq!(Orientation::Bottom.mirrored(Axis::Horizontal), Orientation::Bottom);
    }
}
