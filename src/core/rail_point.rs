//! Innengeometrie der Weiche: Schräg- und Geradeausstrang, Pfeil, drei Anschlüsse.

use glam::Vec2;

use super::connection_point::{ConnectionPoint, Orientation};
use super::dimensions::{TR_ARROW_WIDTH_KOEFF, TR_INTERNAL_GEOMETRY_LINES_WIDTH};
use super::geometry::{reflect, Axis, Flippable};
use super::shape::{Line, Shape, ShapePath, Triangle};

/// Schematische Darstellung einer Weiche um ein Zentrum.
#[derive(Debug, Clone)]
pub struct RailPoint {
    center: Vec2,
    region_size: f32,
    oblique_line: Line,
    direct_line: Line,
    arrow: Triangle,
    connection_points: [ConnectionPoint; 3],
}

impl RailPoint {
    /// Baut die Innengeometrie in einem quadratischen Bereich der Kantenlänge
    /// `region_size` um `center` auf.
    pub fn new(region_size: f32, center: Vec2) -> Self {
        let half = region_size / 2.0;
        let arrow_half_width = TR_ARROW_WIDTH_KOEFF * half;

        let oblique_line = Line::new(
            TR_INTERNAL_GEOMETRY_LINES_WIDTH,
            center + Vec2::new(0.0, -half),
            center + Vec2::new(-half, half),
        );
        let direct_line = Line::new(
            TR_INTERNAL_GEOMETRY_LINES_WIDTH,
            center + Vec2::new(-half, half),
            center + Vec2::new(half, half),
        );
        let arrow = Triangle::new(
            center + Vec2::new(0.0, half - arrow_half_width),
            center + Vec2::new(0.0, half + arrow_half_width),
            center + Vec2::new(half, half),
        );

        Self {
            center,
            region_size,
            oblique_line,
            direct_line,
            arrow,
            connection_points: [
                ConnectionPoint::new(center, Orientation::Left, "0"),
                ConnectionPoint::new(center, Orientation::Right, "1"),
                ConnectionPoint::new(center, Orientation::Top, "2"),
            ],
        }
    }

    /// Zentrum der Innengeometrie
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Kantenlänge des Geometriebereichs
    pub fn region_size(&self) -> f32 {
        self.region_size
    }

    /// Abzweigender (schräger) Strang
    pub fn oblique_line(&self) -> &Line {
        &self.oblique_line
    }

    /// Geradeaus-Strang
    pub fn direct_line(&self) -> &Line {
        &self.direct_line
    }

    /// Pfeilspitze am Ende des Geradeaus-Strangs
    pub fn arrow(&self) -> &Triangle {
        &self.arrow
    }

    /// Anschlusspunkte "0", "1", "2"
    pub fn connection_points(&self) -> &[ConnectionPoint; 3] {
        &self.connection_points
    }
}

impl Flippable for RailPoint {
    fn flip(&mut self, axis: Axis, center: Vec2) {
        self.center = reflect(self.center, center, axis);
        self.oblique_line.flip(axis, center);
        self.direct_line.flip(axis, center);
        self.arrow.flip(axis, center);
        for cp in &mut self.connection_points {
            cp.flip(axis, center);
        }
    }
}

impl Shape for RailPoint {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a ShapePath>) {
        self.oblique_line.collect_paths(out);
        self.direct_line.collect_paths(out);
        self.arrow.collect_paths(out);
        for cp in &self.connection_points {
            cp.collect_paths(out);
        }
    }
}
