//! Core-Domänentypen: Spiegelung, Formen, Weichensymbol, Szene, Kamera.

pub mod camera;
pub mod connection_point;
pub mod dimensions;
pub mod geometry;
pub mod rail_point;
pub mod scene;
/// Zeichenbare Primitive
///
/// Linie, Dreieck, Kreis und Text halten ihre Punkte und einen daraus
/// abgeleiteten Render-Pfad, der nach jeder Mutation neu aufgebaut wird.
pub mod shape;
pub mod topology_rect;

pub use camera::Camera2D;
pub use connection_point::{ConnectionPoint, Orientation};
pub use geometry::{flip_horizontal, flip_vertical, reflect, Axis, Flippable};
pub use rail_point::RailPoint;
pub use scene::Scene;
pub use shape::{
    ConnPointEllipse, Line, PathElement, Shape, ShapePath, TextAnchor, TextRun, Triangle,
};
pub use topology_rect::{Contour, TopologyRectangle};
