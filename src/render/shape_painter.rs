//! Zeichnet einzelne `ShapePath`-Elemente mit dem egui-Painter.

use super::types::ScreenTransform;
use crate::core::{PathElement, ShapePath, TextAnchor};

/// Zeichnet alle Elemente eines Pfads in Zeichenreihenfolge.
pub(super) fn paint_path(
    painter: &egui::Painter,
    transform: &ScreenTransform,
    path: &ShapePath,
    color: egui::Color32,
) {
    for element in path.elements() {
        paint_element(painter, transform, element, color);
    }
}

fn paint_element(
    painter: &egui::Painter,
    transform: &ScreenTransform,
    element: &PathElement,
    color: egui::Color32,
) {
    match element {
        PathElement::Polyline { points, width } => {
            let points = points.iter().map(|p| transform.pos(*p)).collect();
            painter.line(points, stroke(transform, *width, color));
        }
        PathElement::Polygon { points, width } => {
            let points = points.iter().map(|p| transform.pos(*p)).collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                color,
                stroke(transform, *width, color),
            ));
        }
        PathElement::Circle {
            center,
            radius,
            width,
        } => {
            painter.circle(
                transform.pos(*center),
                transform.length(*radius),
                color,
                stroke(transform, *width, color),
            );
        }
        PathElement::Rect {
            min,
            max,
            corner_radius,
            width,
        } => {
            painter.rect_stroke(
                transform.rect(*min, *max),
                transform.length(*corner_radius),
                stroke(transform, *width, color),
                egui::StrokeKind::Middle,
            );
        }
        PathElement::Text {
            anchor,
            align,
            text,
            size,
            bold,
        } => {
            let font = egui::FontId::proportional(transform.length(*size).max(1.0));
            let pos = transform.pos(*anchor);
            for dx in bold_offsets(*bold, font.size) {
                painter.text(
                    pos + egui::vec2(dx, 0.0),
                    align2(*align),
                    text,
                    font.clone(),
                    color,
                );
            }
        }
    }
}

fn stroke(transform: &ScreenTransform, width: f32, color: egui::Color32) -> egui::Stroke {
    egui::Stroke::new(transform.length(width), color)
}

/// Horizontale Versätze für Kunstfett (Text wird leicht versetzt doppelt gezeichnet).
fn bold_offsets(bold: bool, font_size: f32) -> Vec<f32> {
    if !bold {
        return vec![0.0];
    }
    let step = (font_size * 0.04).clamp(0.5, 2.0);
    vec![0.0, step]
}

/// Übersetzt die Text-Verankerung in die egui-Ausrichtung.
fn align2(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::LeftBottom => egui::Align2::LEFT_BOTTOM,
        TextAnchor::RightBottom => egui::Align2::RIGHT_BOTTOM,
        TextAnchor::RightTop => egui::Align2::RIGHT_TOP,
        TextAnchor::CenterCenter => egui::Align2::CENTER_CENTER,
    }
}
