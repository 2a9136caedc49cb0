//! Handler für Operationen am Topologie-Rechteck.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Axis;

/// Spiegelt das Rechteck an der vertikalen Mittelachse (links/rechts).
pub fn flip_horizontal(state: &mut AppState) {
    use_cases::flip::flip_topology(state, Axis::Horizontal);
}

/// Spiegelt das Rechteck an der horizontalen Mittelachse (oben/unten).
pub fn flip_vertical(state: &mut AppState) {
    use_cases::flip::flip_topology(state, Axis::Vertical);
}
