//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Items: {}", state.item_count()));

            ui.separator();

            let item = state.scene.topology();
            let orientations: Vec<&str> = item
                .rail_point()
                .connection_points()
                .iter()
                .map(|cp| cp.orientation().label())
                .collect();
            ui.label(format!("Connections: {}", orientations.join(" / ")));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            ui.label(format!("Selected Items: {}", state.selected_count()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
