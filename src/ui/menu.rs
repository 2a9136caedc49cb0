//! Top-Menü (File, Edit, Item, View, Help).

use crate::app::{AppIntent, AppState, RenderQuality};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Select All (Ctrl+A)").clicked() {
                    events.push(AppIntent::SelectAllRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.selected_count() > 0,
                        egui::Button::new("Clear Selection (Esc)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Item", |ui| {
                if ui.button("Flip horizontal (Ctrl+H)").clicked() {
                    events.push(AppIntent::FlipHorizontalRequested);
                    ui.close();
                }

                if ui.button("Flip vertical (Ctrl+J)").clicked() {
                    events.push(AppIntent::FlipVerticalRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                ui.menu_button("Render Quality", |ui| {
                    let quality = state.view.render_quality;

                    for (label, option) in [
                        ("Low", RenderQuality::Low),
                        ("Medium", RenderQuality::Medium),
                        ("High", RenderQuality::High),
                    ] {
                        if ui.selectable_label(quality == option, label).clicked() {
                            events.push(AppIntent::RenderQualityChanged { quality: option });
                            ui.close();
                        }
                    }
                });
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Turnout Topology Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
