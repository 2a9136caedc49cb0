//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FlipHorizontalRequested => vec![AppCommand::FlipItemHorizontal],
        AppIntent::FlipVerticalRequested => vec![AppCommand::FlipItemVertical],
        AppIntent::ItemPickRequested {
            world_pos,
            additive,
        } => {
            let tolerance = state
                .view
                .camera
                .pick_radius_world(state.options.selection_pick_tolerance_px);

            vec![AppCommand::SelectItemAt {
                world_pos,
                tolerance,
                additive,
            }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::BeginMoveSelectedRequested => vec![AppCommand::BeginMoveSelected],
        AppIntent::MoveSelectedRequested { delta_world } => {
            vec![AppCommand::MoveSelected { delta_world }]
        }
        AppIntent::EndMoveSelectedRequested => vec![AppCommand::EndMoveSelected],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::RenderQualityChanged { quality } => {
            vec![AppCommand::SetRenderQuality { quality }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
