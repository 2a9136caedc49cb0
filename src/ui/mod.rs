//! UI-Komponenten: Menü, Status-Bar, Optionen-Dialog, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert die UI-Komponenten (Menüs, Panels, Dialoge).
/// Keyboard-Shortcuts und Maus-Input sind in eigene Module extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
