//! Turnout Topology Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{
    Axis, Camera2D, ConnectionPoint, Flippable, Orientation, RailPoint, Scene, TopologyRectangle,
};
pub use shared::{EditorOptions, RenderQuality, RenderScene};
