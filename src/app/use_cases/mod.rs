//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod flip;
pub mod selection;
pub mod viewport;
