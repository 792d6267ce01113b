//! egui dashboard: state types, controller, and renderer.

pub mod controller;
pub mod state;
pub mod ui;
