//! Library exports for reuse in integration tests.
/// Per-user application directories.
pub mod app_dirs;
/// Settings file load and save.
pub mod config;
/// Dataset loading and aggregate statistics.
pub mod dataset;
/// Shared egui UI modules.
pub mod egui_app;
/// Feature assembly and the prediction service.
pub mod inference;
/// File-based tracing setup.
pub mod logging;
/// Model artifact loading and the classifier trait.
pub mod model;
