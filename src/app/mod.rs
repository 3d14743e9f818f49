//! Application module
//!
//! Contains the main egui application.

mod picker_app;

pub use picker_app::PickerApp;
