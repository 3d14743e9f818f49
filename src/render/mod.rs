//! Render module
//!
//! Contains backdrop painting for solid colors and gradients.

mod backdrop;

pub use backdrop::{gradient_mesh, hex_to_color32, BackdropRenderer};
