//! Color engine
//!
//! State model, input events and the controller that ties them together.

mod controller;
mod event;
pub mod state;

pub use controller::ColorEngine;
pub use event::*;
pub use state::*;
