//! Input events and the transition function

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Catalog;

use super::state::{Channel, ColorState};

/// User input, as produced by the UI or the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorEvent {
    /// A slider moved
    SliderChange { channel: Channel, value: u8 },
    /// A preset button was clicked
    ApplyPreset { index: usize },
    /// A gradient button was clicked
    ApplyGradient { index: usize },
    /// Random color
    Randomize,
    /// Back to the default blue
    Reset,
}

/// Engine failure; the state is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no preset at index {0}")]
    UnknownPreset(usize),
    #[error("no gradient at index {0}")]
    UnknownGradient(usize),
    #[error("preset `{name}` has malformed background `{value}`")]
    MalformedPreset { name: String, value: String },
}

/// Compute the state that follows `event`
pub fn transition<R: Rng>(
    state: &ColorState,
    event: &ColorEvent,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ColorState, EngineError> {
    let mut next = state.clone();

    match *event {
        ColorEvent::SliderChange { channel, value } => next.set_channel(channel, value),
        ColorEvent::ApplyPreset { index } => {
            let preset = catalog.preset(index).ok_or(EngineError::UnknownPreset(index))?;
            next.apply_preset(preset)?;
        }
        ColorEvent::ApplyGradient { index } => {
            let gradient = catalog
                .gradient(index)
                .ok_or(EngineError::UnknownGradient(index))?;
            next.apply_gradient(gradient);
        }
        ColorEvent::Randomize => next.randomize(rng),
        ColorEvent::Reset => next.reset(),
    }

    Ok(next)
}
