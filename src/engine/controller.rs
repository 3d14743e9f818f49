//! Color engine controller
//!
//! Owns the state, the catalog and the RNG, and applies events one at a time.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::config::Catalog;

use super::event::{transition, ColorEvent, EngineError};
use super::state::ColorState;

/// Color engine
pub struct ColorEngine {
    state: ColorState,
    catalog: Catalog,
    rng: StdRng,
}

impl ColorEngine {
    /// Create engine with an OS-seeded RNG
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create engine with a fixed seed
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        Self {
            state: ColorState::new(),
            catalog,
            rng,
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply an event
    ///
    /// On error the current state is kept.
    pub fn apply(&mut self, event: ColorEvent) -> Result<&ColorState, EngineError> {
        match transition(&self.state, &event, &self.catalog, &mut self.rng) {
            Ok(next) => {
                debug!(
                    "{:?} -> rgb=({}, {}, {}) background={} text={} gradient={}",
                    event,
                    next.red,
                    next.green,
                    next.blue,
                    next.background_color,
                    next.text_color,
                    next.is_gradient
                );
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                warn!("Rejected {:?}: {}", event, e);
                Err(e)
            }
        }
    }
}
