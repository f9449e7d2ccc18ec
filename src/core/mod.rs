//! Core engine types: RNG, run configuration, errors.
//!
//! These are shared by every other module. Game content (cards, monsters)
//! lives in its own modules; the core only knows how a run is configured.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{
    RarityWeights, RunConfig, Tier, TierBand, TierTable, HAND_SIZE, STARTING_ENERGY,
    STARTING_HEALTH, WIN_LEVEL,
};
pub use error::{ActionRejected, ConfigError};
