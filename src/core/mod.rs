//! Core engine types: card handles, RNG, configuration.

pub mod handle;
pub mod rng;
pub mod config;

pub use handle::CardHandle;
pub use rng::{GameRng, GameRngState};
pub use config::{BoardSize, GameConfig, MAX_CARDS, MIN_CARDS};
