//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks the board and session are made of.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::BoardConfig;
pub use error::{ConfigError, GameError, IllegalWordReason, SelectionError};
