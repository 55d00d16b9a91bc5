//! Simulation core: the player update step and the per-frame game advance.
//!
//! # Invariants
//! - The update step is total: any finite `dt >= 0` and any flag
//!   combination produce a defined result, with no failure paths.
//! - Boundary checks are independent and run unconditionally every frame.
//! - World bounds and speed limits are explicit configuration, never
//!   compiled-in globals.

pub mod config;
pub mod game;
pub mod player;

pub use config::{ConfigError, GameConfig, PlayerTuning, WorldBounds};
pub use game::Game;
pub use player::step_player;
