//! Polled input for the bouncebox demo.
//!
//! A fixed set of bindings, no remapping. The windowing layer feeds
//! press/release edges into [`InputState`]; the simulation and camera read
//! boolean-per-binding snapshots once per frame.
//!
//! # Invariants
//! - Snapshots are plain data; consumers never see raw key events.
//! - The binding set is closed (no runtime remapping).

pub mod state;

pub use state::{Binding, CameraInput, InputState, PlayerInput};
