//! Shared types for the bouncebox demo: transforms and color tints.

pub mod types;

pub use types::{Tint, Transform};
