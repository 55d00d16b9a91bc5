//! Renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the scene; draw state derives from scene + view.
//!
//! The trait is the stable seam: the GPU backend and the debug text backend
//! both implement it, so the CLI and tests can render without a window.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
