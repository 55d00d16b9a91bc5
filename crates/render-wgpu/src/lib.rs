//! wgpu render backend for the bouncebox demo.
//!
//! Draws each scene object as one primitive mesh + model transform + tint.
//! The camera orbits the origin on two spherical angles driven by keys.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - Mesh geometry is uploaded once at start-up and owned here, so scene
//!   objects (which hold only handles) can never outlive their meshes.

mod camera;
mod gpu;
mod primitives;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
