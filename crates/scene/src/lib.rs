//! Fixed scene composition: a flat list of hand-declared objects.
//!
//! The scene is built once at start-up and never grows or shrinks at
//! runtime. Objects reference shared primitive meshes by handle; the
//! geometry itself lives with whichever renderer consumes the scene, so an
//! object can never outlive its mesh.
//!
//! # Invariants
//! - The object list is append-only during construction and frozen after.
//! - Only the player object's transform mutates per frame.

use bouncebox_common::{Tint, Transform};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Handle referencing one of the fixed primitive meshes.
///
/// The mesh set is closed: these six primitives are all the geometry the
/// demo ever draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshHandle {
    Line,
    Box,
    Quad,
    Pyramid,
    Triangle,
    /// Three colored coordinate-axis lines through the origin.
    Axis,
}

impl MeshHandle {
    /// All handles, in draw order.
    pub const ALL: [MeshHandle; 6] = [
        MeshHandle::Line,
        MeshHandle::Box,
        MeshHandle::Quad,
        MeshHandle::Pyramid,
        MeshHandle::Triangle,
        MeshHandle::Axis,
    ];

    /// Whether this mesh is drawn as a line list rather than triangles.
    pub fn is_lines(self) -> bool {
        matches!(self, MeshHandle::Line | MeshHandle::Axis)
    }
}

/// Velocity component for objects that integrate motion.
///
/// Kept separate from [`SceneObject`] so static decorations carry no motion
/// state at all; only the player composes one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematics {
    pub velocity: Vec3,
}

/// A positioned, scaled, tinted object bound to a shared mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub mesh: MeshHandle,
    pub transform: Transform,
    pub tint: Tint,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: MeshHandle, transform: Transform) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform,
            tint: Tint::WHITE,
        }
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }
}

/// The fixed object list plus the index of the player object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    objects: Vec<SceneObject>,
    player: usize,
}

/// Tint shared by all four bouncer walls.
const BOUNCER_TINT: Tint = Tint::new(0.9, 0.4, 0.4, 1.0);

impl Scene {
    /// Build the demo arena: coordinate axis, player ship, four bouncers.
    ///
    /// The bouncers outline an axis-aligned box `width` wide with its floor
    /// at `bottom` and ceiling at `top`; those values should match the
    /// bounds the simulation is configured with.
    pub fn arena(width: f32, top: f32, bottom: f32) -> Self {
        let wall = Vec3::new(1.0, 20.0, 1.0);
        let slab = Vec3::new(20.0, 1.0, 1.0);

        let objects = vec![
            SceneObject::new("axis", MeshHandle::Axis, Transform::default()),
            SceneObject::new("player", MeshHandle::Box, Transform::at(Vec3::ZERO))
                .with_rotation(Vec3::new(0.0, -90_f32.to_radians(), 0.0))
                .with_scale(Vec3::splat(0.5))
                .with_tint(Tint::new(0.5, 0.9, 0.4, 1.0)),
            SceneObject::new(
                "side_bouncer_l",
                MeshHandle::Box,
                Transform::at(Vec3::new(-width, 0.0, 0.0)),
            )
            .with_scale(wall)
            .with_tint(BOUNCER_TINT),
            SceneObject::new(
                "side_bouncer_r",
                MeshHandle::Box,
                Transform::at(Vec3::new(width, 0.0, 0.0)),
            )
            .with_scale(wall)
            .with_tint(BOUNCER_TINT),
            SceneObject::new(
                "top_bouncer",
                MeshHandle::Box,
                Transform::at(Vec3::new(0.0, top, 0.0)),
            )
            .with_scale(slab)
            .with_tint(BOUNCER_TINT),
            SceneObject::new(
                "bottom_bouncer",
                MeshHandle::Box,
                Transform::at(Vec3::new(0.0, bottom, 0.0)),
            )
            .with_scale(slab)
            .with_tint(BOUNCER_TINT),
        ];
        tracing::debug!(objects = objects.len(), "scene built");

        Self { objects, player: 1 }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn player(&self) -> &SceneObject {
        &self.objects[self.player]
    }

    pub fn player_mut(&mut self) -> &mut SceneObject {
        &mut self.objects[self.player]
    }

    /// Look an object up by name.
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }
}
