use bouncebox_scene::Scene;
use glam::Vec3;
use std::fmt::Write;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, -40.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene and a view configuration and produces its
/// output; it never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given scene.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless output: one line per scene object.
///
/// Used by the CLI and by tests that want to observe the scene without a
/// GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene ({} objects) eye=({:.1}, {:.1}, {:.1}) fov={:.0} ===",
            scene.objects().len(),
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.fov_degrees
        );
        for object in scene.objects() {
            let p = object.transform.position;
            let s = object.transform.scale;
            let _ = writeln!(
                out,
                "  {:<16} {:?} pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2})",
                object.name, object.mesh, p.x, p.y, p.z, s.x, s.y, s.z
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_lists_every_object() {
        let scene = Scene::arena(20.0, 20.0, -20.0);
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("6 objects"));
        assert!(output.contains("player"));
        assert!(output.contains("side_bouncer_l"));
        assert!(output.contains("bottom_bouncer"));
    }

    #[test]
    fn render_view_default_looks_at_origin() {
        let view = RenderView::default();
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 45.0);
    }
}
