use bouncebox_input::CameraInput;
use bouncebox_render::RenderView;
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Debug camera orbiting the origin on two spherical angles.
///
/// `phi` is measured from +Y and `theta` counterclockwise from -Z. Phi is
/// clamped away from the poles to avoid gimbal flip. The angles accumulate
/// across frames; the eye position is recomputed from them every frame.
pub struct OrbitCamera {
    pub theta: f32,
    pub phi: f32,
    pub radius: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub orbit_speed: f32,
}

const PHI_MIN: f32 = 0.1;
const PHI_MAX: f32 = PI - 0.1;

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: PI * 0.40,
            radius: 20.0,
            fov: 0.25 * PI,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 1000.0,
            orbit_speed: 2.0,
        }
    }
}

impl OrbitCamera {
    /// Accumulate orbit input for one frame and re-clamp phi.
    pub fn update(&mut self, input: &CameraInput, dt: f32) {
        if input.orbit_left {
            self.theta -= self.orbit_speed * dt;
        }
        if input.orbit_right {
            self.theta += self.orbit_speed * dt;
        }
        if input.orbit_up {
            self.phi -= self.orbit_speed * dt;
        }
        if input.orbit_down {
            self.phi += self.orbit_speed * dt;
        }
        self.phi = self.phi.clamp(PHI_MIN, PHI_MAX);
    }

    /// Eye position from the spherical angles.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            -self.radius * self.phi.sin() * self.theta.cos(),
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// View description for renderer-agnostic consumers.
    pub fn render_view(&self) -> RenderView {
        RenderView {
            eye: self.eye(),
            target: Vec3::ZERO,
            fov_degrees: self.fov.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn phi_stays_clamped_at_the_poles() {
        let mut cam = OrbitCamera::default();
        let up = CameraInput {
            orbit_up: true,
            ..CameraInput::default()
        };
        for _ in 0..600 {
            cam.update(&up, DT);
            assert!(cam.phi >= PHI_MIN);
        }
        assert_eq!(cam.phi, PHI_MIN);

        let down = CameraInput {
            orbit_down: true,
            ..CameraInput::default()
        };
        for _ in 0..600 {
            cam.update(&down, DT);
            assert!(cam.phi <= PHI_MAX);
        }
        assert_eq!(cam.phi, PHI_MAX);
    }

    #[test]
    fn eye_stays_on_the_orbit_sphere() {
        let mut cam = OrbitCamera::default();
        let input = CameraInput {
            orbit_left: true,
            orbit_up: true,
            ..CameraInput::default()
        };
        for _ in 0..100 {
            cam.update(&input, DT);
            let r = cam.eye().length();
            assert!((r - cam.radius).abs() < 1e-3);
        }
    }

    #[test]
    fn opposite_inputs_cancel() {
        let mut cam = OrbitCamera::default();
        let theta_before = cam.theta;
        let input = CameraInput {
            orbit_left: true,
            orbit_right: true,
            ..CameraInput::default()
        };
        cam.update(&input, DT);
        assert_eq!(cam.theta, theta_before);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = OrbitCamera::default();
        let vp = cam.view_projection();
        assert!(vp.is_finite());
    }
}
