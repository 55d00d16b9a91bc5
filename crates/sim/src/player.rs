use crate::config::{PlayerTuning, WorldBounds};
use bouncebox_common::Transform;
use bouncebox_input::PlayerInput;
use bouncebox_scene::Kinematics;
use glam::Vec3;

/// Canonical start position the reset input returns the player to.
pub const START_POSITION: Vec3 = Vec3::ZERO;

/// Velocity damping applied on a side-wall hit.
const WALL_DAMP_X: f32 = 0.8;
const WALL_DAMP_Y: f32 = 0.95;
/// Decay factor applied per frame to any axis over the speed limit.
const CLAMP_DECAY: f32 = 0.99;

/// Ship heading derived from the z rotation: nose-up at rest, rotating
/// left tilts the nose toward -X.
fn heading(rotation_z: f32) -> Vec3 {
    Vec3::new(-rotation_z.sin(), rotation_z.cos(), 0.0)
}

/// Advance the player one frame.
///
/// Steps run in a fixed order, each visible to the next: reset, input
/// impulses, Euler integration, then three independent boundary checks
/// (side walls, floor, ceiling) and a per-axis speed clamp. A boundary
/// violation rolls the position back to its pre-integration value rather
/// than clamping to the boundary, so the checks are not mutually
/// exclusive: a corner hit rolls back twice with compounding velocity
/// edits in a single frame.
pub fn step_player(
    transform: &mut Transform,
    kinematics: &mut Kinematics,
    input: &PlayerInput,
    bounds: &WorldBounds,
    tuning: &PlayerTuning,
    dt: f32,
) {
    // Reset applies before integration; reset and thrust held in the same
    // frame both take effect.
    if input.reset {
        transform.position = START_POSITION;
        kinematics.velocity = Vec3::ZERO;
    }

    // Input impulses are additive and independent.
    if input.rotate_left {
        transform.rotation.z += tuning.rotate_speed * dt;
    }
    if input.rotate_right {
        transform.rotation.z -= tuning.rotate_speed * dt;
    }
    if input.thrust {
        kinematics.velocity += heading(transform.rotation.z) * tuning.thrust * dt;
    }
    if input.thrust_up {
        kinematics.velocity.y += tuning.thrust_up * dt;
    }

    let old_position = transform.position;
    transform.position += kinematics.velocity * dt;

    let scale = transform.scale;
    let vel = &mut kinematics.velocity;

    // Side walls: reverse and damp, full rollback.
    if transform.position.x.abs() + scale.x > bounds.width {
        vel.x *= -WALL_DAMP_X;
        vel.y *= WALL_DAMP_Y;
        transform.position = old_position;
    }

    // Floor: reverse, enforce a minimum bounce speed, full rollback.
    if transform.position.y - scale.y < bounds.bottom {
        vel.y = -vel.y;
        // TODO: confirm whether the minimum-speed boost should apply only
        // when the pre-bounce velocity pointed downward; today it fires
        // whenever the reflected velocity is below the minimum.
        if vel.y < tuning.min_bounce_speed {
            vel.y = tuning.min_bounce_speed;
        }
        transform.position = old_position;
    }

    // Ceiling: reverse, full rollback.
    if transform.position.y + scale.y > bounds.top {
        vel.y = -vel.y;
        transform.position = old_position;
    }

    // Speed clamp: per-axis exponential decay toward the limit, never a
    // hard clamp.
    if vel.x.abs() > tuning.velocity_limit {
        vel.x *= CLAMP_DECAY;
    }
    if vel.y.abs() > tuning.velocity_limit {
        vel.y *= CLAMP_DECAY;
    }
    if vel.z.abs() > tuning.velocity_limit {
        vel.z *= CLAMP_DECAY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn player_at(position: Vec3, velocity: Vec3) -> (Transform, Kinematics) {
        let transform = Transform {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(0.5),
        };
        (transform, Kinematics { velocity })
    }

    fn step(
        transform: &mut Transform,
        kinematics: &mut Kinematics,
        input: &PlayerInput,
    ) {
        step_player(
            transform,
            kinematics,
            input,
            &WorldBounds::default(),
            &PlayerTuning::default(),
            DT,
        );
    }

    #[test]
    fn free_flight_integrates_exactly() {
        let velocity = Vec3::new(1.0, 2.0, 0.0);
        let (mut t, mut k) = player_at(Vec3::new(3.0, -4.0, 0.0), velocity);
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(t.position, Vec3::new(3.0, -4.0, 0.0) + velocity * DT);
        assert_eq!(k.velocity, velocity);
    }

    #[test]
    fn reset_restores_defaults_regardless_of_prior_state() {
        let (mut t, mut k) = player_at(Vec3::new(17.0, -12.0, 0.0), Vec3::new(9.0, -9.0, 1.0));
        let input = PlayerInput {
            reset: true,
            ..PlayerInput::default()
        };
        step(&mut t, &mut k, &input);
        assert_eq!(t.position, START_POSITION);
        assert_eq!(k.velocity, Vec3::ZERO);
    }

    #[test]
    fn reset_and_thrust_both_apply_in_one_frame() {
        // Reset runs before the impulse and integration, so a thrust held
        // in the same frame still moves the ship off the start position.
        let (mut t, mut k) = player_at(Vec3::new(10.0, 5.0, 0.0), Vec3::new(-3.0, 0.0, 0.0));
        let input = PlayerInput {
            reset: true,
            thrust_up: true,
            ..PlayerInput::default()
        };
        step(&mut t, &mut k, &input);
        let expected_vy = PlayerTuning::default().thrust_up * DT;
        assert_eq!(k.velocity, Vec3::new(0.0, expected_vy, 0.0));
        assert_eq!(t.position, Vec3::new(0.0, expected_vy * DT, 0.0));
    }

    #[test]
    fn wall_bounce_rolls_back_and_damps() {
        // Already past the right wall: one step rolls position back to the
        // pre-update value and flips x velocity scaled by 0.8.
        let bounds = WorldBounds::default();
        let start_x = bounds.width + 0.1;
        let (mut t, mut k) = player_at(Vec3::new(start_x, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(t.position.x, start_x);
        assert_eq!(k.velocity.x, 2.0_f32 * -0.8);
        assert_eq!(k.velocity.x, -1.6);
    }

    #[test]
    fn wall_bounce_damps_vertical_velocity() {
        let (mut t, mut k) =
            player_at(Vec3::new(-20.1, 0.0, 0.0), Vec3::new(-2.0, 4.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.x, 1.6);
        assert_eq!(k.velocity.y, 4.0_f32 * 0.95);
    }

    #[test]
    fn floor_bounce_enforces_minimum_speed() {
        // Post-negation vertical velocity below the minimum is forced to
        // exactly that minimum.
        let (mut t, mut k) =
            player_at(Vec3::new(0.0, -19.9, 0.0), Vec3::new(0.0, -3.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.y, 7.0);
        assert_eq!(t.position.y, -19.9);
    }

    #[test]
    fn fast_floor_bounce_keeps_its_speed() {
        let (mut t, mut k) =
            player_at(Vec3::new(0.0, -19.9, 0.0), Vec3::new(0.0, -12.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.y, 12.0);
    }

    #[test]
    fn ceiling_bounce_reverses_and_rolls_back() {
        let (mut t, mut k) = player_at(Vec3::new(0.0, 19.9, 0.0), Vec3::new(0.0, 5.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.y, -5.0);
        assert_eq!(t.position.y, 19.9);
    }

    #[test]
    fn clamp_decays_instead_of_hard_clamping() {
        let (mut t, mut k) = player_at(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.x, 30.0_f32 * 0.99);
        assert!(k.velocity.x > PlayerTuning::default().velocity_limit);
    }

    #[test]
    fn clamp_applies_per_axis_independently() {
        let (mut t, mut k) = player_at(Vec3::ZERO, Vec3::new(30.0, 1.0, -30.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(k.velocity.x, 30.0_f32 * 0.99);
        assert_eq!(k.velocity.y, 1.0);
        assert_eq!(k.velocity.z, -30.0_f32 * 0.99);
    }

    #[test]
    fn corner_hit_runs_both_checks() {
        // Wall and floor both violated: the wall check damps x and y, then
        // the floor check negates and boosts y. Both roll back to the same
        // pre-update position.
        let (mut t, mut k) =
            player_at(Vec3::new(20.1, -19.9, 0.0), Vec3::new(3.0, -2.0, 0.0));
        step(&mut t, &mut k, &PlayerInput::default());
        assert_eq!(t.position, Vec3::new(20.1, -19.9, 0.0));
        assert_eq!(k.velocity.x, 3.0_f32 * -0.8);
        // y: -2.0 * 0.95 = -1.9, negated to 1.9, boosted to the minimum.
        assert_eq!(k.velocity.y, 7.0);
    }

    #[test]
    fn thrust_follows_the_heading() {
        let tuning = PlayerTuning::default();
        let (mut t, mut k) = player_at(Vec3::ZERO, Vec3::ZERO);
        let input = PlayerInput {
            thrust: true,
            ..PlayerInput::default()
        };
        step(&mut t, &mut k, &input);
        // Nose-up at rest: thrust is straight +Y.
        assert_relative_eq!(k.velocity.y, tuning.thrust * DT);
        assert_relative_eq!(k.velocity.x, 0.0);
    }

    #[test]
    fn rotation_tilts_the_thrust_vector() {
        let (mut t, mut k) = player_at(Vec3::ZERO, Vec3::ZERO);
        t.rotation.z = std::f32::consts::FRAC_PI_2;
        let input = PlayerInput {
            thrust: true,
            ..PlayerInput::default()
        };
        step(&mut t, &mut k, &input);
        // Rotated a quarter turn left: thrust points toward -X.
        assert!(k.velocity.x < 0.0);
        assert_relative_eq!(k.velocity.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_inputs_are_additive_with_thrust() {
        let tuning = PlayerTuning::default();
        let (mut t, mut k) = player_at(Vec3::ZERO, Vec3::ZERO);
        let input = PlayerInput {
            rotate_left: true,
            thrust_up: true,
            ..PlayerInput::default()
        };
        step(&mut t, &mut k, &input);
        assert_relative_eq!(t.rotation.z, tuning.rotate_speed * DT);
        assert_relative_eq!(k.velocity.y, tuning.thrust_up * DT);
    }

    #[test]
    fn zero_dt_is_a_no_op_for_free_flight() {
        let (mut t, mut k) = player_at(Vec3::new(1.0, 1.0, 0.0), Vec3::new(5.0, 5.0, 0.0));
        step_player(
            &mut t,
            &mut k,
            &PlayerInput::default(),
            &WorldBounds::default(),
            &PlayerTuning::default(),
            0.0,
        );
        assert_eq!(t.position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(k.velocity, Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn bounds_are_configuration_not_globals() {
        let bounds = WorldBounds {
            width: 2.0,
            top: 2.0,
            bottom: -2.0,
        };
        let (mut t, mut k) = player_at(Vec3::new(1.9, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        step_player(
            &mut t,
            &mut k,
            &PlayerInput::default(),
            &bounds,
            &PlayerTuning::default(),
            DT,
        );
        // 1.9 + 0.5 > 2.0 after any forward motion: bounce in the small arena.
        assert_eq!(t.position.x, 1.9);
        assert_eq!(k.velocity.x, -0.8);
    }
}
