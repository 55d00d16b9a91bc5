use crate::config::GameConfig;
use crate::player::step_player;
use bouncebox_input::PlayerInput;
use bouncebox_scene::{Kinematics, Scene};
use glam::Vec3;

/// Owns the scene, the player's kinematics, and the configuration, and
/// advances them one frame at a time.
///
/// Static objects (axis, bouncers) have no kinematics and are never
/// touched by the update; only the player integrates.
#[derive(Debug, Clone)]
pub struct Game {
    scene: Scene,
    player: Kinematics,
    config: GameConfig,
    frame: u64,
}

impl Game {
    /// Build the demo arena matching the configured bounds.
    pub fn new(config: GameConfig) -> Self {
        let scene = Scene::arena(config.bounds.width, config.bounds.top, config.bounds.bottom);
        Self {
            scene,
            player: Kinematics::default(),
            config,
            frame: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player_position(&self) -> Vec3 {
        self.scene.player().transform.position
    }

    pub fn player_velocity(&self) -> Vec3 {
        self.player.velocity
    }

    /// Advance the game by one frame of elapsed time.
    pub fn update(&mut self, dt: f32, input: &PlayerInput) {
        if input.reset {
            tracing::debug!(frame = self.frame, "player reset");
        }
        let transform = &mut self.scene.player_mut().transform;
        step_player(
            transform,
            &mut self.player,
            input,
            &self.config.bounds,
            &self.config.tuning,
            dt,
        );
        self.frame += 1;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn new_game_is_at_rest() {
        let game = Game::default();
        assert_eq!(game.player_position(), Vec3::ZERO);
        assert_eq!(game.player_velocity(), Vec3::ZERO);
        assert_eq!(game.frame(), 0);
    }

    #[test]
    fn update_advances_the_frame_counter() {
        let mut game = Game::default();
        for _ in 0..10 {
            game.update(DT, &PlayerInput::default());
        }
        assert_eq!(game.frame(), 10);
    }

    #[test]
    fn thrust_moves_only_the_player() {
        let mut game = Game::default();
        let before: Vec<_> = game
            .scene()
            .objects()
            .iter()
            .map(|o| o.transform.position)
            .collect();

        let input = PlayerInput {
            thrust_up: true,
            ..PlayerInput::default()
        };
        for _ in 0..30 {
            game.update(DT, &input);
        }

        assert!(game.player_position().y > 0.0);
        for (object, old) in game.scene().objects().iter().zip(&before) {
            if object.name != "player" {
                assert_eq!(object.transform.position, *old, "{} moved", object.name);
            }
        }
    }

    #[test]
    fn player_stays_inside_the_arena() {
        let mut game = Game::default();
        let input = PlayerInput {
            thrust_up: true,
            ..PlayerInput::default()
        };
        // Thrust at the ceiling for a long while; the bounces must keep the
        // player's center well inside the bounds at every step.
        for _ in 0..3000 {
            game.update(DT, &input);
            let p = game.player_position();
            let bounds = game.config().bounds;
            assert!(p.x.abs() <= bounds.width + 1.0);
            assert!(p.y <= bounds.top + 1.0);
            assert!(p.y >= bounds.bottom - 1.0);
        }
    }

    #[test]
    fn reset_mid_flight_returns_to_start() {
        let mut game = Game::default();
        let thrust = PlayerInput {
            thrust_up: true,
            ..PlayerInput::default()
        };
        for _ in 0..60 {
            game.update(DT, &thrust);
        }
        assert_ne!(game.player_position(), Vec3::ZERO);

        let reset = PlayerInput {
            reset: true,
            ..PlayerInput::default()
        };
        game.update(DT, &reset);
        assert_eq!(game.player_position(), Vec3::ZERO);
        assert_eq!(game.player_velocity(), Vec3::ZERO);
    }
}
