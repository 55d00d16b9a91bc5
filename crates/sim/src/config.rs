use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis-aligned box the player is confined to.
///
/// Passed into the update step explicitly so tests can vary the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    /// Half-width of the arena; the side walls sit at `±width`.
    pub width: f32,
    /// Ceiling height.
    pub top: f32,
    /// Floor height.
    pub bottom: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 20.0,
            top: 20.0,
            bottom: -20.0,
        }
    }
}

/// Player motion tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Thrust impulse along the ship heading, units/s².
    pub thrust: f32,
    /// Straight-up thrust impulse, units/s².
    pub thrust_up: f32,
    /// Heading rotation rate, rad/s.
    pub rotate_speed: f32,
    /// Per-axis speed above which velocity decays.
    pub velocity_limit: f32,
    /// Minimum upward speed after a floor bounce.
    pub min_bounce_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            thrust: 20.0,
            thrust_up: 20.0,
            rotate_speed: 3.0,
            velocity_limit: 25.0,
            min_bounce_speed: 7.0,
        }
    }
}

/// Complete game configuration, loadable from a YAML file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bounds: WorldBounds,
    pub tuning: PlayerTuning,
}

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl GameConfig {
    /// Load a configuration from a YAML file. Missing fields take their
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_yaml::from_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arena() {
        let config = GameConfig::default();
        assert_eq!(config.bounds.width, 20.0);
        assert_eq!(config.bounds.top, 20.0);
        assert_eq!(config.bounds.bottom, -20.0);
        assert_eq!(config.tuning.thrust, 20.0);
        assert_eq!(config.tuning.rotate_speed, 3.0);
        assert_eq!(config.tuning.min_bounce_speed, 7.0);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: GameConfig = serde_yaml::from_str(
            "bounds:\n  width: 12.5\ntuning:\n  velocity_limit: 40.0\n",
        )
        .unwrap();
        assert_eq!(config.bounds.width, 12.5);
        assert_eq!(config.bounds.top, 20.0);
        assert_eq!(config.tuning.velocity_limit, 40.0);
        assert_eq!(config.tuning.thrust, 20.0);
    }

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config: GameConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
