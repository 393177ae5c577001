// Player configuration - every tunable the movement core reads
//
// Units are per second. Screen space: +x is right, +y is down, so an upward
// jump has a negative vertical velocity.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while building or loading a player configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("jump_power must point upward (negative), got {0}")]
    JumpNotUpward(f32),

    #[error("frame_count must be at least 1")]
    NoFrames,

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Movement, ability and animation constants for the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    // Movement
    /// Downward acceleration (units/second²)
    pub gravity: f32,
    /// Horizontal run speed (units/second)
    pub speed: f32,
    /// Vertical velocity applied by a ground jump (negative = up)
    pub jump_power: f32,
    /// Double jump velocity as a multiple of `jump_power`
    pub double_jump_multiplier: f32,

    // Dash
    /// Dash velocity as a multiple of `speed`
    pub dash_speed_multiplier: f32,
    /// How long the dash velocity is held (seconds, 0 = trigger tick only)
    pub dash_duration: f32,

    // Cooldowns (seconds)
    pub dash_cooldown: f32,
    pub double_jump_cooldown: f32,

    // World
    /// Y coordinate the player's bottom edge rests on
    pub ground_y: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    // Dimensions
    pub width: f32,
    pub height: f32,

    // Timing
    /// Largest delta a single step will integrate (seconds)
    pub max_step: f32,

    // Animation
    /// Number of frames in the walk cycle
    pub frame_count: usize,
    /// Time spent on each walk frame (seconds)
    pub frame_duration: f32,
}

/// Defaults tuned for a 60 Hz display: 0.3 px/frame² gravity,
/// 2.5 px/frame run speed, -7 px/frame jump, 6 px/frame dash.
pub const DEFAULT_CONFIG: PlayerConfig = PlayerConfig {
    gravity: 1080.0,
    speed: 150.0,
    jump_power: -420.0,
    double_jump_multiplier: 1.2,

    dash_speed_multiplier: 2.4,
    dash_duration: 0.1,

    dash_cooldown: 5.0,
    double_jump_cooldown: 15.0,

    ground_y: 580.0,
    spawn_x: 100.0,
    spawn_y: 300.0,

    width: 48.0,
    height: 48.0,

    max_step: 0.05,

    frame_count: 4,
    frame_duration: 0.15,
};

impl Default for PlayerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl PlayerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PlayerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Horizontal speed of a dash (always positive)
    pub fn dash_speed(&self) -> f32 {
        self.speed * self.dash_speed_multiplier
    }

    /// Vertical velocity applied by a double jump
    pub fn double_jump_power(&self) -> f32 {
        self.jump_power * self.double_jump_multiplier
    }

    /// Check every value before it can reach the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("speed", self.speed),
            ("jump_power", self.jump_power),
            ("double_jump_multiplier", self.double_jump_multiplier),
            ("dash_speed_multiplier", self.dash_speed_multiplier),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("double_jump_cooldown", self.double_jump_cooldown),
            ("ground_y", self.ground_y),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("width", self.width),
            ("height", self.height),
            ("max_step", self.max_step),
            ("frame_duration", self.frame_duration),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("speed", self.speed),
            ("double_jump_multiplier", self.double_jump_multiplier),
            ("dash_speed_multiplier", self.dash_speed_multiplier),
            ("dash_duration", self.dash_duration),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let positive = [
            ("dash_cooldown", self.dash_cooldown),
            ("double_jump_cooldown", self.double_jump_cooldown),
            ("width", self.width),
            ("height", self.height),
            ("max_step", self.max_step),
            ("frame_duration", self.frame_duration),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.jump_power >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_power));
        }
        if self.frame_count == 0 {
            return Err(ConfigError::NoFrames);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_derived_speeds() {
        let config = PlayerConfig::default();
        assert!((config.dash_speed() - 360.0).abs() < 1e-3);
        assert!((config.double_jump_power() - -504.0).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_nan_gravity() {
        let config = PlayerConfig {
            gravity: f32::NAN,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = PlayerConfig {
            speed: -1.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "speed", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_cooldown() {
        let config = PlayerConfig {
            dash_cooldown: 0.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "dash_cooldown", .. })
        ));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let config = PlayerConfig {
            jump_power: 7.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::JumpNotUpward(_))));
    }

    #[test]
    fn test_rejects_empty_walk_cycle() {
        let config = PlayerConfig {
            frame_count: 0,
            ..PlayerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoFrames)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PlayerConfig::from_toml_str("speed = 200.0\ndash_cooldown = 3.0\n").unwrap();
        assert_eq!(config.speed, 200.0);
        assert_eq!(config.dash_cooldown, 3.0);
        assert_eq!(config.gravity, DEFAULT_CONFIG.gravity);
        assert_eq!(config.frame_count, DEFAULT_CONFIG.frame_count);
    }

    #[test]
    fn test_toml_values_are_validated() {
        let result = PlayerConfig::from_toml_str("double_jump_cooldown = -2.0\n");
        assert!(matches!(result, Err(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = PlayerConfig::from_toml_str("speed = \"fast\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PlayerConfig::load("does/not/exist/player.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::NotPositive {
            field: "width",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "width must be greater than zero, got 0");
    }
}
