//! Motor Configuration
//!
//! Designer-tunable parameters for the character motor. The values are fixed
//! for a session; the only runtime change is the crouch speed profile, which
//! the motor tracks separately from this struct.
//!
//! Configurations can be stored as JSON. Missing fields fall back to the
//! defaults, and every load is validated before it is handed to the motor.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::LayerMask;

/// Tunable parameters for [`CharacterMotor`](crate::player::CharacterMotor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Pointer sensitivity (degrees per pointer unit per second of step).
    pub sensitivity: f32,
    /// Extra scale applied on top of `sensitivity`.
    pub sensitivity_multiplier: f32,
    /// Fixed per-step time unit used to scale pointer deltas (seconds).
    pub fixed_timestep: f32,

    /// Scale of the drive force applied from movement input.
    pub move_speed: f32,
    /// Horizontal speed cap while standing (units per second).
    pub max_speed: f32,
    /// Damping factor for residual velocity on undriven axes.
    pub counter_movement: f32,
    /// Steepest walkable surface, in degrees from world up.
    pub max_slope_angle: f32,
    /// Downward bias force per second of tick, keeps the body pressed to slopes.
    pub down_bias: f32,

    /// Scale of the jump force pair.
    pub jump_force: f32,
    /// Seconds before another jump is allowed.
    pub jump_cooldown: f32,

    /// Body scale while crouched.
    pub crouch_scale: Vec3,
    /// Vertical shift applied on crouch engage and release.
    pub crouch_offset: f32,

    /// Contact layers treated as ground.
    pub ground_mask: LayerMask,
    /// Grounded decay window, in physics ticks.
    pub ground_decay_steps: f32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            sensitivity: 50.0,
            sensitivity_multiplier: 1.0,
            fixed_timestep: 0.02,

            move_speed: 4500.0,
            max_speed: 10.0,
            counter_movement: 0.175,
            max_slope_angle: 35.0,
            down_bias: 10.0,

            jump_force: 150.0,
            jump_cooldown: 0.25,

            crouch_scale: Vec3::new(1.0, 0.5, 1.0),
            crouch_offset: 0.5,

            ground_mask: LayerMask::ALL,
            ground_decay_steps: 3.0,
        }
    }
}

impl MotorConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MotorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded motor config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pointer scale per raw delta unit: sensitivity × fixed step × multiplier.
    #[inline]
    pub fn look_scale(&self) -> f32 {
        self.sensitivity * self.fixed_timestep * self.sensitivity_multiplier
    }

    /// Check that every tunable is finite and in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("sensitivity", self.sensitivity),
            ("sensitivity_multiplier", self.sensitivity_multiplier),
            ("fixed_timestep", self.fixed_timestep),
            ("move_speed", self.move_speed),
            ("max_speed", self.max_speed),
            ("counter_movement", self.counter_movement),
            ("down_bias", self.down_bias),
            ("jump_force", self.jump_force),
            ("jump_cooldown", self.jump_cooldown),
            ("crouch_offset", self.crouch_offset),
            ("ground_decay_steps", self.ground_decay_steps),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(ConfigError::invalid(field, "must not be negative"));
            }
        }

        if !self.max_slope_angle.is_finite() || !(0.0..=180.0).contains(&self.max_slope_angle) {
            return Err(ConfigError::invalid(
                "max_slope_angle",
                "must be between 0 and 180 degrees",
            ));
        }

        if !self.crouch_scale.is_finite() || self.crouch_scale.cmple(Vec3::ZERO).any() {
            return Err(ConfigError::invalid(
                "crouch_scale",
                "components must be finite and positive",
            ));
        }

        Ok(())
    }
}

/// Errors raised while loading a [`MotorConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The JSON was malformed or had wrong field types.
    Json(serde_json::Error),
    /// A field held a value the motor cannot run with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        log::warn!("rejected motor config: {field} {reason}");
        ConfigError::Invalid { field, reason }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MotorConfig::default();
        assert_eq!(config.sensitivity, 50.0);
        assert_eq!(config.move_speed, 4500.0);
        assert_eq!(config.max_speed, 10.0);
        assert_eq!(config.counter_movement, 0.175);
        assert_eq!(config.max_slope_angle, 35.0);
        assert_eq!(config.jump_force, 150.0);
        assert_eq!(config.jump_cooldown, 0.25);
        assert_eq!(config.crouch_scale, Vec3::new(1.0, 0.5, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_look_scale() {
        let config = MotorConfig::default();
        // 50 * 0.02 * 1.0
        assert!((config.look_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MotorConfig::from_json_str(r#"{ "max_speed": 12.5, "ground_mask": 1 }"#)
            .unwrap();
        assert_eq!(config.max_speed, 12.5);
        assert_eq!(config.ground_mask, LayerMask::from_bits(1));
        assert_eq!(config.jump_force, 150.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = MotorConfig::default();
        config.crouch_scale = Vec3::new(1.0, 0.6, 1.0);
        let json = config.to_json_string().unwrap();
        let parsed = MotorConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_json() {
        match MotorConfig::from_json_str("{ max_speed: }") {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_speed_rejected() {
        match MotorConfig::from_json_str(r#"{ "max_speed": -1.0 }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "max_speed"),
            other => panic!("expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_slope_out_of_range_rejected() {
        let config = MotorConfig {
            max_slope_angle: 200.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_crouch_scale_rejected() {
        let config = MotorConfig {
            crouch_scale: Vec3::new(1.0, 0.0, 1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("character_motor_missing_config.json");
        let _ = std::fs::remove_file(&path);
        match MotorConfig::load(&path) {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("character_motor_config_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("motor.json");
        std::fs::write(&path, r#"{ "jump_cooldown": 0.5 }"#).unwrap();

        let config = MotorConfig::load(&path).unwrap();
        assert_eq!(config.jump_cooldown, 0.5);
    }
}
