//! Game settings
//!
//! Play-field dimensions, tick timing, RNG seed and gameplay tuning. Loaded
//! from a JSON file on native builds; every field is optional.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::tuning::Tuning;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Rectangular play field `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl PlayBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the field (ship spawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point is inside the field. The far edges are exclusive, so a
    /// point sitting exactly on `x = width` has left the field.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field dimensions shared by wrap and spawn logic
    pub bounds: PlayBounds,
    /// Tick source period in milliseconds
    pub tick_period_ms: u64,
    /// Maximum ticks run per `Game::advance` call
    pub max_substeps: u32,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: PlayBounds::default(),
            tick_period_ms: TICK_PERIOD_MS,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Tick period as a duration
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check that the settings describe a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.to_string()))
        };
        let t = &self.tuning;

        if !(self.bounds.width.is_finite() && self.bounds.width > 0.0)
            || !(self.bounds.height.is_finite() && self.bounds.height > 0.0)
        {
            return invalid("play bounds must be positive");
        }
        if self.tick_period_ms == 0 {
            return invalid("tick period must be non-zero");
        }
        if self.max_substeps == 0 {
            return invalid("max substeps must be non-zero");
        }
        if t.asteroid_speed.0 == 0 || t.asteroid_speed.0 > t.asteroid_speed.1 {
            return invalid("asteroid speed range is empty or starts at zero");
        }
        if t.asteroid_size.0 == 0 || t.asteroid_size.0 > t.asteroid_size.1 {
            return invalid("asteroid size range is empty or starts at zero");
        }
        // Rejection sampling needs room outside the ship spawn box
        let min_side = self.bounds.width.min(self.bounds.height);
        if t.ship_size + t.max_asteroid_size() >= min_side {
            return invalid("play bounds too small for ship spawn box and asteroids");
        }
        if t.starting_lives == 0 {
            return invalid("starting lives must be non-zero");
        }
        if !(t.ship_friction > 0.0 && t.ship_friction <= 1.0) {
            return invalid("ship friction must be in (0, 1]");
        }
        if t.ship_max_speed <= 0.0 || t.bullet_speed <= 0.0 {
            return invalid("ship max speed and bullet speed must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bounds, PlayBounds::new(800.0, 800.0));
        assert_eq!(settings.tick_period(), Duration::from_millis(10));
        assert_eq!(settings.tuning.asteroid_floor, 5);
        assert_eq!(settings.tuning.starting_lives, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 42, "tuning": { "starting_lives": 5 } }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tuning.starting_lives, 5);
        assert_eq!(settings.tuning.bullet_speed, 10.0);
        assert_eq!(settings.bounds.width, 800.0);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Settings::from_json(r#"{ "tick_period_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err =
            Settings::from_json(r#"{ "bounds": { "width": 30.0, "height": 800.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "tuning": { "asteroid_size": [30, 10] } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/vector-asteroids.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bounds_contains_far_edge_exclusive() {
        let bounds = PlayBounds::default();
        assert!(bounds.contains(Vec2::new(0.0, 0.0)));
        assert!(bounds.contains(Vec2::new(799.9, 400.0)));
        assert!(!bounds.contains(Vec2::new(800.0, 400.0)));
        assert!(!bounds.contains(Vec2::new(400.0, -0.1)));
        assert_eq!(bounds.center(), Vec2::new(400.0, 400.0));
    }
}
