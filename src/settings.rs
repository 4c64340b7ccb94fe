//! Game settings and preferences
//!
//! Stored as JSON. Only `push_speed` and `seed` reach the simulation; the
//! rest is handed to whatever front end draws the game.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_PUSH_SPEED, MAX_PUSH_SPEED};

/// MSAA sample counts a front end may request
pub const MSAA_SAMPLE_COUNTS: [u8; 6] = [0, 1, 2, 4, 8, 16];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("push speed must be positive and finite, got {0}")]
    InvalidPushSpeed(f32),
    #[error("unsupported MSAA sample count {0} (expected 0, 1, 2, 4, 8 or 16)")]
    InvalidMsaa(u8),
    #[error("unknown vsync mode {0} (expected -1, 0 or 1)")]
    InvalidVsync(i8),
}

/// Camera projection. Decides the pointer dead margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Perspective => "Perspective",
            ViewMode::Orthographic => "Orthographic",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Perspective => ViewMode::Orthographic,
            ViewMode::Orthographic => ViewMode::Perspective,
        }
    }
}

/// Swap interval, stored as -1 / 0 / 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "i8", into = "i8")]
pub enum VsyncMode {
    Adaptive,
    Off,
    #[default]
    On,
}

impl TryFrom<i8> for VsyncMode {
    type Error = SettingsError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(VsyncMode::Adaptive),
            0 => Ok(VsyncMode::Off),
            1 => Ok(VsyncMode::On),
            other => Err(SettingsError::InvalidVsync(other)),
        }
    }
}

impl From<VsyncMode> for i8 {
    fn from(mode: VsyncMode) -> i8 {
        match mode {
            VsyncMode::Adaptive => -1,
            VsyncMode::Off => 0,
            VsyncMode::On => 1,
        }
    }
}

/// Check a push speed: errors on nonsense, clamps anything above the cap
fn checked_push_speed(speed: f32) -> Result<f32, SettingsError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(SettingsError::InvalidPushSpeed(speed));
    }
    if speed > MAX_PUSH_SPEED {
        log::warn!(
            "push speed {} above maximum, clamping to {}",
            speed,
            MAX_PUSH_SPEED
        );
        return Ok(MAX_PUSH_SPEED);
    }
    Ok(speed)
}

/// The part of the settings the simulation consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Pitch units per second
    pub push_speed: f32,
    /// Fixed seed, or `None` for a fresh one per run
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            push_speed: DEFAULT_PUSH_SPEED,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn new(push_speed: f32, seed: Option<u64>) -> Result<Self, SettingsError> {
        Ok(Self {
            push_speed: checked_push_speed(push_speed)?,
            seed,
        })
    }

    /// Push speed capped at `MAX_PUSH_SPEED`. The fields are public, so a
    /// nonsense value falls back to the default instead of failing.
    pub fn clamped_push_speed(&self) -> f32 {
        match checked_push_speed(self.push_speed) {
            Ok(speed) => speed,
            Err(e) => {
                log::warn!("{}, using {}", e, DEFAULT_PUSH_SPEED);
                DEFAULT_PUSH_SPEED
            }
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting push speed
    pub push_speed: f32,

    // === Display ===
    pub msaa_samples: u8,
    pub vsync: VsyncMode,
    pub view: ViewMode,

    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            push_speed: DEFAULT_PUSH_SPEED,
            msaa_samples: 16,
            vsync: VsyncMode::On,
            view: ViewMode::Perspective,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validated()
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Reject invalid values; clamp an oversized push speed
    pub fn validated(mut self) -> Result<Self, SettingsError> {
        self.push_speed = checked_push_speed(self.push_speed)?;
        if !MSAA_SAMPLE_COUNTS.contains(&self.msaa_samples) {
            return Err(SettingsError::InvalidMsaa(self.msaa_samples));
        }
        Ok(self)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            push_speed: self.push_speed,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.push_speed, 1.6);
        assert_eq!(s.msaa_samples, 16);
        assert_eq!(s.vsync, VsyncMode::On);
        assert_eq!(s.view, ViewMode::Perspective);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "view": "orthographic", "seed": 7 }"#).unwrap();
        assert_eq!(s.view, ViewMode::Orthographic);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.push_speed, DEFAULT_PUSH_SPEED);
        assert_eq!(s.sim_config().seed, Some(7));
    }

    #[test]
    fn test_vsync_codes() {
        let s = Settings::from_json(r#"{ "vsync": -1 }"#).unwrap();
        assert_eq!(s.vsync, VsyncMode::Adaptive);
        let s = Settings::from_json(r#"{ "vsync": 0 }"#).unwrap();
        assert_eq!(s.vsync, VsyncMode::Off);

        assert!(matches!(
            Settings::from_json(r#"{ "vsync": 2 }"#),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            VsyncMode::try_from(5),
            Err(SettingsError::InvalidVsync(5))
        ));
        assert_eq!(i8::from(VsyncMode::Adaptive), -1);
    }

    #[test]
    fn test_push_speed_validation() {
        let s = Settings::from_json(r#"{ "push_speed": 50.0 }"#).unwrap();
        assert_eq!(s.push_speed, MAX_PUSH_SPEED);

        assert!(matches!(
            Settings::from_json(r#"{ "push_speed": 0.0 }"#),
            Err(SettingsError::InvalidPushSpeed(_))
        ));
        assert!(matches!(
            SimConfig::new(f32::NAN, None),
            Err(SettingsError::InvalidPushSpeed(_))
        ));
        assert_eq!(SimConfig::new(40.0, Some(1)).unwrap().push_speed, 32.0);
    }

    #[test]
    fn test_clamped_push_speed() {
        let mut config = SimConfig::default();
        assert_eq!(config.clamped_push_speed(), DEFAULT_PUSH_SPEED);
        config.push_speed = 99.0;
        assert_eq!(config.clamped_push_speed(), MAX_PUSH_SPEED);
        config.push_speed = -2.0;
        assert_eq!(config.clamped_push_speed(), DEFAULT_PUSH_SPEED);
    }

    #[test]
    fn test_msaa_validation() {
        assert!(Settings::from_json(r#"{ "msaa_samples": 4 }"#).is_ok());
        assert!(matches!(
            Settings::from_json(r#"{ "msaa_samples": 3 }"#),
            Err(SettingsError::InvalidMsaa(3))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/coin-pusher.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("coin-pusher.json"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "coin-pusher-settings-{}.json",
            std::process::id()
        ));
        let settings = Settings {
            push_speed: 4.0,
            vsync: VsyncMode::Off,
            seed: Some(99),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(ViewMode::Perspective.toggled(), ViewMode::Orthographic);
        assert_eq!(ViewMode::Orthographic.as_str(), "Orthographic");
    }
}
