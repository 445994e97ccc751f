//! Simulation configuration resource.
//!
//! Loaded from an INI file. Missing keys keep their defaults, so an empty
//! or absent file still yields a runnable configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! delta = 0.016
//! ticks = 600
//! seed = 42
//!
//! [arena]
//! width = 640
//! height = 360
//!
//! [collision]
//! rules = ./collision_rules.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u32 = 600;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_ARENA_WIDTH: f32 = 640.0;
const DEFAULT_ARENA_HEIGHT: f32 = 360.0;
const DEFAULT_RULES_PATH: &str = "./collision_rules.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Fixed frame delta in seconds.
    pub delta: f32,
    /// Number of frames the headless run simulates.
    pub ticks: u32,
    /// Seed for the demo scene's velocity jitter.
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    /// JSON file holding the collision rule table.
    pub rules_path: PathBuf,
    /// Path to the configuration file itself.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            ticks: DEFAULT_TICKS,
            seed: DEFAULT_SEED,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(ConfigError::Load)?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        if let Some(delta) = config.getfloat("simulation", "delta").ok().flatten() {
            self.delta = delta as f32;
        }
        if let Some(ticks) = config.getuint("simulation", "ticks").ok().flatten() {
            self.ticks = ticks as u32;
        }
        if let Some(seed) = config.getuint("simulation", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(width) = config.getfloat("arena", "width").ok().flatten() {
            self.arena_width = width as f32;
        }
        if let Some(height) = config.getfloat("arena", "height").ok().flatten() {
            self.arena_height = height as f32;
        }
        if let Some(rules) = config.get("collision", "rules") {
            self.rules_path = PathBuf::from(rules);
        }

        info!(
            "Loaded config: delta={}, ticks={}, seed={}, arena={}x{}, rules={:?}",
            self.delta, self.ticks, self.seed, self.arena_width, self.arena_height, self.rules_path
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.ticks, 600);
        assert_eq!(c.rules_path, PathBuf::from("./collision_rules.json"));
        assert_eq!(c.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let mut c = GameConfig::new();
        c.load_from_str("[simulation]\nticks = 30\n\n[collision]\nrules = level1.json\n")
            .unwrap();
        assert_eq!(c.ticks, 30);
        assert_eq!(c.rules_path, PathBuf::from("level1.json"));
        assert_eq!(c.seed, 42);
        assert_eq!(c.arena_width, 640.0);
    }

    #[test]
    fn test_malformed_value_keeps_default() {
        let mut c = GameConfig::new();
        c.load_from_str("[simulation]\nticks = lots\n").unwrap();
        assert_eq!(c.ticks, 600);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path("./no/such/config.ini");
        assert!(matches!(c.load_from_file(), Err(ConfigError::Load(_))));
    }
}
