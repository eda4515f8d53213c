//! Engine configuration.
//!
//! Settings load in three layers: built-in defaults, an optional
//! `wayfarer.toml` in the working directory, then `WAYFARER_*` environment
//! overrides. A missing config file is normal; a malformed one is reported
//! and ignored. None of these values alter state-machine behavior.

use std::env;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional configuration file searched for at startup.
pub const CONFIG_FILE: &str = "wayfarer.toml";

/// Narrowest width at which the menu rule lines still read as rules.
pub const MIN_DISPLAY_WIDTH: usize = 20;

/// Problems that make a configuration unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("display_width must be at least {min} columns (got {got})")]
    DisplayWidthTooSmall { min: usize, got: usize },
    #[error("max_input_length must be nonzero")]
    ZeroInputLength,
    #[error("command_history_size must be nonzero")]
    ZeroHistorySize,
}

/// Runtime settings for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game_name: String,
    pub display_width: usize,
    pub use_colors: bool,
    pub clear_screen_on_start: bool,
    pub max_input_length: usize,
    pub command_history_size: usize,
    pub debug_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_name: "Wayfarer".to_string(),
            display_width: 60,
            use_colors: true,
            clear_screen_on_start: true,
            max_input_length: 1000,
            command_history_size: 100,
            debug_mode: false,
        }
    }
}

impl GameConfig {
    /// Load configuration: defaults, then `wayfarer.toml` if present, then
    /// environment overrides.
    pub fn load() -> Self {
        let mut config = Self::from_file(Path::new(CONFIG_FILE));
        config.apply_env_overrides();
        config
    }

    /// Read a config file, falling back to defaults when it is absent,
    /// unreadable, or malformed.
    pub fn from_file(path: &Path) -> Self {
        if !path.exists() {
            info!("no config file at '{}', using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("configuration loaded from '{}'", path.display());
                    config
                },
                Err(err) => {
                    warn!("failed to parse '{}': {err} -- using defaults", path.display());
                    Self::default()
                },
            },
            Err(err) => {
                warn!("failed to read '{}': {err} -- using defaults", path.display());
                Self::default()
            },
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(flag) = env_flag("WAYFARER_USE_COLORS") {
            self.use_colors = flag;
        }
        if let Some(flag) = env_flag("WAYFARER_DEBUG") {
            self.debug_mode = flag;
        }
    }

    /// Check that the loaded values are usable.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width < MIN_DISPLAY_WIDTH {
            return Err(ConfigError::DisplayWidthTooSmall {
                min: MIN_DISPLAY_WIDTH,
                got: self.display_width,
            });
        }
        if self.max_input_length == 0 {
            return Err(ConfigError::ZeroInputLength);
        }
        if self.command_history_size == 0 {
            return Err(ConfigError::ZeroHistorySize);
        }
        Ok(())
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|value| parse_flag(&value))
}

/// Read common truthy spellings; anything else is off.
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = GameConfig::from_file(Path::new("/nonexistent/wayfarer.toml"));
        assert_eq!(config.display_width, GameConfig::default().display_width);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "display_width = 72\nuse_colors = false\n").unwrap();
        let config = GameConfig::from_file(&path);
        assert_eq!(config.display_width, 72);
        assert!(!config.use_colors);
        assert_eq!(config.max_input_length, 1000);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "display_width = \"wide\"\n").unwrap();
        let config = GameConfig::from_file(&path);
        assert_eq!(config.display_width, GameConfig::default().display_width);
    }

    #[test]
    fn zero_limits_rejected() {
        let mut config = GameConfig::default();
        config.max_input_length = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInputLength));

        let mut config = GameConfig::default();
        config.command_history_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistorySize));

        let mut config = GameConfig::default();
        config.display_width = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DisplayWidthTooSmall { got: 10, .. })
        ));
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
