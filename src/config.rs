use std::path::Path;

use tracing::warn;

use crate::ai::MctsConfig;
use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Settings for `--simulate` runs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Games played per pairing.
    pub games_per_matchup: usize,
    /// Seed for the random and greedy pickers; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        SimulateConfig {
            games_per_matchup: 10,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: MctsConfig,
    pub simulate: SimulateConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width == 0 || self.game.width > MAX_WIDTH {
            return Err(ConfigError::Validation(format!(
                "game.width must be in [1, {MAX_WIDTH}]"
            )));
        }
        if self.game.height == 0 || self.game.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "game.height must be in [1, {MAX_HEIGHT}]"
            )));
        }
        if !self.search.time_budget_secs.is_finite() || self.search.time_budget_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "search.time_budget_secs must be > 0".into(),
            ));
        }
        if self.search.max_iterations == Some(0) {
            return Err(ConfigError::Validation(
                "search.max_iterations must be >= 1".into(),
            ));
        }
        if !self.search.exploration.is_finite() || self.search.exploration <= 0.0 {
            return Err(ConfigError::Validation(
                "search.exploration must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.search.random_move_prob) {
            return Err(ConfigError::Validation(
                "search.random_move_prob must be in [0, 1]".into(),
            ));
        }
        if self.simulate.games_per_matchup == 0 {
            return Err(ConfigError::Validation(
                "simulate.games_per_matchup must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
