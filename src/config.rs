use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::rules::ScoringRules;

/// Default config file looked up next to the binary's working directory
pub const DEFAULT_CONFIG_PATH: &str = "islands.toml";

/// Board sizes offered by the GUI
pub const BOARD_SIZES: [usize; 3] = [5, 11, 25];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side length of the board for the first game
    pub board_size: usize,
    /// Start in simulated mode, with the computer playing both sides
    pub simulated: bool,
    /// Delay between simulated moves
    pub simulation_interval_ms: u64,
    pub scoring: ScoringRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_size: 5,
            simulated: false,
            simulation_interval_ms: 250,
            scoring: ScoringRules::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if self.simulation_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "simulation_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn simulation_interval(&self) -> Duration {
        Duration::from_millis(self.simulation_interval_ms)
    }
}
