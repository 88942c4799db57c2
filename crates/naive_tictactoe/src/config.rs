//! Game configuration: player markers and restart delay.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Marker shown on tiles the human took.
pub const MARKER_USER: &str = "X";

/// Marker shown on tiles the computer took.
pub const MARKER_COMPUTER: &str = "O";

/// Pause between the end of a round and the automatic restart.
pub const RESTART_DELAY_MS: u64 = 3000;

/// Display and timing settings for a board controller.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Content placed in a tile the human marks.
    #[serde(default = "default_marker_user")]
    marker_user: String,

    /// Content placed in a tile the computer marks.
    #[serde(default = "default_marker_computer")]
    marker_computer: String,

    /// Milliseconds to wait before restarting a finished round.
    #[serde(default = "default_restart_delay_ms")]
    restart_delay_ms: u64,
}

fn default_marker_user() -> String {
    MARKER_USER.to_string()
}

fn default_marker_computer() -> String {
    MARKER_COMPUTER.to_string()
}

fn default_restart_delay_ms() -> u64 {
    RESTART_DELAY_MS
}

impl GameConfig {
    /// Creates a configuration with custom markers and the default delay.
    pub fn new(marker_user: impl Into<String>, marker_computer: impl Into<String>) -> Self {
        Self {
            marker_user: marker_user.into(),
            marker_computer: marker_computer.into(),
            restart_delay_ms: RESTART_DELAY_MS,
        }
    }

    /// Overrides the restart delay.
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Restart delay as a [`Duration`].
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            marker_user = %config.marker_user,
            marker_computer = %config.marker_computer,
            restart_delay_ms = config.restart_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MARKER_USER, MARKER_COMPUTER)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
