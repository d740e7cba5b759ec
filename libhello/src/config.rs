//! Configuration management for Hello Reducer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::state::{AppState, INITIAL_AGE, INITIAL_NAME};

const DEFAULT_TICK_RATE_MS: u64 = 100;

/// A zero poll timeout would spin the event loop
pub const MIN_TICK_RATE_MS: u64 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial: InitialConfig,
    pub ui: UiConfig,
}

/// Values the store starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConfig {
    pub name: String,
    pub age: u32,
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Use colors?
    pub colors: bool,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            name: INITIAL_NAME.to_string(),
            age: INITIAL_AGE,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            colors: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; the built-in defaults are used.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply environment overrides
    ///
    /// `NO_COLOR` / `HELLO_TUI_NO_COLOR` turn colors off, `HELLO_TUI_TICK_MS`
    /// replaces the tick rate when it parses. The resulting tick rate is
    /// never below `MIN_TICK_RATE_MS`, whichever source it came from.
    pub fn apply_env(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some()
            || std::env::var_os("HELLO_TUI_NO_COLOR").is_some()
        {
            self.ui.colors = false;
        }

        if let Some(tick_rate_ms) = std::env::var("HELLO_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        self.ui.tick_rate_ms = self.ui.tick_rate_ms.max(MIN_TICK_RATE_MS);

        self
    }

    /// State the store is created with
    pub fn initial_state(&self) -> AppState {
        AppState::with(self.initial.name.clone(), self.initial.age)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("HELLO_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("hello-reducer").join("config.toml"))
}
