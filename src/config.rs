//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lectkit/lectkit.toml`
//! 3. Explicit config file passed on the command line
//! 4. Environment variables: `LECTKIT_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{ConfigError, ConfigResult};

/// How depth-first walks are carried out.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Explicit stack, safe for arbitrarily deep inputs
    #[default]
    Iterative,
    /// Plain recursion, bounded by the thread's stack
    Recursive,
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::Iterative => write!(f, "iterative"),
            TraversalMode::Recursive => write!(f, "recursive"),
        }
    }
}

impl FromStr for TraversalMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iterative" => Ok(TraversalMode::Iterative),
            "recursive" => Ok(TraversalMode::Recursive),
            other => Err(ConfigError::Environment(format!(
                "unknown traversal mode: {}",
                other
            ))),
        }
    }
}

/// Unified configuration for lectkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// File used by `file write`/`file read` when no path is given
    pub data_file: PathBuf,
    /// Whether `graph` builds a directed graph unless told otherwise
    pub directed: bool,
    /// Depth-first strategy for tree and graph walks
    pub traversal: TraversalMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("example.txt"),
            directed: false,
            traversal: TraversalMode::Iterative,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub directed: Option<bool>,
    pub traversal: Option<TraversalMode>,
}

/// Get the XDG config directory for lectkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lectkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lectkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ConfigResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn override_value<T: DeserializeOwned>(config: &Config, key: &str) -> ConfigResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ConfigError::Environment(format!(
            "LECTKIT_{}: {}",
            key.to_uppercase(),
            e
        ))),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay
                .data_file
                .clone()
                .unwrap_or_else(|| self.data_file.clone()),
            directed: overlay.directed.unwrap_or(self.directed),
            traversal: overlay.traversal.unwrap_or(self.traversal),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        debug!("settings: {:?}", current);
        Ok(current)
    }

    /// Load from a single file on top of the defaults, ignoring global config and env.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply LECTKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("LECTKIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ConfigError::Environment(e.to_string()))?;
        Self::apply_overrides(settings, &config)
    }

    /// Overlay the keys present in `config`; a present but malformed value is an error.
    fn apply_overrides(mut settings: Self, config: &Config) -> ConfigResult<Self> {
        if let Some(val) = override_value::<String>(config, "data_file")? {
            settings.data_file = PathBuf::from(val);
        }
        if let Some(val) = override_value::<bool>(config, "directed")? {
            settings.directed = val;
        }
        if let Some(val) = override_value::<String>(config, "traversal")? {
            settings.traversal = val.parse()?;
        }
        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<settings>"),
            message: e.to_string(),
        })
    }
}
