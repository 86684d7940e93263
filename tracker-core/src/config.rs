//! Optional user configuration at `<home>/.tracker/config.yaml`.
//!
//! ```yaml
//! templates: /path/to/template/overrides
//! log: debug
//! ```
//!
//! Every loader has an `_at(home: &Path)` form; the no-arg wrapper derives
//! home from `dirs::home_dir()`. Tests must use the `_at` forms.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "warn";

fn default_log() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Directory of `*.html` template overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log")]
    pub log: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            templates: None,
            log: default_log(),
        }
    }
}

/// `<home>/.tracker/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".tracker").join("config.yaml")
}

/// Load the config, falling back to defaults when the file is absent.
pub fn load_at(home: &Path) -> Result<TrackerConfig, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(TrackerConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<TrackerConfig, ConfigError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_path_is_correct() {
        let home = TempDir::new().expect("tempdir");
        assert!(config_path_at(home.path()).ends_with(".tracker/config.yaml"));
    }

    #[test]
    fn missing_file_yields_default() {
        let home = TempDir::new().expect("tempdir");
        let config = load_at(home.path()).expect("load");
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(ConfigError::HomeNotFound.to_string().contains("home directory"));
    }
}
