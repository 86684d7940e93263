//! Error types for tracker-core.
//!
//! The registry itself has no failure modes; errors only arise at the input
//! boundary and while loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// A form field that failed its validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    Title,

    #[error("description must be at least {min_length} characters")]
    Description { min_length: usize },

    #[error("people must be a whole number between {min} and {max}")]
    People { min: i64, max: i64 },
}

/// All errors that can arise from loading `~/.tracker/config.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load, with the offending path.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
