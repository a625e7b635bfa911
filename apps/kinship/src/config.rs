//! # Configuration
//!
//! Optional `kinship.toml` settings. A missing default file yields
//! defaults; an explicitly named file must exist; a malformed file is a
//! typed error. CLI flags always override configuration values.

use kinship_core::KinshipError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kinship.toml";

/// Record file used when neither `--file` nor the config names one.
pub const DEFAULT_RECORD_FILE: &str = "family.json";

/// Tree span in each direction when neither flags nor config set one.
pub const DEFAULT_TREE_LEVELS: usize = 2;

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Record file to load when `--file` is not given.
    pub record_file: Option<PathBuf>,
    /// Depth limit for ancestry queries without `--depth`.
    pub default_depth: Option<usize>,
    /// Tree levels upward without `--up`.
    pub tree_up: Option<usize>,
    /// Tree levels downward without `--down`.
    pub tree_down: Option<usize>,
}

impl AppConfig {
    /// Load configuration from an explicit path or the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, KinshipError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.is_file() {
            if required {
                return Err(KinshipError::IoError(format!(
                    "Config file '{}' not found",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            KinshipError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse a TOML configuration document.
    pub fn parse(content: &str) -> Result<Self, KinshipError> {
        toml::from_str(content)
            .map_err(|e| KinshipError::SerializationError(format!("Invalid config: {}", e)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
