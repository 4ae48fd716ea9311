//! Optional configuration file.
//!
//! Holds defaults that would otherwise be typed on every run:
//!
//! ```toml
//! [aws]
//! region = "ap-northeast-1"
//!
//! [onepassword]
//! cli = "/usr/local/bin/op"
//! ```
//!
//! Command-line flags always take precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::{CONFIG_DIR, CONFIG_ENV, CONFIG_FILE};
use crate::error::{ConfigError, Result};

/// Parsed configuration. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub onepassword: OnePasswordConfig,
}

/// `[aws]` section.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct AwsConfig {
    /// Region used when `-r` is not given.
    pub region: Option<String>,
}

/// `[onepassword]` section.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct OnePasswordConfig {
    /// Path to the `op` binary.
    pub cli: Option<PathBuf>,
}

impl Config {
    /// Find and load the configuration file.
    ///
    /// Lookup order: `UPDATE_SECRETS_CONFIG`, `./.update-secrets.toml`, then
    /// `update-secrets/config.toml` under the user config directory. No file
    /// means defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or if `UPDATE_SECRETS_CONFIG` names a missing file.
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Path of the configuration file that [`Config::load`] would read.
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Load a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Region from the `[aws]` section, if set and non-empty.
    pub fn region(&self) -> Option<&str> {
        self.aws.region.as_deref().filter(|r| !r.is_empty())
    }

    /// `op` binary from the `[onepassword]` section.
    pub fn op_cli(&self) -> Option<&Path> {
        self.onepassword.cli.as_deref()
    }
}
