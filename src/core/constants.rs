//! Constants used throughout update-secrets.
//!
//! Centralizes magic strings and default values.

/// Region used when neither `-r` nor the config file names one.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// Project-local configuration file name.
pub const CONFIG_FILE: &str = ".update-secrets.toml";

/// Directory under the user config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "update-secrets";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "UPDATE_SECRETS_CONFIG";

/// Environment variable overriding the `op` binary path.
pub const OP_PATH_ENV: &str = "UPDATE_SECRETS_OP_PATH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "UPDATE_SECRETS_LOG";

/// Environment variable selecting the AWS credential profile.
pub const PROFILE_ENV: &str = "AWS_PROFILE";

/// Name of the 1Password CLI binary looked up on `PATH`.
pub const OP_BINARY: &str = "op";

/// Title shown in dry-run output when create mode has no title.
pub const UNSPECIFIED_TITLE: &str = "(not specified)";

/// Width of the label column in dry-run summaries.
pub const LABEL_WIDTH: usize = 11;
