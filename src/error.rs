//! Error types for update-secrets.
//!
//! Each concern has its own error enum; [`Error`] wraps them so every
//! operation returns the same [`Result`]. The binary decides the exit code
//! from the top-level variant.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::cloud::ServiceErrorKind;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Cloud(#[from] CloudError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Usage errors are reported but are not process failures.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

/// Invalid or missing command-line input, detected before any I/O.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("You must set [{0}] options.")]
    MissingOptions(&'static str),

    #[error("available env name is [dev, stg, prd]")]
    InvalidEnvironment(String),

    #[error("env name inconsistent with AWS profile")]
    ProfileMismatch { env: String, profile: String },

    #[error("available operation is [edit, create]")]
    InvalidOperation(String),

    #[error("Set title of item with [-t] option.")]
    MissingTitle,

    #[error("no vault name given in [-v] option")]
    NoVaults,

    #[error("create operation takes a single vault, got: {0}")]
    MultipleVaultsForCreate(String),
}

/// Failure to load the payload file.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure talking to the cloud secret store.
#[derive(Error, Debug)]
pub enum CloudError {
    /// A service error with a recognized error code.
    #[error("{kind} {message}")]
    Service {
        kind: ServiceErrorKind,
        message: String,
    },

    /// Anything the SDK reports that has no recognized code.
    #[error("{0}")]
    Sdk(String),

    #[error("no region configured for AWS profile '{0}'")]
    RegionUnresolved(String),

    #[error("secret lookup returned no ARN for {0}")]
    MissingArn(String),

    #[error("failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Failure invoking the password-manager CLI.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("op CLI not found (install 1Password CLI or set UPDATE_SECRETS_OP_PATH)")]
    NotFound,

    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and failed; `output` is its combined stdout and stderr.
    #[error("{output}")]
    CommandFailed { vault: String, output: String },
}

/// Problems with the optional configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
