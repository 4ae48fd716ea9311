//! Resolved invocation parameters.
//!
//! A [`Plan`] is built once by the validator and passed by reference through
//! the loader, the updaters and the reporter. Nothing mutates it afterwards.

use std::path::PathBuf;

use crate::core::types::{Environment, Operation};

/// Everything one invocation will do.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// File whose contents become the secret value.
    pub file: PathBuf,
    /// Perform the mutation instead of previewing it.
    pub apply: bool,
    /// Show unmasked identifiers and payload text in the preview.
    pub reveal: bool,
    /// Password-manager target, if any.
    pub vault: Option<VaultTarget>,
    /// Cloud secret target, if any.
    pub cloud: Option<CloudTarget>,
}

impl Plan {
    pub fn is_dry_run(&self) -> bool {
        !self.apply
    }
}

/// Where the AWS region comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSource {
    /// Given on the command line.
    Explicit(String),
    /// The config file's region, else the built-in default.
    Default,
    /// Read from the selected profile in the shared AWS config.
    Profile,
}

/// A Secrets Manager entry to overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudTarget {
    pub env: Environment,
    pub profile: String,
    pub region: RegionSource,
    /// Secret name or ARN.
    pub secret: String,
    /// Resolve `secret` to its ARN before updating.
    pub lookup_arn: bool,
}

/// Document item(s) to write in the password manager.
#[derive(Debug, Clone, PartialEq)]
pub struct VaultTarget {
    /// Vaults in the order given; edit mode writes each in turn.
    pub vaults: Vec<String>,
    pub title: Option<String>,
    pub operation: Operation,
}
