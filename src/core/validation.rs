//! Input validation.
//!
//! Turns raw option values into a [`Plan`]. Runs before any file or network
//! access; on failure nothing has been touched.

use std::path::PathBuf;

use tracing::debug;

use crate::core::plan::{CloudTarget, Plan, RegionSource, VaultTarget};
use crate::core::types::{Environment, Operation};
use crate::error::UsageError;

/// Which command is being validated.
///
/// Each mode has its own required option set and target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `secret`: cloud only, region from the profile, secret used as given.
    Secret,
    /// `aws-secrets-manager`: cloud only, explicit region, ARN looked up.
    SecretsManager,
    /// `1password`: password manager only.
    OnePassword,
    /// Root command: password manager, then cloud.
    Combined,
}

impl Mode {
    fn required(&self) -> &'static str {
        match self {
            Self::Secret | Self::SecretsManager => "-e, -f, -s",
            Self::OnePassword => "-v, -t, -f",
            Self::Combined => "-f, -v, -t, -e, -s",
        }
    }

    fn has_cloud(&self) -> bool {
        !matches!(self, Self::OnePassword)
    }

    fn has_vault(&self) -> bool {
        matches!(self, Self::OnePassword | Self::Combined)
    }
}

/// Raw option values as given on the command line. Empty means unset.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub apply: bool,
    pub reveal: bool,
    pub env: String,
    pub file: String,
    pub secret: String,
    pub profile: String,
    /// Region flag; `None` defers to the config file or the default.
    pub region: Option<String>,
    pub vault: String,
    pub title: String,
    pub operation: String,
}

/// Validate options for `mode` and build the plan.
///
/// # Errors
///
/// Returns the first `UsageError` found, in this order: required options,
/// environment name, profile consistency, operation, title, vault list.
pub fn validate(mode: Mode, opts: &Options) -> Result<Plan, UsageError> {
    check_required(mode, opts)?;

    let cloud = if mode.has_cloud() {
        Some(cloud_target(mode, opts)?)
    } else {
        None
    };

    let vault = if mode.has_vault() {
        Some(vault_target(opts)?)
    } else {
        None
    };

    let plan = Plan {
        file: PathBuf::from(&opts.file),
        apply: opts.apply,
        reveal: opts.reveal,
        vault,
        cloud,
    };
    debug!(?mode, apply = plan.apply, "plan validated");
    Ok(plan)
}

fn check_required(mode: Mode, opts: &Options) -> Result<(), UsageError> {
    let mut missing = opts.file.is_empty();
    if mode.has_cloud() {
        missing |= opts.env.is_empty() || opts.secret.is_empty();
    }
    if mode.has_vault() {
        missing |= opts.vault.is_empty();
    }

    if missing {
        return Err(UsageError::MissingOptions(mode.required()));
    }
    Ok(())
}

fn cloud_target(mode: Mode, opts: &Options) -> Result<CloudTarget, UsageError> {
    let env = parse_environment(&opts.env)?;
    check_profile(env, &opts.profile)?;

    let region = match mode {
        Mode::Secret => RegionSource::Profile,
        _ => match opts.region.as_deref() {
            Some(region) if !region.is_empty() => RegionSource::Explicit(region.to_string()),
            _ => RegionSource::Default,
        },
    };

    Ok(CloudTarget {
        env,
        profile: opts.profile.clone(),
        region,
        secret: opts.secret.clone(),
        lookup_arn: mode != Mode::Secret,
    })
}

fn vault_target(opts: &Options) -> Result<VaultTarget, UsageError> {
    let operation = parse_operation(&opts.operation)?;
    let title = Some(opts.title.clone()).filter(|t| !t.is_empty());

    if operation == Operation::Edit && title.is_none() {
        return Err(UsageError::MissingTitle);
    }

    let vaults = split_vaults(&opts.vault);
    if vaults.is_empty() {
        return Err(UsageError::NoVaults);
    }
    if operation == Operation::Create && vaults.len() > 1 {
        return Err(UsageError::MultipleVaultsForCreate(opts.vault.clone()));
    }

    Ok(VaultTarget {
        vaults,
        title,
        operation,
    })
}

/// Parse an environment name.
pub fn parse_environment(name: &str) -> Result<Environment, UsageError> {
    name.parse()
        .map_err(|_| UsageError::InvalidEnvironment(name.to_string()))
}

/// Parse an operation name. Empty means the default, `edit`.
pub fn parse_operation(name: &str) -> Result<Operation, UsageError> {
    if name.is_empty() {
        return Ok(Operation::Edit);
    }
    name.parse()
        .map_err(|_| UsageError::InvalidOperation(name.to_string()))
}

/// Require the credential profile name to contain the environment name.
///
/// Guards against pushing a `prd` secret with `dev` credentials. An empty
/// profile never matches.
pub fn check_profile(env: Environment, profile: &str) -> Result<(), UsageError> {
    if profile.is_empty() || !profile.contains(env.as_str()) {
        return Err(UsageError::ProfileMismatch {
            env: env.to_string(),
            profile: profile.to_string(),
        });
    }
    Ok(())
}

/// Split a comma-separated vault list, dropping blank entries.
pub fn split_vaults(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}
