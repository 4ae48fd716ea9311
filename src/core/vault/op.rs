//! 1Password CLI (`op`) integration.
//!
//! Shells out to the locally installed `op` binary. Authentication is the
//! binary's business; a failing invocation surfaces its combined output.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::DocumentVault;
use crate::core::constants::{OP_BINARY, OP_PATH_ENV};
use crate::error::{Result, VaultError};

/// Client that runs the `op` binary.
#[derive(Debug, Clone)]
pub struct OpCli {
    program: PathBuf,
}

impl OpCli {
    /// Use an explicit binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the `op` binary.
    ///
    /// Checks `UPDATE_SECRETS_OP_PATH` first, then `configured` (from the
    /// config file), then searches `PATH`.
    pub fn locate(configured: Option<&Path>) -> Result<Self> {
        if let Some(path) = std::env::var_os(OP_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::new(path));
        }
        if let Some(path) = configured {
            return Ok(Self::new(path));
        }

        which::which(OP_BINARY)
            .map(Self::new)
            .map_err(|_| VaultError::NotFound.into())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run `op` with `args`; on failure return its combined output.
    fn run(&self, vault: &str, args: Vec<OsString>) -> Result<()> {
        debug!(program = %self.program.display(), ?args, "running op");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| VaultError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(VaultError::CommandFailed {
            vault: vault.to_string(),
            output: combined.trim_end().to_string(),
        }
        .into())
    }
}

/// Arguments for `op edit document`.
pub fn edit_args(vault: &str, title: &str, file: &Path) -> Vec<OsString> {
    vec![
        "edit".into(),
        "document".into(),
        title.into(),
        file.into(),
        "--vault".into(),
        vault.into(),
    ]
}

/// Arguments for `op create document`.
pub fn create_args(vault: &str, title: Option<&str>, file: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "create".into(),
        "document".into(),
        file.into(),
        "--vault".into(),
        vault.into(),
    ];
    if let Some(title) = title {
        args.push("--title".into());
        args.push(title.into());
    }
    args
}

impl DocumentVault for OpCli {
    fn edit_document(&self, vault: &str, title: &str, file: &Path) -> Result<()> {
        self.run(vault, edit_args(vault, title, file))
    }

    fn create_document(&self, vault: &str, title: Option<&str>, file: &Path) -> Result<()> {
        self.run(vault, create_args(vault, title, file))
    }
}
