//! Password-manager target.
//!
//! [`DocumentVault`] is the narrow interface to the password manager; the
//! 1Password CLI implementation lives in [`op`].

pub mod op;

use std::path::Path;

use tracing::info;

use crate::core::plan::VaultTarget;
use crate::core::types::Operation;
use crate::error::{Result, UsageError};

/// Something that stores files as document items.
pub trait DocumentVault {
    /// Overwrite the document item titled `title` in `vault` with `file`.
    fn edit_document(&self, vault: &str, title: &str, file: &Path) -> Result<()>;

    /// Create a new document item in `vault` from `file`.
    fn create_document(&self, vault: &str, title: Option<&str>, file: &Path) -> Result<()>;
}

/// Write `file` to every vault of `target`, in order.
///
/// Stops at the first failure. Vaults written before it stay written;
/// `on_written` has been called for each of them.
pub fn write_documents(
    client: &dyn DocumentVault,
    target: &VaultTarget,
    file: &Path,
    on_written: &mut dyn FnMut(&str),
) -> Result<()> {
    for vault in &target.vaults {
        info!(vault = %vault, operation = %target.operation, "writing document");
        match target.operation {
            Operation::Edit => {
                let title = target.title.as_deref().ok_or(UsageError::MissingTitle)?;
                client.edit_document(vault, title, file)?;
            }
            Operation::Create => {
                client.create_document(vault, target.title.as_deref(), file)?;
            }
        }
        on_written(vault);
    }
    Ok(())
}
