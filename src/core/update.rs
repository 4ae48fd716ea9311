//! The apply flow.
//!
//! Given a validated [`Plan`] and the loaded [`Payload`], writes the vault
//! target first and the cloud target second. The first failure stops the
//! run; whatever was already written stays written.

use tracing::{debug, info};

use crate::core::cloud::{SecretStore, UpdateOutcome};
use crate::core::payload::Payload;
use crate::core::plan::{CloudTarget, Plan};
use crate::core::types::Operation;
use crate::core::vault::{self, DocumentVault};
use crate::error::Result;

/// Opens the backends a plan needs, only when it needs them.
pub trait Connect {
    fn vault(&self) -> Result<Box<dyn DocumentVault>>;
    fn store(&self, target: &CloudTarget) -> Result<Box<dyn SecretStore>>;
}

/// One completed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Document { vault: String, operation: Operation },
    Secret(UpdateOutcome),
}

/// Apply `plan`. A dry-run plan returns immediately without connecting.
///
/// `on_step` is called after each mutation succeeds, so callers can report
/// progress that survives a later failure.
pub fn apply(
    plan: &Plan,
    payload: &Payload,
    connect: &dyn Connect,
    on_step: &mut dyn FnMut(Step),
) -> Result<()> {
    if plan.is_dry_run() {
        debug!("dry run, nothing applied");
        return Ok(());
    }

    if let Some(target) = &plan.vault {
        let client = connect.vault()?;
        vault::write_documents(client.as_ref(), target, &plan.file, &mut |name| {
            on_step(Step::Document {
                vault: name.to_string(),
                operation: target.operation,
            })
        })?;
    }

    if let Some(target) = &plan.cloud {
        let store = connect.store(target)?;
        let outcome = update_secret(store.as_ref(), target, payload)?;
        on_step(Step::Secret(outcome));
    }

    Ok(())
}

/// Overwrite the target secret with the payload, resolving its ARN first
/// when the target asks for it.
pub fn update_secret(
    store: &dyn SecretStore,
    target: &CloudTarget,
    payload: &Payload,
) -> Result<UpdateOutcome> {
    let secret_id = if target.lookup_arn {
        store.lookup_arn(&target.secret)?
    } else {
        target.secret.clone()
    };

    info!(env = %target.env, len = payload.len(), "updating secret value");
    store.update(&secret_id, payload)
}
