//! Shared flow behind every update command.
//!
//! validate → load config and payload → resolve region → preview or apply.

use tracing::info;

use crate::cli::output;
use crate::core::cloud::aws::{self, AwsSecretStore};
use crate::core::cloud::SecretStore;
use crate::core::config::Config;
use crate::core::payload::Payload;
use crate::core::plan::CloudTarget;
use crate::core::report::{mask_secret_ref, Summary};
use crate::core::update::{self, Connect, Step};
use crate::core::validation::{self, Mode, Options};
use crate::core::vault::op::OpCli;
use crate::core::vault::DocumentVault;
use crate::error::Result;

/// Real backends: the `op` binary and AWS Secrets Manager.
struct Live<'a> {
    config: &'a Config,
    region: Option<String>,
}

impl Connect for Live<'_> {
    fn vault(&self) -> Result<Box<dyn DocumentVault>> {
        let client = OpCli::locate(self.config.op_cli())?;
        info!(program = %client.program().display(), "using op CLI");
        Ok(Box::new(client))
    }

    fn store(&self, target: &CloudTarget) -> Result<Box<dyn SecretStore>> {
        let region = match &self.region {
            Some(region) => region.clone(),
            None => aws::resolve_region(target, self.config.region())?,
        };
        Ok(Box::new(AwsSecretStore::connect(&target.profile, &region)?))
    }
}

/// Run one update command.
pub fn run(mode: Mode, opts: Options) -> Result<()> {
    let plan = validation::validate(mode, &opts)?;
    let config = Config::load()?;
    let payload = Payload::load(&plan.file)?;

    let region = match &plan.cloud {
        Some(target) => Some(aws::resolve_region(target, config.region())?),
        None => None,
    };

    if plan.is_dry_run() {
        if let Some(target) = &plan.vault {
            output::summary(&Summary::vault(&plan, target));
        }
        if let (Some(target), Some(region)) = (&plan.cloud, &region) {
            output::summary(&Summary::cloud(&plan, target, region, &payload));
        }
        return Ok(());
    }

    let live = Live {
        config: &config,
        region,
    };

    let vault_count = plan.vault.as_ref().map_or(0, |t| t.vaults.len());
    let mut written = 0;

    update::apply(&plan, &payload, &live, &mut |step| match step {
        Step::Document { vault, operation } => {
            written += 1;
            output::success(&format!("{} document in vault {}", operation, vault));
            if written == vault_count {
                output::success("1password updated.");
            }
        }
        Step::Secret(outcome) => {
            let arn = outcome
                .arn
                .as_deref()
                .map(|arn| if plan.reveal { arn.to_string() } else { mask_secret_ref(arn) })
                .unwrap_or_default();
            match outcome.version_id {
                Some(version) => output::success(&format!(
                    "SecretsManager updated. {} (version {})",
                    arn, version
                )),
                None => output::success(&format!("SecretsManager updated. {}", arn)),
            }
        }
    })
}
