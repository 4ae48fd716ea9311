//! AWS Secrets Manager store.
//!
//! The SDK is async; each store owns a current-thread tokio runtime and
//! blocks on every call, so callers stay synchronous.
//!
//! Credentials come from the named profile in the shared AWS config
//! (`~/.aws/config`, `~/.aws/credentials`). No retries are configured beyond
//! the SDK defaults.

use aws_config::meta::region::ProvideRegion;
use aws_config::profile::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::primitives::Blob;
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::{classify, SecretStore, UpdateOutcome};
use crate::core::constants::DEFAULT_REGION;
use crate::core::payload::Payload;
use crate::core::plan::{CloudTarget, RegionSource};
use crate::error::{CloudError, Result};

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CloudError::Runtime(e).into())
}

/// Work out the region for a target.
///
/// `configured` is the config file's region, used when the command line gave
/// none. Profile-sourced regions read only the local AWS config files.
///
/// # Errors
///
/// Returns `CloudError::RegionUnresolved` when the profile has no region.
pub fn resolve_region(target: &CloudTarget, configured: Option<&str>) -> Result<String> {
    let region = match &target.region {
        RegionSource::Explicit(region) => region.clone(),
        RegionSource::Default => configured.unwrap_or(DEFAULT_REGION).to_string(),
        RegionSource::Profile => profile_region(&target.profile)?,
    };
    debug!(region = %region, source = ?target.region, "region resolved");
    Ok(region)
}

/// Region configured for `profile`, like `aws configure get region`.
pub fn profile_region(profile: &str) -> Result<String> {
    let provider = ProfileFileRegionProvider::builder()
        .profile_name(profile)
        .build();

    runtime()?
        .block_on(ProvideRegion::region(&provider))
        .map(|region| region.to_string())
        .ok_or_else(|| CloudError::RegionUnresolved(profile.to_string()).into())
}

/// Turn an SDK failure into a classified [`CloudError`].
fn sdk_error<E, R>(err: SdkError<E, R>) -> crate::error::Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };
    classify(err.code(), &message).into()
}

/// Secrets Manager client bound to one profile and region.
pub struct AwsSecretStore {
    runtime: Runtime,
    client: Client,
}

impl AwsSecretStore {
    /// Build a client for `profile` in `region`.
    ///
    /// Loads local configuration only; the first network call happens on
    /// [`SecretStore::lookup_arn`] or [`SecretStore::update`].
    pub fn connect(profile: &str, region: &str) -> Result<Self> {
        let runtime = runtime()?;
        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .profile_name(profile)
                .region(Region::new(region.to_string()))
                .load(),
        );
        debug!(profile = %profile, region = %region, "secrets manager client ready");

        Ok(Self {
            runtime,
            client: Client::new(&config),
        })
    }
}

impl SecretStore for AwsSecretStore {
    fn lookup_arn(&self, secret: &str) -> Result<String> {
        trace!("describing secret");
        let output = self
            .runtime
            .block_on(self.client.describe_secret().secret_id(secret).send())
            .map_err(sdk_error)?;

        output
            .arn()
            .map(String::from)
            .ok_or_else(|| CloudError::MissingArn(secret.to_string()).into())
    }

    fn update(&self, secret_id: &str, payload: &Payload) -> Result<UpdateOutcome> {
        let request = self.client.update_secret().secret_id(secret_id);
        let request = match payload.as_text() {
            Some(text) => request.secret_string(text),
            None => request.secret_binary(Blob::new(payload.as_bytes().to_vec())),
        };

        trace!(len = payload.len(), binary = payload.as_text().is_none(), "updating secret");
        let output = self
            .runtime
            .block_on(request.send())
            .map_err(sdk_error)?;

        Ok(UpdateOutcome {
            arn: output.arn().map(String::from),
            version_id: output.version_id().map(String::from),
        })
    }
}
