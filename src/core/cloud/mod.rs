//! Cloud secret store.
//!
//! [`SecretStore`] is the narrow interface the apply flow talks to. The AWS
//! Secrets Manager implementation lives in [`aws`]; tests use an in-memory
//! recorder.

pub mod aws;

use std::fmt;

use crate::core::payload::Payload;
use crate::error::{CloudError, Result};

/// Result of a successful update call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub arn: Option<String>,
    pub version_id: Option<String>,
}

/// A remote store holding secret values.
pub trait SecretStore {
    /// Resolve a secret name or ARN to the secret's full ARN.
    fn lookup_arn(&self, secret: &str) -> Result<String>;

    /// Replace the stored value of `secret_id` with the payload.
    fn update(&self, secret_id: &str, payload: &Payload) -> Result<UpdateOutcome>;
}

/// Service error codes the store reports with a dedicated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    InvalidParameter,
    InvalidRequest,
    LimitExceeded,
    EncryptionFailure,
    ResourceExists,
    ResourceNotFound,
    MalformedPolicyDocument,
    InternalServiceError,
    PreconditionNotMet,
}

impl ServiceErrorKind {
    pub const ALL: [ServiceErrorKind; 9] = [
        Self::InvalidParameter,
        Self::InvalidRequest,
        Self::LimitExceeded,
        Self::EncryptionFailure,
        Self::ResourceExists,
        Self::ResourceNotFound,
        Self::MalformedPolicyDocument,
        Self::InternalServiceError,
        Self::PreconditionNotMet,
    ];

    /// The wire error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "InvalidParameterException",
            Self::InvalidRequest => "InvalidRequestException",
            Self::LimitExceeded => "LimitExceededException",
            Self::EncryptionFailure => "EncryptionFailure",
            Self::ResourceExists => "ResourceExistsException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::MalformedPolicyDocument => "MalformedPolicyDocumentException",
            Self::InternalServiceError => "InternalServiceError",
            Self::PreconditionNotMet => "PreconditionNotMetException",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a service error code and message to a [`CloudError`].
///
/// Known codes become `CloudError::Service`; anything else keeps its raw
/// text in `CloudError::Sdk`.
pub fn classify(code: Option<&str>, message: &str) -> CloudError {
    match code {
        Some(code) => match ServiceErrorKind::from_code(code) {
            Some(kind) => CloudError::Service {
                kind,
                message: message.to_string(),
            },
            None => CloudError::Sdk(format!("{}: {}", code, message)),
        },
        None => CloudError::Sdk(message.to_string()),
    }
}
