//! Payload loading.
//!
//! Reads the file given with `-f` into memory as raw bytes. The bytes are
//! handed to the updaters untouched; nothing here decodes or normalizes them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{PayloadError, Result};

/// Contents of the payload file, wiped from memory on drop.
pub struct Payload {
    path: PathBuf,
    bytes: Zeroizing<Vec<u8>>,
}

impl Payload {
    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Read` if the file cannot be read. This is
    /// always fatal: an unreadable file never becomes an empty secret.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| PayloadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), len = bytes.len(), "payload loaded");

        Ok(Self {
            path: path.to_path_buf(),
            bytes: Zeroizing::new(bytes),
        })
    }

    /// Build a payload from bytes already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes: Zeroizing::new(bytes),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The payload as text, when it is valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex SHA-256 of the contents.
    pub fn sha256(&self) -> String {
        let digest = Sha256::digest(self.bytes.as_slice());
        digest
            .iter()
            .fold(String::with_capacity(64), |mut hex, b| {
                let _ = write!(hex, "{:02x}", b);
                hex
            })
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}
