//! Driven port for fetching the raw reference dataset.
//!
//! The validator owns the payload shape and error contract so that
//! initialization stays adapter-agnostic. The HTTP adapter is
//! [`crate::HttpDatasetProvider`]; [`StaticDatasetProvider`] serves bytes that are
//! already in memory.

use thiserror::Error;

use crate::checksum::{ChecksumAlgorithm, checksum_line};

/// File name used when rendering checksum texts for in-memory payloads.
const STATIC_FILE_NAME: &str = "output.bin";

/// Raw dataset payload returned by a [`DatasetProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDataset {
    /// Encoded dataset bytes.
    pub bytes: Vec<u8>,
    /// SHA-256 checksum text; the digest is its third token.
    pub sha256: String,
    /// SHA-512 checksum text; the digest is its third token.
    pub sha512: String,
}

/// Errors surfaced while fetching the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Network transport failed before a response was received.
    #[error("dataset transport failed: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
    /// The request exceeded its timeout.
    #[error("dataset request timed out: {message}")]
    Timeout {
        /// Description of the failure.
        message: String,
    },
    /// The remote answered with a non-success status.
    #[error("dataset request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body preview.
        message: String,
    },
    /// The adapter rejected the request before executing it.
    #[error("dataset request invalid: {message}")]
    InvalidRequest {
        /// Description of the failure.
        message: String,
    },
}

impl ProviderError {
    /// Builds a [`ProviderError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Builds a [`ProviderError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Builds a [`ProviderError::Status`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Builds a [`ProviderError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Port for fetching the reference dataset and its checksums.
///
/// Implementations own their timeout and retry policy; the validator calls
/// [`DatasetProvider::fetch_dataset`] once per initialization attempt.
pub trait DatasetProvider: Send + Sync {
    /// Fetches the raw dataset on behalf of `client_identity`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the dataset cannot be retrieved.
    fn fetch_dataset(&self, client_identity: &str) -> Result<RawDataset, ProviderError>;
}

/// Provider serving a dataset that is already held in memory.
///
/// # Examples
///
/// ```
/// use tibia_validation::{DatasetProvider, StaticDatasetProvider};
///
/// let provider = StaticDatasetProvider::with_computed_checksums(b"{}".to_vec());
/// let raw = provider.fetch_dataset("doc-test").expect("static fetch");
/// assert_eq!(raw.bytes, b"{}");
/// assert!(raw.sha256.contains("sha256"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDatasetProvider {
    raw: RawDataset,
}

impl StaticDatasetProvider {
    /// Serves `raw` verbatim on every fetch.
    #[must_use]
    pub const fn new(raw: RawDataset) -> Self {
        Self { raw }
    }

    /// Serves `bytes` together with freshly computed checksum texts.
    #[must_use]
    pub fn with_computed_checksums(bytes: Vec<u8>) -> Self {
        let sha256 = checksum_line(&bytes, STATIC_FILE_NAME, ChecksumAlgorithm::Sha256);
        let sha512 = checksum_line(&bytes, STATIC_FILE_NAME, ChecksumAlgorithm::Sha512);
        Self::new(RawDataset {
            bytes,
            sha256,
            sha512,
        })
    }
}

impl DatasetProvider for StaticDatasetProvider {
    fn fetch_dataset(&self, _client_identity: &str) -> Result<RawDataset, ProviderError> {
        Ok(self.raw.clone())
    }
}
