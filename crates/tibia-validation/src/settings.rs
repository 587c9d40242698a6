//! Validator configuration loaded via OrthoConfig.

use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::http_provider::HttpDatasetProvider;
use crate::validator::Validator;

/// Release asset the dataset is published as.
pub const DEFAULT_DATASET_URL: &str =
    "https://github.com/tibiadata/tibiadata-api-go/releases/latest/download/output.bin";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default client identity sent to the dataset host.
pub const DEFAULT_USER_AGENT: &str = "tibia-validation/0.1";

/// Errors raised while turning settings into a validator.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured dataset URL does not parse.
    #[error("invalid dataset URL `{url}`: {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration values controlling where and how the dataset is fetched.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TIBIA_DATA")]
pub struct ValidatorSettings {
    /// Dataset URL; checksums are fetched from `.sha256` / `.sha512` siblings.
    pub dataset_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Verify the downloaded bytes against the published digests.
    pub verify_checksums: Option<bool>,
    /// Client identity sent as the `User-Agent`.
    pub user_agent: Option<String>,
}

impl ValidatorSettings {
    /// Return the configured dataset URL, falling back to the release asset.
    #[must_use]
    pub fn dataset_url(&self) -> &str {
        self.dataset_url.as_deref().unwrap_or(DEFAULT_DATASET_URL)
    }

    /// Return the configured timeout, falling back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1))
    }

    /// Return whether checksums are verified; verification is on unless
    /// explicitly disabled.
    #[must_use]
    pub fn verify_checksums(&self) -> bool {
        self.verify_checksums.unwrap_or(true)
    }

    /// Return the configured client identity, falling back to the default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Build the HTTP provider described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the URL is invalid or the client
    /// cannot be built.
    pub fn http_provider(&self) -> Result<HttpDatasetProvider, SettingsError> {
        let url = Url::parse(self.dataset_url()).map_err(|error| SettingsError::InvalidUrl {
            url: self.dataset_url().to_owned(),
            message: error.to_string(),
        })?;
        Ok(HttpDatasetProvider::new(url, self.timeout())?)
    }

    /// Build an uninitialized validator backed by the HTTP provider.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the provider cannot be built.
    pub fn validator(&self) -> Result<Validator, SettingsError> {
        let provider = self.http_provider()?;
        Ok(Validator::new(Arc::new(provider)).with_checksum_verification(self.verify_checksums()))
    }
}
