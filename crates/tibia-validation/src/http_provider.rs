//! Reqwest-backed dataset provider.
//!
//! This adapter owns transport details only: the three GET requests, timeout
//! and HTTP error mapping. Checksum parsing and verification stay in the
//! validator.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use crate::provider::{DatasetProvider, ProviderError, RawDataset};

/// Provider that downloads the dataset and its `.sha256` / `.sha512`
/// siblings over HTTP.
///
/// The client identity passed to [`DatasetProvider::fetch_dataset`] is sent
/// as the `User-Agent` header.
#[derive(Debug, Clone)]
pub struct HttpDatasetProvider {
    client: Client,
    dataset_url: Url,
    sha256_url: Url,
    sha512_url: Url,
}

impl HttpDatasetProvider {
    /// Builds a provider using a blocking client with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(dataset_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            sha256_url: sibling_url(&dataset_url, "sha256"),
            sha512_url: sibling_url(&dataset_url, "sha512"),
            dataset_url,
        })
    }

    /// Returns the dataset URL.
    #[must_use]
    pub const fn dataset_url(&self) -> &Url {
        &self.dataset_url
    }

    fn get(&self, url: &Url, client_identity: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, client_identity)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        debug!(url = %url, bytes = body.len(), "fetched dataset resource");
        Ok(body.to_vec())
    }
}

impl DatasetProvider for HttpDatasetProvider {
    fn fetch_dataset(&self, client_identity: &str) -> Result<RawDataset, ProviderError> {
        if client_identity.trim().is_empty() {
            return Err(ProviderError::invalid_request(
                "client identity must not be blank",
            ));
        }

        let bytes = self.get(&self.dataset_url, client_identity)?;
        let sha256 = self.get(&self.sha256_url, client_identity)?;
        let sha512 = self.get(&self.sha512_url, client_identity)?;
        Ok(RawDataset {
            bytes,
            sha256: String::from_utf8_lossy(&sha256).into_owned(),
            sha512: String::from_utf8_lossy(&sha512).into_owned(),
        })
    }
}

fn sibling_url(dataset_url: &Url, extension: &str) -> Url {
    let mut sibling = dataset_url.clone();
    sibling.set_path(&format!("{}.{extension}", dataset_url.path()));
    sibling
}

fn map_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout(error.to_string())
    } else {
        ProviderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProviderError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ProviderError::timeout(format!("status {}", status.as_u16()))
        }
        _ => ProviderError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
