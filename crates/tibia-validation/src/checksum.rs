//! Checksum text parsing and digest verification.
//!
//! The dataset is published next to two checksum texts. Each is a
//! whitespace-delimited line whose third token is the lowercase hex digest:
//!
//! ```text
//! output.bin sha256 9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08
//! ```

use sha2::{Digest, Sha256, Sha512};

use crate::error::InitiateError;

/// Position of the digest among the whitespace-delimited tokens.
const DIGEST_TOKEN_INDEX: usize = 2;

/// Digest algorithms published alongside the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl ChecksumAlgorithm {
    /// Returns the lowercase algorithm name used in checksum texts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Computes the hex digest of `bytes`.
    #[must_use]
    pub fn digest_hex(self, bytes: &[u8]) -> String {
        match self {
            Self::Sha256 => hex::encode(Sha256::digest(bytes)),
            Self::Sha512 => hex::encode(Sha512::digest(bytes)),
        }
    }
}

/// Extracts the digest token from a checksum text.
///
/// # Errors
///
/// Returns [`InitiateError::MalformedChecksum`] when the text has fewer than
/// three tokens.
///
/// # Examples
///
/// ```
/// use tibia_validation::checksum::{ChecksumAlgorithm, parse_digest};
///
/// let digest = parse_digest("output.bin sha256 abcd\n", ChecksumAlgorithm::Sha256)
///     .expect("digest token present");
/// assert_eq!(digest, "abcd");
/// ```
pub fn parse_digest(text: &str, algorithm: ChecksumAlgorithm) -> Result<String, InitiateError> {
    text.split_whitespace()
        .nth(DIGEST_TOKEN_INDEX)
        .map(str::to_owned)
        .ok_or(InitiateError::MalformedChecksum {
            algorithm: algorithm.name(),
        })
}

/// Verifies `bytes` against a published hex digest.
///
/// Hex case is ignored.
///
/// # Errors
///
/// Returns [`InitiateError::ChecksumMismatch`] when the digests differ.
pub fn verify(
    bytes: &[u8],
    expected: &str,
    algorithm: ChecksumAlgorithm,
) -> Result<(), InitiateError> {
    let actual = algorithm.digest_hex(bytes);
    if actual.eq_ignore_ascii_case(expected) {
        return Ok(());
    }
    Err(InitiateError::ChecksumMismatch {
        algorithm: algorithm.name(),
        expected: expected.to_owned(),
        actual,
    })
}

/// Renders a checksum text for `bytes` in the published line format.
///
/// # Examples
///
/// ```
/// use tibia_validation::checksum::{ChecksumAlgorithm, checksum_line, parse_digest};
///
/// let line = checksum_line(b"data", "output.bin", ChecksumAlgorithm::Sha512);
/// let digest = parse_digest(&line, ChecksumAlgorithm::Sha512).expect("parse");
/// assert_eq!(digest.len(), 128);
/// ```
#[must_use]
pub fn checksum_line(bytes: &[u8], file_name: &str, algorithm: ChecksumAlgorithm) -> String {
    format!(
        "{file_name} {} {}\n",
        algorithm.name(),
        algorithm.digest_hex(bytes)
    )
}
