//! Error types for the tibia-validation crate.
//!
//! [`ValidationError`] is the fixed catalogue returned by every read and
//! validation operation. Each variant maps to a stable numeric code that
//! callers forward to API clients. [`InitiateError`] carries the detail of a
//! failed initialization and maps back onto the catalogue via
//! [`InitiateError::kind`].

use std::error::Error as StdError;

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::provider::ProviderError;

/// Catalogue of validation failures.
///
/// Variants are compared by identity: two errors are equal only when they
/// are the same variant, regardless of how their messages render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Initialization was attempted while another one is running or done.
    #[error("validator is already running")]
    AlreadyRunning,
    /// A read was attempted before initialization completed.
    #[error("validator has not been initiated")]
    ValidatorNotInitiated,
    /// The dataset provider failed or returned no data.
    #[error("reference dataset is unavailable")]
    DatasetUnavailable,
    /// The dataset or one of its checksum texts could not be parsed.
    #[error("reference dataset is malformed")]
    DatasetMalformed,
    /// The dataset bytes do not match the published digests.
    #[error("reference dataset checksum mismatch")]
    ChecksumMismatch,

    /// The character name is empty.
    #[error("the provided character name is an empty string")]
    CharacterNameEmpty,
    /// The character name is shorter than the minimum length.
    #[error("the provided character name is too small")]
    CharacterNameTooSmall,
    /// The character name is longer than the maximum length.
    #[error("the provided character name is too big")]
    CharacterNameTooBig,
    /// The character name contains only whitespace.
    #[error("the provided character name consists only of whitespace")]
    CharacterNameIsOnlyWhiteSpace,
    /// A word of the character name is shorter than the minimum word length.
    #[error("the provided character name has a word too small")]
    CharacterWordTooSmall,
    /// A word of the character name is longer than the maximum word length.
    #[error("the provided character name has a word too big")]
    CharacterWordTooBig,
    /// The character name contains characters outside the allowed class.
    #[error("the provided character name contains invalid characters")]
    CharacterNameInvalid,

    /// The world does not exist.
    #[error("the provided world does not exist")]
    WorldDoesNotExist,
    /// The vocation does not exist.
    #[error("the provided vocation does not exist")]
    VocationDoesNotExist,
    /// The highscore category does not exist.
    #[error("the provided highscore category does not exist")]
    HighscoreCategoryDoesNotExist,
    /// The highscore page is below the first page.
    #[error("the provided highscore page is invalid")]
    HighscorePageInvalid,
    /// The highscore page is beyond the last page.
    #[error("the provided highscore page is too big")]
    HighscorePageTooBig,
    /// The news ID is not a positive number.
    #[error("the provided news id is invalid")]
    NewsIdInvalid,
    /// The house does not exist.
    #[error("the provided house does not exist")]
    HouseDoesNotExist,
    /// The town does not exist.
    #[error("the provided town does not exist")]
    TownDoesNotExist,

    /// The creature name is empty.
    #[error("the provided creature name is an empty string")]
    CreatureNameEmpty,
    /// The creature name is shorter than the smallest known creature name.
    #[error("the provided creature name is too small")]
    CreatureNameTooSmall,
    /// The creature name is longer than the biggest known creature name.
    #[error("the provided creature name is too big")]
    CreatureNameTooBig,
    /// The creature name contains only whitespace.
    #[error("the provided creature name consists only of whitespace")]
    CreatureNameIsOnlyWhiteSpace,
    /// A word of the creature name is shorter than any known creature word.
    #[error("the provided creature name has a word too small")]
    CreatureWordTooSmall,
    /// A word of the creature name is longer than any known creature word.
    #[error("the provided creature name has a word too big")]
    CreatureWordTooBig,
    /// The creature name contains characters outside the allowed class.
    #[error("the provided creature name contains invalid characters")]
    CreatureNameInvalid,

    /// The spell name or formula is empty.
    #[error("the provided spell name is an empty string")]
    SpellNameEmpty,
    /// The spell name or formula is shorter than any known spell.
    #[error("the provided spell name is too small")]
    SpellNameTooSmall,
    /// The spell name or formula is longer than any known spell.
    #[error("the provided spell name is too big")]
    SpellNameTooBig,
    /// The spell name or formula contains only whitespace.
    #[error("the provided spell name consists only of whitespace")]
    SpellNameIsOnlyWhiteSpace,
    /// A word of the spell name is shorter than any known spell word.
    #[error("the provided spell name has a word too small")]
    SpellWordTooSmall,
    /// A word of the spell name is longer than any known spell word.
    #[error("the provided spell name has a word too big")]
    SpellWordTooBig,
    /// The spell name contains characters outside the allowed class.
    #[error("the provided spell name contains invalid characters")]
    SpellNameInvalid,

    /// The guild name is empty.
    #[error("the provided guild name is an empty string")]
    GuildNameEmpty,
    /// The guild name is shorter than the minimum length.
    #[error("the provided guild name is too small")]
    GuildNameTooSmall,
    /// The guild name is longer than the maximum length.
    #[error("the provided guild name is too big")]
    GuildNameTooBig,
    /// The guild name contains only whitespace.
    #[error("the provided guild name consists only of whitespace")]
    GuildNameIsOnlyWhiteSpace,
    /// A word of the guild name is shorter than the minimum word length.
    #[error("the provided guild name has a word too small")]
    GuildWordTooSmall,
    /// A word of the guild name is longer than the maximum word length.
    #[error("the provided guild name has a word too big")]
    GuildWordTooBig,
    /// The guild name contains characters outside the allowed class.
    #[error("the provided guild name contains invalid characters")]
    GuildNameInvalid,

    /// No creature matches the provided name.
    #[error("could not find creature in tibia data")]
    CreatureNotFound,
    /// No spell matches the provided name or formula.
    #[error("could not find spell in tibia data")]
    SpellNotFound,
}

impl ValidationError {
    /// Returns the stable numeric code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tibia_validation::ValidationError;
    ///
    /// assert_eq!(ValidationError::CharacterNameEmpty.code(), 10001);
    /// assert_eq!(ValidationError::CreatureNotFound.code(), 20001);
    /// ```
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::AlreadyRunning => 9001,
            Self::ValidatorNotInitiated => 9002,
            Self::DatasetUnavailable => 9003,
            Self::DatasetMalformed => 9004,
            Self::ChecksumMismatch => 9005,

            Self::CharacterNameEmpty => 10001,
            Self::CharacterNameTooSmall => 10002,
            Self::CharacterNameTooBig => 10003,
            Self::CharacterNameIsOnlyWhiteSpace => 10004,
            Self::CharacterWordTooSmall => 10005,
            Self::CharacterWordTooBig => 10006,
            Self::CharacterNameInvalid => 10007,

            Self::WorldDoesNotExist => 11001,
            Self::VocationDoesNotExist => 11002,
            Self::HighscoreCategoryDoesNotExist => 11003,
            Self::HighscorePageInvalid => 11004,
            Self::HighscorePageTooBig => 11005,
            Self::NewsIdInvalid => 11006,
            Self::HouseDoesNotExist => 11007,
            Self::TownDoesNotExist => 11008,

            Self::CreatureNameEmpty => 12001,
            Self::CreatureNameTooSmall => 12002,
            Self::CreatureNameTooBig => 12003,
            Self::CreatureNameIsOnlyWhiteSpace => 12004,
            Self::CreatureWordTooSmall => 12005,
            Self::CreatureWordTooBig => 12006,
            Self::CreatureNameInvalid => 12007,

            Self::SpellNameEmpty => 13001,
            Self::SpellNameTooSmall => 13002,
            Self::SpellNameTooBig => 13003,
            Self::SpellNameIsOnlyWhiteSpace => 13004,
            Self::SpellWordTooSmall => 13005,
            Self::SpellWordTooBig => 13006,
            Self::SpellNameInvalid => 13007,

            Self::GuildNameEmpty => 14001,
            Self::GuildNameTooSmall => 14002,
            Self::GuildNameTooBig => 14003,
            Self::GuildNameIsOnlyWhiteSpace => 14004,
            Self::GuildWordTooSmall => 14005,
            Self::GuildWordTooBig => 14006,
            Self::GuildNameInvalid => 14007,

            Self::CreatureNotFound => 20001,
            Self::SpellNotFound => 20002,
        }
    }

    /// Returns `true` for the lifecycle family of errors.
    #[must_use]
    pub const fn is_lifecycle(self) -> bool {
        matches!(self, Self::AlreadyRunning | Self::ValidatorNotInitiated)
    }
}

/// Errors that can occur while initializing a validator.
#[derive(Debug, Error)]
pub enum InitiateError {
    /// Another initialization is in progress or has already completed.
    #[error("validator is already running")]
    AlreadyRunning,

    /// The dataset provider failed to deliver the dataset.
    #[error("dataset provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// The dataset provider returned an empty payload.
    #[error("dataset provider returned no data")]
    EmptyPayload,

    /// A checksum text did not contain a digest token.
    #[error("{algorithm} checksum text has no digest token")]
    MalformedChecksum {
        /// Digest algorithm of the malformed text.
        algorithm: &'static str,
    },

    /// The dataset bytes did not hash to the published digest.
    #[error("{algorithm} checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        /// Digest algorithm that failed.
        algorithm: &'static str,
        /// Digest published next to the dataset.
        expected: String,
        /// Digest computed over the received bytes.
        actual: String,
    },

    /// The dataset bytes could not be decoded.
    #[error("dataset decode failed: {0}")]
    Decode(#[from] DatasetError),
}

impl InitiateError {
    /// Maps this failure onto the [`ValidationError`] catalogue.
    #[must_use]
    pub const fn kind(&self) -> ValidationError {
        match self {
            Self::AlreadyRunning => ValidationError::AlreadyRunning,
            Self::Provider(_) | Self::EmptyPayload => ValidationError::DatasetUnavailable,
            Self::MalformedChecksum { .. } | Self::Decode(_) => ValidationError::DatasetMalformed,
            Self::ChecksumMismatch { .. } => ValidationError::ChecksumMismatch,
        }
    }

    /// Returns the stable numeric code of [`Self::kind`].
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.kind().code()
    }
}

/// Returns the stable code for any error, or `0` when it is not one of ours.
///
/// # Examples
///
/// ```
/// use tibia_validation::{ValidationError, error_code};
///
/// assert_eq!(error_code(&ValidationError::NewsIdInvalid), 11006);
///
/// let other = std::io::Error::other("boom");
/// assert_eq!(error_code(&other), 0);
/// ```
#[must_use]
pub fn error_code(error: &(dyn StdError + 'static)) -> u32 {
    if let Some(validation) = error.downcast_ref::<ValidationError>() {
        return validation.code();
    }
    error
        .downcast_ref::<InitiateError>()
        .map_or(0, InitiateError::code)
}
