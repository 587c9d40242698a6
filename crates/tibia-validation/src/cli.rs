//! CLI support for validating a single identifier.
//!
//! The `tibia-validate` binary delegates to this module so that argument
//! handling and check dispatch can be exercised in tests without spawning a
//! process or touching the network.

use std::error::Error as StdError;
use std::ffi::OsString;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::info;

use crate::error::{InitiateError, ValidationError, error_code};
use crate::highscore::{HighscoreCategory, is_highscore_page_valid};
use crate::names::{is_character_name_valid, is_guild_name_valid};
use crate::params::{is_news_id_valid, is_vocation_valid};
use crate::provider::StaticDatasetProvider;
use crate::settings::{SettingsError, ValidatorSettings};
use crate::validator::Validator;

/// Output printed for checks that have nothing to resolve.
pub const VALID: &str = "valid";

/// Kind of identifier to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    /// Character name.
    Character,
    /// Guild name.
    Guild,
    /// Creature name; prints the endpoint.
    Creature,
    /// Spell name or formula; prints the endpoint.
    Spell,
    /// World name.
    World,
    /// Town name.
    Town,
    /// Vocation filter.
    Vocation,
    /// Highscore category; prints the canonical spelling.
    Category,
    /// News ID.
    News,
    /// Highscore page number.
    Page,
}

impl CheckKind {
    /// Reports whether the check needs a loaded dataset.
    #[must_use]
    pub const fn needs_dataset(self) -> bool {
        matches!(self, Self::Creature | Self::Spell | Self::World | Self::Town)
    }
}

/// `tibia-validate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tibia-validate",
    about = "Validate a game identifier against the reference dataset",
    version
)]
pub struct CliArgs {
    /// Kind of identifier to validate.
    #[arg(value_enum)]
    pub kind: CheckKind,
    /// Value to validate.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Read the dataset from a local file instead of downloading it.
    #[arg(long = "dataset", value_name = "path")]
    pub dataset: Option<PathBuf>,
}

/// Errors surfaced by the CLI flow.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Loader message.
        message: String,
    },
    /// A local dataset file could not be read.
    #[error("failed to read dataset {}: {message}", path.display())]
    ReadDataset {
        /// Path that was read.
        path: PathBuf,
        /// I/O error message.
        message: String,
    },
    /// The configured provider could not be built.
    #[error("{0}")]
    Settings(#[from] SettingsError),
    /// The validator failed to initialize.
    #[error("{0}")]
    Initiate(#[from] InitiateError),
    /// The value was rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CliError {
    /// Returns the stable code of the underlying validation failure, or 0.
    #[must_use]
    pub fn code(&self) -> u32 {
        iter::successors(Some(self as &(dyn StdError + 'static)), |&error| error.source())
            .map(error_code)
            .find(|code| *code != 0)
            .unwrap_or(0)
    }
}

/// Loads [`ValidatorSettings`] from the environment and config files.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the configuration cannot be loaded.
pub fn load_settings() -> Result<ValidatorSettings, CliError> {
    ValidatorSettings::load_from_iter([OsString::from("tibia-validate")]).map_err(|error| {
        CliError::Config {
            message: error.to_string(),
        }
    })
}

/// Runs one check and returns the line to print on success.
///
/// The dataset is only loaded for kinds that need it.
///
/// # Errors
///
/// Returns [`CliError`] when the dataset cannot be loaded or the value is
/// rejected.
pub fn run(args: &CliArgs, settings: &ValidatorSettings) -> Result<String, CliError> {
    let validator = build_validator(args.dataset.as_deref(), settings)?;
    if args.kind.needs_dataset() {
        validator.initiate(settings.user_agent())?;
    }
    let output = check(args.kind, &args.value, &validator)?;
    info!(kind = ?args.kind, output = %output, "value accepted");
    Ok(output)
}

/// Validates `value` as `kind`.
///
/// Static kinds never touch `validator`, so it may still be uninitialized.
///
/// # Errors
///
/// Returns the [`ValidationError`] reported by the underlying check.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tibia_validation::cli::{CheckKind, check};
/// use tibia_validation::{StaticDatasetProvider, ValidationError, Validator};
///
/// let validator = Validator::new(Arc::new(StaticDatasetProvider::with_computed_checksums(
///     Vec::new(),
/// )));
///
/// assert_eq!(check(CheckKind::Category, "mlvl", &validator).as_deref(), Ok("magiclevel"));
/// assert_eq!(
///     check(CheckKind::World, "Antica", &validator),
///     Err(ValidationError::ValidatorNotInitiated)
/// );
/// ```
pub fn check(kind: CheckKind, value: &str, validator: &Validator) -> Result<String, ValidationError> {
    match kind {
        CheckKind::Character => is_character_name_valid(value).map(|()| VALID.to_owned()),
        CheckKind::Guild => is_guild_name_valid(value).map(|()| VALID.to_owned()),
        CheckKind::Creature => validator.is_creature_name_valid(value).map(str::to_owned),
        CheckKind::Spell => validator
            .is_spell_name_or_formula_valid(value)
            .map(str::to_owned),
        CheckKind::World => validator.require_world(value).map(|()| VALID.to_owned()),
        CheckKind::Town => validator.require_town(value).map(|()| VALID.to_owned()),
        CheckKind::Vocation => is_vocation_valid(value).map(|()| VALID.to_owned()),
        CheckKind::Category => HighscoreCategory::parse_strict(value)
            .map(|category| category.as_str().to_owned())
            .ok_or(ValidationError::HighscoreCategoryDoesNotExist),
        CheckKind::News => {
            let id = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::NewsIdInvalid)?;
            is_news_id_valid(id).map(|()| VALID.to_owned())
        }
        CheckKind::Page => {
            let page = value
                .trim()
                .parse::<i32>()
                .map_err(|_| ValidationError::HighscorePageInvalid)?;
            is_highscore_page_valid(page).map(|()| VALID.to_owned())
        }
    }
}

fn build_validator(
    dataset: Option<&Path>,
    settings: &ValidatorSettings,
) -> Result<Validator, CliError> {
    let Some(path) = dataset else {
        return Ok(settings.validator()?);
    };
    let bytes = fs::read(path).map_err(|error| CliError::ReadDataset {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    Ok(Validator::new(Arc::new(
        StaticDatasetProvider::with_computed_checksums(bytes),
    )))
}
