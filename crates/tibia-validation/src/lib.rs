//! Reference-data validation for game world identifiers and names.
//!
//! This crate lets a service reject malformed or unknown inputs (character,
//! guild, creature and spell names, worlds, towns, houses, highscore
//! categories, vocations and news IDs) before it performs expensive
//! downstream lookups.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - A [`Validator`] that loads a checksummed dataset once and then serves
//!   lock-free reads from any number of threads
//! - Creature and spell name bounds derived from the dataset itself rather
//!   than from fixed constants
//! - Name validators with a fixed check precedence, so each input reports
//!   exactly one [`ValidationError`]
//! - A stable numeric code per error for forwarding to API clients
//!
//! Character, guild, vocation, news and highscore checks are free functions
//! and need no dataset.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tibia_validation::{
//!     StaticDatasetProvider, ValidationError, Validator, is_character_name_valid,
//! };
//!
//! assert_eq!(is_character_name_valid("Bubble"), Ok(()));
//!
//! let json = br#"{
//!     "worlds": ["Antica"],
//!     "towns": ["Thais"],
//!     "houses": [{"house_id": 10001, "town": "Thais", "type": "house"}],
//!     "creatures": [{"name": "Demon", "plural_name": "Demons", "endpoint": "demon"}],
//!     "spells": [{"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"}]
//! }"#;
//! let provider = StaticDatasetProvider::with_computed_checksums(json.to_vec());
//! let validator = Validator::new(Arc::new(provider));
//! validator.initiate("example-service/1.0").expect("dataset loads");
//!
//! assert_eq!(validator.is_spell_name_or_formula_valid("EXURA"), Ok("lighthealing"));
//! assert_eq!(validator.house_exists_in_town(10001, "thais"), Ok(true));
//! assert_eq!(
//!     validator.is_creature_name_valid("Ghoul"),
//!     Err(ValidationError::CreatureNotFound)
//! );
//! ```

mod bounds;
pub mod checksum;
pub mod cli;
mod dataset;
mod error;
mod highscore;
mod http_provider;
mod lookup;
mod names;
mod params;
mod provider;
mod settings;
mod validator;

pub use bounds::{DerivedBounds, Extremes, NameBounds};
pub use dataset::{Creature, DatasetError, House, ReferenceDataset, Spell};
pub use error::{InitiateError, ValidationError, error_code};
pub use highscore::{
    HIGHSCORE_PAGE_MAX, HIGHSCORE_PAGE_MIN, HighscoreCategory, UnknownHighscoreCategory,
    is_highscore_category_valid, is_highscore_page_valid,
};
pub use http_provider::HttpDatasetProvider;
pub use names::{
    CHARACTER_NAME_MAX, CHARACTER_NAME_MIN, CHARACTER_WORD_MAX, CHARACTER_WORD_MIN,
    GUILD_NAME_MAX, GUILD_NAME_MIN, GUILD_WORD_MAX, GUILD_WORD_MIN, is_character_name_valid,
    is_guild_name_valid,
};
pub use params::{VOCATIONS, is_news_id_valid, is_vocation_valid};
pub use provider::{DatasetProvider, ProviderError, RawDataset, StaticDatasetProvider};
pub use settings::{
    DEFAULT_DATASET_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, SettingsError,
    ValidatorSettings,
};
pub use validator::{Validator, ValidatorState};
