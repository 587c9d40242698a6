//! Structural name validation rules.
//!
//! Character, guild, creature and spell names share one rule engine. Checks
//! run in a fixed order and the first failure is reported:
//!
//! 1. empty
//! 2. total length below or above the bounds
//! 3. whitespace-only
//! 4. per-word length, first offending word wins (too big before too small)
//! 5. characters outside the allowed class
//!
//! Character and guild bounds are fixed constants. Creature and spell bounds
//! come from [`crate::DerivedBounds`]; their dataset lookup happens in the
//! validator once these structural checks pass.
//!
//! # Character classes
//!
//! - Character: letters, `'`, `-`, `.`, `+`, whitespace
//! - Guild: ASCII letters, whitespace
//! - Creature and spell: ASCII letters, `'`, whitespace

use crate::bounds::{NameBounds, char_len};
use crate::error::ValidationError;

/// Minimum length of a character name.
pub const CHARACTER_NAME_MIN: usize = 2;
/// Maximum length of a character name.
pub const CHARACTER_NAME_MAX: usize = 29;
/// Minimum length of a word in a character name.
pub const CHARACTER_WORD_MIN: usize = 2;
/// Maximum length of a word in a character name.
pub const CHARACTER_WORD_MAX: usize = 16;

/// Minimum length of a guild name.
pub const GUILD_NAME_MIN: usize = 3;
/// Maximum length of a guild name.
pub const GUILD_NAME_MAX: usize = 29;
/// Minimum length of a word in a guild name.
pub const GUILD_WORD_MIN: usize = 2;
/// Maximum length of a word in a guild name.
pub const GUILD_WORD_MAX: usize = 14;

/// Errors reported by one rule set, in check order.
struct RuleErrors {
    empty: ValidationError,
    too_small: ValidationError,
    too_big: ValidationError,
    only_whitespace: ValidationError,
    word_too_big: ValidationError,
    word_too_small: ValidationError,
    invalid: ValidationError,
}

/// Bounds and character class for one kind of name.
struct NameRules {
    name_min: usize,
    name_max: usize,
    word_min: usize,
    word_max: usize,
    is_allowed: fn(char) -> bool,
    errors: RuleErrors,
}

impl NameRules {
    fn check(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(self.errors.empty);
        }

        let length = char_len(name);
        if length < self.name_min {
            return Err(self.errors.too_small);
        }
        if length > self.name_max {
            return Err(self.errors.too_big);
        }

        if name.trim().is_empty() {
            return Err(self.errors.only_whitespace);
        }

        for word in name.split_whitespace() {
            let word_length = char_len(word);
            if word_length > self.word_max {
                return Err(self.errors.word_too_big);
            }
            if word_length < self.word_min {
                return Err(self.errors.word_too_small);
            }
        }

        if !name.chars().all(self.is_allowed) {
            return Err(self.errors.invalid);
        }

        Ok(())
    }
}

const CHARACTER_ERRORS: RuleErrors = RuleErrors {
    empty: ValidationError::CharacterNameEmpty,
    too_small: ValidationError::CharacterNameTooSmall,
    too_big: ValidationError::CharacterNameTooBig,
    only_whitespace: ValidationError::CharacterNameIsOnlyWhiteSpace,
    word_too_big: ValidationError::CharacterWordTooBig,
    word_too_small: ValidationError::CharacterWordTooSmall,
    invalid: ValidationError::CharacterNameInvalid,
};

const GUILD_ERRORS: RuleErrors = RuleErrors {
    empty: ValidationError::GuildNameEmpty,
    too_small: ValidationError::GuildNameTooSmall,
    too_big: ValidationError::GuildNameTooBig,
    only_whitespace: ValidationError::GuildNameIsOnlyWhiteSpace,
    word_too_big: ValidationError::GuildWordTooBig,
    word_too_small: ValidationError::GuildWordTooSmall,
    invalid: ValidationError::GuildNameInvalid,
};

const CREATURE_ERRORS: RuleErrors = RuleErrors {
    empty: ValidationError::CreatureNameEmpty,
    too_small: ValidationError::CreatureNameTooSmall,
    too_big: ValidationError::CreatureNameTooBig,
    only_whitespace: ValidationError::CreatureNameIsOnlyWhiteSpace,
    word_too_big: ValidationError::CreatureWordTooBig,
    word_too_small: ValidationError::CreatureWordTooSmall,
    invalid: ValidationError::CreatureNameInvalid,
};

const SPELL_ERRORS: RuleErrors = RuleErrors {
    empty: ValidationError::SpellNameEmpty,
    too_small: ValidationError::SpellNameTooSmall,
    too_big: ValidationError::SpellNameTooBig,
    only_whitespace: ValidationError::SpellNameIsOnlyWhiteSpace,
    word_too_big: ValidationError::SpellWordTooBig,
    word_too_small: ValidationError::SpellWordTooSmall,
    invalid: ValidationError::SpellNameInvalid,
};

fn is_character_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_whitespace() || matches!(c, '\'' | '-' | '.' | '+')
}

const fn is_guild_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_ascii_whitespace()
}

const fn is_creature_or_spell_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '\''
}

/// Validates a character name.
///
/// # Errors
///
/// Returns the first `Character*` [`ValidationError`] that applies.
///
/// # Examples
///
/// ```
/// use tibia_validation::{ValidationError, is_character_name_valid};
///
/// assert_eq!(is_character_name_valid("Bubble"), Ok(()));
/// assert_eq!(is_character_name_valid("Mr. O'Neil-Smith"), Ok(()));
/// assert_eq!(
///     is_character_name_valid("a"),
///     Err(ValidationError::CharacterNameTooSmall)
/// );
/// assert_eq!(
///     is_character_name_valid("Bubble9"),
///     Err(ValidationError::CharacterNameInvalid)
/// );
/// ```
pub fn is_character_name_valid(name: &str) -> Result<(), ValidationError> {
    NameRules {
        name_min: CHARACTER_NAME_MIN,
        name_max: CHARACTER_NAME_MAX,
        word_min: CHARACTER_WORD_MIN,
        word_max: CHARACTER_WORD_MAX,
        is_allowed: is_character_name_char,
        errors: CHARACTER_ERRORS,
    }
    .check(name)
}

/// Validates a guild name.
///
/// # Errors
///
/// Returns the first `Guild*` [`ValidationError`] that applies.
///
/// # Examples
///
/// ```
/// use tibia_validation::{ValidationError, is_guild_name_valid};
///
/// assert_eq!(is_guild_name_valid("Red Rose"), Ok(()));
/// assert_eq!(
///     is_guild_name_valid("Rose's Guild"),
///     Err(ValidationError::GuildNameInvalid)
/// );
/// ```
pub fn is_guild_name_valid(name: &str) -> Result<(), ValidationError> {
    NameRules {
        name_min: GUILD_NAME_MIN,
        name_max: GUILD_NAME_MAX,
        word_min: GUILD_WORD_MIN,
        word_max: GUILD_WORD_MAX,
        is_allowed: is_guild_name_char,
        errors: GUILD_ERRORS,
    }
    .check(name)
}

/// Runs the structural creature-name checks against derived bounds.
pub(crate) fn check_creature_name(name: &str, bounds: &NameBounds) -> Result<(), ValidationError> {
    dataset_rules(bounds, CREATURE_ERRORS).check(name)
}

/// Runs the structural spell-name checks against derived bounds.
pub(crate) fn check_spell_name(name: &str, bounds: &NameBounds) -> Result<(), ValidationError> {
    dataset_rules(bounds, SPELL_ERRORS).check(name)
}

const fn dataset_rules(bounds: &NameBounds, errors: RuleErrors) -> NameRules {
    NameRules {
        name_min: bounds.name().smallest_len(),
        name_max: bounds.name().biggest_len(),
        word_min: bounds.word().smallest_len(),
        word_max: bounds.word().biggest_len(),
        is_allowed: is_creature_or_spell_char,
        errors,
    }
}

#[cfg(test)]
mod tests {
    //! Covers rule precedence and the character classes.

    use rstest::rstest;

    use super::*;
    use crate::bounds::DerivedBounds;
    use crate::dataset::ReferenceDataset;

    #[rstest]
    #[case("Bubble")]
    #[case("Eternal Oblivion")]
    #[case("Mr. O'Neil-Smith")]
    #[case("Tom+ Jerry")]
    #[case("Zé Pequeño")]
    #[case("Ab")]
    fn accepts_valid_character_names(#[case] name: &str) {
        assert_eq!(is_character_name_valid(name), Ok(()));
    }

    #[rstest]
    #[case::empty("", ValidationError::CharacterNameEmpty)]
    #[case::one_code_point("a", ValidationError::CharacterNameTooSmall)]
    #[case::single_space(" ", ValidationError::CharacterNameTooSmall)]
    #[case::thirty_code_points(
        "Abcdefghij Abcdefghij Abcdefgh",
        ValidationError::CharacterNameTooBig
    )]
    #[case::whitespace_only("   ", ValidationError::CharacterNameIsOnlyWhiteSpace)]
    #[case::long_word("Abcdefghijklmnopq", ValidationError::CharacterWordTooBig)]
    #[case::short_word("Bubble a", ValidationError::CharacterWordTooSmall)]
    #[case::digit("Bubble1", ValidationError::CharacterNameInvalid)]
    #[case::at_sign("Bub@ble", ValidationError::CharacterNameInvalid)]
    fn rejects_invalid_character_names(#[case] name: &str, #[case] expected: ValidationError) {
        assert_eq!(is_character_name_valid(name), Err(expected));
    }

    #[test]
    fn first_offending_word_wins() {
        // "a" is too small but the too-big word comes first.
        assert_eq!(
            is_character_name_valid("Abcdefghijklmnopq a"),
            Err(ValidationError::CharacterWordTooBig)
        );
        assert_eq!(
            is_character_name_valid("a Abcdefghijklmnopq"),
            Err(ValidationError::CharacterWordTooSmall)
        );
    }

    #[test]
    fn word_checks_precede_character_class() {
        assert_eq!(
            is_character_name_valid("Bubble 1"),
            Err(ValidationError::CharacterWordTooSmall)
        );
    }

    #[test]
    fn lengths_are_counted_in_code_points() {
        // 16 code points but 32 bytes.
        let word = "ä".repeat(CHARACTER_WORD_MAX);
        assert_eq!(is_character_name_valid(&word), Ok(()));
    }

    #[test]
    fn accepts_character_names_at_exact_max_length() {
        let name = format!("{} {}", "A".repeat(14), "B".repeat(14));
        assert_eq!(name.chars().count(), CHARACTER_NAME_MAX);
        assert_eq!(is_character_name_valid(&name), Ok(()));
    }

    #[rstest]
    #[case("Red Rose")]
    #[case("Nova")]
    #[case("Abc")]
    fn accepts_valid_guild_names(#[case] name: &str) {
        assert_eq!(is_guild_name_valid(name), Ok(()));
    }

    #[rstest]
    #[case::empty("", ValidationError::GuildNameEmpty)]
    #[case::too_small("Ab", ValidationError::GuildNameTooSmall)]
    #[case::too_big("Abcdefghij Abcdefghij Abcdefgh", ValidationError::GuildNameTooBig)]
    #[case::whitespace_only("    ", ValidationError::GuildNameIsOnlyWhiteSpace)]
    #[case::long_word("Abcdefghijklmno", ValidationError::GuildWordTooBig)]
    #[case::short_word("Red R", ValidationError::GuildWordTooSmall)]
    #[case::apostrophe("Rose's", ValidationError::GuildNameInvalid)]
    #[case::hyphen("Red-Rose", ValidationError::GuildNameInvalid)]
    #[case::non_ascii_letter("Rosé", ValidationError::GuildNameInvalid)]
    fn rejects_invalid_guild_names(#[case] name: &str, #[case] expected: ValidationError) {
        assert_eq!(is_guild_name_valid(name), Err(expected));
    }

    fn creature_bounds() -> NameBounds {
        let dataset = ReferenceDataset::from_slice(
            br#"{
                "worlds": [], "towns": [], "houses": [],
                "creatures": [
                    {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
                    {"name": "Dragon Lord", "plural_name": "Dragon Lords", "endpoint": "dragonlord"}
                ],
                "spells": [{"name": "Haste", "formula": "utani hur", "endpoint": "haste"}]
            }"#,
        )
        .expect("valid dataset");
        DerivedBounds::derive(&dataset).creatures().clone()
    }

    #[rstest]
    #[case::empty("", ValidationError::CreatureNameEmpty)]
    #[case::too_small("Rat", ValidationError::CreatureNameTooSmall)]
    #[case::too_big("Dragon Lordship", ValidationError::CreatureNameTooBig)]
    #[case::whitespace_only("      ", ValidationError::CreatureNameIsOnlyWhiteSpace)]
    #[case::long_word("Dragonlordss", ValidationError::CreatureWordTooBig)]
    #[case::short_word("Big Bat", ValidationError::CreatureWordTooSmall)]
    #[case::hyphen("Demon-Lord", ValidationError::CreatureNameInvalid)]
    fn creature_rules_use_derived_bounds(#[case] name: &str, #[case] expected: ValidationError) {
        assert_eq!(check_creature_name(name, &creature_bounds()), Err(expected));
    }

    #[test]
    fn creature_rules_accept_apostrophes() {
        assert_eq!(check_creature_name("Ogre's", &creature_bounds()), Ok(()));
    }
}
