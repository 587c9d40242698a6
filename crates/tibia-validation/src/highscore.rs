//! Highscore categories and page bounds.
//!
//! Categories are a closed set, not loaded from the dataset. Parsing from
//! text is lenient: several spellings map to each category and unknown text
//! falls back to [`HighscoreCategory::Experience`]. Rendering always uses the
//! single canonical spelling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// First highscore page.
pub const HIGHSCORE_PAGE_MIN: i32 = 1;
/// Last highscore page.
pub const HIGHSCORE_PAGE_MAX: i32 = 20;

/// Highscore category, ordered by discriminant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum HighscoreCategory {
    /// Achievement points.
    Achievements = 1,
    /// Axe fighting skill.
    AxeFighting,
    /// Charm points.
    CharmPoints,
    /// Club fighting skill.
    ClubFighting,
    /// Distance fighting skill.
    DistanceFighting,
    /// Experience points.
    #[default]
    Experience,
    /// Fishing skill.
    Fishing,
    /// Fist fighting skill.
    FistFighting,
    /// Goshnar's taint.
    GoshnarsTaint,
    /// Loyalty points.
    LoyaltyPoints,
    /// Magic level.
    MagicLevel,
    /// Shielding skill.
    Shielding,
    /// Sword fighting skill.
    SwordFighting,
    /// Tibiadrome score.
    DromeScore,
}

/// Error returned when an index does not name a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("highscore category index {0} is out of range")]
pub struct UnknownHighscoreCategory(pub u8);

impl HighscoreCategory {
    /// Every category in ascending order.
    pub const ALL: [Self; 14] = [
        Self::Achievements,
        Self::AxeFighting,
        Self::CharmPoints,
        Self::ClubFighting,
        Self::DistanceFighting,
        Self::Experience,
        Self::Fishing,
        Self::FistFighting,
        Self::GoshnarsTaint,
        Self::LoyaltyPoints,
        Self::MagicLevel,
        Self::Shielding,
        Self::SwordFighting,
        Self::DromeScore,
    ];

    /// Returns the canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Achievements => "achievements",
            Self::AxeFighting => "axefighting",
            Self::CharmPoints => "charmpoints",
            Self::ClubFighting => "clubfighting",
            Self::DistanceFighting => "distancefighting",
            Self::Experience => "experience",
            Self::Fishing => "fishing",
            Self::FistFighting => "fistfighting",
            Self::GoshnarsTaint => "goshnarstaint",
            Self::LoyaltyPoints => "loyaltypoints",
            Self::MagicLevel => "magiclevel",
            Self::Shielding => "shielding",
            Self::SwordFighting => "swordfighting",
            Self::DromeScore => "dromescore",
        }
    }

    /// Returns the position of this category in the total order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Matches `text` against the known spellings, ignoring case.
    ///
    /// Returns `None` for unknown text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tibia_validation::HighscoreCategory;
    ///
    /// assert_eq!(
    ///     HighscoreCategory::parse_strict("MLVL"),
    ///     Some(HighscoreCategory::MagicLevel)
    /// );
    /// assert_eq!(HighscoreCategory::parse_strict("garbage"), None);
    /// ```
    #[must_use]
    pub fn parse_strict(text: &str) -> Option<Self> {
        let category = match text.to_lowercase().as_str() {
            "achievements" | "achievement" => Self::Achievements,
            "axe" | "axefighting" => Self::AxeFighting,
            "charm" | "charms" | "charmpoints" | "charmspoints" => Self::CharmPoints,
            "club" | "clubfighting" => Self::ClubFighting,
            "distance" | "distancefighting" => Self::DistanceFighting,
            "exp" | "experience" => Self::Experience,
            "fishing" => Self::Fishing,
            "fist" | "fistfighting" => Self::FistFighting,
            "goshnar" | "goshnars" | "goshnarstaint" => Self::GoshnarsTaint,
            "loyalty" | "loyaltypoints" => Self::LoyaltyPoints,
            "magic" | "mlvl" | "magiclevel" => Self::MagicLevel,
            "shield" | "shielding" => Self::Shielding,
            "sword" | "swordfighting" => Self::SwordFighting,
            "drome" | "dromescore" => Self::DromeScore,
            _ => return None,
        };
        Some(category)
    }
}

impl From<&str> for HighscoreCategory {
    /// Parses leniently; unknown text becomes [`HighscoreCategory::Experience`].
    fn from(text: &str) -> Self {
        Self::parse_strict(text).unwrap_or_default()
    }
}

impl FromStr for HighscoreCategory {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}

impl TryFrom<u8> for HighscoreCategory {
    type Error = UnknownHighscoreCategory;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        let position = usize::from(index)
            .checked_sub(1)
            .ok_or(UnknownHighscoreCategory(index))?;
        Self::ALL
            .get(position)
            .copied()
            .ok_or(UnknownHighscoreCategory(index))
    }
}

impl fmt::Display for HighscoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates a highscore category against the known spellings.
///
/// # Errors
///
/// Returns [`ValidationError::HighscoreCategoryDoesNotExist`] for unknown
/// text.
pub fn is_highscore_category_valid(text: &str) -> Result<(), ValidationError> {
    HighscoreCategory::parse_strict(text)
        .map(|_| ())
        .ok_or(ValidationError::HighscoreCategoryDoesNotExist)
}

/// Validates a highscore page number.
///
/// # Errors
///
/// Returns [`ValidationError::HighscorePageInvalid`] below the first page
/// and [`ValidationError::HighscorePageTooBig`] beyond the last one.
pub const fn is_highscore_page_valid(page: i32) -> Result<(), ValidationError> {
    if page < HIGHSCORE_PAGE_MIN {
        return Err(ValidationError::HighscorePageInvalid);
    }
    if page > HIGHSCORE_PAGE_MAX {
        return Err(ValidationError::HighscorePageTooBig);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Covers category parsing and page bounds.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("mlvl")]
    #[case("magic")]
    #[case("magiclevel")]
    #[case("MAGICLEVEL")]
    #[case("MagicLevel")]
    fn magic_level_aliases_agree(#[case] text: &str) {
        assert_eq!(HighscoreCategory::from(text), HighscoreCategory::MagicLevel);
    }

    #[rstest]
    #[case("garbage")]
    #[case("")]
    #[case("bosspoints")]
    fn unknown_text_defaults_to_experience(#[case] text: &str) {
        assert_eq!(HighscoreCategory::from(text), HighscoreCategory::Experience);
        assert_eq!(
            text.parse::<HighscoreCategory>(),
            Ok(HighscoreCategory::Experience)
        );
    }

    #[test]
    fn canonical_spelling_parses_back() {
        for category in HighscoreCategory::ALL {
            assert_eq!(HighscoreCategory::parse_strict(category.as_str()), Some(category));
        }
    }

    #[test]
    fn indexes_follow_declaration_order() {
        assert_eq!(HighscoreCategory::Achievements.index(), 1);
        assert_eq!(HighscoreCategory::Experience.index(), 6);
        assert_eq!(HighscoreCategory::DromeScore.index(), 14);
        assert!(HighscoreCategory::Achievements < HighscoreCategory::DromeScore);
    }

    #[rstest]
    #[case(1, HighscoreCategory::Achievements)]
    #[case(11, HighscoreCategory::MagicLevel)]
    #[case(14, HighscoreCategory::DromeScore)]
    fn converts_in_range_indexes(#[case] index: u8, #[case] expected: HighscoreCategory) {
        assert_eq!(HighscoreCategory::try_from(index), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(15)]
    #[case(u8::MAX)]
    fn rejects_out_of_range_indexes(#[case] index: u8) {
        assert_eq!(
            HighscoreCategory::try_from(index),
            Err(UnknownHighscoreCategory(index))
        );
    }

    #[test]
    fn serializes_canonical_spelling() {
        let json = serde_json::to_string(&HighscoreCategory::GoshnarsTaint).expect("serialize");
        assert_eq!(json, "\"goshnarstaint\"");
        assert_eq!(HighscoreCategory::LoyaltyPoints.to_string(), "loyaltypoints");
    }

    #[rstest]
    #[case("axe", Ok(()))]
    #[case("Experience", Ok(()))]
    #[case("exp", Ok(()))]
    #[case("ranking", Err(ValidationError::HighscoreCategoryDoesNotExist))]
    fn category_validity(#[case] text: &str, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(is_highscore_category_valid(text), expected);
    }

    #[rstest]
    #[case(1, Ok(()))]
    #[case(20, Ok(()))]
    #[case(0, Err(ValidationError::HighscorePageInvalid))]
    #[case(-3, Err(ValidationError::HighscorePageInvalid))]
    #[case(21, Err(ValidationError::HighscorePageTooBig))]
    fn page_validity(#[case] page: i32, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(is_highscore_page_valid(page), expected);
    }
}
