//! Checks for request parameters that do not depend on the dataset.

use crate::error::ValidationError;

/// Vocation filters accepted by the highscore and world endpoints.
pub const VOCATIONS: [&str; 12] = [
    "none", "knight", "knights", "paladin", "paladins", "sorcerer", "sorcerers", "druid",
    "druids", "monk", "monks", "all",
];

/// Validates a vocation filter, ignoring case.
///
/// # Errors
///
/// Returns [`ValidationError::VocationDoesNotExist`] for unknown text.
///
/// # Examples
///
/// ```
/// use tibia_validation::{ValidationError, is_vocation_valid};
///
/// assert_eq!(is_vocation_valid("Knights"), Ok(()));
/// assert_eq!(
///     is_vocation_valid("warrior"),
///     Err(ValidationError::VocationDoesNotExist)
/// );
/// ```
pub fn is_vocation_valid(vocation: &str) -> Result<(), ValidationError> {
    if VOCATIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(vocation))
    {
        return Ok(());
    }
    Err(ValidationError::VocationDoesNotExist)
}

/// Validates a news ID; only positive IDs exist.
///
/// # Errors
///
/// Returns [`ValidationError::NewsIdInvalid`] for zero or negative IDs.
pub const fn is_news_id_valid(id: i64) -> Result<(), ValidationError> {
    if id > 0 {
        return Ok(());
    }
    Err(ValidationError::NewsIdInvalid)
}
