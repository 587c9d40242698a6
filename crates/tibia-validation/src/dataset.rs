//! Reference dataset types and JSON decoding.
//!
//! The dataset is the snapshot of game-world facts the validator checks
//! input against. It is decoded once during initialization and never
//! mutated afterwards.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when decoding a reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The payload is not valid JSON or is missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset lists no creatures, so creature bounds cannot be derived.
    #[error("dataset contains no creatures")]
    EmptyCreatures,

    /// The dataset lists no spells, so spell bounds cannot be derived.
    #[error("dataset contains no spells")]
    EmptySpells,
}

/// Decoded snapshot of the game world.
///
/// # Example
///
/// ```
/// use tibia_validation::ReferenceDataset;
///
/// let json = br#"{
///     "worlds": ["Antica"],
///     "towns": ["Thais"],
///     "houses": [{"house_id": 10001, "town": "Thais", "type": "house"}],
///     "creatures": [{"name": "Demon", "plural_name": "Demons", "endpoint": "demon"}],
///     "spells": [{"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"}]
/// }"#;
///
/// let dataset = ReferenceDataset::from_slice(json).expect("valid dataset");
/// assert_eq!(dataset.worlds(), ["Antica"]);
/// assert_eq!(dataset.creatures().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    worlds: Vec<String>,
    towns: Vec<String>,
    houses: Vec<House>,
    creatures: Vec<Creature>,
    spells: Vec<Spell>,
}

impl ReferenceDataset {
    /// Decodes a dataset from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The creature list is empty
    /// - The spell list is empty
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let raw: RawReferenceDataset =
            serde_json::from_slice(bytes).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawReferenceDataset) -> Result<Self, DatasetError> {
        if raw.creatures.is_empty() {
            return Err(DatasetError::EmptyCreatures);
        }
        if raw.spells.is_empty() {
            return Err(DatasetError::EmptySpells);
        }

        let houses = raw
            .houses
            .into_iter()
            .map(|h| House {
                id: h.house_id,
                town: h.town,
                kind: h.kind,
            })
            .collect();
        let creatures = raw
            .creatures
            .into_iter()
            .map(|c| Creature {
                name: c.name,
                plural_name: c.plural_name,
                endpoint: c.endpoint,
            })
            .collect();
        let spells = raw
            .spells
            .into_iter()
            .map(|s| Spell {
                name: s.name,
                formula: s.formula,
                endpoint: s.endpoint,
            })
            .collect();

        Ok(Self {
            worlds: raw.worlds,
            towns: raw.towns,
            houses,
            creatures,
            spells,
        })
    }

    /// Returns the world names in dataset order.
    #[must_use]
    pub fn worlds(&self) -> &[String] {
        &self.worlds
    }

    /// Returns the town names in dataset order.
    #[must_use]
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Returns all houses.
    #[must_use]
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// Returns all creatures.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Returns all spells.
    #[must_use]
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }
}

/// A house or guildhall located in a town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    id: u32,
    town: String,
    kind: String,
}

impl House {
    /// Returns the numeric house ID.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the town the house belongs to.
    #[must_use]
    pub fn town(&self) -> &str {
        &self.town
    }

    /// Returns the house type, e.g. `house` or `guildhall`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A creature and its canonical endpoint slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    plural_name: String,
    endpoint: String,
}

impl Creature {
    /// Returns the singular display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the plural display name.
    #[must_use]
    pub fn plural_name(&self) -> &str {
        &self.plural_name
    }

    /// Returns the canonical endpoint slug.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// A spell, its incantation, and its canonical endpoint slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    name: String,
    formula: String,
    endpoint: String,
}

impl Spell {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the incantation spoken to cast the spell.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Returns the canonical endpoint slug.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawReferenceDataset {
    worlds: Vec<String>,
    towns: Vec<String>,
    houses: Vec<RawHouse>,
    creatures: Vec<RawCreature>,
    spells: Vec<RawSpell>,
}

#[derive(Debug, Deserialize)]
struct RawHouse {
    house_id: u32,
    town: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct RawCreature {
    name: String,
    #[serde(default)]
    plural_name: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RawSpell {
    name: String,
    formula: String,
    endpoint: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "worlds": ["Antica", "Secura"],
        "towns": ["Thais", "Carlin", "Venore"],
        "houses": [
            {"house_id": 10001, "town": "Thais", "type": "house"},
            {"house_id": 20001, "town": "Carlin", "type": "guildhall"}
        ],
        "creatures": [
            {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
            {"name": "Rat", "endpoint": "rat"}
        ],
        "spells": [
            {"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"}
        ]
    }"#;

    #[test]
    fn parses_valid_dataset() {
        let dataset = ReferenceDataset::from_slice(VALID_JSON.as_bytes()).expect("valid dataset");

        assert_eq!(dataset.worlds(), ["Antica", "Secura"]);
        assert_eq!(dataset.towns().len(), 3);
        assert_eq!(dataset.houses().len(), 2);
        assert_eq!(dataset.creatures().len(), 2);
        assert_eq!(dataset.spells().len(), 1);
    }

    #[test]
    fn record_getters_work() {
        let dataset = ReferenceDataset::from_slice(VALID_JSON.as_bytes()).expect("valid dataset");

        let house = dataset.houses().get(1).expect("second house");
        assert_eq!(house.id(), 20001);
        assert_eq!(house.town(), "Carlin");
        assert_eq!(house.kind(), "guildhall");

        let spell = dataset.spells().first().expect("first spell");
        assert_eq!(spell.name(), "Light Healing");
        assert_eq!(spell.formula(), "exura");
        assert_eq!(spell.endpoint(), "lighthealing");
    }

    #[test]
    fn missing_plural_name_defaults_to_empty() {
        let dataset = ReferenceDataset::from_slice(VALID_JSON.as_bytes()).expect("valid dataset");
        let rat = dataset.creatures().get(1).expect("second creature");

        assert_eq!(rat.name(), "Rat");
        assert_eq!(rat.plural_name(), "");
        assert_eq!(rat.endpoint(), "rat");
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_worlds(r#"{"towns": [], "houses": [], "creatures": [], "spells": []}"#)]
    #[case::house_without_id(
        r#"{"worlds": [], "towns": [], "houses": [{"town": "Thais", "type": "house"}], "creatures": [], "spells": []}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = ReferenceDataset::from_slice(json.as_bytes());
        assert!(matches!(result, Err(DatasetError::ParseError { .. })));
    }

    #[rstest]
    #[case::no_creatures(
        r#"{"worlds": [], "towns": [], "houses": [], "creatures": [], "spells": [{"name": "a", "formula": "b", "endpoint": "c"}]}"#,
        DatasetError::EmptyCreatures
    )]
    #[case::no_spells(
        r#"{"worlds": [], "towns": [], "houses": [], "creatures": [{"name": "a", "plural_name": "b", "endpoint": "c"}], "spells": []}"#,
        DatasetError::EmptySpells
    )]
    fn rejects_dataset_without_bound_sources(#[case] json: &str, #[case] expected: DatasetError) {
        assert_eq!(ReferenceDataset::from_slice(json.as_bytes()), Err(expected));
    }
}
