//! Length bounds derived from the loaded dataset.
//!
//! Creature and spell names are not checked against fixed constants. The
//! shortest and longest names and words found in the dataset become the
//! bounds, so validation follows content changes without a code change.
//!
//! All lengths are Unicode code-point counts. On ties the earlier value is
//! kept. Empty strings are never adopted as extremes.

use crate::dataset::{Creature, ReferenceDataset, Spell};

/// Smallest and biggest value seen for one measure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extremes {
    smallest: String,
    smallest_len: usize,
    biggest: String,
    biggest_len: usize,
}

impl Extremes {
    fn seeded(smallest: &str, biggest: &str) -> Self {
        Self {
            smallest: smallest.to_owned(),
            smallest_len: char_len(smallest),
            biggest: biggest.to_owned(),
            biggest_len: char_len(biggest),
        }
    }

    fn offer_smaller(&mut self, candidate: &str) {
        let len = char_len(candidate);
        if len == 0 {
            return;
        }
        if self.smallest_len == 0 || len < self.smallest_len {
            candidate.clone_into(&mut self.smallest);
            self.smallest_len = len;
        }
    }

    fn offer_bigger(&mut self, candidate: &str) {
        let len = char_len(candidate);
        if len > self.biggest_len {
            candidate.clone_into(&mut self.biggest);
            self.biggest_len = len;
        }
    }

    /// Returns the smallest value.
    #[must_use]
    pub fn smallest(&self) -> &str {
        &self.smallest
    }

    /// Returns the length of the smallest value.
    #[must_use]
    pub const fn smallest_len(&self) -> usize {
        self.smallest_len
    }

    /// Returns the biggest value.
    #[must_use]
    pub fn biggest(&self) -> &str {
        &self.biggest
    }

    /// Returns the length of the biggest value.
    #[must_use]
    pub const fn biggest_len(&self) -> usize {
        self.biggest_len
    }
}

/// Name and word extremes for one record family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBounds {
    name: Extremes,
    word: Extremes,
}

impl NameBounds {
    /// Returns the extremes of whole names.
    #[must_use]
    pub const fn name(&self) -> &Extremes {
        &self.name
    }

    /// Returns the extremes of single words.
    #[must_use]
    pub const fn word(&self) -> &Extremes {
        &self.word
    }
}

/// Bounds for every dataset-backed name validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedBounds {
    creatures: NameBounds,
    spells: NameBounds,
}

impl DerivedBounds {
    /// Derives the bounds from `dataset`.
    ///
    /// The result depends only on the dataset, so deriving twice from the
    /// same dataset yields equal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tibia_validation::{DerivedBounds, ReferenceDataset};
    ///
    /// let dataset = ReferenceDataset::from_slice(br#"{
    ///     "worlds": [], "towns": [], "houses": [],
    ///     "creatures": [
    ///         {"name": "Rat", "plural_name": "Rats", "endpoint": "rat"},
    ///         {"name": "Demon Skeleton", "plural_name": "Demon Skeletons", "endpoint": "demonskeleton"}
    ///     ],
    ///     "spells": [{"name": "Light", "formula": "utevo lux", "endpoint": "light"}]
    /// }"#).expect("valid dataset");
    ///
    /// let bounds = DerivedBounds::derive(&dataset);
    /// assert_eq!(bounds.creatures().name().smallest(), "Rat");
    /// assert_eq!(bounds.creatures().name().biggest(), "Demon Skeletons");
    /// assert_eq!(bounds.creatures().word().biggest(), "demonskeleton");
    /// ```
    #[must_use]
    pub fn derive(dataset: &ReferenceDataset) -> Self {
        Self {
            creatures: derive_creature_bounds(dataset.creatures()),
            spells: derive_spell_bounds(dataset.spells()),
        }
    }

    /// Returns the creature bounds.
    #[must_use]
    pub const fn creatures(&self) -> &NameBounds {
        &self.creatures
    }

    /// Returns the spell bounds.
    #[must_use]
    pub const fn spells(&self) -> &NameBounds {
        &self.spells
    }
}

fn derive_creature_bounds(creatures: &[Creature]) -> NameBounds {
    let Some(first) = creatures.first() else {
        return NameBounds::default();
    };
    let mut name = Extremes::seeded(first.name(), first.plural_name());
    let mut word = Extremes::seeded(first_word(first.name()), first_word(first.plural_name()));

    for creature in creatures {
        name.offer_smaller(creature.name());
        name.offer_bigger(creature.plural_name());

        for token in creature.name().split_whitespace() {
            word.offer_smaller(token);
        }
        for token in creature.plural_name().split_whitespace() {
            word.offer_bigger(token);
        }
        // Endpoints are single-token slugs and can be callers' input too.
        word.offer_smaller(creature.endpoint());
        word.offer_bigger(creature.endpoint());
    }

    NameBounds { name, word }
}

fn derive_spell_bounds(spells: &[Spell]) -> NameBounds {
    let Some(first) = spells.first() else {
        return NameBounds::default();
    };
    let mut name = Extremes::seeded(first.name(), first.name());
    let mut word = Extremes::seeded(first_word(first.name()), first_word(first.name()));

    for spell in spells {
        for whole in [spell.name(), spell.formula()] {
            name.offer_smaller(whole);
            name.offer_bigger(whole);
        }

        for token in spell
            .name()
            .split_whitespace()
            .chain(spell.formula().split_whitespace())
        {
            word.offer_smaller(token);
            word.offer_bigger(token);
        }
        word.offer_smaller(spell.endpoint());
        word.offer_bigger(spell.endpoint());
    }

    NameBounds { name, word }
}

fn first_word(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or(value)
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    //! Covers extremal selection for creatures and spells.

    use super::*;

    const DATASET_JSON: &str = r#"{
        "worlds": [],
        "towns": [],
        "houses": [],
        "creatures": [
            {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
            {"name": "Rat", "plural_name": "Rats", "endpoint": "rat"},
            {"name": "Elf", "plural_name": "Elves", "endpoint": "elf"},
            {"name": "Undead Gladiator", "plural_name": "", "endpoint": "undeadgladiator"},
            {"name": "Ox", "plural_name": "Oxen", "endpoint": "ox"}
        ],
        "spells": [
            {"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"},
            {"name": "Ultimate Light", "formula": "utevo vis lux", "endpoint": "ultimatelight"},
            {"name": "Haste", "formula": "utani hur", "endpoint": "haste"}
        ]
    }"#;

    fn dataset() -> ReferenceDataset {
        ReferenceDataset::from_slice(DATASET_JSON.as_bytes()).expect("valid dataset")
    }

    #[test]
    fn creature_name_extremes_use_code_point_length() {
        let bounds = DerivedBounds::derive(&dataset());
        let name = bounds.creatures().name();

        assert_eq!(name.smallest(), "Ox");
        assert_eq!(name.smallest_len(), 2);
        // Only plurals feed the upper bound; an empty plural never does.
        assert_eq!(name.biggest(), "Demons");
        assert_eq!(name.biggest_len(), 6);
    }

    #[test]
    fn singular_and_plural_feed_opposite_extremes() {
        let dataset = ReferenceDataset::from_slice(
            br#"{
                "worlds": [], "towns": [], "houses": [],
                "creatures": [
                    {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
                    {"name": "Undead Gladiator", "plural_name": "", "endpoint": "undeadgladiator"},
                    {"name": "Mouse", "plural_name": "Mice", "endpoint": "mouse"}
                ],
                "spells": [{"name": "Haste", "formula": "utani hur", "endpoint": "haste"}]
            }"#,
        )
        .expect("valid dataset");
        let bounds = DerivedBounds::derive(&dataset);
        let creatures = bounds.creatures();

        assert_eq!(creatures.name().smallest(), "Demon");
        assert_eq!(creatures.name().biggest(), "Demons");
        // "Mice" is a plural token and never lowers the word floor.
        assert_eq!(creatures.word().smallest(), "Demon");
        assert_eq!(creatures.word().biggest(), "undeadgladiator");
    }

    #[test]
    fn creature_word_extremes_include_endpoints() {
        let bounds = DerivedBounds::derive(&dataset());
        let word = bounds.creatures().word();

        assert_eq!(word.smallest(), "Ox");
        assert_eq!(word.biggest(), "undeadgladiator");
        assert_eq!(word.biggest_len(), 15);
    }

    #[test]
    fn spell_name_extremes_compare_names_and_formulas() {
        let bounds = DerivedBounds::derive(&dataset());
        let name = bounds.spells().name();

        assert_eq!(name.smallest(), "exura");
        assert_eq!(name.biggest(), "Ultimate Light");
        assert_eq!(name.biggest_len(), 14);
    }

    #[test]
    fn spell_word_extremes_scan_formula_tokens() {
        let bounds = DerivedBounds::derive(&dataset());
        let word = bounds.spells().word();

        assert_eq!(word.smallest(), "vis");
        assert_eq!(word.biggest(), "ultimatelight");
    }

    #[test]
    fn derivation_is_idempotent() {
        let dataset = dataset();
        assert_eq!(
            DerivedBounds::derive(&dataset),
            DerivedBounds::derive(&dataset)
        );
    }

    #[test]
    fn ties_keep_the_earlier_value() {
        let mut extremes = Extremes::seeded("abc", "abc");
        extremes.offer_smaller("xyz");
        extremes.offer_bigger("xyz");

        assert_eq!(extremes.smallest(), "abc");
        assert_eq!(extremes.biggest(), "abc");
    }

    #[test]
    fn empty_candidates_are_ignored() {
        let mut extremes = Extremes::seeded("abc", "abc");
        extremes.offer_smaller("");

        assert_eq!(extremes.smallest_len(), 3);
    }

    #[test]
    fn multibyte_names_are_measured_in_code_points() {
        let mut extremes = Extremes::seeded("abcd", "abcd");
        extremes.offer_smaller("äöü");

        assert_eq!(extremes.smallest(), "äöü");
        assert_eq!(extremes.smallest_len(), 3);
    }
}
