//! Dataset-backed lookups.
//!
//! Existence checks report a missing entity as `Ok(false)`; the error channel
//! is reserved for a validator that is not ready. Creature and spell name
//! validation is different: those calls promise a canonical endpoint, so a
//! miss is reported as `CreatureNotFound` or `SpellNotFound`.

use crate::dataset::House;
use crate::error::ValidationError;
use crate::names::{check_creature_name, check_spell_name};
use crate::validator::Validator;

impl Validator {
    /// Reports whether `world` names a known world, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn world_exists(&self, world: &str) -> Result<bool, ValidationError> {
        Ok(contains_ignore_case(self.worlds()?, world))
    }

    /// Reports whether `town` names a known town, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn town_exists(&self, town: &str) -> Result<bool, ValidationError> {
        Ok(contains_ignore_case(self.towns()?, town))
    }

    /// Reports whether any house has the given ID, regardless of town.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn house_exists_raw(&self, id: u32) -> Result<bool, ValidationError> {
        Ok(self.houses()?.iter().any(|house| house.id() == id))
    }

    /// Reports whether house `id` is located in `town`.
    ///
    /// An unknown town yields `Ok(false)` without scanning the houses.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn house_exists_in_town(&self, id: u32, town: &str) -> Result<bool, ValidationError> {
        if !self.town_exists(town)? {
            return Ok(false);
        }
        Ok(self
            .houses()?
            .iter()
            .any(|house| house.id() == id && eq_ignore_case(house.town(), town)))
    }

    /// Returns the house with the given ID, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn house(&self, id: u32) -> Result<Option<&House>, ValidationError> {
        Ok(self.houses()?.iter().find(|house| house.id() == id))
    }

    /// Like [`Validator::world_exists`] but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WorldDoesNotExist`] for unknown worlds.
    pub fn require_world(&self, world: &str) -> Result<(), ValidationError> {
        self.world_exists(world)?
            .then_some(())
            .ok_or(ValidationError::WorldDoesNotExist)
    }

    /// Like [`Validator::town_exists`] but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TownDoesNotExist`] for unknown towns.
    pub fn require_town(&self, town: &str) -> Result<(), ValidationError> {
        self.town_exists(town)?
            .then_some(())
            .ok_or(ValidationError::TownDoesNotExist)
    }

    /// Like [`Validator::house_exists_in_town`] but reports a miss as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TownDoesNotExist`] for unknown towns and
    /// [`ValidationError::HouseDoesNotExist`] when the town has no such
    /// house.
    pub fn require_house_in_town(&self, id: u32, town: &str) -> Result<(), ValidationError> {
        self.require_town(town)?;
        self.house_exists_in_town(id, town)?
            .then_some(())
            .ok_or(ValidationError::HouseDoesNotExist)
    }

    /// Validates a creature name and resolves its canonical endpoint.
    ///
    /// The input is matched case-insensitively against each creature's
    /// endpoint, name and plural name; the first matching creature wins.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`,
    /// the first structural `Creature*` error that applies, or
    /// [`ValidationError::CreatureNotFound`].
    pub fn is_creature_name_valid(&self, name: &str) -> Result<&str, ValidationError> {
        let snapshot = self.snapshot()?;
        check_creature_name(name, snapshot.bounds.creatures())?;

        snapshot
            .dataset
            .creatures()
            .iter()
            .find(|creature| {
                [creature.endpoint(), creature.name(), creature.plural_name()]
                    .into_iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .map(|creature| creature.endpoint())
            .ok_or(ValidationError::CreatureNotFound)
    }

    /// Validates a spell name or formula and resolves its canonical endpoint.
    ///
    /// The input is matched case-insensitively against each spell's
    /// endpoint, name and formula; the first matching spell wins.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`,
    /// the first structural `Spell*` error that applies, or
    /// [`ValidationError::SpellNotFound`].
    pub fn is_spell_name_or_formula_valid(&self, name: &str) -> Result<&str, ValidationError> {
        let snapshot = self.snapshot()?;
        check_spell_name(name, snapshot.bounds.spells())?;

        snapshot
            .dataset
            .spells()
            .iter()
            .find(|spell| {
                [spell.endpoint(), spell.name(), spell.formula()]
                    .into_iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .map(|spell| spell.endpoint())
            .ok_or(ValidationError::SpellNotFound)
    }
}

fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    values.iter().any(|value| eq_ignore_case(value, needle))
}

/// Compares with full Unicode lowercasing, so `Ëdron` matches `ëDRON`.
fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    //! Covers existence checks and endpoint resolution.

    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::provider::StaticDatasetProvider;

    const DATASET_JSON: &str = r#"{
        "worlds": ["Antica", "Secura"],
        "towns": ["Thais", "Ab'dendriel", "Ëdron"],
        "houses": [
            {"house_id": 10001, "town": "Thais", "type": "house"},
            {"house_id": 20001, "town": "Ab'dendriel", "type": "guildhall"},
            {"house_id": 30001, "town": "Ëdron", "type": "house"}
        ],
        "creatures": [
            {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
            {"name": "Dragon Lord", "plural_name": "Dragon Lords", "endpoint": "dragonlord"},
            {"name": "Rotworm", "plural_name": "Rotworms", "endpoint": "rotworm"}
        ],
        "spells": [
            {"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"},
            {"name": "Haste", "formula": "utani hur", "endpoint": "haste"}
        ]
    }"#;

    #[fixture]
    fn ready() -> Validator {
        let validator = Validator::new(Arc::new(StaticDatasetProvider::with_computed_checksums(
            DATASET_JSON.as_bytes().to_vec(),
        )));
        validator.initiate("lookup-tests").expect("initiation succeeds");
        validator
    }

    #[fixture]
    fn uninitialized() -> Validator {
        Validator::new(Arc::new(StaticDatasetProvider::with_computed_checksums(
            DATASET_JSON.as_bytes().to_vec(),
        )))
    }

    #[rstest]
    #[case("Antica", true)]
    #[case("SECURA", true)]
    #[case("antica", true)]
    #[case("Nowhere", false)]
    #[case("", false)]
    fn world_lookup_ignores_case(ready: Validator, #[case] world: &str, #[case] expected: bool) {
        assert_eq!(ready.world_exists(world), Ok(expected));
    }

    #[rstest]
    #[case("thais", true)]
    #[case("AB'DENDRIEL", true)]
    #[case("ëDRON", true)]
    #[case("EDRON", false)]
    #[case("Carlin", false)]
    fn town_lookup_ignores_case(ready: Validator, #[case] town: &str, #[case] expected: bool) {
        assert_eq!(ready.town_exists(town), Ok(expected));
    }

    #[rstest]
    fn lookups_require_ready_state(uninitialized: Validator) {
        let not_ready = Err(ValidationError::ValidatorNotInitiated);
        assert_eq!(uninitialized.world_exists("Antica"), not_ready);
        assert_eq!(uninitialized.town_exists("Thais"), not_ready);
        assert_eq!(uninitialized.house_exists_raw(10001), not_ready);
        assert_eq!(uninitialized.house_exists_in_town(10001, "Thais"), not_ready);
        assert_eq!(
            uninitialized.house(10001),
            Err(ValidationError::ValidatorNotInitiated)
        );
        assert_eq!(
            uninitialized.is_creature_name_valid("Demon"),
            Err(ValidationError::ValidatorNotInitiated)
        );
        // Lifecycle errors win over input errors.
        assert_eq!(
            uninitialized.is_spell_name_or_formula_valid(""),
            Err(ValidationError::ValidatorNotInitiated)
        );
    }

    #[rstest]
    fn house_lookups(ready: Validator) {
        assert_eq!(ready.house_exists_raw(10001), Ok(true));
        assert_eq!(ready.house_exists_raw(99999), Ok(false));
        assert_eq!(ready.house_exists_in_town(10001, "thais"), Ok(true));
        assert_eq!(ready.house_exists_in_town(10001, "Ab'dendriel"), Ok(false));
        assert_eq!(ready.house_exists_in_town(10001, "Carlin"), Ok(false));
        assert_eq!(ready.house_exists_in_town(30001, "ËDRON"), Ok(true));

        let house = ready.house(20001).expect("ready").expect("house exists");
        assert_eq!(house.kind(), "guildhall");
        assert_eq!(ready.house(42), Ok(None));
    }

    #[rstest]
    fn require_variants_turn_misses_into_errors(ready: Validator) {
        assert_eq!(ready.require_world("antica"), Ok(()));
        assert_eq!(
            ready.require_world("Nowhere"),
            Err(ValidationError::WorldDoesNotExist)
        );
        assert_eq!(
            ready.require_town("Carlin"),
            Err(ValidationError::TownDoesNotExist)
        );
        assert_eq!(ready.require_house_in_town(10001, "Thais"), Ok(()));
        assert_eq!(
            ready.require_house_in_town(20001, "Thais"),
            Err(ValidationError::HouseDoesNotExist)
        );
        assert_eq!(
            ready.require_house_in_town(10001, "Carlin"),
            Err(ValidationError::TownDoesNotExist)
        );
    }

    #[rstest]
    #[case("Demon")]
    #[case("demon")]
    #[case("Demons")]
    #[case("DEMONS")]
    fn creature_forms_resolve_to_endpoint(ready: Validator, #[case] name: &str) {
        assert_eq!(ready.is_creature_name_valid(name), Ok("demon"));
    }

    #[rstest]
    #[case("dragon lords", Ok("dragonlord"))]
    #[case("DragonLord", Ok("dragonlord"))]
    #[case("Rotworms", Ok("rotworm"))]
    #[case("Ghoul", Err(ValidationError::CreatureNotFound))]
    #[case("", Err(ValidationError::CreatureNameEmpty))]
    #[case("Bat", Err(ValidationError::CreatureNameTooSmall))]
    #[case("Dragon Lords Of Old", Err(ValidationError::CreatureNameTooBig))]
    #[case("Demon1", Err(ValidationError::CreatureNameInvalid))]
    fn creature_resolution(
        ready: Validator,
        #[case] name: &str,
        #[case] expected: Result<&str, ValidationError>,
    ) {
        assert_eq!(ready.is_creature_name_valid(name), expected);
    }

    #[rstest]
    #[case("exura", Ok("lighthealing"))]
    #[case("Light Healing", Ok("lighthealing"))]
    #[case("UTANI HUR", Ok("haste"))]
    #[case("haste", Ok("haste"))]
    #[case("Magic Wall", Err(ValidationError::SpellNotFound))]
    #[case("", Err(ValidationError::SpellNameEmpty))]
    #[case("utani-hur", Err(ValidationError::SpellNameInvalid))]
    fn spell_resolution(
        ready: Validator,
        #[case] name: &str,
        #[case] expected: Result<&str, ValidationError>,
    ) {
        assert_eq!(ready.is_spell_name_or_formula_valid(name), expected);
    }

    #[rstest]
    #[case("Demons", Ok("demon"))]
    #[case("Undead Gladiator", Err(ValidationError::CreatureNameTooBig))]
    #[case("Mice", Err(ValidationError::CreatureNameTooSmall))]
    fn plural_less_creatures_do_not_widen_the_name_bound(
        #[case] name: &str,
        #[case] expected: Result<&str, ValidationError>,
    ) {
        let json = br#"{
            "worlds": [], "towns": [], "houses": [],
            "creatures": [
                {"name": "Demon", "plural_name": "Demons", "endpoint": "demon"},
                {"name": "Undead Gladiator", "plural_name": "", "endpoint": "undeadgladiator"},
                {"name": "Mouse", "plural_name": "Mice", "endpoint": "mouse"}
            ],
            "spells": [{"name": "Haste", "formula": "utani hur", "endpoint": "haste"}]
        }"#;
        let validator = Validator::new(Arc::new(StaticDatasetProvider::with_computed_checksums(
            json.to_vec(),
        )));
        validator.initiate("lookup-tests").expect("initiation succeeds");

        assert_eq!(validator.is_creature_name_valid(name), expected);
    }
}
