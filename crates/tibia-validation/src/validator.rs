//! The validator store: lifecycle, initialization and snapshot access.
//!
//! A [`Validator`] starts [`ValidatorState::Uninitialized`]. A single call to
//! [`Validator::initiate`] fetches, verifies and decodes the dataset, derives
//! the bounds and publishes the result. From then on the snapshot is
//! immutable and every read is lock-free.
//!
//! Initialization is exclusive. A second caller that arrives while one is
//! running, or after one succeeded, gets `AlreadyRunning` straight away
//! rather than waiting. A failed attempt resets the state to
//! `Uninitialized`, so the caller may retry. This holds even when the
//! provider panics.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock, TryLockError};

use tracing::{debug, info, warn};

use crate::bounds::{DerivedBounds, NameBounds};
use crate::checksum::{self, ChecksumAlgorithm};
use crate::dataset::{Creature, House, ReferenceDataset, Spell};
use crate::error::{InitiateError, ValidationError};
use crate::provider::DatasetProvider;

/// Lifecycle of a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValidatorState {
    /// No dataset has been loaded.
    Uninitialized = 0,
    /// An initialization is in progress.
    Initializing = 1,
    /// The dataset is loaded and reads are served.
    Ready = 2,
}

impl ValidatorState {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Initializing,
            2 => Self::Ready,
            _ => Self::Uninitialized,
        }
    }
}

/// Everything published by a successful initialization.
#[derive(Debug)]
pub(crate) struct Snapshot {
    pub(crate) dataset: ReferenceDataset,
    pub(crate) bounds: DerivedBounds,
    sha256: String,
    sha512: String,
}

/// Reference-data validator.
///
/// Construct one per process (or per test) and share it by reference; it is
/// `Send + Sync`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tibia_validation::{StaticDatasetProvider, ValidationError, Validator, ValidatorState};
///
/// let json = br#"{
///     "worlds": ["Antica"],
///     "towns": ["Thais"],
///     "houses": [{"house_id": 10001, "town": "Thais", "type": "house"}],
///     "creatures": [{"name": "Demon", "plural_name": "Demons", "endpoint": "demon"}],
///     "spells": [{"name": "Light Healing", "formula": "exura", "endpoint": "lighthealing"}]
/// }"#;
/// let provider = StaticDatasetProvider::with_computed_checksums(json.to_vec());
/// let validator = Validator::new(Arc::new(provider));
///
/// assert_eq!(validator.worlds(), Err(ValidationError::ValidatorNotInitiated));
///
/// validator.initiate("doc-test").expect("initiation succeeds");
/// assert_eq!(validator.state(), ValidatorState::Ready);
/// assert_eq!(validator.world_exists("ANTICA"), Ok(true));
/// assert_eq!(validator.is_creature_name_valid("Demons"), Ok("demon"));
/// ```
pub struct Validator {
    provider: Arc<dyn DatasetProvider>,
    verify_checksums: bool,
    state: AtomicU8,
    init_lock: Mutex<()>,
    snapshot: OnceLock<Snapshot>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("state", &self.state())
            .field("verify_checksums", &self.verify_checksums)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Creates an uninitialized validator backed by `provider`.
    ///
    /// Checksum verification is enabled.
    #[must_use]
    pub fn new(provider: Arc<dyn DatasetProvider>) -> Self {
        Self {
            provider,
            verify_checksums: true,
            state: AtomicU8::new(ValidatorState::Uninitialized as u8),
            init_lock: Mutex::new(()),
            snapshot: OnceLock::new(),
        }
    }

    /// Enables or disables digest verification of the fetched bytes.
    ///
    /// The checksum texts are still parsed and exposed either way.
    #[must_use]
    pub const fn with_checksum_verification(mut self, enabled: bool) -> Self {
        self.verify_checksums = enabled;
        self
    }

    /// Returns whether fetched bytes are checked against the digests.
    #[must_use]
    pub const fn verifies_checksums(&self) -> bool {
        self.verify_checksums
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ValidatorState {
        ValidatorState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Loads the dataset and makes the validator ready.
    ///
    /// `client_identity` is passed through to the dataset provider only.
    ///
    /// # Errors
    ///
    /// Returns [`InitiateError::AlreadyRunning`] if another initialization
    /// is running or has succeeded. Any other variant describes why loading
    /// failed; the validator is then `Uninitialized` again.
    pub fn initiate(&self, client_identity: &str) -> Result<(), InitiateError> {
        let _guard = match self.init_lock.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Err(InitiateError::AlreadyRunning),
            // The guarded unit carries no data, so a poisoned lock is still usable.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        if self.state() != ValidatorState::Uninitialized {
            return Err(InitiateError::AlreadyRunning);
        }

        self.set_state(ValidatorState::Initializing);
        let reset = ResetOnDrop::arm(&self.state);
        info!(client_identity, "validator initialization started");

        match self.load(client_identity) {
            Ok(snapshot) => {
                let worlds = snapshot.dataset.worlds().len();
                let creatures = snapshot.dataset.creatures().len();
                let spells = snapshot.dataset.spells().len();
                if self.snapshot.set(snapshot).is_err() {
                    return Err(InitiateError::AlreadyRunning);
                }
                self.set_state(ValidatorState::Ready);
                reset.disarm();
                info!(worlds, creatures, spells, "validator ready");
                Ok(())
            }
            Err(error) => {
                drop(reset);
                warn!(error = %error, code = error.code(), "validator initialization failed");
                Err(error)
            }
        }
    }

    fn load(&self, client_identity: &str) -> Result<Snapshot, InitiateError> {
        let raw = self.provider.fetch_dataset(client_identity)?;
        if raw.bytes.is_empty() {
            return Err(InitiateError::EmptyPayload);
        }

        let sha256 = checksum::parse_digest(&raw.sha256, ChecksumAlgorithm::Sha256)?;
        let sha512 = checksum::parse_digest(&raw.sha512, ChecksumAlgorithm::Sha512)?;
        if self.verify_checksums {
            checksum::verify(&raw.bytes, &sha256, ChecksumAlgorithm::Sha256)?;
            checksum::verify(&raw.bytes, &sha512, ChecksumAlgorithm::Sha512)?;
        }

        let dataset = ReferenceDataset::from_slice(&raw.bytes)?;
        let bounds = DerivedBounds::derive(&dataset);
        debug!(
            smallest_creature = bounds.creatures().name().smallest(),
            biggest_creature = bounds.creatures().name().biggest(),
            smallest_spell = bounds.spells().name().smallest(),
            biggest_spell = bounds.spells().name().biggest(),
            "derived name bounds"
        );

        Ok(Snapshot {
            dataset,
            bounds,
            sha256,
            sha512,
        })
    }

    fn set_state(&self, state: ValidatorState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub(crate) fn snapshot(&self) -> Result<&Snapshot, ValidationError> {
        self.snapshot
            .get()
            .ok_or(ValidationError::ValidatorNotInitiated)
    }

    /// Returns the whole decoded dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn dataset(&self) -> Result<&ReferenceDataset, ValidationError> {
        Ok(&self.snapshot()?.dataset)
    }

    /// Returns the world names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn worlds(&self) -> Result<&[String], ValidationError> {
        Ok(self.snapshot()?.dataset.worlds())
    }

    /// Returns the town names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn towns(&self) -> Result<&[String], ValidationError> {
        Ok(self.snapshot()?.dataset.towns())
    }

    /// Returns the houses.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn houses(&self) -> Result<&[House], ValidationError> {
        Ok(self.snapshot()?.dataset.houses())
    }

    /// Returns the creatures.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn creatures(&self) -> Result<&[Creature], ValidationError> {
        Ok(self.snapshot()?.dataset.creatures())
    }

    /// Returns the spells.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn spells(&self) -> Result<&[Spell], ValidationError> {
        Ok(self.snapshot()?.dataset.spells())
    }

    /// Returns the SHA-256 digest published with the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn sha256_sum(&self) -> Result<&str, ValidationError> {
        Ok(&self.snapshot()?.sha256)
    }

    /// Returns the SHA-512 digest published with the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn sha512_sum(&self) -> Result<&str, ValidationError> {
        Ok(&self.snapshot()?.sha512)
    }

    /// Returns all derived bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn bounds(&self) -> Result<&DerivedBounds, ValidationError> {
        Ok(&self.snapshot()?.bounds)
    }

    /// Returns the creature name and word bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn creature_bounds(&self) -> Result<&NameBounds, ValidationError> {
        Ok(self.snapshot()?.bounds.creatures())
    }

    /// Returns the spell name and word bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValidatorNotInitiated`] before `Ready`.
    pub fn spell_bounds(&self) -> Result<&NameBounds, ValidationError> {
        Ok(self.snapshot()?.bounds.spells())
    }
}

/// Puts the state back to `Uninitialized` when dropped while armed.
///
/// Covers both error returns and a provider that unwinds mid-load.
struct ResetOnDrop<'a> {
    state: &'a AtomicU8,
    armed: bool,
}

impl<'a> ResetOnDrop<'a> {
    const fn arm(state: &'a AtomicU8) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state
                .store(ValidatorState::Uninitialized as u8, Ordering::Release);
        }
    }
}
