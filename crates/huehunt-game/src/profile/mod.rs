//! Player identity and local persistence.
//!
//! The game reads the profile once at start and writes it back whenever the
//! local high score improves or the display name changes. Where it lives is
//! up to the [`ProfileStore`].

mod error;
mod json;
mod memory;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use json::JsonProfileStore;
pub use memory::MemoryProfileStore;

/// Display name given to a freshly created profile.
pub const DEFAULT_DISPLAY_NAME: &str = "Player";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable per-player identifier.
    pub player_id: String,
    pub display_name: String,
    /// Best score reached on this device.
    #[serde(default)]
    pub high_score: u32,
}

impl Profile {
    /// A new profile with a random 16-hex-digit id.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, display_name: impl Into<String>) -> Self {
        Self {
            player_id: format!("{:016x}", rng.r#gen::<u64>()),
            display_name: display_name.into(),
            high_score: 0,
        }
    }
}

pub trait ProfileStore {
    /// The stored profile, or `None` on first run.
    fn load(&mut self) -> Result<Option<Profile>, StoreError>;

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for Box<S> {
    fn load(&mut self) -> Result<Option<Profile>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        (**self).save(profile)
    }
}
