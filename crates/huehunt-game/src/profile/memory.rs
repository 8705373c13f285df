use super::{Profile, ProfileStore, StoreError};

/// Keeps the profile in memory; counts saves so tests can observe writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryProfileStore {
    profile: Option<Profile>,
    saves: usize,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already remembers `profile`.
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile: Some(profile), saves: 0 }
    }

    #[inline]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[inline]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&mut self) -> Result<Option<Profile>, StoreError> {
        Ok(self.profile.clone())
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        self.profile = Some(profile.clone());
        self.saves += 1;
        Ok(())
    }
}
