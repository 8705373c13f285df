use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Profile, ProfileStore, StoreError};

/// Stores the profile as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&mut self) -> Result<Option<Profile>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(src) => Ok(Some(serde_json::from_str(&src)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(profile)?)?;
        Ok(())
    }
}
