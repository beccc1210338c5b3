//! Saved loading profiles kept in a JSON file.
//!
//! The file holds an array of `{ name, weights }` records. Records written by
//! older releases are migrated on load (see [`StationWeights::from_stored`]).

use std::fs;
use std::io;
use std::path::Path;

use skylane_balance::{Profile, StationWeights};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile name must not be empty")]
    EmptyName,
    #[error("failed to access profile store: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse profile store: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered collection of profiles with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBook {
    profiles: Vec<Profile>,
}

impl ProfileBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a profile store. A missing file is an empty book.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no profile store at {}", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let profiles: Vec<Profile> = serde_json::from_str(&contents)?;
        log::debug!("loaded {} profiles from {}", profiles.len(), path.display());
        Ok(Self { profiles })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProfileError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.profiles)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Store weights under `name`, replacing any profile with the same name.
    /// The saved profile always ends up last.
    pub fn upsert(&mut self, name: &str, weights: StationWeights) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        self.profiles.retain(|p| p.name != name);
        self.profiles.push(Profile::new(name, weights.sanitized()));
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Remove a profile, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        let index = self.profiles.iter().position(|p| p.name == name)?;
        Some(self.profiles.remove(index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
