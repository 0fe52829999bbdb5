//! Durable storage for the profile, journal, and achievement state.
//!
//! Each collection lives in its own JSON file under the data directory.
//! Reads take a shared lock and degrade to the default value on missing
//! or malformed files (with a warning) rather than surfacing an error.
//! Writes go through a locked temp file that is synced and atomically
//! renamed over the original.

use crate::{AchievementState, Error, Journal, Profile, Result};
use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const PROFILE_FILE: &str = "profile.json";
const JOURNAL_FILE: &str = "journal.json";
const ACHIEVEMENTS_FILE: &str = "achievements.json";

/// File-backed persistence collaborator
///
/// Synchronous whole-value get/set per collection; the store owns no
/// domain logic of its own.
#[derive(Clone, Debug)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_profile(&self) -> Result<Option<Profile>> {
        load_or_default(&self.data_dir.join(PROFILE_FILE))
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        save_atomic(&self.data_dir.join(PROFILE_FILE), profile)
    }

    pub fn load_journal(&self) -> Result<Journal> {
        load_or_default(&self.data_dir.join(JOURNAL_FILE))
    }

    pub fn save_journal(&self, journal: &Journal) -> Result<()> {
        save_atomic(&self.data_dir.join(JOURNAL_FILE), journal)
    }

    pub fn load_achievements(&self) -> Result<AchievementState> {
        load_or_default(&self.data_dir.join(ACHIEVEMENTS_FILE))
    }

    pub fn save_achievements(&self, state: &AchievementState) -> Result<()> {
        save_atomic(&self.data_dir.join(ACHIEVEMENTS_FILE), state)
    }
}

/// Load a JSON value with a shared lock.
///
/// Missing, unreadable, or malformed files all produce the default
/// value; a broken store file must never take the journal down with it.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!("No store file at {:?}, using defaults", path);
        return Ok(T::default());
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open store file {:?}: {}. Using defaults.", path, e);
            return Ok(T::default());
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock store file {:?}: {}. Using defaults.", path, e);
        return Ok(T::default());
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read store file {:?}: {}. Using defaults.", path, e);
        return Ok(T::default());
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded store file {:?}", path);
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Failed to parse store file {:?}: {}. Using defaults.", path, e);
            Ok(T::default())
        }
    }
}

/// Atomically write a JSON value:
/// 1. Write to a locked temp file in the same directory
/// 2. Sync to disk
/// 3. Rename over the original
fn save_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let parent = path
        .parent()
        .ok_or_else(|| Error::Store(format!("store path {:?} has no parent", path)))?;
    let temp = NamedTempFile::new_in(parent)?;

    // Exclusive lock on the temp file to serialize concurrent writers
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    // Atomically replace the old file
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved store file {:?}", path);
    Ok(())
}
