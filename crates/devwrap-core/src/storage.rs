//! Session-scoped key/value storage.
//!
//! Two logical keys live here:
//! - [`PERIOD_KEY`]: the landing step's `{periodType, year, month?}`
//! - [`PROFILE_KEY`]: the full profile, written when the form is submitted
//!
//! Both are plain JSON text. Reads that fail to parse are logged and treated
//! as missing so callers fall back to defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::StorageError;
use crate::types::{PeriodSelection, WrapProfile};

/// Key holding the period selection
pub const PERIOD_KEY: &str = "wrapPeriod";
/// Key holding the submitted profile
pub const PROFILE_KEY: &str = "wrapData";

/// Persistence port for the short-lived wrap session.
///
/// Implementors provide raw string access; the typed helpers are shared.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Serialize the whole profile under [`PROFILE_KEY`]
    fn save_profile(&self, profile: &WrapProfile) -> Result<(), StorageError> {
        let json = serde_json::to_string(profile).map_err(|source| StorageError::Serialize {
            key: PROFILE_KEY,
            source,
        })?;
        self.set(PROFILE_KEY, &json)
    }

    /// Stored profile, or an error if present but unreadable
    fn try_load_profile(&self) -> Result<Option<WrapProfile>, StorageError> {
        read_json(self, PROFILE_KEY)
    }

    /// Stored profile; corrupt data is treated as absent
    fn load_profile(&self) -> Option<WrapProfile> {
        self.try_load_profile()
            .map_err(|e| tracing::warn!("Ignoring stored profile: {}", e))
            .ok()
            .flatten()
    }

    fn save_period(&self, period: &PeriodSelection) -> Result<(), StorageError> {
        let json = serde_json::to_string(period).map_err(|source| StorageError::Serialize {
            key: PERIOD_KEY,
            source,
        })?;
        self.set(PERIOD_KEY, &json)
    }

    fn try_load_period(&self) -> Result<Option<PeriodSelection>, StorageError> {
        read_json(self, PERIOD_KEY)
    }

    /// Stored period selection; corrupt data is treated as absent
    fn load_period(&self) -> Option<PeriodSelection> {
        self.try_load_period()
            .map_err(|e| tracing::warn!("Ignoring stored period: {}", e))
            .ok()
            .flatten()
    }

    /// Forget both keys
    fn clear(&self) -> Result<(), StorageError> {
        self.remove(PERIOD_KEY)?;
        self.remove(PROFILE_KEY)
    }
}

fn read_json<S, T>(store: &S, key: &'static str) -> Result<Option<T>, StorageError>
where
    S: SessionStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match store.get(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Parse { key, source }),
        None => Ok(None),
    }
}

/// In-process store; contents vanish with the process.
///
/// This is the desktop app's session: closing the window ends it.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a session directory.
///
/// Lets a CLI session span several invocations; `clear` ends it.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Open (and create if needed) a session directory
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
