//! Local key-value store holding the session
//!
//! The store stands in for the browser's local storage: a flat map of string
//! keys to string values that survives between runs. [`FileStore`] persists it
//! as YAML next to the config. Tests use an in-process `MemoryStore`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::Config;
use crate::error::{Result, StorageError};

/// Key under which the bearer token is stored
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key under which the signed-in user's id is stored
pub const USER_ID_KEY: &str = "user_id";

/// Host-provided string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// YAML-file backed store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Default session file location (`~/.taskop/session.yaml`)
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::home_dir()?.join("session.yaml"))
    }

    /// Open the store at an optional override path, or the default location
    pub fn open_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Self::open(path)
    }

    /// Open the store, reading existing entries. A missing file is an empty store.
    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| StorageError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&contents).map_err(|e| StorageError::Read {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };

        log::debug!("Opened session store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let write_err = |reason: String| StorageError::Write {
            path: self.path.display().to_string(),
            reason,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let contents = serde_yaml::to_string(entries).map_err(|e| write_err(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| write_err(e.to_string()))?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
