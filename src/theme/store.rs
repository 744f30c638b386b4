//! Local key-value persistence for UI preferences

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{APP_NAME, HOME_ENV};
use crate::error::StoreError;

/// Get/set string values by key
pub(crate) trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON object on disk, one entry per key
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    /// `$WISETOOLS_HOME/storage.json`, else `<config dir>/wisetools/storage.json`
    pub(crate) fn open_default() -> Result<Self, StoreError> {
        let dir = match std::env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()
                .ok_or(StoreError::NoHome)?
                .join(APP_NAME),
        };
        Ok(FileStore::new(dir.join("storage.json")))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_reader(file).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = File::create(&self.path).map_err(io_err)?;
        serde_json::to_writer_pretty(file, &entries).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        debug!(key, value, path = %self.path.display(), "preference saved");
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
