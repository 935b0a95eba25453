//! Key-value persistence for user preferences.
//!
//! Preference storage is a convenience, never a requirement: callers treat
//! every [`PreferenceError`] as a warning and carry on.

use crate::errors::PreferenceError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the preferred theme name is stored
pub const THEME_PREFERENCE_KEY: &str = "expositio-theme";

const APP_DIR_NAME: &str = "expositio";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Process-local store, used in tests and when no config directory exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, one entry per key
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/expositio/preferences.json`, when the platform has a config dir
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    pub fn at_default_location() -> Result<Self, PreferenceError> {
        Self::default_location()
            .map(Self::new)
            .ok_or_else(|| PreferenceError::Unavailable("no configuration directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        log::debug!("Saved preference '{key}' to {}", self.path.display());
        Ok(())
    }
}
