//! Durable client preferences.
//!
//! Preferences are a flat JSON object of key → value stored in
//! `preferences.json` under the data directory. The only key the application
//! writes is [`DARK_MODE_KEY`].

use crate::error::PreferenceError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the dark-mode flag is persisted.
pub const DARK_MODE_KEY: &str = "starchart.dark_mode";

/// File-backed key/value preference store.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl PreferenceStore {
    /// Open the store at `path`; a missing file yields an empty store.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                Map::new()
            } else {
                serde_json::from_str(&contents).map_err(|source| PreferenceError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?
            }
        } else {
            tracing::debug!("No preference file at {}, starting empty", path.display());
            Map::new()
        };

        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a preference.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a preference and persist the store.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }

    /// Delete a preference and persist the store.
    pub fn delete(&mut self, key: &str) -> Result<(), PreferenceError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// Restored dark-mode flag; `false` when unset or not a boolean.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.get(DARK_MODE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Persist the dark-mode flag.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PreferenceError> {
        self.set(DARK_MODE_KEY, Value::Bool(enabled))
    }

    /// Flip the dark-mode flag and return the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, PreferenceError> {
        let enabled = !self.dark_mode();
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
