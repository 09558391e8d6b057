//! Application configuration and persisted preferences.

use crate::consts::cli_consts::breakpoints::{DEFAULT_CELL_HEIGHT_PX, DEFAULT_CELL_WIDTH_PX};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Overrides the directory holding `config.json` and `preferences.json`.
pub const HOME_OVERRIDE_ENV: &str = "STOREFRONT_ADMIN_HOME";

const CONFIG_DIR: &str = ".storefront-admin";
const CONFIG_FILE: &str = "config.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// Which flavour of chart instance registry the chart backend exposes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistryFlavor {
    /// Object keyed by instance id.
    Keyed,
    /// Insertion-ordered, iterable collection.
    #[default]
    Iterable,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub cell_width_px: u32,
    pub cell_height_px: u32,
    pub live_updates: bool,
    pub chart_registry: RegistryFlavor,
    pub with_background_color: bool,
    /// Fixed viewport width in pixels at startup, instead of columns times cell width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_width_px: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            cell_height_px: DEFAULT_CELL_HEIGHT_PX,
            live_updates: true,
            chart_registry: RegistryFlavor::default(),
            with_background_color: true,
            viewport_width_px: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        write_json(path, self)
    }
}

/// Directory holding the dashboard's files.
pub fn get_config_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var(HOME_OVERRIDE_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(CONFIG_DIR))
}

pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

pub fn get_preferences_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_config_dir()?.join(PREFERENCES_FILE))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Serialization failed: {}", e),
        )
    })?;
    fs::write(path, json)?;
    Ok(())
}

/// String key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), std::io::Error>;
}

/// Preferences persisted as a flat JSON object, written through on every set.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store; a missing file yields an empty store.
    pub fn open(path: PathBuf) -> Result<Self, std::io::Error> {
        let values = if path.exists() {
            let buf = fs::read(&path)?;
            serde_json::from_slice(&buf)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Deletes the preference file.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), std::io::Error> {
        self.values.insert(key.to_string(), value.to_string());
        write_json(&self.path, &self.values)
    }
}

/// In-memory store, used when no preference file can be opened.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), std::io::Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            cell_width_px: 10,
            chart_registry: RegistryFlavor::Keyed,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "chart_registry": "keyed" }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.chart_registry, RegistryFlavor::Keyed);
        assert_eq!(config.cell_width_px, DEFAULT_CELL_WIDTH_PX);
        assert!(config.live_updates);
    }

    #[test]
    // Loading an invalid JSON file should return an error, and the lenient loader defaults.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    // Preferences are written through and survive reopening.
    fn test_file_preferences_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(path.clone()).unwrap();
        assert_eq!(store.get("sidebarCollapsed"), None);
        store.set("sidebarCollapsed", "true").unwrap();

        let reopened = FilePreferenceStore::open(path.clone()).unwrap();
        assert_eq!(reopened.get("sidebarCollapsed").as_deref(), Some("true"));

        FilePreferenceStore::clear(&path).unwrap();
        assert!(!path.exists());
    }
}
