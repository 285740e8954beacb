//! # YAML Preferences Repository
//!
//! This module provides a file-based preference storage implementation
//! using a single YAML file `preferences.yaml` at the root of the data
//! directory.
//!
//! ## File Structure
//!
//! ```
//! data/
//! └── preferences.yaml    ← This module manages this file
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! daysPerWeek: "6"
//! month: "February"
//! year: "2025"
//! ```
//!
//! ## Features
//!
//! - Single flat map of string keys to string values
//! - Missing file reads as an empty map
//! - Atomic file writes with temp files

use anyhow::Result;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::connection::YamlConnection;
use crate::backend::storage::traits::PreferenceStorage;

const PREFERENCES_FILE: &str = "preferences.yaml";

/// YAML-backed preference repository
#[derive(Clone)]
pub struct PreferencesRepository {
    connection: YamlConnection,
}

impl PreferencesRepository {
    /// Create a new preferences repository
    pub fn new(connection: YamlConnection) -> Self {
        Self { connection }
    }

    /// Get the preferences file path
    fn preferences_path(&self) -> PathBuf {
        self.connection.base_directory().join(PREFERENCES_FILE)
    }

    /// Load all preferences, treating a missing file as an empty map
    fn load_preferences(&self) -> Result<BTreeMap<String, String>> {
        let path = self.preferences_path();

        if !path.exists() {
            debug!("No preferences file at {:?}, starting empty", path);
            return Ok(BTreeMap::new());
        }

        let yaml_content = fs::read_to_string(&path)?;
        let preferences: BTreeMap<String, String> = serde_yaml::from_str(&yaml_content)?;
        debug!("Loaded {} preferences from {:?}", preferences.len(), path);
        Ok(preferences)
    }

    /// Save all preferences to file
    fn save_preferences(&self, preferences: &BTreeMap<String, String>) -> Result<()> {
        let path = self.preferences_path();
        let base_dir = self.connection.base_directory();

        // Ensure base directory exists
        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
            info!("Created base data directory: {:?}", base_dir);
        }

        let yaml_content = serde_yaml::to_string(preferences)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} preferences to {:?}", preferences.len(), path);
        Ok(())
    }
}

impl PreferenceStorage for PreferencesRepository {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_preferences()?.get(key).cloned())
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        let mut preferences = self.load_preferences()?;
        preferences.insert(key.to_string(), value.to_string());
        self.save_preferences(&preferences)
    }
}
