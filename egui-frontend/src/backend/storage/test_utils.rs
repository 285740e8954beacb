//! Test utilities for storage-backed tests.
//!
//! Provides an in-memory `PreferenceStorage` so domain tests can run
//! without touching the filesystem.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::backend::storage::traits::PreferenceStorage;

/// In-memory preference store used as a test double for the YAML
/// repository
#[derive(Default)]
pub struct InMemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStorage for InMemoryPreferences {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryPreferences::default();

        assert_eq!(store.get_preference("year").unwrap(), None);

        store.set_preference("year", "2025").unwrap();
        assert_eq!(store.get_preference("year").unwrap(), Some("2025".to_string()));

        store.set_preference("year", "2026").unwrap();
        assert_eq!(store.get_preference("year").unwrap(), Some("2026".to_string()));
    }
}
