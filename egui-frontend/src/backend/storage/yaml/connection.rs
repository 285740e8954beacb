use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// YamlConnection manages the base directory the preference file lives in
#[derive(Clone)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new connection in the default data directory,
    /// `Documents/Prorata Calculator` under the user's home
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = documents_dir.join("Prorata Calculator");
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("data").join("prorata");

        let connection = YamlConnection::new(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_new_accepts_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let connection = YamlConnection::new(temp_dir.path()).unwrap();
        assert_eq!(connection.base_directory(), temp_dir.path());
    }
}
