//! # Backend Module
//!
//! This backend module provides direct access to domain services and
//! storage for the egui frontend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Is optimized for desktop-only operation

use anyhow::Result;
use std::sync::Arc;

// Domain modules
pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::yaml::YamlConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub prorata_service: domain::ProrataService<storage::PreferencesRepository>,
}

impl Backend {
    /// Create a new backend instance over the default data directory
    pub fn new() -> Result<Self> {
        let connection = YamlConnection::new_default()?;
        Self::with_connection(connection)
    }

    /// Create a new backend instance over a specific data directory
    pub fn with_connection(connection: YamlConnection) -> Result<Self> {
        let preferences = Arc::new(storage::PreferencesRepository::new(connection));
        let prorata_service = domain::ProrataService::new(preferences)?;

        Ok(Backend { prorata_service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::prorata::UpdateSelectedMonthCommand;
    use tempfile::TempDir;

    #[test]
    fn test_preferences_survive_backend_restart() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let backend = Backend::with_connection(YamlConnection::new(temp_dir.path()).unwrap()).unwrap();
        backend
            .prorata_service
            .update_selected_month(UpdateSelectedMonthCommand {
                year: "2024".to_string(),
                month: "February".to_string(),
            })
            .unwrap();
        backend.prorata_service.update_days_per_week("5").unwrap();
        drop(backend);

        // A fresh backend over the same directory restores the form
        let restarted = Backend::with_connection(YamlConnection::new(temp_dir.path()).unwrap()).unwrap();
        let form = restarted.prorata_service.form();

        assert_eq!(form.year, "2024");
        assert_eq!(form.month, "February");
        assert_eq!(form.days_per_week, "5");
        assert_eq!(form.start_date, "2024-02-01");
        assert_eq!(form.end_date, "2024-02-29");
    }
}
