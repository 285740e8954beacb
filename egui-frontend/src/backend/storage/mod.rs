//! # Storage Module
//!
//! Handles persistence of the remembered form preferences.
//!
//! This module abstracts away the specific storage implementation and
//! provides a consistent interface for reading and writing the three
//! remembered values (year, month, days per week). The implementation
//! can be swapped out without affecting the domain logic or UI layers.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: a single YAML file in the user's data
//!   directory, written atomically via a temp file
//! - **Tests**: an in-memory store stands in for the file
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: clean separation between domain and data access
//! - **Dependency Inversion**: the domain depends on the
//!   `PreferenceStorage` trait, not on a concrete store

pub mod traits;
pub mod yaml;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use traits::{PreferenceStorage, DAYS_PER_WEEK_KEY, MONTH_KEY, YEAR_KEY};
pub use yaml::{PreferencesRepository, YamlConnection};
