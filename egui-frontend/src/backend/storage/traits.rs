//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain
//! layer remember form values across sessions without knowing how or
//! where they are written.

use anyhow::Result;

/// Preference key for the remembered year text
pub const YEAR_KEY: &str = "year";
/// Preference key for the remembered month name
pub const MONTH_KEY: &str = "month";
/// Preference key for the remembered days-per-week text
pub const DAYS_PER_WEEK_KEY: &str = "daysPerWeek";

/// Trait defining the interface for remembered-preference storage
///
/// Values are plain strings keyed by the constants above. A missing
/// key is not an error; it simply yields `None` and the caller falls
/// back to its default.
pub trait PreferenceStorage: Send + Sync {
    /// Read a preference value, or None when the key has never been set
    fn get_preference(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference value, replacing any previous one
    fn set_preference(&self, key: &str, value: &str) -> Result<()>;
}
