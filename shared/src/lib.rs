use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the selected month a prorata calculation anchors on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationKind {
    /// Employee joined partway through the month; count runs from the
    /// join date through the end of the month
    NewJoiner,
    /// Employee left partway through the month; count runs from the
    /// start of the month through the last working date
    Termination,
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationKind::NewJoiner => write!(f, "new joiner"),
            CalculationKind::Termination => write!(f, "termination"),
        }
    }
}

/// Raw text of the calculator form, exactly as the user sees it
///
/// Parsing and validation happen at calculation time, so every field
/// is kept as a string here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProrataFormState {
    /// Year as typed, e.g. "2025"
    pub year: String,
    /// Month name from the fixed January..December list
    pub month: String,
    /// Working days per week as typed, e.g. "6" or "5.5"
    pub days_per_week: String,
    /// Join date for new joiners (YYYY-MM-DD)
    pub start_date: String,
    /// Last working date for terminations (YYYY-MM-DD)
    pub end_date: String,
}

impl Default for ProrataFormState {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year().to_string(),
            month: "January".to_string(),
            days_per_week: "6".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Result of a prorata days-off calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProrataCalculation {
    pub kind: CalculationKind,
    /// Inclusive day count credited to the employee
    pub days_worked: i64,
    /// Length of the selected month
    pub days_in_month: u32,
    /// Working days per week, used as the full monthly entitlement
    pub days_per_week: f64,
    /// Prorated entitlement rounded to two decimal places
    pub prorata_days_off: f64,
    /// Human-readable arithmetic, e.g. "(19 / 28) * 6"
    pub formula: String,
}
