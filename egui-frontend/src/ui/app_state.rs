//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the prorata calculator app.
//!
//! ## Key Types:
//! - `ProrataCalculatorApp` - Main application state struct
//!
//! ## Purpose:
//! The struct holds all application state in a single location:
//! - Backend connection and the domain form service
//! - Text buffers mirroring the form fields on screen
//! - The last calculation and any validation message
//!
//! The text buffers are what egui edits directly; every change is
//! pushed through the backend service so the domain copy of the form
//! (and the preference store) stays in sync.

use anyhow::Result;
use log::info;

use shared::ProrataCalculation;

use crate::backend::Backend;

/// Main application struct for the egui prorata calculator
pub struct ProrataCalculatorApp {
    pub backend: Backend,

    // Form field buffers
    pub year: String,
    pub month: String,
    pub days_per_week: String,
    pub start_date: String,
    pub end_date: String,

    // Results state
    pub calculation: Option<ProrataCalculation>,
    pub error_message: Option<String>,
}

impl ProrataCalculatorApp {
    /// Create a new ProrataCalculatorApp over the default data directory
    pub fn new() -> Result<Self> {
        info!("🚀 Initializing ProrataCalculatorApp");

        let backend = Backend::new()?;
        let form = backend.prorata_service.form();

        Ok(Self {
            backend,
            year: form.year,
            month: form.month,
            days_per_week: form.days_per_week,
            start_date: form.start_date,
            end_date: form.end_date,
            calculation: None,
            error_message: None,
        })
    }
}
