//! Prorata form domain logic.
//!
//! Holds the current form state (year, month, days per week, start and
//! end dates), derives default date ranges when the selected month
//! changes, persists the remembered fields to the preference store,
//! and runs the prorata days-off calculation on explicit user actions.
//! All field values are kept as raw text; parsing happens when a
//! calculation fires.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

use shared::{CalculationKind, ProrataCalculation, ProrataFormState};

use crate::backend::domain::calendar;
use crate::backend::domain::commands::prorata::{
    CalculateDaysOffCommand, UpdateSelectedMonthCommand,
};
use crate::backend::domain::models::prorata::ProrataInputError;
use crate::backend::storage::{PreferenceStorage, DAYS_PER_WEEK_KEY, MONTH_KEY, YEAR_KEY};

/// Service that owns the prorata calculator form
#[derive(Clone)]
pub struct ProrataService<S: PreferenceStorage> {
    preferences: Arc<S>,
    /// Current form text, exactly as the user sees it
    form: Arc<Mutex<ProrataFormState>>,
    /// Most recent calculation, kept on screen until the next one
    last_calculation: Arc<Mutex<Option<ProrataCalculation>>>,
}

impl<S: PreferenceStorage> ProrataService<S> {
    /// Create a new ProrataService, restoring the remembered year,
    /// month, and days-per-week values from the preference store
    pub fn new(preferences: Arc<S>) -> Result<Self> {
        let mut form = ProrataFormState::default();

        if let Some(year) = preferences.get_preference(YEAR_KEY)? {
            if !year.is_empty() {
                form.year = year;
            }
        }
        if let Some(month) = preferences.get_preference(MONTH_KEY)? {
            if calendar::month_number(&month).is_some() {
                form.month = month;
            } else if !month.is_empty() {
                warn!("Ignoring remembered month '{}' that is not a calendar month", month);
            }
        }
        if let Some(days_per_week) = preferences.get_preference(DAYS_PER_WEEK_KEY)? {
            if !days_per_week.is_empty() {
                form.days_per_week = days_per_week;
            }
        }

        if let Some((start_date, end_date)) = Self::default_range(&form.year, &form.month) {
            form.start_date = start_date;
            form.end_date = end_date;
        }

        info!(
            "Restored prorata form: year='{}', month='{}', days/week='{}'",
            form.year, form.month, form.days_per_week
        );

        Ok(Self {
            preferences,
            form: Arc::new(Mutex::new(form)),
            last_calculation: Arc::new(Mutex::new(None)),
        })
    }

    /// Get a snapshot of the current form text
    pub fn form(&self) -> ProrataFormState {
        self.form.lock().unwrap().clone()
    }

    /// Get the most recent calculation, if any action has fired yet
    pub fn last_calculation(&self) -> Option<ProrataCalculation> {
        self.last_calculation.lock().unwrap().clone()
    }

    /// Change the selected year/month pair.
    ///
    /// Stores both values verbatim, overwrites the start and end dates
    /// with the selected month's bounds, and persists the remembered
    /// fields. When the year text does not parse as an integer the two
    /// date fields are left untouched.
    pub fn update_selected_month(
        &self,
        command: UpdateSelectedMonthCommand,
    ) -> Result<ProrataFormState> {
        let snapshot = {
            let mut form = self.form.lock().unwrap();
            form.year = command.year;
            form.month = command.month;

            match Self::default_range(&form.year, &form.month) {
                Some((start_date, end_date)) => {
                    debug!("Derived default range {} .. {}", start_date, end_date);
                    form.start_date = start_date;
                    form.end_date = end_date;
                }
                None => {
                    debug!(
                        "No month bounds for year='{}', month='{}'; keeping previous dates",
                        form.year, form.month
                    );
                }
            }

            form.clone()
        };

        self.persist_remembered_fields(&snapshot)?;
        Ok(snapshot)
    }

    /// Change the days-per-week text and persist the remembered fields
    pub fn update_days_per_week(&self, value: &str) -> Result<()> {
        let snapshot = {
            let mut form = self.form.lock().unwrap();
            form.days_per_week = value.to_string();
            form.clone()
        };

        self.persist_remembered_fields(&snapshot)
    }

    /// Change the join date text verbatim; not persisted
    pub fn update_start_date(&self, value: &str) {
        self.form.lock().unwrap().start_date = value.to_string();
    }

    /// Change the termination date text verbatim; not persisted
    pub fn update_end_date(&self, value: &str) {
        self.form.lock().unwrap().end_date = value.to_string();
    }

    /// Run a prorata days-off calculation against the current form.
    ///
    /// For a new joiner the counted span runs from the join date
    /// through the end of its month; for a termination it runs from
    /// the 1st of the selected month through the last working date.
    /// An empty date field falls back to the matching month bound, and
    /// a date outside the selected month is clamped to its bounds, so
    /// the counted span always stays inside the selected month.
    pub fn calculate_days_off(
        &self,
        command: CalculateDaysOffCommand,
    ) -> Result<ProrataCalculation> {
        let form = self.form.lock().unwrap().clone();
        info!("Calculating days off: {:?} over {:?}", command, form);

        let year = parse_year(&form.year)?;
        let month = calendar::month_number(&form.month)
            .ok_or_else(|| ProrataInputError::InvalidMonth(form.month.clone()))?;
        let days_per_week = parse_days_per_week(&form.days_per_week)?;

        let days_in_month = calendar::days_in_month(month, year);
        let month_start = calendar::first_day_of_month(month, year)
            .ok_or(ProrataInputError::YearOutOfRange(year))?;
        let month_end = calendar::last_day_of_month(month, year)
            .ok_or(ProrataInputError::YearOutOfRange(year))?;

        let days_worked = match command.kind {
            CalculationKind::NewJoiner => {
                let join_date = match form.start_date.trim() {
                    "" => month_start,
                    text => parse_iso_date(text)?,
                };
                let join_date = join_date.clamp(month_start, month_end);
                calendar::inclusive_day_count(join_date, calendar::last_day_of_month_for(join_date))
            }
            CalculationKind::Termination => {
                let termination_date = match form.end_date.trim() {
                    "" => month_end,
                    text => parse_iso_date(text)?,
                };
                let termination_date = termination_date.clamp(month_start, month_end);
                calendar::inclusive_day_count(month_start, termination_date)
            }
        };

        let prorata_days_off =
            round_two_places(days_worked as f64 / f64::from(days_in_month) * days_per_week);
        let formula = format!("({} / {}) * {}", days_worked, days_in_month, days_per_week);

        let calculation = ProrataCalculation {
            kind: command.kind,
            days_worked,
            days_in_month,
            days_per_week,
            prorata_days_off,
            formula,
        };

        info!(
            "Prorata result for {} {}: {} of {} days worked -> {:.2} days off",
            calendar::month_name(month),
            year,
            days_worked,
            days_in_month,
            prorata_days_off
        );

        *self.last_calculation.lock().unwrap() = Some(calculation.clone());
        Ok(calculation)
    }

    /// Month bounds as date strings for the given form text, or None
    /// when the year does not parse or the month is not on the list
    fn default_range(year_text: &str, month_name: &str) -> Option<(String, String)> {
        let year: i32 = year_text.trim().parse().ok()?;
        let month = calendar::month_number(month_name)?;
        let last_day = calendar::days_in_month(month, year);

        Some((
            format!("{:04}-{:02}-01", year, month),
            format!("{:04}-{:02}-{:02}", year, month, last_day),
        ))
    }

    /// Write the three remembered fields to the preference store
    fn persist_remembered_fields(&self, form: &ProrataFormState) -> Result<()> {
        self.preferences.set_preference(YEAR_KEY, &form.year)?;
        self.preferences.set_preference(MONTH_KEY, &form.month)?;
        self.preferences.set_preference(DAYS_PER_WEEK_KEY, &form.days_per_week)?;
        debug!(
            "Persisted preferences: year='{}', month='{}', days/week='{}'",
            form.year, form.month, form.days_per_week
        );
        Ok(())
    }
}

fn parse_year(text: &str) -> Result<i32, ProrataInputError> {
    text.trim()
        .parse()
        .map_err(|_| ProrataInputError::InvalidYear(text.to_string()))
}

fn parse_days_per_week(text: &str) -> Result<f64, ProrataInputError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ProrataInputError::InvalidDaysPerWeek(text.to_string()))?;

    // "NaN" and "inf" are valid f64 text but nonsense as an entitlement
    if !value.is_finite() {
        return Err(ProrataInputError::InvalidDaysPerWeek(text.to_string()));
    }
    Ok(value)
}

fn parse_iso_date(text: &str) -> Result<NaiveDate, ProrataInputError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| ProrataInputError::InvalidDate(text.to_string()))
}

/// Round to two fraction digits, halves away from zero
fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
