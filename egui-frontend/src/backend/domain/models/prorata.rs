//! Typed validation errors for the prorata form.
//!
//! Field updates accept any text verbatim; these errors are raised
//! only when a calculation action tries to interpret that text.

#[derive(Debug, thiserror::Error)]
pub enum ProrataInputError {
    #[error("Year is not a whole number: '{0}'")]
    InvalidYear(String),
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("'{0}' is not one of the twelve month names")]
    InvalidMonth(String),
    #[error("Working days per week is not a number: '{0}'")]
    InvalidDaysPerWeek(String),
    #[error("Date must be in YYYY-MM-DD format: '{0}'")]
    InvalidDate(String),
}
