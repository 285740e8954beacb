//! Calendar arithmetic for the prorata calculator.
//!
//! This module contains the pure date computations: month lengths,
//! month-name lookups, month bounds, and inclusive day spans. The form
//! controller only handles input plumbing, while all calendar
//! computations live here.

use chrono::{Datelike, NaiveDate};

/// Month names in display order, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Get the 1-based month number for a month name from the fixed list
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&month| month == name)
        .map(|index| index as u32 + 1)
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// First day of the given month, or None when chrono cannot represent
/// the year (months are always passed in as 1-12 here)
pub fn first_day_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month, or None when chrono cannot represent
/// the year
pub fn last_day_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(month, year))
}

/// Final calendar day of the month the given date falls in
pub fn last_day_of_month_for(date: NaiveDate) -> NaiveDate {
    let last_day = days_in_month(date.month(), date.year());
    // with_day cannot fail for a day count taken from the same month
    date.with_day(last_day).unwrap_or(date)
}

/// Number of whole calendar days from `from` through `to`, counting
/// both endpoints. A date spans itself as 1 day; a reversed range
/// produces a negative count, which callers are expected to prevent.
pub fn inclusive_day_count(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}
