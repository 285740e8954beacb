//! # Domain Module
//!
//! Contains all business logic for the prorata calculator.
//!
//! This module encapsulates the calculation rules and form state that
//! define how partial-month employment is prorated into a days-off
//! entitlement. It operates independently of any specific UI framework
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **calendar**: Pure date arithmetic (month lengths, bounds, spans)
//! - **prorata_service**: Form state, preference persistence, and the
//!   days-off calculation
//! - **commands**: Command structs the UI hands to the service
//! - **models**: Typed validation errors
//!
//! ## Business Rules
//!
//! - Year, month, and days-per-week are remembered across sessions
//! - Changing the selected month rewrites the date fields to that
//!   month's bounds
//! - A new-joiner span runs from the join date to month end; a
//!   termination span runs from month start to the last working date
//! - The result scales days-per-week by the fraction of the month
//!   worked, rounded to two decimal places

pub mod calendar;
pub mod commands;
pub mod models;
pub mod prorata_service;

pub use prorata_service::*;
