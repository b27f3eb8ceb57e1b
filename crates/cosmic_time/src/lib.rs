//! Civil-day arithmetic for the cosmic profile engine.
//!
//! This crate provides:
//! - Day numbers for proleptic-Gregorian dates (1970-01-01 = day 0)
//! - Lenient month/day roll-over, so 1990-13-01 is 1991-01-01
//! - Day-of-year ordinals used as the horoscope's "today"
//! - A `CivilDate` type with `YYYY-MM-DD` parsing and display
//!
//! No time zones, no leap seconds: a day is a calendar day.

pub mod civil;
pub mod error;

pub use civil::{
    CivilDate, civil_from_days, days_between, days_from_civil, days_in_month, is_leap_year,
};
pub use error::TimeError;
