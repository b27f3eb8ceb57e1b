//! Error types for civil-date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating calendar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The text is not of the form `YYYY-MM-DD`.
    Parse(String),
    /// The fields parsed but do not name a real calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}
