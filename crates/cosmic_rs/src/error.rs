//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cosmic_time::TimeError;

/// Errors from the high-level convenience API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CosmicError {
    /// Date text could not be parsed, or names no real day.
    Time(TimeError),
    /// Birth data parsed but is out of the accepted range.
    InvalidBirthData(&'static str),
    /// JSON encoding or decoding failed.
    Serialization(String),
    /// A token URI was not a base64 JSON data URI.
    InvalidDataUri(String),
}

impl Display for CosmicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidBirthData(msg) => write!(f, "invalid birth data: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::InvalidDataUri(msg) => write!(f, "invalid data URI: {msg}"),
        }
    }
}

impl Error for CosmicError {}

impl From<TimeError> for CosmicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<serde_json::Error> for CosmicError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes() {
        let e = CosmicError::InvalidBirthData("hour must be 0-23");
        assert_eq!(e.to_string(), "invalid birth data: hour must be 0-23");
        let e: CosmicError = TimeError::Parse("bad".into()).into();
        assert_eq!(e.to_string(), "time error: date parse error: bad");
    }

    #[test]
    fn from_serde_json() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let e: CosmicError = err.into();
        assert!(matches!(e, CosmicError::Serialization(_)));
    }
}
