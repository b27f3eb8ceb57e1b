//! Error types for the cosmic engine.
//!
//! The calculations themselves are total; only name parsing can fail.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A name did not match any entry of the named table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseNameError {
    /// Not one of Wood, Fire, Earth, Metal, Water.
    Element(String),
    /// Not one of the twelve Western sign names.
    ZodiacSign(String),
}

impl Display for ParseNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(name) => write!(f, "unknown element: {name:?}"),
            Self::ZodiacSign(name) => write!(f, "unknown zodiac sign: {name:?}"),
        }
    }
}

impl Error for ParseNameError {}
