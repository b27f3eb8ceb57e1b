//! Convenience wrapper for the cosmic profile engine.
//!
//! Takes birth data as users type it, validates it, and hands back profiles,
//! compatibility results, daily horoscopes and mintable token metadata.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cosmic_rs::*;
//!
//! let birth: BirthData = "1990-01-01T12".parse()?;
//! let profile = cosmic_profile(&birth)?;
//! println!("{}", profile.title); // Cosmic Fire Capricorn
//!
//! let today = daily_horoscope_today(&profile, &SystemClock);
//! println!("{}", today.combined);
//! ```

pub mod birth;
pub mod clock;
pub mod convenience;
pub mod error;
pub mod metadata;

pub use birth::{BirthData, DEFAULT_HOUR, SUPPORTED_YEARS};
pub use clock::{Clock, FixedClock, SystemClock, daily_horoscope_on, daily_horoscope_today};
pub use convenience::{compatibility_from_births, cosmic_profile, person};
pub use error::CosmicError;
pub use metadata::{DATA_URI_PREFIX, TokenAttribute, TokenMetadata};

// Re-export engine types so callers don't need cosmic_base directly.
pub use cosmic_base::{
    Branch, CompatibilityResult, CosmicProfile, DailyHoroscope, Element, ElementCounts,
    FourPillars, LuckyColor, Person, Pillar, Stem, ZodiacElement, ZodiacSign, compatibility,
};
pub use cosmic_time::{CivilDate, TimeError};
