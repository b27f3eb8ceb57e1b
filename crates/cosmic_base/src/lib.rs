//! Cosmic profile engine: Four Pillars meets the Western zodiac.
//!
//! This crate provides:
//! - Heavenly stem / earthly branch tables and the double-hour table
//! - Four-Pillars charts from a birth date and hour, with element tallies
//! - Western sun signs from (month, day)
//! - Composed profiles, two-person compatibility and daily horoscopes
//!
//! Every function is a pure computation over `const` tables. Inputs are
//! never rejected: out-of-range values flow through the same modular
//! arithmetic. Validate birth data before calling in if that matters.

pub mod compatibility;
pub mod element;
pub mod error;
pub mod horoscope;
pub mod pillars;
pub mod profile;
pub mod sexagenary;
pub mod zodiac;

pub use compatibility::{
    AffinityTables, CompatibilityResult, DEFAULT_TABLES, Person, combined_score, compatibility,
    compatibility_with, describe_score,
};
pub use element::{ALL_ELEMENTS, Element, ElementCounts, analyze_elements};
pub use error::ParseNameError;
pub use horoscope::{
    ALL_LUCKY_COLORS, DailyHoroscope, LuckyColor, daily_horoscope, lucky_color, lucky_number,
};
pub use pillars::{
    DAY_PILLAR_EPOCH, FourPillars, Pillar, YEAR_CYCLE_ANCHOR, day_pillar, four_pillars,
    hour_pillar, month_pillar, year_pillar,
};
pub use profile::{CosmicProfile, compose_profile, element_trait, profile_title, zodiac_trait};
pub use sexagenary::{ALL_BRANCHES, ALL_STEMS, Branch, HOUR_BRANCH, Stem, hour_branch_index};
pub use zodiac::{ALL_SIGNS, MonthDay, ZodiacElement, ZodiacSign, zodiac_sign};
