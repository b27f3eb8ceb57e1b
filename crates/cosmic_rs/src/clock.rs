//! Source of "today" for the daily horoscope.
//!
//! The engine never reads the wall clock. Callers pick a date explicitly or
//! hand in a [`Clock`].

use chrono::{Datelike, Local};
use cosmic_base::{CosmicProfile, DailyHoroscope, daily_horoscope};
use cosmic_time::CivilDate;

/// Provides the current calendar date.
pub trait Clock {
    fn today(&self) -> CivilDate;
}

/// The host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CivilDate {
        let now = Local::now().date_naive();
        CivilDate::new(now.year(), now.month(), now.day())
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CivilDate);

impl Clock for FixedClock {
    fn today(&self) -> CivilDate {
        self.0
    }
}

/// Horoscope for `profile` on `date`.
pub fn daily_horoscope_on(profile: &CosmicProfile, date: CivilDate) -> DailyHoroscope {
    let day = date.day_of_year();
    tracing::debug!(%date, day_of_year = day, "daily horoscope");
    daily_horoscope(profile.element(), profile.zodiac, day)
}

/// Horoscope for `profile` on whatever day `clock` says it is.
pub fn daily_horoscope_today(profile: &CosmicProfile, clock: &impl Clock) -> DailyHoroscope {
    daily_horoscope_on(profile, clock.today())
}
