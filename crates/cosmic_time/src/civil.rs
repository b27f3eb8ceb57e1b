//! Proleptic-Gregorian day numbers and calendar dates.
//!
//! Day numbers count whole days from 1970-01-01 (day 0). Conversion uses the
//! era/day-of-era decomposition (400-year eras of 146 097 days), which is
//! exact for every `i32` year.
//!
//! Field overflow is lenient: month 13 is January of the next year, day 0 is
//! the last day of the previous month, day 35 runs into the next month.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Day number of 0000-03-01 relative to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for months outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Day number of an in-range date (month 1-12, day counted from the 1st).
fn days_from_normalized(year: i64, month: i64, day: i64) -> i64 {
    // Shift the year so it starts in March; the leap day lands at the end.
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Day number of `year-month-day`, with lenient month and day overflow.
///
/// `days_from_civil(1970, 1, 1) == 0`. Any `month`/`day` is accepted: the
/// month rolls into neighbouring years and the day is added linearly to the
/// first of the (normalized) month.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let m0 = i64::from(month) - 1;
    let y = i64::from(year) + m0.div_euclid(12);
    let m = m0.rem_euclid(12) + 1;
    days_from_normalized(y, m, 1) + i64::from(day) - 1
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: CivilDate, to: CivilDate) -> i64 {
    to.day_number() - from.day_number()
}

/// Calendar date for a day number (inverse of [`days_from_civil`]).
///
/// Years outside `i32` saturate: past the end the result is
/// `i32::MAX`-12-31, before the start it is `i32::MIN`-01-01.
pub fn civil_from_days(days: i64) -> CivilDate {
    let z = days.saturating_add(EPOCH_SHIFT);
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    match i32::try_from(year) {
        Ok(year) => CivilDate {
            year,
            month: month as u32,
            day: day as u32,
        },
        Err(_) if year > 0 => CivilDate::new(i32::MAX, 12, 31),
        Err(_) => CivilDate::new(i32::MIN, 1, 1),
    }
}

/// A calendar date with no time-of-day or zone.
///
/// Fields are not range-checked on construction; see [`CivilDate::is_valid`]
/// and [`CivilDate::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// True when the fields name a real day of the proleptic Gregorian calendar.
    pub const fn is_valid(&self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }

    /// Like [`CivilDate::new`] but rejects impossible dates.
    pub fn checked(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self::new(year, month, day);
        if date.is_valid() {
            Ok(date)
        } else {
            Err(TimeError::InvalidDate { year, month, day })
        }
    }

    /// Day number (1970-01-01 = 0), lenient on overflowing fields.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// The real calendar day these (possibly overflowing) fields roll over to.
    pub fn normalized(&self) -> Self {
        civil_from_days(self.day_number())
    }

    /// 1-based ordinal within the year: January 1st is day 1.
    ///
    /// Equivalently, the number of whole days elapsed since the last day of
    /// the previous year. Overflowing fields are normalized first.
    pub fn day_of_year(&self) -> u32 {
        let date = self.normalized();
        let jan_first = days_from_civil(date.year, 1, 1);
        (date.day_number() - jan_first + 1) as u32
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -i64::from(self.year), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`; a leading `-` marks a negative (astronomical) year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year {y:?}")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month {m:?}")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day {d:?}")))?;
        let year = if negative { -year } else { year };
        Self::checked(year, month, day)
    }
}
