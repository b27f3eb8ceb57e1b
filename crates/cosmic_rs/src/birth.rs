//! Birth date and hour as entered by a user.

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

use cosmic_time::{CivilDate, days_in_month};
use serde::{Deserialize, Serialize};

use crate::error::CosmicError;

/// Years accepted by [`BirthData::validate`].
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Hour used when none is given, and for every compatibility chart.
pub const DEFAULT_HOUR: u32 = 12;

/// A birth moment at hour resolution, local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0-23.
    pub hour: u32,
}

impl BirthData {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Birth at [`DEFAULT_HOUR`] on `date`.
    pub const fn at_noon(date: CivilDate) -> Self {
        Self::new(date.year, date.month, date.day, DEFAULT_HOUR)
    }

    pub const fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    /// Reject birth data the engine would otherwise silently roll over.
    pub fn validate(&self) -> Result<(), CosmicError> {
        if !SUPPORTED_YEARS.contains(&self.year) {
            return Err(CosmicError::InvalidBirthData("year must be 1900-2100"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(CosmicError::InvalidBirthData("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(CosmicError::InvalidBirthData("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(CosmicError::InvalidBirthData("hour must be 0-23"));
        }
        Ok(())
    }
}

impl Default for BirthData {
    fn default() -> Self {
        Self::new(1990, 1, 1, DEFAULT_HOUR)
    }
}

impl Display for BirthData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}", self.date(), self.hour)
    }
}

impl FromStr for BirthData {
    type Err = CosmicError;

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH`, then validate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, hour) = match s.split_once('T') {
            Some((d, h)) => {
                let hour: u32 = h
                    .parse()
                    .map_err(|_| CosmicError::InvalidBirthData("hour is not a number"))?;
                (d, hour)
            }
            None => (s, DEFAULT_HOUR),
        };
        let date: CivilDate = date_part.parse()?;
        let birth = Self::new(date.year, date.month, date.day, hour);
        birth.validate()?;
        Ok(birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_time::TimeError;

    #[test]
    fn parse_with_hour() {
        let b: BirthData = "1995-08-23T18".parse().unwrap();
        assert_eq!(b, BirthData::new(1995, 8, 23, 18));
    }

    #[test]
    fn parse_without_hour_defaults_to_noon() {
        let b: BirthData = "1990-01-01".parse().unwrap();
        assert_eq!(b, BirthData::default());
    }

    #[test]
    fn display_round_trips() {
        let b = BirthData::new(2000, 2, 4, 3);
        assert_eq!(b.to_string(), "2000-02-04T03");
        assert_eq!(b.to_string().parse::<BirthData>().unwrap(), b);
    }

    #[test]
    fn impossible_date_is_a_time_error() {
        let err = "2023-02-29T10".parse::<BirthData>().unwrap_err();
        assert_eq!(
            err,
            CosmicError::Time(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn hour_out_of_range() {
        let err = "2000-01-01T24".parse::<BirthData>().unwrap_err();
        assert_eq!(err, CosmicError::InvalidBirthData("hour must be 0-23"));
        assert!("2000-01-01Tnoon".parse::<BirthData>().is_err());
    }

    #[test]
    fn validate_ranges() {
        assert!(BirthData::new(1900, 1, 1, 0).validate().is_ok());
        assert!(BirthData::new(2100, 12, 31, 23).validate().is_ok());
        assert!(BirthData::new(1899, 12, 31, 0).validate().is_err());
        assert!(BirthData::new(2024, 2, 29, 0).validate().is_ok());
        assert!(BirthData::new(2023, 2, 29, 0).validate().is_err());
        assert!(BirthData::new(2023, 13, 1, 0).validate().is_err());
        assert!(BirthData::new(2023, 4, 0, 0).validate().is_err());
    }
}
