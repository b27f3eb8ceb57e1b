//! Western sun signs by calendar date.
//!
//! Twelve fixed date ranges, inclusive at both ends, partition the year
//! without gaps. Capricorn is the one sign that crosses the year boundary
//! (December 22 to January 19) and is matched as two sub-ranges.
//!
//! Day values are not validated against month length.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// Western classical element (triplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl ZodiacElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Display for ZodiacElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A (month, day) calendar position, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// The 12 Western zodiac signs in calendar order from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in scan order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    pub const fn element(self) -> ZodiacElement {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => ZodiacElement::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => ZodiacElement::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => ZodiacElement::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => ZodiacElement::Water,
        }
    }

    /// First day of the sign (inclusive).
    pub const fn start(self) -> MonthDay {
        match self {
            Self::Aries => MonthDay::new(3, 21),
            Self::Taurus => MonthDay::new(4, 20),
            Self::Gemini => MonthDay::new(5, 21),
            Self::Cancer => MonthDay::new(6, 21),
            Self::Leo => MonthDay::new(7, 23),
            Self::Virgo => MonthDay::new(8, 23),
            Self::Libra => MonthDay::new(9, 23),
            Self::Scorpio => MonthDay::new(10, 23),
            Self::Sagittarius => MonthDay::new(11, 22),
            Self::Capricorn => MonthDay::new(12, 22),
            Self::Aquarius => MonthDay::new(1, 20),
            Self::Pisces => MonthDay::new(2, 19),
        }
    }

    /// Last day of the sign (inclusive).
    pub const fn end(self) -> MonthDay {
        match self {
            Self::Aries => MonthDay::new(4, 19),
            Self::Taurus => MonthDay::new(5, 20),
            Self::Gemini => MonthDay::new(6, 20),
            Self::Cancer => MonthDay::new(7, 22),
            Self::Leo => MonthDay::new(8, 22),
            Self::Virgo => MonthDay::new(9, 22),
            Self::Libra => MonthDay::new(10, 22),
            Self::Scorpio => MonthDay::new(11, 21),
            Self::Sagittarius => MonthDay::new(12, 21),
            Self::Capricorn => MonthDay::new(1, 19),
            Self::Aquarius => MonthDay::new(2, 18),
            Self::Pisces => MonthDay::new(3, 20),
        }
    }

    /// True for the sign whose range wraps from December into January.
    pub const fn wraps_year(self) -> bool {
        self.start().month > self.end().month
    }

    /// Whether `(month, day)` falls in this sign's range.
    pub const fn contains(self, month: u32, day: u32) -> bool {
        let start = self.start();
        let end = self.end();
        if start.month == end.month {
            month == start.month && day >= start.day && day <= end.day
        } else {
            // Tail of the start month, head of the end month. For Capricorn
            // that is December then January.
            (month == start.month && day >= start.day) || (month == end.month && day <= end.day)
        }
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ParseNameError;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_SIGNS
            .into_iter()
            .find(|z| z.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::ZodiacSign(s.to_string()))
    }
}

/// Sun sign for a birth `(month, day)`.
///
/// Scans [`ALL_SIGNS`] in order and returns the first whose range contains
/// the date. Valid dates always match; anything else (month 13, day 40 in a
/// month with no later sign) falls back to Aries.
pub fn zodiac_sign(month: u32, day: u32) -> ZodiacSign {
    match ALL_SIGNS.into_iter().find(|sign| sign.contains(month, day)) {
        Some(sign) => sign,
        None => {
            tracing::warn!(month, day, "no zodiac range matched, falling back to Aries");
            ALL_SIGNS[0]
        }
    }
}
