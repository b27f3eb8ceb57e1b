//! Four Pillars (year, month, day, hour) from a birth date and hour.
//!
//! Every pillar is a stem/branch pair found by modular arithmetic on a fixed
//! cycle anchor:
//! - Year: CE 4 is Jia-Zi (stem 0, branch 0).
//! - Month: stem follows the year stem by the five-tiger rule, branch is
//!   offset by two so January lands on Yin.
//! - Day: day count from 1900-01-31 (Jia-Zi) on the plain civil calendar.
//! - Hour: branch from the double-hour table, stem from the day stem by the
//!   five-rat rule.
//!
//! This is a calendar-day model. It does not move the year or month at solar
//! term boundaries (Li Chun etc.) and does not correct for time zones, so
//! results are reproducible rather than astronomically authentic.
//!
//! No input is validated: day 35 or month 0 roll over through the same
//! arithmetic and still yield a structurally valid chart.

use std::fmt::{Display, Formatter};

use cosmic_time::days_from_civil;
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementCounts, analyze_elements};
use crate::sexagenary::{Branch, Stem, hour_branch_index};

/// Year whose pillar is Jia-Zi (index 0 of both cycles).
pub const YEAR_CYCLE_ANCHOR: i32 = 4;

/// Reference date whose day pillar is Jia-Zi: 1900-01-31.
pub const DAY_PILLAR_EPOCH: (i32, u32, u32) = (1900, 1, 31);

/// One pillar: a stem, a branch, and the stem's element.
///
/// The branch element is not stored; it only feeds the element tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
    /// Always `stem.element()`.
    pub element: Element,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            element: stem.element(),
        }
    }

    /// Build from raw cycle positions, wrapping each into range.
    pub const fn from_indices(stem_index: i64, branch_index: i64) -> Self {
        Self::new(Stem::from_index(stem_index), Branch::from_index(branch_index))
    }

    /// Chinese characters, stem then branch (e.g. "庚午").
    pub fn hanzi(&self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// A complete four-pillar chart with its element analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub dominant_element: Element,
    pub element_counts: ElementCounts,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Year pillar: stem (year-4) mod 10, branch (year-4) mod 12.
pub fn year_pillar(year: i32) -> Pillar {
    let offset = i64::from(year) - i64::from(YEAR_CYCLE_ANCHOR);
    Pillar::from_indices(offset, offset)
}

/// Month pillar.
///
/// The first month stem of a year is `(year_stem mod 5) * 2`; the stem then
/// advances one per month. Branch is `(month + 1) mod 12`.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = i64::from(year_pillar(year).stem.index());
    let start = (year_stem % 5) * 2;
    let month = i64::from(month);
    Pillar::from_indices(start + month - 1, month + 1)
}

/// Signed day count from [`DAY_PILLAR_EPOCH`] to `year-month-day`.
///
/// Month and day overflow roll over leniently.
pub fn days_since_day_epoch(year: i32, month: u32, day: u32) -> i64 {
    let (ey, em, ed) = DAY_PILLAR_EPOCH;
    days_from_civil(year, month, day) - days_from_civil(ey, em, ed)
}

/// Day pillar: stem and branch are the day count mod 10 and mod 12.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let diff = days_since_day_epoch(year, month, day);
    Pillar::from_indices(diff, diff)
}

/// Hour pillar.
///
/// Branch comes from [`hour_branch_index`]; the stem starts at
/// `(day_stem mod 5) * 2` for the Zi hour and advances with the branch.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = i64::from(hour_branch_index(hour));
    let start = i64::from(day_stem.index() % 5) * 2;
    Pillar::from_indices(start + branch, branch)
}

/// Compute all four pillars and the element analysis.
pub fn four_pillars(year: i32, month: u32, day: u32, hour: u32) -> FourPillars {
    let year_p = year_pillar(year);
    let month_p = month_pillar(year, month);
    let day_p = day_pillar(year, month, day);
    let hour_p = hour_pillar(day_p.stem, hour);

    let element_counts = analyze_elements(&[year_p, month_p, day_p, hour_p]);
    let dominant_element = element_counts.dominant();

    tracing::trace!(
        year,
        month,
        day,
        hour,
        year_pillar = %year_p,
        month_pillar = %month_p,
        day_pillar = %day_p,
        hour_pillar = %hour_p,
        dominant = %dominant_element,
        "computed four pillars"
    );

    FourPillars {
        year: year_p,
        month: month_p,
        day: day_p,
        hour: hour_p,
        dominant_element,
        element_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_year_is_jia_zi() {
        let p = year_pillar(4);
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Zi);
    }

    #[test]
    fn year_1984_is_jia_zi() {
        // 1984 - 4 = 1980 = 60 * 33
        let p = year_pillar(1984);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Zi));
        assert_eq!(p.element, Element::Wood);
    }

    #[test]
    fn year_1990_is_geng_wu() {
        let p = year_pillar(1990);
        assert_eq!((p.stem, p.branch), (Stem::Geng, Branch::Wu));
    }

    #[test]
    fn year_before_anchor_wraps() {
        // 3 - 4 = -1 → Gui-Hai
        let p = year_pillar(3);
        assert_eq!((p.stem, p.branch), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn month_stem_follows_year_stem() {
        // Jia year: first month stem is Jia (0 * 2)
        assert_eq!(month_pillar(1984, 1).stem, Stem::Jia);
        // Geng year (index 6): (6 % 5) * 2 = 2 → Bing
        assert_eq!(month_pillar(1990, 1).stem, Stem::Bing);
        assert_eq!(month_pillar(1990, 2).stem, Stem::Ding);
    }

    #[test]
    fn january_branch_is_yin() {
        assert_eq!(month_pillar(2000, 1).branch, Branch::Yin);
        assert_eq!(month_pillar(2000, 11).branch, Branch::Zi);
        assert_eq!(month_pillar(2000, 12).branch, Branch::Chou);
    }

    #[test]
    fn epoch_day_is_jia_zi() {
        let p = day_pillar(1900, 1, 31);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Zi));
    }

    #[test]
    fn day_before_epoch_normalizes() {
        // -1 → stem 9 (Gui), branch 11 (Hai)
        let p = day_pillar(1900, 1, 30);
        assert_eq!((p.stem, p.branch), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn day_cycle_repeats_every_60() {
        let a = day_pillar(2024, 1, 1);
        let b = day_pillar(2024, 3, 1); // 60 days later (leap year)
        assert_eq!(a, b);
    }

    #[test]
    fn hour_stem_from_day_stem() {
        // Jia day, Zi hour → Jia-Zi
        let p = hour_pillar(Stem::Jia, 0);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Zi));
        // Bing day (2): start 4 (Wu); Wu hour (branch 6) → (4 + 6) % 10 = 0 → Jia
        let p = hour_pillar(Stem::Bing, 12);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Wu));
        // Ji day shares the Jia cycle start
        assert_eq!(hour_pillar(Stem::Ji, 5), hour_pillar(Stem::Jia, 5));
    }

    #[test]
    fn pillar_element_is_stem_element() {
        let chart = four_pillars(1995, 8, 23, 18);
        for p in chart.pillars() {
            assert_eq!(p.element, p.stem.element());
        }
    }

    #[test]
    fn counts_sum_to_eight() {
        let chart = four_pillars(2000, 2, 4, 23);
        assert_eq!(chart.element_counts.total(), 8);
    }

    #[test]
    fn out_of_range_input_still_total() {
        let chart = four_pillars(1990, 1, 35, 12);
        assert_eq!(chart.element_counts.total(), 8);
        assert_eq!(chart.day, day_pillar(1990, 2, 4));

        let chart = four_pillars(-500, 0, 0, 99);
        assert_eq!(chart.element_counts.total(), 8);
        assert_eq!(chart.hour.branch, Branch::Zi);
    }

    #[test]
    fn pillar_hanzi_and_display() {
        let p = Pillar::new(Stem::Geng, Branch::Wu);
        assert_eq!(p.hanzi(), "庚午");
        assert_eq!(p.to_string(), "Geng-Wu");
    }
}
