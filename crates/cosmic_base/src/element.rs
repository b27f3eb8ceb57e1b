//! The five elements (Wu Xing) and element tallies.
//!
//! Canonical order is Wood, Fire, Earth, Metal, Water. The order matters:
//! dominant-element ties resolve to the earliest element in this order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;
use crate::pillars::Pillar;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in canonical order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based canonical index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ParseNameError;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::Element(s.to_string()))
    }
}

/// Occurrence count of each element across a chart.
///
/// A full four-pillar chart always sums to 8: one stem and one branch per
/// pillar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementCounts {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementCounts {
    /// Count for one element.
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Add one occurrence of `element`, saturating at 255.
    pub fn add(&mut self, element: Element) {
        let slot = self.slot(element);
        *slot = slot.saturating_add(1);
    }

    /// Sum over all five elements.
    pub const fn total(&self) -> u32 {
        self.wood as u32
            + self.fire as u32
            + self.earth as u32
            + self.metal as u32
            + self.water as u32
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    /// Element with the highest count.
    ///
    /// Left-to-right max scan over the canonical order: a later element only
    /// replaces the current best when strictly greater, so ties go to the
    /// earliest element.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for (element, count) in self.iter().skip(1) {
            if count > self.get(best) {
                best = element;
            }
        }
        best
    }
}

/// Tally stem and branch elements across `pillars`.
///
/// Each pillar contributes its stem's element and its branch's element.
pub fn analyze_elements(pillars: &[Pillar]) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for pillar in pillars {
        counts.add(pillar.stem.element());
        counts.add(pillar.branch.element());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::{Branch, Stem};

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!(" Water ".parse::<Element>().unwrap(), Element::Water);
        assert_eq!(
            "Air".parse::<Element>().unwrap_err(),
            ParseNameError::Element("Air".into())
        );
    }

    #[test]
    fn dominant_clear_winner() {
        let counts = ElementCounts {
            wood: 1,
            fire: 1,
            earth: 1,
            metal: 1,
            water: 4,
        };
        assert_eq!(counts.dominant(), Element::Water);
    }

    #[test]
    fn dominant_tie_prefers_canonical_order() {
        let counts = ElementCounts {
            wood: 0,
            fire: 3,
            earth: 0,
            metal: 3,
            water: 2,
        };
        assert_eq!(counts.dominant(), Element::Fire);

        let counts = ElementCounts {
            wood: 0,
            fire: 0,
            earth: 2,
            metal: 2,
            water: 2,
        };
        assert_eq!(counts.dominant(), Element::Earth);
    }

    #[test]
    fn dominant_all_zero_is_wood() {
        assert_eq!(ElementCounts::default().dominant(), Element::Wood);
    }

    #[test]
    fn analyze_counts_stem_and_branch() {
        let pillar = Pillar::new(Stem::Jia, Branch::Zi);
        let counts = analyze_elements(&[pillar]);
        assert_eq!(counts.get(Element::Wood), 1);
        assert_eq!(counts.get(Element::Water), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn iter_in_canonical_order() {
        let counts = ElementCounts {
            wood: 5,
            fire: 4,
            earth: 3,
            metal: 2,
            water: 1,
        };
        let collected: Vec<_> = counts.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Element::Wood, 5),
                (Element::Fire, 4),
                (Element::Earth, 3),
                (Element::Metal, 2),
                (Element::Water, 1),
            ]
        );
    }
}
