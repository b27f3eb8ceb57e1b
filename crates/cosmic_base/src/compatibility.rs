//! Two-person compatibility from dominant element and sun sign.
//!
//! The element score is a 5x5 table lookup. The zodiac score checks whether
//! the second person's sign is in the first person's list of four
//! compatible signs (85), else whether both share a sign (70), else 50.
//! Only the first person's list is consulted, so the zodiac score is not
//! commutative for an arbitrary table. The shipped tables happen to be
//! mutually consistent; tests pin that down rather than assume it.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::zodiac::ZodiacSign;

/// Zodiac score when the second sign is in the first sign's list.
pub const ZODIAC_MATCH_SCORE: u8 = 85;
/// Zodiac score for two people with the same sign (not in each other's list).
pub const ZODIAC_SAME_SIGN_SCORE: u8 = 70;
/// Zodiac score for any other pairing.
pub const ZODIAC_DEFAULT_SCORE: u8 = 50;

const STRENGTH_FALLBACK: &str = "Balance of different energies can create growth";
const CHALLENGE_FALLBACK: &str = "Maintain individual space for harmony";

/// One side of a compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub element: Element,
    pub sign: ZodiacSign,
}

impl Person {
    pub const fn new(element: Element, sign: ZodiacSign) -> Self {
        Self { element, sign }
    }
}

/// Outcome of [`compatibility`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Combined score, 0-100.
    pub score: u8,
    pub element_score: u8,
    pub zodiac_score: u8,
    pub description: String,
    /// Never empty.
    pub strengths: Vec<String>,
    /// Never empty.
    pub challenges: Vec<String>,
}

/// Lookup tables driving the scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinityTables {
    /// `element[a.index()][b.index()]`.
    pub element: [[u8; 5]; 5],
    /// Compatible signs for each sign, indexed by `ZodiacSign::index`.
    pub zodiac: [[ZodiacSign; 4]; 12],
}

/// The standard tables.
pub const DEFAULT_TABLES: AffinityTables = {
    use ZodiacSign::*;
    AffinityTables {
        element: [
            // Wood Fire Earth Metal Water
            [70, 90, 40, 30, 85], // Wood
            [90, 60, 85, 40, 30], // Fire
            [40, 85, 70, 90, 50], // Earth
            [30, 40, 90, 70, 85], // Metal
            [85, 30, 50, 85, 70], // Water
        ],
        zodiac: [
            [Leo, Sagittarius, Gemini, Aquarius],     // Aries
            [Virgo, Capricorn, Cancer, Pisces],       // Taurus
            [Libra, Aquarius, Aries, Leo],            // Gemini
            [Scorpio, Pisces, Taurus, Virgo],         // Cancer
            [Aries, Sagittarius, Gemini, Libra],      // Leo
            [Taurus, Capricorn, Cancer, Scorpio],     // Virgo
            [Gemini, Aquarius, Leo, Sagittarius],     // Libra
            [Cancer, Pisces, Virgo, Capricorn],       // Scorpio
            [Aries, Leo, Libra, Aquarius],            // Sagittarius
            [Taurus, Virgo, Scorpio, Pisces],         // Capricorn
            [Gemini, Libra, Aries, Sagittarius],      // Aquarius
            [Cancer, Scorpio, Taurus, Capricorn],     // Pisces
        ],
    }
};

impl AffinityTables {
    /// Element affinity of `a` towards `b`.
    pub const fn element_affinity(&self, a: Element, b: Element) -> u8 {
        self.element[a.index() as usize][b.index() as usize]
    }

    /// Signs listed as compatible with `sign`.
    pub const fn compatible_signs(&self, sign: ZodiacSign) -> &[ZodiacSign; 4] {
        &self.zodiac[sign.index() as usize]
    }

    /// Zodiac affinity of `a` towards `b`, keyed by `a`'s list only.
    pub fn zodiac_affinity(&self, a: ZodiacSign, b: ZodiacSign) -> u8 {
        if self.compatible_signs(a).contains(&b) {
            ZODIAC_MATCH_SCORE
        } else if a == b {
            ZODIAC_SAME_SIGN_SCORE
        } else {
            ZODIAC_DEFAULT_SCORE
        }
    }
}

/// Average of the two scores, halves rounded up.
pub const fn combined_score(element_score: u8, zodiac_score: u8) -> u8 {
    ((element_score as u16 + zodiac_score as u16 + 1) / 2) as u8
}

/// Headline for a combined score, by descending threshold.
pub const fn describe_score(score: u8) -> &'static str {
    if score >= 80 {
        "🔥 Cosmic Soulmates! Exceptional compatibility."
    } else if score >= 65 {
        "✨ Strong Connection! Great potential together."
    } else if score >= 50 {
        "🌙 Balanced Match. Work together for harmony."
    } else {
        "🌊 Challenging but Growth-Oriented. Opposites can attract!"
    }
}

/// Score two people against the standard tables.
pub fn compatibility(person1: Person, person2: Person) -> CompatibilityResult {
    compatibility_with(&DEFAULT_TABLES, person1, person2)
}

/// Score two people against `tables`.
pub fn compatibility_with(
    tables: &AffinityTables,
    person1: Person,
    person2: Person,
) -> CompatibilityResult {
    let element_score = tables.element_affinity(person1.element, person2.element);
    let zodiac_score = tables.zodiac_affinity(person1.sign, person2.sign);
    let score = combined_score(element_score, zodiac_score);

    let (e1, e2) = (person1.element, person2.element);
    let (s1, s2) = (person1.sign, person2.sign);

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();

    if element_score >= 80 {
        strengths.push(format!("{e1} and {e2} create powerful synergy"));
    }
    if zodiac_score >= 80 {
        strengths.push(format!("{s1} and {s2} naturally understand each other"));
    }
    if element_score <= 40 {
        challenges.push(format!("{e1} and {e2} may clash - patience needed"));
    }
    if zodiac_score <= 50 && s1 != s2 {
        challenges.push(format!("Different communication styles between {s1} and {s2}"));
    }

    if strengths.is_empty() {
        strengths.push(STRENGTH_FALLBACK.to_string());
    }
    if challenges.is_empty() {
        challenges.push(CHALLENGE_FALLBACK.to_string());
    }

    CompatibilityResult {
        score,
        element_score,
        zodiac_score,
        description: describe_score(score).to_string(),
        strengths,
        challenges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_half_up() {
        assert_eq!(combined_score(60, 85), 73);
        assert_eq!(combined_score(70, 70), 70);
        assert_eq!(combined_score(30, 50), 40);
        assert_eq!(combined_score(85, 50), 68);
    }

    #[test]
    fn tier_thresholds() {
        assert!(describe_score(100).starts_with("🔥"));
        assert!(describe_score(80).starts_with("🔥"));
        assert!(describe_score(79).starts_with("✨"));
        assert!(describe_score(65).starts_with("✨"));
        assert!(describe_score(64).starts_with("🌙"));
        assert!(describe_score(50).starts_with("🌙"));
        assert!(describe_score(49).starts_with("🌊"));
        assert!(describe_score(0).starts_with("🌊"));
    }

    #[test]
    fn same_sign_scores_seventy() {
        let t = &DEFAULT_TABLES;
        assert_eq!(t.zodiac_affinity(ZodiacSign::Leo, ZodiacSign::Leo), 70);
    }

    #[test]
    fn no_sign_lists_itself() {
        for (i, list) in DEFAULT_TABLES.zodiac.iter().enumerate() {
            assert!(list.iter().all(|s| s.index() as usize != i));
        }
    }

    #[test]
    fn same_sign_has_no_communication_challenge() {
        let p = Person::new(Element::Earth, ZodiacSign::Virgo);
        let r = compatibility(p, p);
        assert_eq!(r.zodiac_score, 70);
        assert_eq!(r.element_score, 70);
        assert_eq!(r.strengths, vec![STRENGTH_FALLBACK.to_string()]);
        assert_eq!(r.challenges, vec![CHALLENGE_FALLBACK.to_string()]);
    }

    #[test]
    fn clash_and_default_zodiac() {
        let r = compatibility(
            Person::new(Element::Wood, ZodiacSign::Aries),
            Person::new(Element::Metal, ZodiacSign::Taurus),
        );
        assert_eq!(r.element_score, 30);
        assert_eq!(r.zodiac_score, 50);
        assert_eq!(r.score, 40);
        assert_eq!(
            r.challenges,
            vec![
                "Wood and Metal may clash - patience needed".to_string(),
                "Different communication styles between Aries and Taurus".to_string(),
            ]
        );
        assert_eq!(r.strengths, vec![STRENGTH_FALLBACK.to_string()]);
    }
}
