//! Cosmic profile: a Four-Pillars chart joined with a sun sign.
//!
//! The profile text is plain templating over two trait tables, one keyed by
//! the dominant element and one by the sign.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::pillars::FourPillars;
use crate::zodiac::ZodiacSign;

/// Trait phrase for a dominant element.
pub const fn element_trait(element: Element) -> &'static str {
    match element {
        Element::Wood => "growth-oriented and creative",
        Element::Fire => "passionate and dynamic",
        Element::Earth => "stable and nurturing",
        Element::Metal => "determined and precise",
        Element::Water => "intuitive and adaptable",
    }
}

/// Trait phrase for a sun sign.
pub const fn zodiac_trait(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "bold leadership",
        ZodiacSign::Taurus => "steadfast determination",
        ZodiacSign::Gemini => "versatile communication",
        ZodiacSign::Cancer => "emotional depth",
        ZodiacSign::Leo => "radiant confidence",
        ZodiacSign::Virgo => "analytical precision",
        ZodiacSign::Libra => "harmonious balance",
        ZodiacSign::Scorpio => "intense transformation",
        ZodiacSign::Sagittarius => "adventurous spirit",
        ZodiacSign::Capricorn => "ambitious discipline",
        ZodiacSign::Aquarius => "innovative vision",
        ZodiacSign::Pisces => "empathic intuition",
    }
}

/// A composed profile. Owned by the caller; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicProfile {
    pub four_pillars: FourPillars,
    pub zodiac: ZodiacSign,
    pub title: String,
    pub description: String,
}

impl CosmicProfile {
    /// Dominant element of the chart.
    pub const fn element(&self) -> Element {
        self.four_pillars.dominant_element
    }

    /// Multi-line message for sharing a profile.
    pub fn share_text(&self) -> String {
        format!(
            "✨ My Cosmic Profile: {}\n\n🔮 {} Element + {}\n\n{}\n\nDiscover yours at CosmicBase! 🌟",
            self.title,
            self.element(),
            self.zodiac,
            self.description
        )
    }
}

/// Title shown for a profile: "Cosmic {Element} {Sign}".
pub fn profile_title(element: Element, sign: ZodiacSign) -> String {
    format!("Cosmic {element} {sign}")
}

/// Combine a chart and a sign into a titled, described profile.
pub fn compose_profile(four_pillars: FourPillars, zodiac: ZodiacSign) -> CosmicProfile {
    let element = four_pillars.dominant_element;
    let description = format!(
        "You are {} with {}. Your {element} energy from Eastern wisdom combines with {} {zodiac} traits to create a unique cosmic signature.",
        element_trait(element),
        zodiac_trait(zodiac),
        zodiac.element(),
    );
    CosmicProfile {
        four_pillars,
        zodiac,
        title: profile_title(element, zodiac),
        description,
    }
}
