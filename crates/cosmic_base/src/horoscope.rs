//! Daily horoscope keyed by day of year.
//!
//! Everything is selected by `day_of_year` modulo a table length, so the
//! message for a given element, sign and day never changes. The caller
//! supplies the day; nothing here reads the clock.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::zodiac::ZodiacSign;

/// Lucky colors in rotation order (period 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckyColor {
    Red,
    Blue,
    Green,
    Gold,
    Purple,
    Silver,
    Orange,
}

/// All 7 lucky colors in rotation order.
pub const ALL_LUCKY_COLORS: [LuckyColor; 7] = [
    LuckyColor::Red,
    LuckyColor::Blue,
    LuckyColor::Green,
    LuckyColor::Gold,
    LuckyColor::Purple,
    LuckyColor::Silver,
    LuckyColor::Orange,
];

impl LuckyColor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Gold => "Gold",
            Self::Purple => "Purple",
            Self::Silver => "Silver",
            Self::Orange => "Orange",
        }
    }
}

impl Display for LuckyColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The horoscope for one element/sign pair on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoroscope {
    pub element_message: String,
    pub zodiac_message: String,
    /// `element_message`, a space, then `zodiac_message`.
    pub combined: String,
    /// 1-99.
    pub lucky_number: u8,
    pub lucky_color: LuckyColor,
}

/// Element messages, three per element.
pub const fn element_messages(element: Element) -> &'static [&'static str; 3] {
    match element {
        Element::Wood => &[
            "Growth energy surrounds you today. Plant seeds for future success.",
            "Your creative spirit is strong. Express yourself freely.",
            "Connect with nature to recharge your Wood element energy.",
        ],
        Element::Fire => &[
            "Your passion burns bright today. Lead with confidence.",
            "Transform challenges into opportunities with your inner fire.",
            "Share your warmth with others - your energy is contagious.",
        ],
        Element::Earth => &[
            "Stability is your strength today. Ground yourself in routine.",
            "Nurture your relationships - they need your steady presence.",
            "Trust your practical instincts for important decisions.",
        ],
        Element::Metal => &[
            "Precision and clarity guide you today. Cut through confusion.",
            "Your determination is unshakeable. Pursue your goals.",
            "Refine your plans - details matter more than usual.",
        ],
        Element::Water => &[
            "Flow with changes today. Adaptability is your superpower.",
            "Your intuition is heightened. Trust your inner voice.",
            "Deep connections are possible. Open up to others.",
        ],
    }
}

/// Sign messages, three per sign.
pub const fn zodiac_messages(sign: ZodiacSign) -> &'static [&'static str; 3] {
    match sign {
        ZodiacSign::Aries => &[
            "Bold moves pay off today.",
            "Your leadership shines.",
            "Take initiative in love.",
        ],
        ZodiacSign::Taurus => &[
            "Financial luck is strong.",
            "Comfort brings clarity.",
            "Patience rewards you.",
        ],
        ZodiacSign::Gemini => &[
            "Communication flows easily.",
            "New connections await.",
            "Share your ideas.",
        ],
        ZodiacSign::Cancer => &[
            "Home matters need attention.",
            "Emotional insights arrive.",
            "Nurture yourself.",
        ],
        ZodiacSign::Leo => &[
            "Spotlight finds you today.",
            "Creative projects thrive.",
            "Romance is favored.",
        ],
        ZodiacSign::Virgo => &[
            "Details reveal solutions.",
            "Health focus pays off.",
            "Organize for success.",
        ],
        ZodiacSign::Libra => &[
            "Balance brings peace.",
            "Partnerships strengthen.",
            "Beauty inspires you.",
        ],
        ZodiacSign::Scorpio => &[
            "Transformation accelerates.",
            "Hidden truths emerge.",
            "Power grows quietly.",
        ],
        ZodiacSign::Sagittarius => &[
            "Adventure calls you.",
            "Learning expands horizons.",
            "Optimism attracts luck.",
        ],
        ZodiacSign::Capricorn => &[
            "Career advances possible.",
            "Discipline creates results.",
            "Long-term plans solidify.",
        ],
        ZodiacSign::Aquarius => &[
            "Innovation strikes today.",
            "Community connections grow.",
            "Unique ideas succeed.",
        ],
        ZodiacSign::Pisces => &[
            "Dreams hold messages.",
            "Compassion opens doors.",
            "Artistic flow is strong.",
        ],
    }
}

/// Lucky number for a day: `(day * 7) mod 99 + 1`, always in 1..=99.
pub const fn lucky_number(day_of_year: u32) -> u8 {
    ((day_of_year as u64 * 7) % 99 + 1) as u8
}

/// Lucky color for a day, cycling through [`ALL_LUCKY_COLORS`].
pub const fn lucky_color(day_of_year: u32) -> LuckyColor {
    ALL_LUCKY_COLORS[(day_of_year % 7) as usize]
}

/// Horoscope for `element` and `sign` on `day_of_year`.
pub fn daily_horoscope(element: Element, sign: ZodiacSign, day_of_year: u32) -> DailyHoroscope {
    let element_msgs = element_messages(element);
    let zodiac_msgs = zodiac_messages(sign);
    let element_message = element_msgs[day_of_year as usize % element_msgs.len()];
    let zodiac_message = zodiac_msgs[day_of_year as usize % zodiac_msgs.len()];

    DailyHoroscope {
        element_message: element_message.to_string(),
        zodiac_message: zodiac_message.to_string(),
        combined: format!("{element_message} {zodiac_message}"),
        lucky_number: lucky_number(day_of_year),
        lucky_color: lucky_color(day_of_year),
    }
}
