//! Integration tests for two-person compatibility.

use cosmic_base::{
    ALL_ELEMENTS, ALL_SIGNS, AffinityTables, DEFAULT_TABLES, Element, Person, ZodiacSign,
    compatibility, compatibility_with,
};

#[test]
fn fire_aries_with_fire_leo() {
    let r = compatibility(
        Person::new(Element::Fire, ZodiacSign::Aries),
        Person::new(Element::Fire, ZodiacSign::Leo),
    );
    assert_eq!(r.element_score, 60);
    assert_eq!(r.zodiac_score, 85);
    assert_eq!(r.score, 73);
    assert_eq!(r.description, "✨ Strong Connection! Great potential together.");
    assert_eq!(r.strengths, vec!["Aries and Leo naturally understand each other"]);
    assert_eq!(r.challenges, vec!["Maintain individual space for harmony"]);
}

#[test]
fn soulmate_tier() {
    // Wood-Fire 90, Gemini lists Libra 85 → 88
    let r = compatibility(
        Person::new(Element::Wood, ZodiacSign::Gemini),
        Person::new(Element::Fire, ZodiacSign::Libra),
    );
    assert_eq!(r.score, 88);
    assert_eq!(r.description, "🔥 Cosmic Soulmates! Exceptional compatibility.");
    assert_eq!(
        r.strengths,
        vec![
            "Wood and Fire create powerful synergy",
            "Gemini and Libra naturally understand each other",
        ]
    );
}

#[test]
fn challenging_tier() {
    // Fire-Water 30, Leo/Capricorn unrelated 50 → 40
    let r = compatibility(
        Person::new(Element::Fire, ZodiacSign::Leo),
        Person::new(Element::Water, ZodiacSign::Capricorn),
    );
    assert_eq!(r.score, 40);
    assert_eq!(
        r.description,
        "🌊 Challenging but Growth-Oriented. Opposites can attract!"
    );
    assert_eq!(r.challenges.len(), 2);
}

#[test]
fn shipped_element_table_is_symmetric() {
    for a in ALL_ELEMENTS {
        for b in ALL_ELEMENTS {
            assert_eq!(
                DEFAULT_TABLES.element_affinity(a, b),
                DEFAULT_TABLES.element_affinity(b, a),
                "{a}/{b}"
            );
        }
    }
}

#[test]
fn shipped_sign_lists_are_mutual() {
    for a in ALL_SIGNS {
        for b in ALL_SIGNS {
            assert_eq!(
                DEFAULT_TABLES.zodiac_affinity(a, b),
                DEFAULT_TABLES.zodiac_affinity(b, a),
                "{a}/{b}"
            );
        }
    }
}

#[test]
fn zodiac_score_is_keyed_by_first_person() {
    // Aries lists Taurus in place of Leo; nobody else changes.
    let mut tables: AffinityTables = DEFAULT_TABLES.clone();
    tables.zodiac[ZodiacSign::Aries.index() as usize] = [
        ZodiacSign::Taurus,
        ZodiacSign::Sagittarius,
        ZodiacSign::Gemini,
        ZodiacSign::Aquarius,
    ];

    let aries = Person::new(Element::Earth, ZodiacSign::Aries);
    let taurus = Person::new(Element::Earth, ZodiacSign::Taurus);

    let forward = compatibility_with(&tables, aries, taurus);
    let backward = compatibility_with(&tables, taurus, aries);
    assert_eq!(forward.zodiac_score, 85);
    assert_eq!(backward.zodiac_score, 50);
    assert_ne!(forward.score, backward.score);

    // Leo still lists Aries, but Aries no longer lists Leo.
    let leo = Person::new(Element::Earth, ZodiacSign::Leo);
    assert_eq!(compatibility_with(&tables, leo, aries).zodiac_score, 85);
    assert_eq!(compatibility_with(&tables, aries, leo).zodiac_score, 50);
}

#[test]
fn lists_never_empty_and_score_in_range() {
    for e1 in ALL_ELEMENTS {
        for e2 in ALL_ELEMENTS {
            for s1 in ALL_SIGNS {
                for s2 in ALL_SIGNS {
                    let r = compatibility(Person::new(e1, s1), Person::new(e2, s2));
                    assert!(r.score <= 100);
                    assert!(!r.strengths.is_empty());
                    assert!(!r.challenges.is_empty());
                }
            }
        }
    }
}

#[test]
fn result_serializes() {
    let r = compatibility(
        Person::new(Element::Fire, ZodiacSign::Aries),
        Person::new(Element::Fire, ZodiacSign::Leo),
    );
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["score"], 73);
    assert_eq!(json["element_score"], 60);
    assert_eq!(json["zodiac_score"], 85);
}
