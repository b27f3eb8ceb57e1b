use cosmic_base::{
    CompatibilityResult, CosmicProfile, Person, compatibility, compose_profile, four_pillars,
    zodiac_sign,
};
use cosmic_time::CivilDate;

use crate::birth::BirthData;
use crate::error::CosmicError;

/// Validate `birth`, then compute its chart, sign and composed profile.
pub fn cosmic_profile(birth: &BirthData) -> Result<CosmicProfile, CosmicError> {
    birth.validate()?;
    let chart = four_pillars(birth.year, birth.month, birth.day, birth.hour);
    let sign = zodiac_sign(birth.month, birth.day);
    tracing::debug!(%birth, element = %chart.dominant_element, %sign, "composed cosmic profile");
    Ok(compose_profile(chart, sign))
}

/// Dominant element and sun sign for `birth`.
pub fn person(birth: &BirthData) -> Result<Person, CosmicError> {
    birth.validate()?;
    let chart = four_pillars(birth.year, birth.month, birth.day, birth.hour);
    Ok(Person::new(
        chart.dominant_element,
        zodiac_sign(birth.month, birth.day),
    ))
}

/// Compatibility of two people known only by birth date.
///
/// Both charts are cast at the default hour (12), so the hour pillar is
/// the same kind of guess for each side.
pub fn compatibility_from_births(
    first: CivilDate,
    second: CivilDate,
) -> Result<CompatibilityResult, CosmicError> {
    let p1 = person(&BirthData::at_noon(first))?;
    let p2 = person(&BirthData::at_noon(second))?;
    tracing::debug!(?p1, ?p2, "scoring compatibility");
    Ok(compatibility(p1, p2))
}
