//! Personality code to trait vector.
//!
//! Each of the four letters independently nudges specific traits away from
//! the neutral 0.5 baseline by a fixed delta, and the result is clamped into
//! `[0.0, 1.0]`. The deltas are an explainable heuristic, not a validated
//! psychometric model. Salience, peak, and companion shaping happen later in
//! the scoring engine so each transform stays independently testable.

use fernweh_core::{PersonalityCode, Trait, TraitVector};

const EXTRAVERT_SOCIAL: f32 = 0.25;
const INTROVERT_SOCIAL: f32 = -0.15;
const INTUITIVE_NOVELTY: f32 = 0.25;
const INTUITIVE_CULTURE: f32 = 0.10;
const SENSING_SENSORY: f32 = 0.20;
const SENSING_STRUCTURE: f32 = 0.05;
const FEELING_CULTURE: f32 = 0.20;
const FEELING_SOCIAL: f32 = 0.05;
const THINKING_STRUCTURE: f32 = 0.10;
const JUDGING_STRUCTURE: f32 = 0.25;
const JUDGING_FLEXIBILITY: f32 = -0.10;
const PERCEIVING_FLEXIBILITY: f32 = 0.25;

/// Map a personality code onto the six trait axes.
///
/// Total over all sixteen codes; every axis is present and lies in
/// `[0.0, 1.0]`.
///
/// # Examples
/// ```
/// use fernweh_core::{PersonalityCode, Trait};
/// use fernweh_scorer::personality_traits;
///
/// let traits = personality_traits(PersonalityCode::Intp);
/// assert_eq!(traits.get(Trait::Novelty), Some(0.75));
/// assert_eq!(traits.get(Trait::Social), Some(0.35));
/// ```
#[must_use]
pub fn personality_traits(code: PersonalityCode) -> TraitVector {
    let mut traits = TraitVector::neutral();

    if code.is_extravert() {
        nudge(&mut traits, Trait::Social, EXTRAVERT_SOCIAL);
    } else {
        nudge(&mut traits, Trait::Social, INTROVERT_SOCIAL);
    }

    if code.is_intuitive() {
        nudge(&mut traits, Trait::Novelty, INTUITIVE_NOVELTY);
        nudge(&mut traits, Trait::Culture, INTUITIVE_CULTURE);
    } else {
        nudge(&mut traits, Trait::Sensory, SENSING_SENSORY);
        nudge(&mut traits, Trait::Structure, SENSING_STRUCTURE);
    }

    if code.is_feeling() {
        nudge(&mut traits, Trait::Culture, FEELING_CULTURE);
        nudge(&mut traits, Trait::Social, FEELING_SOCIAL);
    } else {
        nudge(&mut traits, Trait::Structure, THINKING_STRUCTURE);
    }

    if code.is_judging() {
        nudge(&mut traits, Trait::Structure, JUDGING_STRUCTURE);
        nudge(&mut traits, Trait::Flexibility, JUDGING_FLEXIBILITY);
    } else {
        nudge(&mut traits, Trait::Flexibility, PERCEIVING_FLEXIBILITY);
    }

    traits
}

fn nudge(traits: &mut TraitVector, axis: Trait, delta: f32) {
    let current = traits.get(axis).unwrap_or(0.5);
    traits.set(axis, current + delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_code_yields_all_axes_in_range() {
        for code in PersonalityCode::ALL {
            let traits = personality_traits(code);
            assert_eq!(traits.len(), Trait::ALL.len(), "{code}");
            for axis in Trait::ALL {
                let weight = traits.get(axis).unwrap();
                assert!((0.0..=1.0).contains(&weight), "{code} {axis} {weight}");
            }
        }
    }

    #[rstest]
    #[case(PersonalityCode::Intp, Trait::Social, 0.35)]
    #[case(PersonalityCode::Intp, Trait::Novelty, 0.75)]
    #[case(PersonalityCode::Intp, Trait::Structure, 0.6)]
    #[case(PersonalityCode::Intp, Trait::Flexibility, 0.75)]
    #[case(PersonalityCode::Intp, Trait::Sensory, 0.5)]
    #[case(PersonalityCode::Intp, Trait::Culture, 0.6)]
    #[case(PersonalityCode::Esfj, Trait::Social, 0.8)]
    #[case(PersonalityCode::Esfj, Trait::Structure, 0.8)]
    #[case(PersonalityCode::Esfj, Trait::Flexibility, 0.4)]
    #[case(PersonalityCode::Esfj, Trait::Sensory, 0.7)]
    #[case(PersonalityCode::Esfj, Trait::Culture, 0.7)]
    fn reference_codes_match_the_weight_table(
        #[case] code: PersonalityCode,
        #[case] axis: Trait,
        #[case] expected: f32,
    ) {
        let traits = personality_traits(code);
        let weight = traits.get(axis).unwrap();
        assert!((weight - expected).abs() < 1e-6, "{code} {axis} {weight}");
    }

    #[rstest]
    fn extraversion_moves_social_up_and_introversion_down() {
        let entp = personality_traits(PersonalityCode::Entp);
        let intp = personality_traits(PersonalityCode::Intp);
        assert!(entp.get(Trait::Social) > intp.get(Trait::Social));
    }
}
