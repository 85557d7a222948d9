//! Human-readable explanations attached to every scored candidate.
//!
//! Notes keep the original presentation order: the element and trait summary
//! lines lead, then the destination's own notes, then the conditional
//! fallback indicators, companion hints, and budget advice.

use serde::Serialize;

use fernweh_core::{
    CompanionType, Destination, Element, ElementVector, Trait, TraitVector, UserProfile,
};

use crate::pillars;

pub(crate) const NO_BIRTH_DATE_NOTE: &str =
    "No birth date supplied; ranked on personality traits alone.";
pub(crate) const TIME_UNKNOWN_NOTE: &str =
    "Birth time unknown or invalid; the hour pillar was left out.";

/// Why a destination ranked where it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The two strongest query trait axes with their weights.
    pub top_traits: Vec<(Trait, f32)>,
    /// The two strongest query elements with their weights.
    pub top_elements: Vec<(Element, f32)>,
    /// Ordered, human-readable notes.
    pub notes: Vec<String>,
}

/// Short display label for a trait axis.
#[must_use]
pub const fn trait_label(axis: Trait) -> &'static str {
    match axis {
        Trait::Social => "social connection",
        Trait::Novelty => "novelty seeking",
        Trait::Structure => "order and stability",
        Trait::Flexibility => "flexibility and freedom",
        Trait::Sensory => "sensory richness",
        Trait::Culture => "culture and history",
    }
}

/// One-line rationale for a trait axis.
#[must_use]
pub const fn trait_reason(axis: Trait) -> &'static str {
    match axis {
        Trait::Social => "enjoys talkative activities such as local meetups and guided tours",
        Trait::Novelty => "satisfied by unfamiliar neighbourhoods and offbeat finds",
        Trait::Structure => "prefers planned routes and tidy, well-run cities",
        Trait::Flexibility => "keeps energy on loose schedules and unhurried routes",
        Trait::Sensory => "the more food, views, and nature the better",
        Trait::Culture => "takes real joy in history, art, and tradition",
    }
}

/// Short display label for an element.
#[must_use]
pub const fn element_label(element: Element) -> &'static str {
    match element {
        Element::Wood => "wood (forests and gardens)",
        Element::Fire => "fire (festivals and bustle)",
        Element::Earth => "earth (mountains and springs)",
        Element::Metal => "metal (cities and order)",
        Element::Water => "water (seas and rivers)",
    }
}

/// One-line rationale for an element.
#[must_use]
pub const fn element_reason(element: Element) -> &'static str {
    match element {
        Element::Wood => "green routes with forests, gardens, and treks fit well",
        Element::Fire => "festivals, night spots, and lively streets suit the stay",
        Element::Earth => "mountains and hot springs give grounded recovery",
        Element::Metal => "modern cityscapes, architecture, and museums lift the trip",
        Element::Water => "waterside walks along seas and rivers restore focus",
    }
}

/// Assemble the explanation for one destination.
pub(crate) fn build(
    destination: &Destination,
    query: &TraitVector,
    elements: &ElementVector,
    profile: &UserProfile,
) -> Explanation {
    let top_traits = query.top_two();
    let top_elements = elements.top_two();

    let mut notes = destination.notes.clone();
    if profile.birth_date.is_none() {
        notes.push(NO_BIRTH_DATE_NOTE.to_owned());
    }
    if profile.birth_date.is_some()
        && pillars::time_present_but_invalid(profile.birth_time.as_deref())
    {
        notes.push(TIME_UNKNOWN_NOTE.to_owned());
    }

    if !top_traits.is_empty() {
        notes.insert(0, summary_line("Personality leaning", &top_traits, trait_label, trait_reason));
    }
    if profile.birth_date.is_some() && !top_elements.is_empty() {
        notes.insert(
            0,
            summary_line("Element balance", &top_elements, element_label, element_reason),
        );
    }

    notes.extend(companion_hint(destination, profile.companions));
    notes.extend(budget_advice(destination, profile.budget_level));

    Explanation {
        top_traits,
        top_elements,
        notes,
    }
}

fn summary_line<K: Copy>(
    heading: &str,
    top: &[(K, f32)],
    label: impl Fn(K) -> &'static str,
    reason: impl Fn(K) -> &'static str,
) -> String {
    let names: Vec<&str> = top.iter().map(|&(key, _)| label(key)).collect();
    let mut reasons: Vec<&str> = top.iter().map(|&(key, _)| reason(key)).collect();
    reasons.dedup();
    format!(
        "{heading} ({}): {}.",
        names.join(", "),
        reasons.join("; ")
    )
}

fn companion_hint(
    destination: &Destination,
    companions: Option<CompanionType>,
) -> Option<String> {
    let hint = match companions? {
        CompanionType::Family if destination.kid_friendly == Some(true) => {
            "Family-friendly: easy with kids and group logistics."
        }
        CompanionType::Couple
            if destination.nightlife.unwrap_or(0.0) + destination.language_ease.unwrap_or(0.0)
                > 1.0 =>
        {
            "Couple-friendly: night views and easy moving around."
        }
        CompanionType::Friends if destination.group_ease.unwrap_or(0.0) > 0.6 => {
            "Friends-friendly: routes and lodging suit a party of three or four."
        }
        _ => return None,
    };
    Some(hint.to_owned())
}

fn budget_advice(destination: &Destination, budget_level: Option<u8>) -> Vec<String> {
    let Some(requested) = budget_level else {
        return Vec::new();
    };
    let delta = i16::from(destination.budget_level) - i16::from(requested);
    let mut tips = Vec::new();
    if delta >= 2 {
        tips.push("Well above budget: consider the off season or a nearby alternative.".to_owned());
    }
    if delta > 0 {
        tips.push("Flights: budget carriers or a stopover, with flexible dates.".to_owned());
        tips.push("Lodging: three-star or guesthouse, one stop outside the centre.".to_owned());
        tips.push("Activities: free walks and museums first.".to_owned());
    } else if delta < 0 {
        tips.push(
            "Budget headroom: upgrade the hotel, add a signature tour or one fine meal.".to_owned(),
        );
    }
    tips
}
