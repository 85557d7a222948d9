//! Multi-factor scoring of shortlisted destinations.
//!
//! A [`QueryContext`] is built once per request: the mapped trait vector is
//! shaped through three independent stages (salience amplification, peak
//! boost, companion blend) and the element distribution is estimated from
//! the birth date and time. Scoring a destination then combines weighted
//! cosine similarities with the season adjustment, companion-fit and
//! specialization bonuses, and the penalty term.

use std::collections::BTreeMap;

use fernweh_core::{CompanionType, Destination, ElementVector, Trait, TraitVector, UserProfile};

use crate::config::{ScoringConfig, TraitShaping};
use crate::explain::{self, Explanation};
use crate::mapper;
use crate::pillars;

/// A destination with its raw score and explanation, pre-presentation.
#[derive(Debug, Clone)]
pub(crate) struct ScoredCandidate<'a> {
    /// The catalog entry being ranked.
    pub destination: &'a Destination,
    /// Unbounded raw score; jitter and penalties adjust it in place.
    pub raw_score: f32,
    /// Explanation assembled at scoring time.
    pub explanation: Explanation,
}

/// Per-request scoring state derived from the profile.
pub(crate) struct QueryContext<'p> {
    profile: &'p UserProfile,
    config: &'p ScoringConfig,
    /// Salience- and peak-shaped query vector, before the companion blend.
    shaped: TraitVector,
    /// Fully shaped query vector used for similarity and explanations.
    query: TraitVector,
    elements: ElementVector,
    beta_local: f32,
}

impl<'p> QueryContext<'p> {
    pub(crate) fn new(profile: &'p UserProfile, config: &'p ScoringConfig) -> Self {
        let base = mapper::personality_traits(profile.code);
        let shaped = boost_top_traits(&enhance_salience(&base, &config.shaping), &config.shaping);
        let query = blend_with_companion(&shaped, profile.companions, &config.shaping);

        let estimate = pillars::estimate(profile.birth_date, profile.birth_time.as_deref());
        let beta_local = if profile.birth_date.is_some() {
            if estimate.pillars.hour_known() {
                config.weights.beta
            } else {
                config.weights.beta * config.weights.beta_time_damping
            }
        } else {
            0.0
        };

        Self {
            profile,
            config,
            shaped,
            query,
            elements: estimate.elements,
            beta_local,
        }
    }

    /// Score one destination, producing its raw score and explanation.
    pub(crate) fn score_destination<'c>(&self, destination: &'c Destination) -> ScoredCandidate<'c> {
        let cfg = self.config;

        let fit = companion_fit(destination, self.profile.companions);
        let coverage = companion_coverage(destination);
        let companion_weight = cfg.companion.base + cfg.companion.coverage_gain * coverage;

        let trait_cos = cosine(self.query.iter(), destination.trait_profile.iter());
        let element_cos = cosine(self.elements.iter(), destination.element_profile.iter());

        let raw_score = cfg.weights.alpha * trait_cos
            + self.beta_local * element_cos
            - cfg.weights.gamma * penalty(destination, self.profile, cfg)
            + companion_weight * (fit - 0.5)
            + cfg.companion.rank_nudge * (fit - 0.5)
            + season_adjust(destination, self.profile.travel_month, cfg)
            + specialization_bonus(&self.shaped, destination, cfg);

        let explanation = explain::build(destination, &self.query, &self.elements, self.profile);

        ScoredCandidate {
            destination,
            raw_score,
            explanation,
        }
    }
}

/// Cosine similarity over the union of keys; missing keys count as zero and
/// a zero norm on either side yields zero, never `NaN`.
fn cosine<K: Ord + Copy>(
    a: impl IntoIterator<Item = (K, f32)>,
    b: impl IntoIterator<Item = (K, f32)>,
) -> f32 {
    let left: BTreeMap<K, f32> = a.into_iter().collect();
    let right: BTreeMap<K, f32> = b.into_iter().collect();
    let mut dot = 0.0_f32;
    let mut left_sq = 0.0_f32;
    let mut right_sq = 0.0_f32;
    for (key, value) in &left {
        dot += value * right.get(key).copied().unwrap_or(0.0);
        left_sq += value * value;
    }
    for value in right.values() {
        right_sq += value * value;
    }
    let denom = left_sq.sqrt() * right_sq.sqrt();
    if denom > 0.0 { dot / denom } else { 0.0 }
}

/// Pull every trait away from the neutral 0.5 by the salience factor.
fn enhance_salience(base: &TraitVector, shaping: &TraitShaping) -> TraitVector {
    base.iter().fold(TraitVector::new(), |vector, (axis, weight)| {
        vector.with(axis, 0.5 + (weight - 0.5) * shaping.salience)
    })
}

/// Multiply the two highest traits by their peak bonus factors.
fn boost_top_traits(traits: &TraitVector, shaping: &TraitShaping) -> TraitVector {
    let mut boosted = traits.clone();
    let tops = traits.top_two();
    if let Some(&(axis, weight)) = tops.first() {
        boosted.set(axis, weight * (1.0 + shaping.peak_primary));
    }
    if let Some(&(axis, weight)) = tops.get(1) {
        boosted.set(axis, weight * (1.0 + shaping.peak_secondary));
    }
    boosted
}

/// Interpolate each trait toward the companion bias vector.
fn blend_with_companion(
    traits: &TraitVector,
    companions: Option<CompanionType>,
    shaping: &TraitShaping,
) -> TraitVector {
    let Some(companion) = companions else {
        return traits.clone();
    };
    let bias = companion_trait_bias(companion);
    let blend = shaping.companion_blend;
    Trait::ALL.iter().fold(TraitVector::new(), |vector, &axis| {
        let own = traits.get(axis).unwrap_or(0.5);
        let pull = bias.get(axis).unwrap_or(1.0 / 6.0);
        vector.with(axis, (1.0 - blend) * own + blend * pull)
    })
}

/// Fixed per-companion trait focus vectors.
fn companion_trait_bias(companion: CompanionType) -> TraitVector {
    match companion {
        CompanionType::Solo => TraitVector::new()
            .with(Trait::Social, 0.2)
            .with(Trait::Novelty, 0.1)
            .with(Trait::Structure, 0.40)
            .with(Trait::Flexibility, 0.10)
            .with(Trait::Sensory, 0.05)
            .with(Trait::Culture, 0.15),
        CompanionType::Couple => TraitVector::new()
            .with(Trait::Social, 0.25)
            .with(Trait::Novelty, 0.10)
            .with(Trait::Structure, 0.10)
            .with(Trait::Flexibility, 0.15)
            .with(Trait::Sensory, 0.30)
            .with(Trait::Culture, 0.10),
        CompanionType::Friends => TraitVector::new()
            .with(Trait::Social, 0.35)
            .with(Trait::Novelty, 0.20)
            .with(Trait::Structure, 0.05)
            .with(Trait::Flexibility, 0.25)
            .with(Trait::Sensory, 0.10)
            .with(Trait::Culture, 0.05),
        CompanionType::Family => TraitVector::new()
            .with(Trait::Social, 0.10)
            .with(Trait::Novelty, 0.05)
            .with(Trait::Structure, 0.35)
            .with(Trait::Flexibility, 0.15)
            .with(Trait::Sensory, 0.10)
            .with(Trait::Culture, 0.25),
    }
}

/// Companion-fit score in `[0, 1]`; 0.5 when no signals are available.
fn companion_fit(destination: &Destination, companions: Option<CompanionType>) -> f32 {
    let Some(companion) = companions else {
        return 0.5;
    };
    let solo = companion == CompanionType::Solo;
    let group = matches!(companion, CompanionType::Friends | CompanionType::Family);
    let lively = matches!(companion, CompanionType::Friends | CompanionType::Couple);

    let mut sum = 0.0_f32;
    let mut total_weight = 0.0_f32;
    let mut push = |signal: Option<f32>, weight: f32| {
        if let Some(value) = signal {
            sum += value * weight;
            total_weight += weight;
        }
    };
    push(destination.safety_index, if solo { 1.2 } else { 0.8 });
    push(destination.access_ease, if solo { 1.0 } else { 0.8 });
    push(destination.group_ease, if group { 1.2 } else { 0.6 });
    push(destination.nightlife, if lively { 1.1 } else { 0.5 });
    push(destination.language_ease, 0.8);

    if destination.kid_friendly == Some(true) && companion == CompanionType::Family {
        sum += 0.2;
    }
    if destination
        .suitable_for
        .as_ref()
        .is_some_and(|suited| suited.contains(&companion))
    {
        sum += 0.2;
    }

    if total_weight == 0.0 {
        0.5
    } else {
        (sum / total_weight).clamp(0.0, 1.0)
    }
}

/// How much of the companion signal surface a destination actually fills.
///
/// The boolean flag and the suitability list count at half weight so sparse
/// destinations are neither over- nor under-rewarded.
fn companion_coverage(destination: &Destination) -> f32 {
    let numeric = [
        destination.safety_index,
        destination.access_ease,
        destination.language_ease,
        destination.nightlife,
        destination.group_ease,
    ];
    let mut filled = numeric.iter().filter(|signal| signal.is_some()).count() as f32;
    if destination.kid_friendly.is_some() {
        filled += 0.5;
    }
    if destination.suitable_for.is_some() {
        filled += 0.5;
    }
    (filled / 6.0).clamp(0.0, 1.0)
}

/// Circular distance between two months (1-12).
fn month_distance(a: u32, b: u32) -> u32 {
    let direct = a.abs_diff(b);
    direct.min(12 - direct)
}

/// Season reward or penalty, scaled by best-months specificity.
fn season_adjust(destination: &Destination, travel_month: Option<u32>, cfg: &ScoringConfig) -> f32 {
    let Some(month) = travel_month else {
        return 0.0;
    };
    if destination.best_months.is_empty() {
        return 0.0;
    }
    let specificity = (1.0 - destination.best_months.len() as f32 / 12.0).clamp(0.0, 1.0);
    if destination.best_months.contains(&month) {
        return cfg.weights.season * cfg.season.bonus * (0.6 + 0.4 * specificity);
    }
    let near = destination
        .best_months
        .iter()
        .any(|&best| month_distance(best, month) == 1);
    let base = if near {
        cfg.season.near_penalty
    } else {
        cfg.season.far_penalty
    };
    -cfg.weights.season * base * (0.5 + 0.5 * specificity)
}

/// Reward destinations that stand out on the query's top two traits.
///
/// Uses the unblended shaped vector: the companion blend would otherwise
/// leak companion bias into what is meant to measure personality fit.
fn specialization_bonus(shaped: &TraitVector, destination: &Destination, cfg: &ScoringConfig) -> f32 {
    let tops = shaped.top_two();
    let (first_axis, first_weight) = tops.first().copied().unwrap_or((Trait::Social, 0.5));
    let (second_axis, second_weight) = tops.get(1).copied().unwrap_or((Trait::Novelty, 0.5));

    let profile_of = |axis: Trait| destination.trait_profile.get(axis).unwrap_or(0.0);
    let mean = Trait::ALL.iter().map(|&axis| profile_of(axis)).sum::<f32>() / Trait::ALL.len() as f32;
    let top_average = cfg.specialization.primary_weight * profile_of(first_axis)
        + cfg.specialization.secondary_weight * profile_of(second_axis);

    let confidence = ((first_weight - 0.5).abs() + (second_weight - 0.5).abs()) / 2.0;
    cfg.specialization.gain * (top_average - mean) * (0.6 + 0.4 * confidence)
}

fn logistic(x: f32, steepness: f32, midpoint: f32) -> f32 {
    1.0 / (1.0 + (-steepness * (x - midpoint)).exp())
}

/// Penalty term in `[0, 1]`: budget overage, solo stability discount, and
/// the (disabled by default) flight-hours overage.
fn penalty(destination: &Destination, profile: &UserProfile, cfg: &ScoringConfig) -> f32 {
    let mut total = 0.0_f32;

    if let Some(requested) = profile.budget_level {
        let delta = i16::from(destination.budget_level) - i16::from(requested);
        if delta > 0 {
            total += cfg.budget.overage * f32::from(delta);
        } else if delta < 0 {
            total -= cfg.budget.discount * f32::from(-delta);
        }
    }

    if profile.companions == Some(CompanionType::Solo) {
        let stability = destination.trait_profile.get(Trait::Structure).unwrap_or(0.0)
            + destination.trait_profile.get(Trait::Culture).unwrap_or(0.0);
        total -= cfg.solo_stability * stability;
    }

    if cfg.distance.enabled {
        if let (Some(ceiling), Some(hours)) =
            (profile.max_flight_hours, destination.avg_flight_hours)
        {
            let overage = hours - ceiling;
            if overage > 0.0 {
                total += cfg.distance.weight
                    * logistic(overage, cfg.distance.steepness, cfg.distance.midpoint);
            }
        }
    }

    total.clamp(0.0, 1.0)
}
