//! Scoring pipeline for the Fernweh travel recommendation engine.
//!
//! The pipeline is a pure function of `(profile, catalog, options)`:
//!
//! 1. the trait mapper projects the personality code onto six axes;
//! 2. the element estimator turns the birth date and optional time into a
//!    five-element distribution with calendar pillar labels;
//! 3. the catalog filter narrows candidates by region and budget, relaxing
//!    through a cascade rather than ever erroring;
//! 4. the scoring engine combines weighted cosine similarities with the
//!    season adjustment, companion-fit and specialization bonuses, and the
//!    penalty term;
//! 5. the rerank guard adds deterministic jitter and a capped
//!    country-concentration penalty, then sorts totally;
//! 6. the presentation ranker derives closeness, tier, share, and percentile
//!    and applies the visibility cutoff and result limit.
//!
//! Nothing here performs I/O or touches shared mutable state: the catalog is
//! an immutable snapshot threaded through explicitly, so requests can run on
//! any number of threads without coordination.
//!
//! # Examples
//!
//! ```
//! use fernweh_core::{Destination, PersonalityCode, Region, Trait, UserProfile};
//! use fernweh_scorer::{RecommendOptions, recommend};
//!
//! let catalog = vec![
//!     Destination::new("kyoto", "Kyoto", "Japan", Region::Overseas, 3)
//!         .with_trait(Trait::Culture, 0.95),
//!     Destination::new("busan", "Busan", "South Korea", Region::Domestic, 2)
//!         .with_trait(Trait::Sensory, 0.85),
//! ];
//! let profile = UserProfile::new(PersonalityCode::Infj);
//! let results = recommend(&profile, &catalog, &RecommendOptions::default());
//! assert!(!results.is_empty());
//! assert_eq!(results.first().map(|r| r.tier.as_str()), Some("S"));
//! ```

#![forbid(unsafe_code)]

use serde::Serialize;

use fernweh_core::{CompanionType, Destination, ElementVector, TraitVector, UserProfile};

mod config;
mod explain;
mod filter;
mod mapper;
mod pillars;
mod present;
mod rerank;
mod score;

pub use config::{
    BudgetPenalty, CompanionBonus, DistancePenalty, RerankConfig, ScoreWeights, ScoringConfig,
    SeasonAdjust, SpecializationBonus, TraitShaping,
};
pub use explain::{Explanation, element_label, element_reason, trait_label, trait_reason};
pub use filter::{BudgetMode, shortlist};
pub use mapper::personality_traits;
pub use pillars::{
    Branch, ElementEstimate, Pillar, Pillars, Stem, estimate, parse_birth_time,
};
pub use present::{RankedResult, Tier};

/// Options controlling one `recommend` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    /// Maximum number of results returned.
    pub limit: usize,
    /// Hide candidates whose closeness is at or below this threshold.
    pub min_closeness: f32,
    /// Hide candidates whose share is at or below this threshold.
    pub min_share: f32,
    /// Tuning constants for every pipeline stage.
    pub config: ScoringConfig,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            min_closeness: 0.05,
            min_share: 0.01,
            config: ScoringConfig::reference(),
        }
    }
}

/// Intermediate vectors exposed for display and debugging.
///
/// The trait vector here is the raw mapper output, before the salience,
/// peak, and companion shaping the scoring engine applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalizationContext {
    /// Raw six-axis trait vector for the profile's personality code.
    pub traits: TraitVector,
    /// Element distribution estimated from the birth date and time.
    pub elements: ElementVector,
    /// Calendar pillar labels behind the distribution.
    pub pillars: Pillars,
    /// Echo of the profile's companion type.
    pub companion: Option<CompanionType>,
}

/// Rank a catalog against a profile.
///
/// The catalog is borrowed immutably and never modified; results own their
/// data. An empty catalog yields an empty list, which is a valid outcome.
#[must_use]
pub fn recommend(
    profile: &UserProfile,
    catalog: &[Destination],
    options: &RecommendOptions,
) -> Vec<RankedResult> {
    let base = filter::region_pool(catalog, profile.region);
    let pool = filter::budget_pool(&base, catalog, profile.budget_level);
    log::debug!(
        "shortlisted {} of {} destinations for {}",
        pool.len(),
        catalog.len(),
        profile.code
    );

    let context = score::QueryContext::new(profile, &options.config);
    let mut rows: Vec<score::ScoredCandidate<'_>> = pool
        .iter()
        .map(|destination| context.score_destination(destination))
        .collect();

    let counts = rerank::country_counts(&base);
    rerank::apply(&mut rows, profile, &counts, &options.config.rerank);
    rerank::sort_candidates(&mut rows);

    present::finalise(
        rows,
        options.limit,
        options.min_closeness,
        options.min_share,
        options.config.softmax_temperature,
    )
}

/// Expose the intermediate trait and element vectors for a profile.
///
/// # Examples
/// ```
/// use fernweh_core::{PersonalityCode, UserProfile};
/// use fernweh_scorer::personalization_context;
///
/// let context = personalization_context(&UserProfile::new(PersonalityCode::Entp));
/// assert!(context.pillars.year.is_none());
/// assert!((context.elements.sum() - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn personalization_context(profile: &UserProfile) -> PersonalizationContext {
    let traits = mapper::personality_traits(profile.code);
    let ElementEstimate { elements, pillars } =
        pillars::estimate(profile.birth_date, profile.birth_time.as_deref());
    PersonalizationContext {
        traits,
        elements,
        pillars,
        companion: profile.companions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fernweh_core::{Destination, PersonalityCode, Region};
    use rstest::rstest;

    #[rstest]
    fn an_empty_catalog_yields_an_empty_result() {
        let profile = UserProfile::new(PersonalityCode::Intp);
        let results = recommend(&profile, &[], &RecommendOptions::default());
        assert!(results.is_empty());
    }

    #[rstest]
    fn context_exposes_the_unshaped_trait_vector() {
        let profile = UserProfile::new(PersonalityCode::Intp);
        let context = personalization_context(&profile);
        assert_eq!(context.traits, personality_traits(PersonalityCode::Intp));
        assert_eq!(context.pillars, Pillars::unknown());
        assert_eq!(context.companion, None);
    }

    #[rstest]
    fn the_limit_caps_the_result_count() {
        let catalog: Vec<Destination> = (0..10)
            .map(|index| {
                Destination::new(format!("d{index}"), "D", "X", Region::Domestic, 2)
                    .with_trait(fernweh_core::Trait::Culture, 0.8)
            })
            .collect();
        let profile = UserProfile::new(PersonalityCode::Infj);
        let options = RecommendOptions {
            limit: 3,
            ..RecommendOptions::default()
        };
        assert_eq!(recommend(&profile, &catalog, &options).len(), 3);
    }
}
