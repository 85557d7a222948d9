//! Facade crate for the Fernweh recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline's
//! public entry points so applications can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use fernweh::{PersonalityCode, RecommendOptions, UserProfile, recommend};
//!
//! let profile = UserProfile::new(PersonalityCode::Intp);
//! let results = recommend(&profile, &[], &RecommendOptions::default());
//! assert!(results.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use fernweh_core::{
    CompanionType, Destination, Element, ElementVector, InvalidCodeError, PersonalityCode, Region,
    RegionFilter, Theme, Trait, TraitVector, UserProfile,
};
pub use fernweh_scorer::{
    Explanation, PersonalizationContext, Pillars, RankedResult, RecommendOptions, ScoringConfig,
    Tier, personalization_context, recommend,
};
