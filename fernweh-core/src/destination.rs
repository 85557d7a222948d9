//! Catalog entries: the destinations the engine ranks.
//!
//! Destinations are supplied externally as a JSON array (camelCase field
//! names) and are read-only once loaded. Optional companion signals raise the
//! confidence of the companion-fit term when present; the scorer treats their
//! absence as a documented neutral, never an error.

use serde::{Deserialize, Serialize};

use crate::elements::ElementVector;
use crate::profile::CompanionType;
use crate::traits::TraitVector;

/// Geographic class of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Inside the catalog's home country.
    Domestic,
    /// Outside the catalog's home country.
    Overseas,
}

impl Region {
    /// Return the region as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Overseas => "overseas",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad theme tags a destination may carry.
///
/// Tags are presentation metadata; the scoring pipeline does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Urban cityscapes.
    City,
    /// Natural landscapes.
    Nature,
    /// Coastal resorts and beaches.
    Beach,
    /// Mountain scenery and hikes.
    Mountain,
    /// Museums and galleries.
    Museum,
    /// Food and cuisine.
    Food,
    /// Evening entertainment.
    Nightlife,
    /// Hot springs.
    Onsen,
    /// Historical sites.
    History,
    /// Artistic venues.
    Art,
}

impl Theme {
    /// Return the theme as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Nature => "nature",
            Self::Beach => "beach",
            Self::Mountain => "mountain",
            Self::Museum => "museum",
            Self::Food => "food",
            Self::Nightlife => "nightlife",
            Self::Onsen => "onsen",
            Self::History => "history",
            Self::Art => "art",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Numeric companion signals live in `[0.0, 1.0]`. `kid_friendly` and
/// `suitable_for` distinguish "absent" from "present" because presence feeds
/// the companion-signal coverage measure.
///
/// # Examples
/// ```
/// use fernweh_core::{Destination, Region, Trait};
///
/// let jeju = Destination::new("jeju", "Jeju Island", "South Korea", Region::Domestic, 2)
///     .with_trait(Trait::Sensory, 0.8)
///     .with_best_months([4, 5, 6, 9, 10]);
/// assert_eq!(jeju.budget_level, 2);
/// assert!(jeju.best_months.contains(&10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier, used for deterministic tie-breaks.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Country the destination belongs to.
    pub country: String,
    /// Geographic class.
    pub region: Region,
    /// Optional city name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Trait profile; may be partial.
    #[serde(default, skip_serializing_if = "TraitVector::is_empty")]
    pub trait_profile: TraitVector,
    /// Element profile; may be partial.
    #[serde(default, skip_serializing_if = "ElementVector::is_empty")]
    pub element_profile: ElementVector,
    /// Recommended travel months (1-12); empty when unknown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_months: Vec<u32>,
    /// Budget level, 1 (shoestring) to 5 (premium).
    pub budget_level: u8,
    /// Perceived safety.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_index: Option<f32>,
    /// Airport and transit accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_ease: Option<f32>,
    /// How easy signage and conversation are for visitors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_ease: Option<f32>,
    /// Richness of evening activities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightlife: Option<f32>,
    /// How well routes and lodging suit parties of three or four.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ease: Option<f32>,
    /// Whether the destination works well with children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid_friendly: Option<bool>,
    /// Companion types the destination explicitly suits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitable_for: Option<Vec<CompanionType>>,
    /// Presentation theme tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<Theme>,
    /// Average flight hours from the catalog's reference airport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_flight_hours: Option<f32>,
    /// Free-text notes surfaced in explanations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Destination {
    /// Construct an entry with the required fields; everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        region: Region,
        budget_level: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            region,
            city: None,
            trait_profile: TraitVector::new(),
            element_profile: ElementVector::new(),
            best_months: Vec::new(),
            budget_level,
            safety_index: None,
            access_ease: None,
            language_ease: None,
            nightlife: None,
            group_ease: None,
            kid_friendly: None,
            suitable_for: None,
            themes: Vec::new(),
            avg_flight_hours: None,
            notes: Vec::new(),
        }
    }

    /// Set one trait-profile axis while returning `self` for chaining.
    #[must_use]
    pub fn with_trait(mut self, axis: crate::Trait, weight: f32) -> Self {
        self.trait_profile.set(axis, weight);
        self
    }

    /// Set one element-profile weight while returning `self` for chaining.
    #[must_use]
    pub fn with_element(mut self, element: crate::Element, weight: f32) -> Self {
        self.element_profile.set(element, weight);
        self
    }

    /// Replace the recommended months while returning `self` for chaining.
    #[must_use]
    pub fn with_best_months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.best_months = months.into_iter().collect();
        self
    }
}
