//! The five elements and their distribution vectors.
//!
//! An [`ElementVector`] on the query side is a probability distribution: the
//! estimator normalises its output so the weights sum to one, and the
//! neutral fallback is exactly uniform. Catalog profiles may be partial;
//! similarity treats missing elements as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The five elements of the simplified cyclical calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Forests, gardens, green routes.
    Wood,
    /// Festivals, lively streets, night heat.
    Fire,
    /// Mountains, hot springs, grounded calm.
    Earth,
    /// Modern cities, architecture, order.
    Metal,
    /// Seas, rivers, waterside walks.
    Water,
}

impl Element {
    /// All five elements in their canonical order.
    pub const ALL: [Self; 5] = [
        Self::Wood,
        Self::Fire,
        Self::Earth,
        Self::Metal,
        Self::Water,
    ];

    /// Return the element as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights per element, each clamped into `[0.0, 1.0]`.
///
/// # Examples
/// ```
/// use fernweh_core::{Element, ElementVector};
///
/// let neutral = ElementVector::neutral();
/// assert_eq!(neutral.get(Element::Water), Some(0.2));
/// assert!((neutral.sum() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementVector {
    values: BTreeMap<Element, f32>,
}

impl ElementVector {
    /// Construct an empty (partial) vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the uniform neutral distribution: 0.2 per element.
    ///
    /// This is the guaranteed fallback when no birth date is supplied.
    #[must_use]
    pub fn neutral() -> Self {
        Element::ALL
            .iter()
            .fold(Self::new(), |vector, &element| vector.with(element, 0.2))
    }

    /// Return the weight for an element, if present.
    #[must_use]
    pub fn get(&self, element: Element) -> Option<f32> {
        self.values.get(&element).copied()
    }

    /// Insert or update an element weight, clamping into `[0.0, 1.0]`.
    pub fn set(&mut self, element: Element, weight: f32) {
        self.values.insert(element, weight.clamp(0.0, 1.0));
    }

    /// Set an element weight while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, element: Element, weight: f32) -> Self {
        self.set(element, weight);
        self
    }

    /// Iterate over the present elements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f32)> + '_ {
        self.values
            .iter()
            .map(|(&element, &weight)| (element, weight))
    }

    /// Number of elements present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no elements are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all present weights.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.values.values().sum()
    }

    /// The up-to-two highest-weighted elements, best first.
    ///
    /// Ties resolve to the element earlier in canonical order.
    #[must_use]
    pub fn top_two(&self) -> Vec<(Element, f32)> {
        let mut entries: Vec<(Element, f32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(2);
        entries
    }
}
