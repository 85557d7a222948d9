//! Trait axes and weighted trait vectors.
//!
//! A [`TraitVector`] maps each [`Trait`] to a weight in `[0.0, 1.0]`. Query
//! vectors built by the trait mapper carry all six axes; catalog profiles may
//! be partial, and similarity treats missing axes as zero. Iteration order is
//! fixed (the declaration order of [`Trait`]) so tie-breaks are stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six trait axes a personality code is projected onto.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    /// Preference for company and exchange with locals.
    Social,
    /// Appetite for new stimuli and exploration.
    Novelty,
    /// Preference for order, plans, and stability.
    Structure,
    /// Ease with loose schedules and improvisation.
    Flexibility,
    /// Draw toward food, views, and other sensory richness.
    Sensory,
    /// Draw toward history, art, and meaning.
    Culture,
}

impl Trait {
    /// All six axes in their canonical order.
    pub const ALL: [Self; 6] = [
        Self::Social,
        Self::Novelty,
        Self::Structure,
        Self::Flexibility,
        Self::Sensory,
        Self::Culture,
    ];

    /// Return the axis as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Novelty => "novelty",
            Self::Structure => "structure",
            Self::Flexibility => "flexibility",
            Self::Sensory => "sensory",
            Self::Culture => "culture",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights per trait axis, each clamped into `[0.0, 1.0]`.
///
/// # Examples
/// ```
/// use fernweh_core::{Trait, TraitVector};
///
/// let vector = TraitVector::new()
///     .with(Trait::Culture, 0.9)
///     .with(Trait::Social, 1.4);
/// assert_eq!(vector.get(Trait::Culture), Some(0.9));
/// assert_eq!(vector.get(Trait::Social), Some(1.0));
/// assert_eq!(vector.get(Trait::Novelty), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitVector {
    values: BTreeMap<Trait, f32>,
}

impl TraitVector {
    /// Construct an empty (partial) vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the neutral query baseline: every axis at 0.5.
    #[must_use]
    pub fn neutral() -> Self {
        Trait::ALL
            .iter()
            .fold(Self::new(), |vector, &axis| vector.with(axis, 0.5))
    }

    /// Return the weight for an axis, if present.
    #[must_use]
    pub fn get(&self, axis: Trait) -> Option<f32> {
        self.values.get(&axis).copied()
    }

    /// Insert or update an axis weight, clamping into `[0.0, 1.0]`.
    pub fn set(&mut self, axis: Trait, weight: f32) {
        self.values.insert(axis, weight.clamp(0.0, 1.0));
    }

    /// Set an axis weight while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, axis: Trait, weight: f32) -> Self {
        self.set(axis, weight);
        self
    }

    /// Iterate over the present axes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f32)> + '_ {
        self.values.iter().map(|(&axis, &weight)| (axis, weight))
    }

    /// Number of axes present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no axes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The up-to-two highest-weighted axes, best first.
    ///
    /// Ties resolve to the axis earlier in canonical order.
    #[must_use]
    pub fn top_two(&self) -> Vec<(Trait, f32)> {
        let mut entries: Vec<(Trait, f32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(2);
        entries
    }
}
