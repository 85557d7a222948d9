//! Presentation metrics: closeness, tier, share, percentile, visibility.
//!
//! These metrics exist for display, not ranking: the order is already fixed
//! when this stage runs. The visibility cutoff hides candidates that are far
//! from the leader, but never empties a non-empty list.

use serde::Serialize;

use fernweh_core::Destination;

use crate::explain::Explanation;
use crate::score::ScoredCandidate;

/// Letter grade derived from closeness to the top candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    /// Closeness at or above 0.90.
    S,
    /// Closeness at or above 0.78.
    A,
    /// Closeness at or above 0.64.
    B,
    /// Closeness at or above 0.50.
    C,
    /// Everything further from the leader.
    D,
}

impl Tier {
    /// Return the tier as a one-letter `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked recommendation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// The recommended destination.
    pub destination: Destination,
    /// Raw (adjusted) score; unbounded, for ordering and debugging.
    pub score: f32,
    /// Score relative to the top candidate; 1.0 for the leader.
    pub closeness: f32,
    /// Letter grade from the closeness thresholds.
    pub tier: Tier,
    /// Softmax share of the candidate set, in `(0, 1]`.
    pub share: f32,
    /// Rank percentile: 0 is best, 100 is last.
    pub percentile: u8,
    /// Why this destination ranked here.
    pub explanation: Explanation,
}

/// Map closeness onto the fixed tier thresholds.
pub(crate) fn tier_from_closeness(closeness: f32) -> Tier {
    if closeness >= 0.90 {
        Tier::S
    } else if closeness >= 0.78 {
        Tier::A
    } else if closeness >= 0.64 {
        Tier::B
    } else if closeness >= 0.50 {
        Tier::C
    } else {
        Tier::D
    }
}

/// Max-shifted softmax with a floored temperature.
pub(crate) fn softmax_shares(scores: &[f32], temperature: f32) -> Vec<f32> {
    if scores.is_empty() {
        return Vec::new();
    }
    let peak = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let heat = temperature.max(1e-6);
    let exps: Vec<f32> = scores.iter().map(|score| ((score - peak) / heat).exp()).collect();
    let total: f32 = exps.iter().sum();
    let divisor = if total > 0.0 { total } else { 1.0 };
    exps.iter().map(|weight| weight / divisor).collect()
}

/// Percentile of a rank index: 0 for the best, 100 for the last.
fn percentile_from_index(index: usize, count: usize) -> u8 {
    if count <= 1 {
        return 0;
    }
    let ratio = index as f32 / (count - 1) as f32;
    (ratio * 100.0).round() as u8
}

/// Derive presentation metrics, apply the visibility cutoff, and truncate.
pub(crate) fn finalise(
    rows: Vec<ScoredCandidate<'_>>,
    limit: usize,
    min_closeness: f32,
    min_share: f32,
    temperature: f32,
) -> Vec<RankedResult> {
    let top = rows.first().map_or(0.0, |row| row.raw_score);
    let scores: Vec<f32> = rows.iter().map(|row| row.raw_score).collect();
    let shares = softmax_shares(&scores, temperature);
    let count = rows.len();

    let ranked: Vec<RankedResult> = rows
        .into_iter()
        .zip(shares)
        .enumerate()
        .map(|(index, (row, share))| {
            let closeness = if top > 0.0 { row.raw_score / top } else { 0.0 };
            RankedResult {
                destination: row.destination.clone(),
                score: row.raw_score,
                closeness,
                tier: tier_from_closeness(closeness),
                share,
                percentile: percentile_from_index(index, count),
                explanation: row.explanation,
            }
        })
        .collect();

    let visible: Vec<RankedResult> = ranked
        .iter()
        .filter(|row| row.closeness > min_closeness && row.share > min_share)
        .cloned()
        .collect();
    let mut kept = if visible.is_empty() { ranked } else { visible };
    kept.truncate(limit);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use fernweh_core::Region;
    use rstest::rstest;

    fn candidate<'a>(destination: &'a Destination, raw_score: f32) -> ScoredCandidate<'a> {
        ScoredCandidate {
            destination,
            raw_score,
            explanation: Explanation {
                top_traits: Vec::new(),
                top_elements: Vec::new(),
                notes: Vec::new(),
            },
        }
    }

    #[rstest]
    #[case(1.0, Tier::S)]
    #[case(0.90, Tier::S)]
    #[case(0.89, Tier::A)]
    #[case(0.78, Tier::A)]
    #[case(0.70, Tier::B)]
    #[case(0.55, Tier::C)]
    #[case(0.10, Tier::D)]
    fn tiers_follow_the_thresholds(#[case] closeness: f32, #[case] tier: Tier) {
        assert_eq!(tier_from_closeness(closeness), tier);
    }

    #[rstest]
    fn shares_sum_to_one_and_follow_the_order() {
        let shares = softmax_shares(&[0.9, 0.5, 0.2], 0.08);
        let total: f32 = shares.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        for pair in shares.windows(2) {
            assert!(pair.first() >= pair.get(1));
        }
        assert!(shares.iter().all(|share| (0.0..=1.0).contains(share)));
    }

    #[rstest]
    fn shares_of_an_empty_list_are_empty() {
        assert!(softmax_shares(&[], 0.08).is_empty());
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(4, 5, 100)]
    #[case(2, 5, 50)]
    #[case(0, 1, 0)]
    fn percentiles_span_the_sorted_order(
        #[case] index: usize,
        #[case] count: usize,
        #[case] expected: u8,
    ) {
        assert_eq!(percentile_from_index(index, count), expected);
    }

    #[rstest]
    fn the_leader_is_always_tier_s() {
        let a = Destination::new("a", "A", "X", Region::Domestic, 2);
        let b = Destination::new("b", "B", "X", Region::Domestic, 2);
        let rows = vec![candidate(&a, 0.8), candidate(&b, 0.7)];
        let ranked = finalise(rows, 5, 0.05, 0.01, 0.08);
        let leader = ranked.first().unwrap();
        assert_eq!(leader.tier, Tier::S);
        assert!((leader.closeness - 1.0).abs() < 1e-6);
    }

    #[rstest]
    fn distant_candidates_are_hidden() {
        let a = Destination::new("a", "A", "X", Region::Domestic, 2);
        let b = Destination::new("b", "B", "X", Region::Domestic, 2);
        let rows = vec![candidate(&a, 1.0), candidate(&b, 0.01)];
        let ranked = finalise(rows, 5, 0.05, 0.01, 0.08);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.first().unwrap().destination.id, "a");
    }

    #[rstest]
    fn the_cutoff_never_empties_a_populated_list() {
        let a = Destination::new("a", "A", "X", Region::Domestic, 2);
        let b = Destination::new("b", "B", "X", Region::Domestic, 2);
        // a non-positive leader zeroes closeness everywhere, which would hide
        // every candidate; the unfiltered list must come back instead.
        let rows = vec![candidate(&a, -0.2), candidate(&b, -0.4)];
        let ranked = finalise(rows, 5, 0.05, 0.01, 0.08);
        assert_eq!(ranked.len(), 2);
    }

    #[rstest]
    fn results_truncate_to_the_limit() {
        let destinations: Vec<Destination> = (0..8)
            .map(|index| {
                Destination::new(format!("d{index}"), "D", "X", Region::Domestic, 2)
            })
            .collect();
        let rows: Vec<ScoredCandidate<'_>> = destinations
            .iter()
            .map(|destination| candidate(destination, 1.0))
            .collect();
        let ranked = finalise(rows, 3, 0.05, 0.01, 0.08);
        assert_eq!(ranked.len(), 3);
    }
}
