//! Deterministic anti-domination adjustments applied after scoring.
//!
//! Each candidate receives a small jitter derived from a stable FNV-1a hash
//! of `(code, companion, destination id)`, so identical requests always see
//! identical adjustments. Outside the domestic-only view, destinations from
//! heavily represented countries pay a capped concentration penalty. Sorting
//! is total: descending adjusted score, ties by ascending identifier.

use std::collections::HashMap;

use fernweh_core::{CompanionType, Destination, RegionFilter, UserProfile};

use crate::config::RerankConfig;
use crate::score::ScoredCandidate;

/// Hash a key into `[0, 1)` with 32-bit FNV-1a.
pub(crate) fn stable_hash01(key: &str) -> f32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in key.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    (f64::from(hash) / 4_294_967_296.0) as f32
}

/// Count catalog entries per country over the region-filtered pool.
pub(crate) fn country_counts<'a>(pool: &[&'a Destination]) -> HashMap<&'a str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for destination in pool {
        *counts.entry(destination.country.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Apply jitter and the country-concentration penalty in place.
pub(crate) fn apply(
    rows: &mut [ScoredCandidate<'_>],
    profile: &UserProfile,
    counts: &HashMap<&str, usize>,
    cfg: &RerankConfig,
) {
    let companion_token = profile
        .companions
        .map_or("none", CompanionType::as_str);
    for row in rows {
        let key = format!("{}|{}|{}", profile.code, companion_token, row.destination.id);
        let jitter = (stable_hash01(&key) - 0.5) * 2.0 * cfg.jitter;
        row.raw_score += jitter;

        if profile.region != RegionFilter::Domestic {
            let count = counts
                .get(row.destination.country.as_str())
                .copied()
                .unwrap_or(1);
            let concentration = cfg.country_step * (count as f32 - 1.0);
            row.raw_score -= concentration.max(0.0).min(cfg.country_cap);
        }
    }
}

/// Sort descending by adjusted score; break ties on ascending identifier.
pub(crate) fn sort_candidates(rows: &mut [ScoredCandidate<'_>]) {
    rows.sort_by(|a, b| {
        b.raw_score
            .total_cmp(&a.raw_score)
            .then_with(|| a.destination.id.cmp(&b.destination.id))
    });
}
