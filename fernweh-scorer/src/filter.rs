//! Candidate shortlisting: region and budget admissibility with fallback.
//!
//! Filtering is deterministic and order-preserving relative to the catalog.
//! The strict budget mode is the one wired to the public entry point; the
//! band and cap modes exist for the relaxation cascade, which only engages
//! when the strict pass returns nothing and a budget was actually requested.

use fernweh_core::{Destination, RegionFilter, UserProfile};

/// Budget admissibility modes, in relaxation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMode {
    /// The destination's level must equal the requested level.
    Strict,
    /// The destination's level may differ by at most one.
    Band,
    /// The destination may be cheaper without bound, but not two or more
    /// levels pricier.
    Cap,
}

impl BudgetMode {
    /// Whether a destination at `level` is admissible for `requested`.
    #[must_use]
    pub fn allows(self, level: u8, requested: u8) -> bool {
        let delta = i16::from(level) - i16::from(requested);
        match self {
            Self::Strict => delta == 0,
            Self::Band => delta.abs() <= 1,
            Self::Cap => delta < 2,
        }
    }
}

/// Keep the catalog entries admitted by the region filter, in catalog order.
pub(crate) fn region_pool<'a>(
    catalog: &'a [Destination],
    region: RegionFilter,
) -> Vec<&'a Destination> {
    catalog
        .iter()
        .filter(|destination| region.admits(destination.region))
        .collect()
}

fn budget_matches<'a>(
    pool: &[&'a Destination],
    mode: BudgetMode,
    requested: u8,
) -> Vec<&'a Destination> {
    pool.iter()
        .copied()
        .filter(|destination| mode.allows(destination.budget_level, requested))
        .collect()
}

/// Apply the strict budget filter with the relaxation cascade.
///
/// The cascade widens within the region-filtered set first (band, then cap)
/// and only then abandons the region restriction, retrying both relaxations
/// against the whole catalog. Exhausting every step yields an empty pool,
/// which downstream stages treat as a valid outcome.
pub(crate) fn budget_pool<'a>(
    base: &[&'a Destination],
    catalog: &'a [Destination],
    requested: Option<u8>,
) -> Vec<&'a Destination> {
    let Some(level) = requested else {
        return base.to_vec();
    };

    let strict = budget_matches(base, BudgetMode::Strict, level);
    if !strict.is_empty() {
        return strict;
    }

    let whole: Vec<&Destination> = catalog.iter().collect();
    let cascade: [(&[&Destination], BudgetMode); 4] = [
        (base, BudgetMode::Band),
        (base, BudgetMode::Cap),
        (&whole, BudgetMode::Band),
        (&whole, BudgetMode::Cap),
    ];
    for (pool, mode) in cascade {
        let relaxed = budget_matches(pool, mode, level);
        if !relaxed.is_empty() {
            log::debug!("budget cascade engaged: {mode:?} kept {}", relaxed.len());
            return relaxed;
        }
    }
    Vec::new()
}

/// Narrow a catalog to the candidates admissible for a profile.
///
/// # Examples
/// ```
/// use fernweh_core::{Destination, PersonalityCode, Region, UserProfile};
/// use fernweh_scorer::shortlist;
///
/// let catalog = vec![
///     Destination::new("a", "A", "X", Region::Domestic, 2),
///     Destination::new("b", "B", "Y", Region::Overseas, 3),
/// ];
/// let profile = UserProfile::new(PersonalityCode::Istp).with_budget_level(2);
/// let pool = shortlist(&catalog, &profile);
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool.first().map(|d| d.id.as_str()), Some("a"));
/// ```
#[must_use]
pub fn shortlist<'a>(catalog: &'a [Destination], profile: &UserProfile) -> Vec<&'a Destination> {
    let base = region_pool(catalog, profile.region);
    budget_pool(&base, catalog, profile.budget_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fernweh_core::{PersonalityCode, Region};
    use rstest::rstest;

    fn entry(id: &str, region: Region, budget: u8) -> Destination {
        Destination::new(id, id.to_uppercase(), "Testland", region, budget)
    }

    fn ids(pool: &[&Destination]) -> Vec<String> {
        pool.iter().map(|destination| destination.id.clone()).collect()
    }

    #[rstest]
    fn strict_mode_keeps_only_exact_matches() {
        let catalog = vec![
            entry("a", Region::Domestic, 2),
            entry("b", Region::Domestic, 3),
            entry("c", Region::Domestic, 2),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj).with_budget_level(2);
        assert_eq!(ids(&shortlist(&catalog, &profile)), vec!["a", "c"]);
    }

    #[rstest]
    fn absent_budget_admits_everything() {
        let catalog = vec![
            entry("a", Region::Domestic, 1),
            entry("b", Region::Domestic, 5),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj);
        assert_eq!(shortlist(&catalog, &profile).len(), 2);
    }

    #[rstest]
    fn band_fallback_engages_before_cap() {
        let catalog = vec![
            entry("near", Region::Domestic, 3),
            entry("cheap", Region::Domestic, 1),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj).with_budget_level(4);
        // no exact level 4; band admits level 3 only, so "cheap" stays out.
        assert_eq!(ids(&shortlist(&catalog, &profile)), vec!["near"]);
    }

    #[rstest]
    fn cap_fallback_admits_cheaper_without_bound() {
        let catalog = vec![
            entry("a", Region::Domestic, 2),
            entry("b", Region::Domestic, 3),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj).with_budget_level(5);
        // neither exact nor within one level; cap admits both cheaper entries.
        assert_eq!(shortlist(&catalog, &profile).len(), 2);
    }

    #[rstest]
    fn region_restriction_is_abandoned_last() {
        let catalog = vec![
            entry("far", Region::Overseas, 5),
            entry("home", Region::Domestic, 2),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj)
            .with_region(fernweh_core::RegionFilter::Overseas)
            .with_budget_level(2);
        // overseas offers only a level-5 entry, which every overseas
        // relaxation rejects; the global band pass finds the domestic one.
        let pool = shortlist(&catalog, &profile);
        assert_eq!(ids(&pool), vec!["home"]);
    }

    #[rstest]
    fn pricier_beyond_cap_yields_empty() {
        let catalog = vec![entry("lux", Region::Domestic, 5)];
        let profile = UserProfile::new(PersonalityCode::Intj).with_budget_level(1);
        assert!(shortlist(&catalog, &profile).is_empty());
    }

    #[rstest]
    fn order_follows_the_catalog() {
        let catalog = vec![
            entry("z", Region::Domestic, 2),
            entry("a", Region::Domestic, 2),
            entry("m", Region::Domestic, 2),
        ];
        let profile = UserProfile::new(PersonalityCode::Intj).with_budget_level(2);
        assert_eq!(ids(&shortlist(&catalog, &profile)), vec!["z", "a", "m"]);
    }
}
