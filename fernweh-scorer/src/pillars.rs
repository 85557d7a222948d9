//! Calendar pillars: birth date and time to an element distribution.
//!
//! A simplified cyclical labelling over the Gregorian calendar: a ten-symbol
//! stem cycle and a twelve-symbol branch cycle, each mapping to one of the
//! five elements through a fixed table. The year offset constant calibrates
//! 1984 to cycle index zero for both cycles. When a well-formed birth time is
//! given, the two-hour branch contributes through its hidden-stem blend,
//! softening the single-element assignment a plain branch lookup would give.
//!
//! This is an explainable heuristic, not a lunar calendar: no solar terms, no
//! time zones, no leap handling beyond what the Gregorian date already gives.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use fernweh_core::{Element, ElementVector};

/// Calibrates the year cycle so 1984 maps to index zero.
const YEAR_CYCLE_OFFSET: i64 = 4;

const YEAR_STEM_WEIGHT: f32 = 1.0;
const YEAR_BRANCH_WEIGHT: f32 = 1.0;
const MONTH_STEM_WEIGHT: f32 = 2.0;
const MONTH_BRANCH_WEIGHT: f32 = 2.0;
const HOUR_BRANCH_WEIGHT: f32 = 1.5;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    /// First stem (wood).
    Jia,
    /// Second stem (wood).
    Yi,
    /// Third stem (fire).
    Bing,
    /// Fourth stem (fire).
    Ding,
    /// Fifth stem (earth).
    Wu,
    /// Sixth stem (earth).
    Ji,
    /// Seventh stem (metal).
    Geng,
    /// Eighth stem (metal).
    Xin,
    /// Ninth stem (water).
    Ren,
    /// Tenth stem (water).
    Gui,
}

impl Stem {
    /// Resolve a cycle index (any integer) to its stem.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "stem indices wrap modulo the ten-symbol cycle"
    )]
    pub const fn from_cycle(index: i64) -> Self {
        match index.rem_euclid(10) {
            0 => Self::Jia,
            1 => Self::Yi,
            2 => Self::Bing,
            3 => Self::Ding,
            4 => Self::Wu,
            5 => Self::Ji,
            6 => Self::Geng,
            7 => Self::Xin,
            8 => Self::Ren,
            _ => Self::Gui,
        }
    }

    /// The element this stem belongs to.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Return the stem as a lowercase romanised `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// First branch (water); the two-hour bucket around midnight.
    Zi,
    /// Second branch (earth).
    Chou,
    /// Third branch (wood).
    Yin,
    /// Fourth branch (wood).
    Mao,
    /// Fifth branch (earth).
    Chen,
    /// Sixth branch (fire).
    Si,
    /// Seventh branch (fire); the bucket around noon.
    Wu,
    /// Eighth branch (earth).
    Wei,
    /// Ninth branch (metal).
    Shen,
    /// Tenth branch (metal).
    You,
    /// Eleventh branch (earth).
    Xu,
    /// Twelfth branch (water).
    Hai,
}

impl Branch {
    /// Resolve a cycle index (any integer) to its branch.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "branch indices wrap modulo the twelve-symbol cycle"
    )]
    pub const fn from_cycle(index: i64) -> Self {
        match index.rem_euclid(12) {
            0 => Self::Zi,
            1 => Self::Chou,
            2 => Self::Yin,
            3 => Self::Mao,
            4 => Self::Chen,
            5 => Self::Si,
            6 => Self::Wu,
            7 => Self::Wei,
            8 => Self::Shen,
            9 => Self::You,
            10 => Self::Xu,
            _ => Self::Hai,
        }
    }

    /// The branch covering an hour of day (0-23).
    ///
    /// Buckets span two hours each and wrap at midnight, so 23:00 and 00:59
    /// both fall in the first branch.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "two-hour buckets wrap at midnight"
    )]
    pub const fn for_hour(hour: u32) -> Self {
        Self::from_cycle((((hour + 1) / 2) % 12) as i64)
    }

    /// The element this branch belongs to.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
        }
    }

    /// Hidden-stem element ratios for the branch; each row sums to 1.0.
    ///
    /// Applied only to the hour branch, where a single-element assignment
    /// would overstate the time's influence.
    #[must_use]
    pub const fn hidden_blend(self) -> &'static [(Element, f32)] {
        match self {
            Self::Zi => &[(Element::Water, 1.0)],
            Self::Chou => &[(Element::Earth, 0.6), (Element::Water, 0.2), (Element::Metal, 0.2)],
            Self::Yin => &[(Element::Wood, 0.6), (Element::Fire, 0.3), (Element::Earth, 0.1)],
            Self::Mao => &[(Element::Wood, 1.0)],
            Self::Chen => &[(Element::Earth, 0.6), (Element::Wood, 0.2), (Element::Water, 0.2)],
            Self::Si => &[(Element::Fire, 0.6), (Element::Metal, 0.25), (Element::Earth, 0.15)],
            Self::Wu => &[(Element::Fire, 0.7), (Element::Earth, 0.3)],
            Self::Wei => &[(Element::Earth, 0.6), (Element::Wood, 0.25), (Element::Fire, 0.15)],
            Self::Shen => &[(Element::Metal, 0.6), (Element::Water, 0.25), (Element::Earth, 0.15)],
            Self::You => &[(Element::Metal, 1.0)],
            Self::Xu => &[(Element::Earth, 0.6), (Element::Fire, 0.25), (Element::Metal, 0.15)],
            Self::Hai => &[(Element::Water, 0.6), (Element::Wood, 0.4)],
        }
    }

    /// Return the branch as a lowercase romanised `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stem-branch pair labelling a year or month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar {
    /// The stem half of the label.
    pub stem: Stem,
    /// The branch half of the label.
    pub branch: Branch,
}

impl Pillar {
    /// The pillar for a Gregorian year.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        let cycle = year as i64 - YEAR_CYCLE_OFFSET;
        Self {
            stem: Stem::from_cycle(cycle),
            branch: Branch::from_cycle(cycle),
        }
    }

    /// The pillar for a calendar month (1-12).
    ///
    /// A simplified month labelling: the stem and branch depend on the month
    /// alone, not on the year's stem as the traditional scheme would have it.
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        let zero_based = month as i64 - 1;
        Self {
            stem: Stem::from_cycle(zero_based + 2),
            branch: Branch::from_cycle(zero_based + 1),
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// The pillar labels computed for one estimate.
///
/// `None` is the "unknown" sentinel: without a birth date nothing is
/// labelled, and without a well-formed birth time the hour branch stays
/// unknown while the year and month pillars are concrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillars {
    /// Year pillar, when a birth date was supplied.
    pub year: Option<Pillar>,
    /// Month pillar, when a birth date was supplied.
    pub month: Option<Pillar>,
    /// Hour branch, when a well-formed birth time was supplied too.
    pub hour_branch: Option<Branch>,
}

impl Pillars {
    /// The all-unknown sentinel used when no birth date is given.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            year: None,
            month: None,
            hour_branch: None,
        }
    }

    /// Whether the hour pillar was computed.
    #[must_use]
    pub const fn hour_known(&self) -> bool {
        self.hour_branch.is_some()
    }
}

/// An element distribution together with the pillars that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementEstimate {
    /// Normalised element distribution; sums to 1.
    pub elements: ElementVector,
    /// The pillar labels behind the distribution.
    pub pillars: Pillars,
}

/// Parse a strict `HH:MM` time string, returning the hour.
///
/// Exactly two digits on each side of the colon, hour below 24, minute
/// below 60. Anything else is `None`; the caller treats that as time-absent.
///
/// # Examples
/// ```
/// use fernweh_scorer::parse_birth_time;
///
/// assert_eq!(parse_birth_time("07:30"), Some(7));
/// assert_eq!(parse_birth_time("23:59"), Some(23));
/// assert_eq!(parse_birth_time("7:30"), None);
/// assert_eq!(parse_birth_time("24:00"), None);
/// ```
#[must_use]
pub fn parse_birth_time(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hours.parse().ok()?;
    let minute: u32 = minutes.parse().ok()?;
    (hour < 24 && minute < 60).then_some(hour)
}

/// Whether a time string was supplied but failed the strict pattern.
///
/// Empty strings count as absent, matching the form semantics of "unknown".
pub(crate) fn time_present_but_invalid(time: Option<&str>) -> bool {
    time.is_some_and(|t| !t.is_empty() && parse_birth_time(t).is_none())
}

/// Estimate the element distribution for a birth date and optional time.
///
/// Without a date this returns the exact uniform distribution and all-unknown
/// pillars; it never fails. With a date, stem and branch contributions are
/// aggregated with fixed weights (year 1+1, month 2+2, hour 1.5) and
/// normalised to sum 1.
///
/// # Examples
/// ```
/// use fernweh_scorer::estimate;
///
/// let neutral = estimate(None, None);
/// assert!(neutral.pillars.year.is_none());
/// assert!((neutral.elements.sum() - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn estimate(date: Option<NaiveDate>, time: Option<&str>) -> ElementEstimate {
    let Some(date) = date else {
        return ElementEstimate {
            elements: ElementVector::neutral(),
            pillars: Pillars::unknown(),
        };
    };

    let year = Pillar::for_year(date.year());
    let month = Pillar::for_month(date.month());
    let hour_branch = time.and_then(parse_birth_time).map(Branch::for_hour);

    let mut weights: BTreeMap<Element, f32> = BTreeMap::new();
    let mut add = |element: Element, weight: f32| {
        *weights.entry(element).or_insert(0.0) += weight;
    };
    add(year.stem.element(), YEAR_STEM_WEIGHT);
    add(year.branch.element(), YEAR_BRANCH_WEIGHT);
    add(month.stem.element(), MONTH_STEM_WEIGHT);
    add(month.branch.element(), MONTH_BRANCH_WEIGHT);
    if let Some(branch) = hour_branch {
        for &(element, ratio) in branch.hidden_blend() {
            add(element, HOUR_BRANCH_WEIGHT * ratio);
        }
    }

    let total: f32 = weights.values().sum();
    let divisor = if total > 0.0 { total } else { 1.0 };
    let elements = Element::ALL.iter().fold(ElementVector::new(), |vector, &element| {
        let weight = weights.get(&element).copied().unwrap_or(0.0);
        vector.with(element, weight / divisor)
    });

    ElementEstimate {
        elements,
        pillars: Pillars {
            year: Some(year),
            month: Some(month),
            hour_branch,
        },
    }
}
