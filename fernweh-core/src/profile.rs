//! The ephemeral user profile a recommendation request scores against.
//!
//! Profiles are built by the upstream request layer after validation and are
//! never persisted. Every field beyond the personality code is optional and
//! has a documented neutral fallback in the scorer, so a minimal profile is
//! always usable.
//!
//! # Examples
//! ```
//! use fernweh_core::{CompanionType, PersonalityCode, RegionFilter, UserProfile};
//!
//! let profile = UserProfile::new(PersonalityCode::Enfp)
//!     .with_travel_month(10)
//!     .with_budget_level(2)
//!     .with_companions(CompanionType::Friends);
//! assert_eq!(profile.region, RegionFilter::All);
//! assert_eq!(profile.birth_date, None);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::destination::Region;
use crate::personality::PersonalityCode;

/// Who the user is travelling with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionType {
    /// Travelling alone.
    Solo,
    /// Travelling as a pair.
    Couple,
    /// A group of friends.
    Friends,
    /// A family, possibly with children.
    Family,
}

impl CompanionType {
    /// Return the companion type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Friends => "friends",
            Self::Family => "family",
        }
    }
}

impl std::fmt::Display for CompanionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompanionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "couple" => Ok(Self::Couple),
            "friends" => Ok(Self::Friends),
            "family" => Ok(Self::Family),
            _ => Err(format!("unknown companion type '{s}'")),
        }
    }
}

/// Region restriction applied before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    /// No restriction.
    #[default]
    All,
    /// Keep only domestic destinations.
    Domestic,
    /// Keep only overseas destinations.
    Overseas,
}

impl RegionFilter {
    /// Whether a destination in `region` passes this filter.
    #[must_use]
    pub const fn admits(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Domestic => matches!(region, Region::Domestic),
            Self::Overseas => matches!(region, Region::Overseas),
        }
    }

    /// Return the filter as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Domestic => "domestic",
            Self::Overseas => "overseas",
        }
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "domestic" => Ok(Self::Domestic),
            "overseas" => Ok(Self::Overseas),
            _ => Err(format!("unknown region filter '{s}'")),
        }
    }
}

/// One recommendation request's worth of user input.
///
/// The birth time stays a raw string: the element estimator judges its
/// well-formedness and degrades to the time-absent path when it does not
/// match the strict `HH:MM` pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// The four-letter personality code, already validated by parsing.
    pub code: PersonalityCode,
    /// Planned travel month (1-12), when known.
    pub travel_month: Option<u32>,
    /// Budget level (1-5), when stated.
    pub budget_level: Option<u8>,
    /// Travel companions, when stated.
    pub companions: Option<CompanionType>,
    /// Region restriction; defaults to [`RegionFilter::All`].
    pub region: RegionFilter,
    /// Birth date, when supplied.
    pub birth_date: Option<NaiveDate>,
    /// Raw birth time (`HH:MM` expected), when supplied.
    pub birth_time: Option<String>,
    /// Longest acceptable flight, in hours.
    pub max_flight_hours: Option<f32>,
}

impl UserProfile {
    /// Construct a minimal profile: everything optional left unset.
    #[must_use]
    pub const fn new(code: PersonalityCode) -> Self {
        Self {
            code,
            travel_month: None,
            budget_level: None,
            companions: None,
            region: RegionFilter::All,
            birth_date: None,
            birth_time: None,
            max_flight_hours: None,
        }
    }

    /// Set the travel month while returning `self` for chaining.
    #[must_use]
    pub const fn with_travel_month(mut self, month: u32) -> Self {
        self.travel_month = Some(month);
        self
    }

    /// Set the budget level while returning `self` for chaining.
    #[must_use]
    pub const fn with_budget_level(mut self, level: u8) -> Self {
        self.budget_level = Some(level);
        self
    }

    /// Set the companion type while returning `self` for chaining.
    #[must_use]
    pub const fn with_companions(mut self, companions: CompanionType) -> Self {
        self.companions = Some(companions);
        self
    }

    /// Set the region filter while returning `self` for chaining.
    #[must_use]
    pub const fn with_region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }

    /// Set the birth date while returning `self` for chaining.
    #[must_use]
    pub const fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the raw birth time while returning `self` for chaining.
    #[must_use]
    pub fn with_birth_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    /// Set the flight-hours ceiling while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_flight_hours(mut self, hours: f32) -> Self {
        self.max_flight_hours = Some(hours);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn minimal_profile_defaults_everything_optional() {
        let profile = UserProfile::new(PersonalityCode::Istj);
        assert_eq!(profile.travel_month, None);
        assert_eq!(profile.budget_level, None);
        assert_eq!(profile.companions, None);
        assert_eq!(profile.region, RegionFilter::All);
        assert_eq!(profile.birth_time, None);
    }

    #[rstest]
    #[case(RegionFilter::All, Region::Domestic, true)]
    #[case(RegionFilter::All, Region::Overseas, true)]
    #[case(RegionFilter::Domestic, Region::Overseas, false)]
    #[case(RegionFilter::Overseas, Region::Overseas, true)]
    fn region_filter_admits(
        #[case] filter: RegionFilter,
        #[case] region: Region,
        #[case] admitted: bool,
    ) {
        assert_eq!(filter.admits(region), admitted);
    }

    #[rstest]
    fn companion_parsing_rejects_unknown() {
        let err = CompanionType::from_str("pets").unwrap_err();
        assert!(err.contains("unknown companion type"));
    }

    #[rstest]
    fn chaining_sets_fields() {
        let date = NaiveDate::from_ymd_opt(1993, 4, 16).unwrap();
        let profile = UserProfile::new(PersonalityCode::Enfj)
            .with_region(RegionFilter::Overseas)
            .with_birth_date(date)
            .with_birth_time("07:30");
        assert_eq!(profile.birth_date, Some(date));
        assert_eq!(profile.birth_time.as_deref(), Some("07:30"));
        assert_eq!(profile.region, RegionFilter::Overseas);
    }
}
