//! The sixteen personality codes and their four preference poles.
//!
//! A [`PersonalityCode`] is parsed once at the request boundary; from then on
//! the type guarantees validity, so the trait mapper is a total function.
//!
//! # Examples
//! ```
//! use fernweh_core::PersonalityCode;
//!
//! let code: PersonalityCode = "intp".parse().unwrap();
//! assert_eq!(code, PersonalityCode::Intp);
//! assert_eq!(code.as_str(), "INTP");
//! assert!(!code.is_extravert());
//! ```

use thiserror::Error;

/// One of the sixteen four-letter personality codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalityCode {
    /// Introverted, intuitive, thinking, judging.
    Intj,
    /// Introverted, intuitive, thinking, perceiving.
    Intp,
    /// Extraverted, intuitive, thinking, judging.
    Entj,
    /// Extraverted, intuitive, thinking, perceiving.
    Entp,
    /// Introverted, intuitive, feeling, judging.
    Infj,
    /// Introverted, intuitive, feeling, perceiving.
    Infp,
    /// Extraverted, intuitive, feeling, judging.
    Enfj,
    /// Extraverted, intuitive, feeling, perceiving.
    Enfp,
    /// Introverted, sensing, thinking, judging.
    Istj,
    /// Introverted, sensing, thinking, perceiving.
    Istp,
    /// Extraverted, sensing, thinking, judging.
    Estj,
    /// Extraverted, sensing, thinking, perceiving.
    Estp,
    /// Introverted, sensing, feeling, judging.
    Isfj,
    /// Introverted, sensing, feeling, perceiving.
    Isfp,
    /// Extraverted, sensing, feeling, judging.
    Esfj,
    /// Extraverted, sensing, feeling, perceiving.
    Esfp,
}

/// Error returned when text does not name one of the sixteen codes.
///
/// Upstream validation is expected to reject such input before the core sees
/// it; reaching this error from inside the pipeline is a programming bug.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown personality code '{0}'")]
pub struct InvalidCodeError(pub String);

impl PersonalityCode {
    /// All sixteen codes, in the conventional table order.
    pub const ALL: [Self; 16] = [
        Self::Intj,
        Self::Intp,
        Self::Entj,
        Self::Entp,
        Self::Infj,
        Self::Infp,
        Self::Enfj,
        Self::Enfp,
        Self::Istj,
        Self::Istp,
        Self::Estj,
        Self::Estp,
        Self::Isfj,
        Self::Isfp,
        Self::Esfj,
        Self::Esfp,
    ];

    /// Return the canonical upper-case four-letter form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Istp => "ISTP",
            Self::Estj => "ESTJ",
            Self::Estp => "ESTP",
            Self::Isfj => "ISFJ",
            Self::Isfp => "ISFP",
            Self::Esfj => "ESFJ",
            Self::Esfp => "ESFP",
        }
    }

    /// Whether the first letter is the gregarious (extraverted) pole.
    #[must_use]
    pub const fn is_extravert(self) -> bool {
        matches!(
            self,
            Self::Entj
                | Self::Entp
                | Self::Enfj
                | Self::Enfp
                | Self::Estj
                | Self::Estp
                | Self::Esfj
                | Self::Esfp
        )
    }

    /// Whether the second letter is the abstract (intuitive) pole.
    #[must_use]
    pub const fn is_intuitive(self) -> bool {
        matches!(
            self,
            Self::Intj
                | Self::Intp
                | Self::Entj
                | Self::Entp
                | Self::Infj
                | Self::Infp
                | Self::Enfj
                | Self::Enfp
        )
    }

    /// Whether the third letter is the empathy (feeling) pole.
    #[must_use]
    pub const fn is_feeling(self) -> bool {
        matches!(
            self,
            Self::Infj
                | Self::Infp
                | Self::Enfj
                | Self::Enfp
                | Self::Isfj
                | Self::Isfp
                | Self::Esfj
                | Self::Esfp
        )
    }

    /// Whether the fourth letter is the planning (judging) pole.
    #[must_use]
    pub const fn is_judging(self) -> bool {
        matches!(
            self,
            Self::Intj
                | Self::Entj
                | Self::Infj
                | Self::Enfj
                | Self::Istj
                | Self::Estj
                | Self::Isfj
                | Self::Esfj
        )
    }
}

impl std::fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonalityCode {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| InvalidCodeError(s.to_owned()))
    }
}
