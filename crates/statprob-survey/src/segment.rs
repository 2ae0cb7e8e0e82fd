//! Population segments a distribution can be computed for

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::InvalidChoiceError, record::Gender};

/// Part of the surveyed population.
///
/// `Overall` is not stored separately; it covers every student regardless of
/// gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Overall,
    Male,
    Female,
}

impl Segment {
    /// Every segment, in selector order.
    pub const ALL: [Segment; 3] = [Segment::Overall, Segment::Male, Segment::Female];

    /// Machine-readable key, accepted by [`FromStr`].
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Segment::Overall => "overall",
            Segment::Male => "male",
            Segment::Female => "female",
        }
    }

    /// Label shown above a selected table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Segment::Overall => "All students",
            Segment::Male => "Male",
            Segment::Female => "Female",
        }
    }

    /// Whether a student of `gender` belongs to this segment.
    #[must_use]
    pub fn includes(self, gender: Gender) -> bool {
        match self {
            Segment::Overall => true,
            Segment::Male => gender == Gender::Male,
            Segment::Female => gender == Gender::Female,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl From<Gender> for Segment {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => Segment::Male,
            Gender::Female => Segment::Female,
        }
    }
}

impl FromStr for Segment {
    type Err = InvalidChoiceError;

    /// Parses a selector value.
    ///
    /// Matching is case-insensitive and also accepts the Indonesian labels of
    /// the survey form (`keseluruhan`, `semua`, `laki-laki`, `perempuan`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_survey::segment::Segment;
    /// assert_eq!("Male".parse::<Segment>().unwrap(), Segment::Male);
    /// assert_eq!("Perempuan".parse::<Segment>().unwrap(), Segment::Female);
    /// assert!("Unknown".parse::<Segment>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segment = match s.trim().to_ascii_lowercase().as_str() {
            "overall" | "all" | "keseluruhan" | "semua" => Segment::Overall,
            "male" | "laki-laki" => Segment::Male,
            "female" | "perempuan" => Segment::Female,
            _ => {
                return Err(InvalidChoiceError {
                    choice: s.to_owned(),
                });
            }
        };
        Ok(segment)
    }
}
