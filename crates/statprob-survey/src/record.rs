//! Survey records as delivered by the data source
//!
//! The payload is a JSON object with two collections:
//!
//! ```json
//! {
//!   "students": [{ "id": "5024231001", "name": "Andi", "gender": "male", "most_like_show": 6 }],
//!   "shows": [{ "id": 6, "name": "Film Drama" }]
//! }
//! ```
//!
//! Ids may be JSON numbers or strings. A number and a string never compare
//! equal, so `6` and `"6"` are different ids.

use std::{fmt, io::Read};

use serde::{Deserialize, Serialize};

/// Identifier of a student or a show.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => fmt::Display::fmt(n, f),
            RecordId::Text(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_owned())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl Gender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// One survey response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student number
    pub id: RecordId,
    pub name: String,
    pub gender: Gender,
    /// Id of the show this student likes most
    #[serde(rename = "most_like_show")]
    pub show_id: RecordId,
}

/// One offered answer of the survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: RecordId,
    /// Display name, also the grouping key of frequency tables
    pub name: String,
}

/// Decrypted survey payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyData {
    pub students: Vec<Student>,
    pub shows: Vec<Show>,
}

impl SurveyData {
    /// Parses a payload from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_survey::record::{Gender, RecordId, SurveyData};
    /// let data = SurveyData::from_json(
    ///     r#"{
    ///         "students": [{ "id": 1, "name": "Ana", "gender": "female", "most_like_show": "s1" }],
    ///         "shows": [{ "id": "s1", "name": "Sinetron" }]
    ///     }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(data.students[0].gender, Gender::Female);
    /// assert_eq!(data.students[0].show_id, RecordId::from("s1"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a payload from a JSON reader.
    pub fn from_reader<R>(reader: R) -> Result<Self, serde_json::Error>
    where
        R: Read,
    {
        serde_json::from_reader(reader)
    }
}
