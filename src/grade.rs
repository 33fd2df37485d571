#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GpaError;

/// A letter grade on the Nigerian 5.00 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterGrade {
    /// 5 points
    A,
    /// 4 points
    B,
    /// 3 points
    C,
    /// 2 points
    D,
    /// 1 point
    E,
    /// 0 points
    F,
}

impl LetterGrade {
    /// Every grade, best first.
    pub const ALL: [LetterGrade; 6] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::E,
        LetterGrade::F,
    ];

    /// Returns the point value of this grade.
    pub fn points(self) -> f64 {
        match self {
            LetterGrade::A => 5.0,
            LetterGrade::B => 4.0,
            LetterGrade::C => 3.0,
            LetterGrade::D => 2.0,
            LetterGrade::E => 1.0,
            LetterGrade::F => 0.0,
        }
    }

    /// Returns the grade as its uppercase letter.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        }
    }

    /// Parses a grade symbol, ignoring case and surrounding whitespace.
    ///
    /// * `symbol`: the grade as typed, eg. `"b"` or `" A "`
    pub fn parse(symbol: &str) -> Result<Self, GpaError> {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "E" => Ok(LetterGrade::E),
            "F" => Ok(LetterGrade::F),
            _ => Err(GpaError::InvalidGrade(symbol.to_string())),
        }
    }
}

impl FromStr for LetterGrade {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterGrade::parse(s)
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LetterGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LetterGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        LetterGrade::parse(&symbol).map_err(serde::de::Error::custom)
    }
}
