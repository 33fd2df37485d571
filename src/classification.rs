#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Serialize, Serializer};

/// Upper end of the grading scale.
pub const MAX_POINTS: f64 = 5.0;

/// An honours-degree tier associated with a GPA/CGPA range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// 4.50 and above
    FirstClass,
    /// 3.50 up to 4.50
    SecondClassUpper,
    /// 2.50 up to 3.50
    SecondClassLower,
    /// 1.50 up to 2.50
    ThirdClass,
    /// 1.00 up to 1.50
    Pass,
    /// below 1.00
    Fail,
}

impl Classification {
    /// Bands as `(inclusive lower bound, class)`, highest first. Together they
    /// cover `[0, 5]` without gaps or overlaps.
    pub const BANDS: [(f64, Classification); 6] = [
        (4.50, Classification::FirstClass),
        (3.50, Classification::SecondClassUpper),
        (2.50, Classification::SecondClassLower),
        (1.50, Classification::ThirdClass),
        (1.00, Classification::Pass),
        (0.00, Classification::Fail),
    ];

    /// Classifies an average, picking the highest band whose lower bound is
    /// at most `value`.
    ///
    /// Values outside `[0, 5]` are clamped into range first; NaN is a fail.
    pub fn of(value: f64) -> Self {
        let value = value.clamp(0.0, MAX_POINTS);
        Self::BANDS
            .iter()
            .find(|(lower, _)| value >= *lower)
            .map(|(_, class)| *class)
            .unwrap_or(Classification::Fail)
    }

    /// Inclusive lower bound of this band.
    pub fn lower_bound(self) -> f64 {
        Self::BANDS
            .iter()
            .find(|(_, class)| *class == self)
            .map(|(lower, _)| *lower)
            .unwrap_or_default()
    }

    /// Human readable name of the band.
    pub fn label(self) -> &'static str {
        match self {
            Classification::FirstClass => "First Class",
            Classification::SecondClassUpper => "Second Class Upper (2:1)",
            Classification::SecondClassLower => "Second Class Lower (2:2)",
            Classification::ThirdClass => "Third Class",
            Classification::Pass => "Pass",
            Classification::Fail => "Fail",
        }
    }

    /// Short remark shown alongside the band.
    pub fn description(self) -> &'static str {
        match self {
            Classification::FirstClass => "Excellent! Outstanding achievement",
            Classification::SecondClassUpper => "Very good performance",
            Classification::SecondClassLower => "Good performance",
            Classification::ThirdClass => "Satisfactory performance",
            Classification::Pass => "Minimum passing grade",
            Classification::Fail => "Below minimum requirements",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
