#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{classification::Classification, error::GpaError, grade::LetterGrade};

/// Largest credit load accepted for a single course unless configured
/// otherwise.
pub const DEFAULT_MAX_CREDITS: f64 = 10.0;

/// One course row: a letter grade and its credit units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Grade received
    pub grade:   LetterGrade,
    /// Credit units the course carries
    pub credits: f64,
}

impl CourseEntry {
    /// Creates a new course entry.
    pub fn new(grade: LetterGrade, credits: f64) -> Self {
        Self { grade, credits }
    }

    /// Grade points times credits.
    pub fn quality_points(&self) -> f64 {
        self.grade.points() * self.credits
    }
}

/// Parses `GRADE:UNITS`, eg. `b:4`.
impl FromStr for CourseEntry {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (grade, credits) = split_entry(s)?;
        Ok(CourseEntry::new(LetterGrade::parse(grade)?, credits))
    }
}

impl Display for CourseEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.grade, self.credits)
    }
}

/// One semester row used when aggregating a CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemesterEntry {
    /// GPA previously computed for the semester
    pub gpa:     f64,
    /// Total credit units taken in the semester
    pub credits: f64,
}

impl SemesterEntry {
    /// Creates a new semester entry.
    pub fn new(gpa: f64, credits: f64) -> Self {
        Self { gpa, credits }
    }
}

/// Parses `GPA:UNITS`, eg. `4.0:20`.
impl FromStr for SemesterEntry {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (gpa, credits) = split_entry(s)?;
        let gpa = gpa
            .trim()
            .parse::<f64>()
            .map_err(|_| GpaError::MalformedEntry(s.to_string()))?;
        Ok(SemesterEntry::new(gpa, credits))
    }
}

/// Splits `VALUE:UNITS` and parses the units.
fn split_entry(s: &str) -> Result<(&str, f64), GpaError> {
    let (value, credits) = s
        .split_once(':')
        .ok_or_else(|| GpaError::MalformedEntry(s.to_string()))?;
    let credits = credits
        .trim()
        .parse::<f64>()
        .map_err(|_| GpaError::MalformedEntry(s.to_string()))?;
    Ok((value, credits))
}

/// Outcome of a GPA or CGPA calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Weighted average, rounded to 2 decimal places
    pub value:                f64,
    /// Sum of the credit weights
    pub total_credits:        f64,
    /// Sum of value times credits
    pub total_quality_points: f64,
    /// Band the average falls in
    pub classification:       Classification,
    /// Number of entries that went into the average
    pub entry_count:          usize,
}

impl CalculationResult {
    /// Builds a result from running totals, dividing and rounding once.
    fn from_totals(
        total_quality_points: f64,
        total_credits: f64,
        entry_count: usize,
    ) -> Result<Self, GpaError> {
        if !total_credits.is_finite() || !total_quality_points.is_finite() {
            return Err(GpaError::TotalOverflow {
                total_credits,
                total_quality_points,
            });
        }
        if total_credits <= 0.0 {
            return Err(GpaError::ZeroCredit);
        }
        let value = round2(total_quality_points / total_credits);
        Ok(Self {
            value,
            total_credits,
            total_quality_points,
            classification: Classification::of(value),
            entry_count,
        })
    }

    /// The unrounded weighted mean.
    pub fn exact_mean(&self) -> f64 {
        self.total_quality_points / self.total_credits
    }
}

impl Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/5.00 ({})", self.value, self.classification)
    }
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tunables for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, TypedBuilder, Serialize, Deserialize)]
#[builder(doc)]
pub struct EngineConfig {
    /// Largest credit load accepted for a single course.
    #[builder(default = DEFAULT_MAX_CREDITS)]
    pub max_credits: f64,
}

impl EngineConfig {
    /// Checks that the credit cap is usable.
    pub fn validate(&self) -> Result<(), GpaError> {
        if self.max_credits.is_finite() && self.max_credits > 0.0 {
            Ok(())
        } else {
            Err(GpaError::InvalidMaxCredits(self.max_credits))
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }
}

/// Computes GPA and CGPA with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GpaEngine {
    /// Limits applied to every calculation.
    config: EngineConfig,
}

impl GpaEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Credit-weighted mean of grade points over `courses`.
    pub fn gpa(&self, courses: &[CourseEntry]) -> Result<CalculationResult, GpaError> {
        self.config.validate()?;
        if courses.is_empty() {
            return Err(GpaError::EmptyInput);
        }

        for (i, course) in courses.iter().enumerate() {
            let credits = course.credits;
            if !credits.is_finite() || credits <= 0.0 || credits > self.config.max_credits {
                return Err(GpaError::InvalidCredit {
                    index: i + 1,
                    credits,
                });
            }
        }

        let total_quality_points: f64 = courses.iter().map(CourseEntry::quality_points).sum();
        let total_credits: f64 = courses.iter().map(|c| c.credits).sum();

        let result =
            CalculationResult::from_totals(total_quality_points, total_credits, courses.len())?;
        tracing::debug!(
            courses = courses.len(),
            total_credits,
            total_quality_points,
            gpa = result.value,
            "calculated GPA"
        );
        Ok(result)
    }

    /// Credit-weighted mean of semester GPAs.
    ///
    /// Semester GPAs are taken as supplied; only non-finite values are
    /// rejected. The per-course credit cap does not apply to semester totals.
    pub fn cgpa(&self, semesters: &[SemesterEntry]) -> Result<CalculationResult, GpaError> {
        if semesters.is_empty() {
            return Err(GpaError::EmptyInput);
        }

        for (i, semester) in semesters.iter().enumerate() {
            if !semester.credits.is_finite() || semester.credits <= 0.0 {
                return Err(GpaError::InvalidCredit {
                    index:   i + 1,
                    credits: semester.credits,
                });
            }
            if !semester.gpa.is_finite() {
                return Err(GpaError::InvalidGpa {
                    index: i + 1,
                    gpa:   semester.gpa,
                });
            }
        }

        let total_quality_points: f64 = semesters.iter().map(|s| s.gpa * s.credits).sum();
        let total_credits: f64 = semesters.iter().map(|s| s.credits).sum();

        let result =
            CalculationResult::from_totals(total_quality_points, total_credits, semesters.len())?;
        tracing::debug!(
            semesters = semesters.len(),
            total_credits,
            cgpa = result.value,
            "calculated CGPA"
        );
        Ok(result)
    }
}

/// Computes a GPA with the default configuration.
pub fn compute_gpa(courses: &[CourseEntry]) -> Result<CalculationResult, GpaError> {
    GpaEngine::default().gpa(courses)
}

/// Computes a CGPA with the default configuration.
pub fn compute_cgpa(semesters: &[SemesterEntry]) -> Result<CalculationResult, GpaError> {
    GpaEngine::default().cgpa(semesters)
}
