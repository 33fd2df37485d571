#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    engine::{CalculationResult, CourseEntry, EngineConfig, GpaEngine, SemesterEntry},
    error::GpaError,
    grade::LetterGrade,
};

/// Group name for records that carry no semester.
pub const UNASSIGNED_SEMESTER: &str = "Unassigned";

/// A saved course, as entered by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course title or code, eg. `MTH 101`
    pub course_name:   String,
    /// Credit units
    pub credits:       f64,
    /// Grade received
    pub letter_grade:  LetterGrade,
    /// Semester or session the course was taken in, eg. `2023/2024 First`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester_year: Option<String>,
}

impl CourseRecord {
    /// Semester label used for grouping.
    pub fn semester(&self) -> &str {
        self.semester_year
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNASSIGNED_SEMESTER)
    }

    /// The record as a bare course entry.
    pub fn entry(&self) -> CourseEntry {
        CourseEntry::new(self.letter_grade, self.credits)
    }
}

/// A student's course records across semesters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    /// Records in the order they were entered.
    pub records: Vec<CourseRecord>,
}

/// GPA of a single semester within a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester label
    pub semester: String,
    /// GPA for the semester's courses
    pub result:   CalculationResult,
}

/// Per-semester GPAs plus the cumulative CGPA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    /// Semesters in first-seen order
    pub semesters:  Vec<SemesterSummary>,
    /// CGPA across every semester
    pub cumulative: CalculationResult,
}

impl Transcript {
    /// Creates a transcript from records.
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    /// Loads a JSON array of course records from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read transcript {}", path.display()))?;
        let records: Vec<CourseRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse transcript {}", path.display()))?;
        tracing::debug!("Loaded {} course records from {}", records.len(), path.display());
        Ok(Self::new(records))
    }

    /// Semester labels in first-seen order.
    pub fn semesters(&self) -> Vec<&str> {
        self.records.iter().map(CourseRecord::semester).unique().collect()
    }

    /// Computes a GPA per semester, then the CGPA across semesters.
    ///
    /// Each semester contributes its unrounded mean, so the cumulative value
    /// equals the credit-weighted mean over every course.
    pub fn summarize(&self, config: &EngineConfig) -> Result<TranscriptSummary, GpaError> {
        if self.records.is_empty() {
            return Err(GpaError::EmptyInput);
        }

        let engine = GpaEngine::new(*config);
        let mut semesters = Vec::new();
        for semester in self.semesters() {
            let courses: Vec<CourseEntry> = self
                .records
                .iter()
                .filter(|r| r.semester() == semester)
                .map(CourseRecord::entry)
                .collect();
            let result = engine.gpa(&courses)?;
            semesters.push(SemesterSummary {
                semester: semester.to_string(),
                result,
            });
        }

        let weights: Vec<SemesterEntry> = semesters
            .iter()
            .map(|s| SemesterEntry::new(s.result.exact_mean(), s.result.total_credits))
            .collect();
        let cumulative = engine.cgpa(&weights)?;

        Ok(TranscriptSummary {
            semesters,
            cumulative,
        })
    }
}
