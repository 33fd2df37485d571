#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// An enum to represent the ways a GPA/CGPA calculation can be rejected.
///
/// Every variant is a local validation failure raised before any arithmetic
/// happens, so the same input always fails the same way.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GpaError {
    /// The grade symbol is not one of `A`, `B`, `C`, `D`, `E`, `F`.
    #[error("`{0}` is not a recognised grade (expected one of A, B, C, D, E, F)")]
    InvalidGrade(String),
    /// Credits are not positive, not finite, or above the configured maximum.
    #[error("Course {index}: Enter valid credit hours (got {credits})")]
    InvalidCredit {
        /// 1-based position of the offending entry.
        index:   usize,
        /// The rejected credit value.
        credits: f64,
    },
    /// A semester GPA that cannot take part in a weighted mean.
    #[error("Semester {index}: GPA must be a finite number (got {gpa})")]
    InvalidGpa {
        /// 1-based position of the offending entry.
        index: usize,
        /// The rejected GPA value.
        gpa:   f64,
    },
    /// No entries were supplied.
    #[error("At least one entry is required to calculate an average")]
    EmptyInput,
    /// The credits summed to zero.
    #[error("Total credits sum to zero, cannot calculate an average")]
    ZeroCredit,
    /// The credit or quality point totals are too large to represent.
    #[error("Totals overflowed (credits {total_credits}, points {total_quality_points})")]
    TotalOverflow {
        /// Sum of the credit weights.
        total_credits:        f64,
        /// Sum of value times credits.
        total_quality_points: f64,
    },
    /// The per-course credit cap is not a positive finite number.
    #[error("Maximum credits per course must be a positive number (got {0})")]
    InvalidMaxCredits(f64),
    /// A `GRADE:UNITS` or `GPA:UNITS` argument could not be split or parsed.
    #[error("Could not parse entry `{0}`, expected the form VALUE:UNITS (e.g. A:3)")]
    MalformedEntry(String),
}
