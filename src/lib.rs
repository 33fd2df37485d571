//! # thinkora
//!
//! GPA and CGPA calculation on the Nigerian 5.00 scale, with honours
//! classification, terminal reports, and a small JSON service.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Honours bands and the lookup from an average to a band
pub mod classification;
/// Environment-driven runtime configuration
pub mod config;
/// Weighted-average GPA and CGPA calculation
pub mod engine;
/// Errors raised when an input cannot be calculated
pub mod error;
/// Letter grades and their point values
pub mod grade;
/// Terminal tables and summaries
pub mod report;
/// HTTP endpoints mirroring the calculator
pub mod server;
/// Course records grouped by semester
pub mod transcript;

pub use classification::Classification;
pub use engine::{
    CalculationResult, CourseEntry, EngineConfig, GpaEngine, SemesterEntry, compute_cgpa,
    compute_gpa,
};
pub use error::GpaError;
pub use grade::LetterGrade;
pub use transcript::{CourseRecord, Transcript, TranscriptSummary};
