#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    classification::Classification,
    engine::{CalculationResult, CourseEntry, SemesterEntry},
    grade::LetterGrade,
    transcript::TranscriptSummary,
};

#[derive(Tabled)]
/// A row of the per-course breakdown.
struct CourseRow {
    #[tabled(rename = "Course")]
    /// 1-based course number
    number:  usize,
    #[tabled(rename = "Grade")]
    /// grade with its point value
    grade:   String,
    #[tabled(rename = "Units")]
    /// credit units
    credits: f64,
    #[tabled(rename = "Points")]
    /// quality points, one decimal place
    points:  String,
}

#[derive(Tabled)]
/// A row of the per-semester breakdown.
struct SemesterRow {
    #[tabled(rename = "Semester")]
    /// semester label or number
    semester: String,
    #[tabled(rename = "Courses")]
    /// number of courses, blank for bare CGPA input
    courses:  String,
    #[tabled(rename = "Units")]
    /// credit units
    credits:  f64,
    #[tabled(rename = "GPA")]
    /// GPA, two decimal places
    gpa:      String,
    #[tabled(rename = "Class")]
    /// classification of the GPA
    class:    String,
}

#[derive(Tabled)]
/// A row of the grade point scale.
struct GradeRow {
    #[tabled(rename = "Grade")]
    /// letter grade
    grade:  LetterGrade,
    #[tabled(rename = "Points")]
    /// point value, one decimal place
    points: String,
}

#[derive(Tabled)]
/// A row of the classification guide.
struct BandRow {
    #[tabled(rename = "Range")]
    /// band range
    range: String,
    #[tabled(rename = "Class")]
    /// band label
    class: &'static str,
}

/// Centres the header and footer rows and applies the shared style.
fn finish(table: &mut Table, header: &str, footer: String) -> String {
    table
        .with(Panel::header(header))
        .with(Panel::footer(footer))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders a table of courses with the GPA in the footer.
pub fn course_breakdown(courses: &[CourseEntry], result: &CalculationResult) -> String {
    let rows: Vec<CourseRow> = courses
        .iter()
        .enumerate()
        .map(|(i, course)| CourseRow {
            number:  i + 1,
            grade:   format!("{} ({})", course.grade, course.grade.points()),
            credits: course.credits,
            points:  format!("{:.1}", course.quality_points()),
        })
        .collect();

    finish(&mut Table::new(&rows), "GPA Breakdown", format!("GPA: {result}"))
}

/// Renders a table of semesters with the CGPA in the footer.
pub fn cgpa_breakdown(semesters: &[SemesterEntry], result: &CalculationResult) -> String {
    let rows: Vec<SemesterRow> = semesters
        .iter()
        .enumerate()
        .map(|(i, semester)| SemesterRow {
            semester: format!("Semester {}", i + 1),
            courses:  String::new(),
            credits:  semester.credits,
            gpa:      format!("{:.2}", semester.gpa),
            class:    Classification::of(semester.gpa).label().to_string(),
        })
        .collect();

    finish(&mut Table::new(&rows), "CGPA Breakdown", format!("CGPA: {result}"))
}

/// Renders a transcript summary, one row per semester.
pub fn semester_breakdown(summary: &TranscriptSummary) -> String {
    let rows: Vec<SemesterRow> = summary
        .semesters
        .iter()
        .map(|s| SemesterRow {
            semester: s.semester.clone(),
            courses:  s.result.entry_count.to_string(),
            credits:  s.result.total_credits,
            gpa:      format!("{:.2}", s.result.value),
            class:    s.result.classification.label().to_string(),
        })
        .collect();

    finish(
        &mut Table::new(&rows),
        "Transcript",
        format!("CGPA: {}", summary.cumulative),
    )
}

/// Renders the grade point scale and the classification guide.
pub fn scale_guide() -> String {
    let grades = Table::new(LetterGrade::ALL.iter().map(|grade| GradeRow {
        grade:  *grade,
        points: format!("{:.1}", grade.points()),
    }))
    .with(Panel::header("Nigerian 5.00 Scale"))
    .with(Style::modern())
    .to_string();

    let mut upper = None;
    let mut rows = Vec::new();
    for (lower, class) in Classification::BANDS {
        let range = match upper {
            None => format!("{lower:.2} and above"),
            Some(upper) => format!("{lower:.2} - {:.2}", upper - 0.01),
        };
        rows.push(BandRow {
            range,
            class: class.label(),
        });
        upper = Some(lower);
    }
    let bands = Table::new(&rows)
        .with(Panel::header("Classification Guide"))
        .with(Style::modern())
        .to_string();

    format!("{grades}\n{bands}")
}

/// One-line summary with the classification coloured by band.
pub fn headline(label: &str, result: &CalculationResult) -> String {
    let class = result.classification;
    let text = format!("{} - {}", class.label(), class.description());
    let text = match class {
        Classification::FirstClass | Classification::SecondClassUpper => text.green(),
        Classification::SecondClassLower | Classification::ThirdClass | Classification::Pass => {
            text.yellow()
        }
        Classification::Fail => text.red(),
    };
    format!(
        "{}: {:.2}/5.00 over {} units ({:.1} quality points)\n{}",
        label.bold(),
        result.value,
        result.total_credits,
        result.total_quality_points,
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{EngineConfig, compute_cgpa, compute_gpa},
        transcript::{CourseRecord, Transcript},
    };

    #[test]
    fn breakdown_lists_every_course_and_the_gpa() {
        let courses = [
            CourseEntry::new(LetterGrade::B, 4.0),
            CourseEntry::new(LetterGrade::C, 2.0),
        ];
        let result = compute_gpa(&courses).unwrap();
        let table = course_breakdown(&courses, &result);
        assert!(table.contains("GPA Breakdown"));
        assert!(table.contains("B (4)"));
        assert!(table.contains("16.0"));
        assert!(table.contains("GPA: 3.67/5.00 (Second Class Upper (2:1))"));
    }

    #[test]
    fn scale_guide_covers_every_band() {
        let guide = scale_guide();
        assert!(guide.contains("4.50 and above"));
        assert!(guide.contains("3.50 - 4.49"));
        assert!(guide.contains("0.00 - 0.99"));
        for (_, class) in Classification::BANDS {
            assert!(guide.contains(class.label()));
        }
    }

    #[test]
    fn cgpa_breakdown_numbers_semesters() {
        let semesters = [SemesterEntry::new(4.0, 20.0), SemesterEntry::new(3.0, 10.0)];
        let result = compute_cgpa(&semesters).unwrap();
        let table = cgpa_breakdown(&semesters, &result);
        assert!(table.contains("CGPA Breakdown"));
        assert!(table.contains("Semester 1"));
        assert!(table.contains("Semester 2"));
        assert!(table.contains("4.00"));
        assert!(table.contains("Second Class Lower (2:2)"));
        assert!(table.contains("CGPA: 3.67/5.00 (Second Class Upper (2:1))"));
    }

    #[test]
    fn semester_breakdown_lists_each_semester() {
        let record = |name: &str, grade, credits, semester: &str| CourseRecord {
            course_name:   name.to_string(),
            credits,
            letter_grade:  grade,
            semester_year: Some(semester.to_string()),
        };
        let summary = Transcript::new(vec![
            record("MTH 101", LetterGrade::A, 3.0, "Year 1"),
            record("PHY 101", LetterGrade::F, 3.0, "Year 1"),
            record("MTH 201", LetterGrade::B, 2.0, "Year 2"),
        ])
        .summarize(&EngineConfig::default())
        .unwrap();

        let table = semester_breakdown(&summary);
        assert!(table.contains("Transcript"));
        assert!(table.contains("Year 1"));
        assert!(table.contains("Year 2"));
        assert!(table.contains("2.50"));
        // (15 + 0 + 8) / 8
        assert!(table.contains("CGPA: 2.88/5.00 (Second Class Lower (2:2))"));
    }

    #[test]
    fn headline_names_the_band_and_totals() {
        let result = compute_gpa(&[
            CourseEntry::new(LetterGrade::B, 4.0),
            CourseEntry::new(LetterGrade::C, 2.0),
        ])
        .unwrap();
        let line = headline("GPA", &result);
        assert!(line.contains("GPA"));
        assert!(line.contains(": 3.67/5.00 over 6 units (22.0 quality points)"));
        assert!(line.contains("Second Class Upper (2:1) - Very good performance"));

        let fail = compute_gpa(&[CourseEntry::new(LetterGrade::F, 3.0)]).unwrap();
        assert!(headline("GPA", &fail).contains("Fail - Below minimum requirements"));
    }
}
