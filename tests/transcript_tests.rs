use std::{fs, path::PathBuf};

use thinkora::{
    Classification, CourseRecord, EngineConfig, GpaError, LetterGrade, Transcript,
    transcript::UNASSIGNED_SEMESTER,
};
use uuid::Uuid;

fn record(name: &str, grade: LetterGrade, credits: f64, semester: Option<&str>) -> CourseRecord {
    CourseRecord {
        course_name: name.to_string(),
        credits,
        letter_grade: grade,
        semester_year: semester.map(str::to_string),
    }
}

fn temp_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("thinkora-transcript-{}.json", Uuid::new_v4()));
    fs::write(&path, contents).expect("write transcript");
    path
}

#[test]
fn semesters_keep_first_seen_order() {
    let transcript = Transcript::new(vec![
        record("MTH 201", LetterGrade::B, 3.0, Some("2024 Second")),
        record("MTH 101", LetterGrade::A, 3.0, Some("2024 First")),
        record("PHY 201", LetterGrade::C, 2.0, Some("2024 Second")),
        record("GST 101", LetterGrade::A, 2.0, None),
    ]);

    assert_eq!(
        transcript.semesters(),
        vec!["2024 Second", "2024 First", UNASSIGNED_SEMESTER]
    );
}

#[test]
fn cumulative_matches_course_weighted_mean() {
    let transcript = Transcript::new(vec![
        record("MTH 101", LetterGrade::B, 4.0, Some("Year 1")),
        record("CHM 101", LetterGrade::C, 2.0, Some("Year 1")),
        record("MTH 201", LetterGrade::A, 3.0, Some("Year 2")),
    ]);

    let summary = transcript
        .summarize(&EngineConfig::default())
        .expect("summary");

    assert_eq!(summary.semesters.len(), 2);
    assert_eq!(summary.semesters[0].semester, "Year 1");
    assert_eq!(summary.semesters[0].result.value, 3.67);
    assert_eq!(summary.semesters[1].result.value, 5.0);

    // (16 + 6 + 15) / 9
    assert_eq!(summary.cumulative.value, 4.11);
    assert_eq!(summary.cumulative.total_credits, 9.0);
    assert_eq!(summary.cumulative.classification, Classification::SecondClassUpper);
}

#[test]
fn empty_transcript_is_rejected() {
    assert_eq!(
        Transcript::default().summarize(&EngineConfig::default()),
        Err(GpaError::EmptyInput)
    );
}

#[test]
fn bad_credits_surface_from_their_semester() {
    let transcript = Transcript::new(vec![
        record("MTH 101", LetterGrade::A, 3.0, Some("Year 1")),
        record("MTH 201", LetterGrade::A, 3.0, Some("Year 2")),
        record("MTH 202", LetterGrade::B, 0.0, Some("Year 2")),
    ]);

    assert_eq!(
        transcript.summarize(&EngineConfig::default()),
        Err(GpaError::InvalidCredit {
            index:   2,
            credits: 0.0,
        })
    );
}

#[test]
fn loads_records_from_json() {
    let path = temp_file(
        r#"[
            {"course_name": "MTH 101", "credits": 3, "letter_grade": "a", "semester_year": "2023/2024"},
            {"course_name": "GST 111", "credits": 2.0, "letter_grade": "E"}
        ]"#,
    );

    let transcript = Transcript::from_json_file(&path).expect("load transcript");
    assert_eq!(transcript.records.len(), 2);
    assert_eq!(transcript.records[0].letter_grade, LetterGrade::A);
    assert_eq!(transcript.records[1].semester(), UNASSIGNED_SEMESTER);

    let _ = fs::remove_file(path);
}

#[test]
fn unknown_grades_fail_to_load() {
    let path = temp_file(r#"[{"course_name": "X", "credits": 3, "letter_grade": "A+"}]"#);

    let err = Transcript::from_json_file(&path).expect_err("A+ is not on the scale");
    assert!(format!("{err:#}").contains("A+"));

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_reports_its_path() {
    let path = std::env::temp_dir().join(format!("thinkora-missing-{}.json", Uuid::new_v4()));
    let err = Transcript::from_json_file(&path).expect_err("file does not exist");
    assert!(err.to_string().contains(&path.display().to_string()));
}
