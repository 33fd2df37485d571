use thinkora::{
    Classification, CourseEntry, GpaError, LetterGrade, SemesterEntry, compute_cgpa, compute_gpa,
};

fn course(grade: LetterGrade, credits: f64) -> CourseEntry {
    CourseEntry::new(grade, credits)
}

#[test]
fn single_course_scores_its_grade_points() {
    for credits in [1.0, 2.5, 3.0, 10.0] {
        let a = compute_gpa(&[course(LetterGrade::A, credits)]).expect("gpa");
        assert_eq!(a.value, 5.00);
        assert_eq!(a.classification, Classification::FirstClass);

        let f = compute_gpa(&[course(LetterGrade::F, credits)]).expect("gpa");
        assert_eq!(f.value, 0.00);
        assert_eq!(f.classification, Classification::Fail);
    }
}

#[test]
fn equal_weights_of_best_and_worst_average_out() {
    let result =
        compute_gpa(&[course(LetterGrade::A, 3.0), course(LetterGrade::F, 3.0)]).expect("gpa");
    assert_eq!(result.value, 2.50);
    assert_eq!(result.classification, Classification::SecondClassLower);
}

#[test]
fn b4_and_c2_gives_three_sixty_seven() {
    let result =
        compute_gpa(&[course(LetterGrade::B, 4.0), course(LetterGrade::C, 2.0)]).expect("gpa");
    assert_eq!(result.total_quality_points, 22.0);
    assert_eq!(result.total_credits, 6.0);
    assert_eq!(result.value, 3.67);
    assert_eq!(result.classification, Classification::SecondClassUpper);
}

#[test]
fn every_valid_mix_stays_on_the_scale() {
    let mut courses = Vec::new();
    for (i, grade) in LetterGrade::ALL.iter().cycle().take(30).enumerate() {
        courses.push(course(*grade, (i % 10 + 1) as f64));
        let result = compute_gpa(&courses).expect("gpa");
        assert!((0.0..=5.0).contains(&result.value), "{} out of range", result.value);
    }
}

#[test]
fn empty_and_zero_credit_inputs_are_rejected() {
    assert_eq!(compute_gpa(&[]), Err(GpaError::EmptyInput));
    assert_eq!(compute_cgpa(&[]), Err(GpaError::EmptyInput));
    assert_eq!(
        compute_gpa(&[course(LetterGrade::B, 0.0)]),
        Err(GpaError::InvalidCredit {
            index:   1,
            credits: 0.0,
        })
    );
    assert!(matches!(
        compute_gpa(&[course(LetterGrade::B, 3.0), course(LetterGrade::C, -2.0)]),
        Err(GpaError::InvalidCredit { index: 2, .. })
    ));
}

#[test]
fn fractional_credits_are_accepted() {
    let result =
        compute_gpa(&[course(LetterGrade::A, 1.5), course(LetterGrade::C, 0.5)]).expect("gpa");
    assert_eq!(result.total_credits, 2.0);
    assert_eq!(result.value, 4.5);
}

#[test]
fn calculation_is_idempotent() {
    let courses = [
        course(LetterGrade::A, 3.0),
        course(LetterGrade::D, 2.0),
        course(LetterGrade::E, 4.0),
    ];
    assert_eq!(compute_gpa(&courses), compute_gpa(&courses));
}

#[test]
fn cgpa_weights_semesters_by_credits() {
    let result = compute_cgpa(&[SemesterEntry::new(4.0, 20.0), SemesterEntry::new(3.0, 10.0)])
        .expect("cgpa");
    assert_eq!(result.total_credits, 30.0);
    assert_eq!(result.total_quality_points, 110.0);
    assert_eq!(result.value, 3.67);
    assert_eq!(result.entry_count, 2);
}

#[test]
fn semester_totals_may_exceed_the_course_cap() {
    let result = compute_cgpa(&[SemesterEntry::new(4.5, 24.0)]).expect("cgpa");
    assert_eq!(result.value, 4.5);
    assert_eq!(result.classification, Classification::FirstClass);
}

#[test]
fn classification_boundary_is_inclusive() {
    assert_eq!(Classification::of(4.50).label(), "First Class");
    assert_eq!(Classification::of(4.4999).label(), "Second Class Upper (2:1)");
}

#[test]
fn overflowing_semester_totals_are_rejected() {
    let err = compute_cgpa(&[SemesterEntry::new(4.0, 1e308), SemesterEntry::new(3.0, 1e308)])
        .expect_err("credit total overflows");
    assert!(matches!(err, GpaError::TotalOverflow { .. }));
}
