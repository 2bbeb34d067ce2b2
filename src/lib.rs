//! Course Prerequisite Expressions
//!
//! Turns free-text catalog prerequisites (`"CS 136 and (STAT 230 or STAT
//! 240)"`, `"2A standing"`, `"Enrolled in Computer Engineering"`) into a
//! logical expression, checks whether a student satisfies it, estimates
//! course difficulty, and lists the unmet courses.
//!
//! ```
//! use prereqs::validate_prerequisites;
//!
//! let result = validate_prerequisites("CS 135 or CS 145", &["CS 145"], 2, "Computer Science");
//! assert!(result.is_satisfied);
//! ```

pub mod domain;
pub use domain::{
    Config, ConfigError, CourseCode, CourseSummary, InvalidCourseCode, Operator,
    PrerequisiteNode, Requirement, StudentContext, ValidationResult,
};

/// The parsing, evaluation and scoring pipeline.
pub mod engine;

mod validator;
pub use validator::Validator;

/// Checks whether a student satisfies a course's prerequisites.
///
/// Uses the default [`Config`]. See [`Validator::validate`].
#[must_use]
pub fn validate_prerequisites<S: AsRef<str>>(
    course_prereqs: &str,
    completed_courses: &[S],
    student_year: u8,
    student_program: &str,
) -> ValidationResult {
    let student = StudentContext::new(completed_courses, student_year, student_program);
    Validator::default().validate(course_prereqs, &student)
}

/// Estimates a course's difficulty in `[0, 1]` from its level and
/// prerequisites.
///
/// Uses the default [`Config`]. See [`Validator::difficulty_score`].
///
/// ```
/// use prereqs::get_course_difficulty_score;
///
/// assert_eq!(get_course_difficulty_score("CS 135", "None"), 0.1);
///
/// // second year (0.25) plus three prerequisite courses (0.3)
/// let score = get_course_difficulty_score("CS 240", "CS 136 and (STAT 230 or STAT 240)");
/// assert!((score - 0.55).abs() < 1e-9);
/// ```
#[must_use]
pub fn get_course_difficulty_score(course_code: &str, prerequisites: &str) -> f64 {
    Validator::default().difficulty_score(course_code, prerequisites)
}

/// Lists the courses a student still needs before taking `target_course`.
///
/// Uses the default [`Config`]. See [`Validator::suggest_path`].
///
/// ```
/// use prereqs::suggest_prerequisite_path;
///
/// let path = suggest_prerequisite_path(
///     "CS 240",
///     "CS 136 and MATH 136 and STAT 230",
///     &["MATH 136"],
///     &[],
/// );
/// let path: Vec<String> = path.iter().map(ToString::to_string).collect();
/// assert_eq!(path, ["CS 136", "STAT 230"]);
/// ```
#[must_use]
pub fn suggest_prerequisite_path<S: AsRef<str>>(
    target_course: &str,
    target_prereqs: &str,
    completed_courses: &[S],
    available_courses: &[CourseSummary],
) -> Vec<CourseCode> {
    Validator::default().suggest_path(
        target_course,
        target_prereqs,
        completed_courses,
        available_courses,
    )
}
