use rayon::prelude::*;
use tracing::instrument;

use crate::{
    domain::{Config, CourseCode, CourseSummary, StudentContext, ValidationResult},
    engine::{self, parser::ParsedPrerequisites},
};

/// Validates, scores and explains course prerequisites.
///
/// A `Validator` holds only its (immutable) configuration, so one instance
/// can be shared freely between threads and calls.
///
/// # Examples
///
/// ```
/// use prereqs::{StudentContext, Validator};
///
/// let validator = Validator::default();
/// let student = StudentContext::new(["CS 135"], 2, "Computer Science");
///
/// let result = validator.validate("CS 135 and MATH 135", &student);
/// assert!(!result.is_satisfied);
/// assert_eq!(result.missing_prereqs(), ["MATH 135"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    config: Config,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the validator's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parses prerequisite text into a tree without evaluating it.
    #[must_use]
    pub fn parse(&self, prerequisites: &str) -> ParsedPrerequisites {
        engine::parser::parse(prerequisites, &self.config)
    }

    /// Checks whether `student` satisfies `prerequisites`.
    #[must_use]
    #[instrument(level = "debug", skip(self, student))]
    pub fn validate(&self, prerequisites: &str, student: &StudentContext) -> ValidationResult {
        engine::validate(prerequisites, student, &self.config)
    }

    /// Estimates the difficulty of a course in `[0, 1]`.
    ///
    /// See [`engine::difficulty::difficulty_score`] for the heuristic.
    #[must_use]
    #[instrument(level = "debug", skip(self))]
    pub fn difficulty_score(&self, course_code: &str, prerequisites: &str) -> f64 {
        engine::difficulty::difficulty_score(course_code, prerequisites, &self.config)
    }

    /// Lists the courses still needed before `target` can be taken.
    ///
    /// See [`engine::path::suggest_path`] for what this does and does not do.
    #[must_use]
    #[instrument(level = "debug", skip(self, completed, available))]
    pub fn suggest_path<S: AsRef<str>>(
        &self,
        target: &str,
        prerequisites: &str,
        completed: &[S],
        available: &[CourseSummary],
    ) -> Vec<CourseCode> {
        engine::path::suggest_path(target, prerequisites, completed, available, &self.config)
    }

    /// Validates every course in a catalog against one student.
    ///
    /// Courses are validated in parallel; results are returned in catalog
    /// order.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(courses = catalog.len()))]
    pub fn check_catalog<'a>(
        &self,
        catalog: &'a [CourseSummary],
        student: &StudentContext,
    ) -> Vec<(&'a CourseSummary, ValidationResult)> {
        catalog
            .par_iter()
            .map(|course| (course, self.validate(course.prerequisites(), student)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    fn student(completed: &[&str], year: u8, program: &str) -> StudentContext {
        StudentContext::new(completed, year, program)
    }

    #[test]
    fn no_prerequisites_are_satisfied() {
        let validator = Validator::default();
        for prerequisites in ["", "none", "None", "N/A", "n/a"] {
            let result = validator.validate(prerequisites, &student(&[], 1, "Any"));
            assert!(result.is_satisfied);
            assert!(result.missing_prereqs().is_empty());
        }
    }

    #[test]
    fn single_course() {
        let validator = Validator::default();

        let result = validator.validate("CS 135", &student(&["CS 135"], 2, "Computer Science"));
        assert!(result.is_satisfied);

        let result = validator.validate("CS 135", &student(&["CS 136"], 2, "Computer Science"));
        assert!(!result.is_satisfied);
        assert_eq!(result.missing_prereqs(), ["CS 135"]);
    }

    #[test]
    fn and_or_semantics() {
        let validator = Validator::default();

        let result = validator.validate("CS 135 and MATH 135", &student(&["CS 135"], 2, "X"));
        assert!(!result.is_satisfied);
        assert!(result.missing_prereqs().contains(&"MATH 135".to_string()));

        let result = validator.validate("CS 135 or CS 145", &student(&["CS 145"], 2, "X"));
        assert!(result.is_satisfied);
    }

    #[test]
    fn level_requirements() {
        let validator = Validator::default();
        assert!(validator.validate("2A standing", &student(&[], 3, "X")).is_satisfied);

        let result = validator.validate("3A standing", &student(&[], 1, "X"));
        assert!(!result.is_satisfied);
        assert_eq!(result.missing_prereqs(), ["Year 3 standing"]);
    }

    #[test]
    fn program_requirements() {
        let validator = Validator::default();
        let prerequisites = "Enrolled in Computer Engineering";

        assert!(
            validator
                .validate(prerequisites, &student(&[], 2, "Computer Engineering"))
                .is_satisfied
        );

        let result = validator.validate(prerequisites, &student(&[], 2, "Biology"));
        assert_eq!(
            result.missing_prereqs(),
            ["Enrollment in COMPUTER ENGINEERING"]
        );
    }

    #[test]
    fn completed_codes_are_normalized_like_leaves() {
        let validator = Validator::default();
        let result = validator.validate("Prereq: CS135 and MATH 135", &student(&["cs-135", "math135"], 1, "X"));
        assert!(result.is_satisfied);
    }

    #[test]
    fn level_phrase_after_course_is_not_a_course() {
        let result = Validator::default().validate(
            "CS 135 and 200-level MATH",
            &student(&["CS 135"], 3, "Computer Science"),
        );
        assert!(result.is_satisfied);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn warnings_and_grades() {
        let validator = Validator::default();
        let result = validator.validate(
            "CS 136 with a minimum grade of 60%. Course ID: 004380",
            &student(&["CS 136"], 2, "X"),
        );

        assert!(result.is_satisfied);
        assert!(result.grade_requirements.is_empty());
        assert_eq!(
            result.warnings,
            [
                "Prerequisites contain catalog metadata",
                "Minimum grade requirement not enforced: 60%",
            ]
        );
    }

    #[test]
    fn unrecognized_text_grants_access() {
        let result = Validator::default().validate("Consent of instructor", &student(&[], 1, "X"));
        assert!(result.is_satisfied);
        assert!(result.missing.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn nested_expression_uses_flat_or() {
        let validator = Validator::default();
        let prerequisites = "CS 240 and (STAT 230 or STAT 240)";

        assert!(validator.validate(prerequisites, &student(&["CS 240", "STAT 230"], 3, "X")).is_satisfied);
        // the flat model reads the whole expression as an OR
        assert!(validator.validate(prerequisites, &student(&["CS 240"], 3, "X")).is_satisfied);
        assert!(!validator.validate(prerequisites, &student(&["CS 135"], 3, "X")).is_satisfied);
    }

    #[test]
    fn suggestion_matches_validation() {
        let validator = Validator::default();
        let prerequisites = "CS 136 and MATH 136 and STAT 230";
        let completed = ["MATH 136"];

        let validation = validator.validate(prerequisites, &student(&completed, 1, ""));
        let suggested = validator.suggest_path("CS 240", prerequisites, &completed, &[]);

        let expected: Vec<&CourseCode> = validation.missing_courses().collect();
        assert_eq!(suggested.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn check_catalog_preserves_order() {
        let catalog: Vec<CourseSummary> = [
            ("CS 136", Some("CS 135")),
            ("CS 240", Some("CS 136 and (STAT 230 or STAT 240)")),
            ("MATH 135", None),
            ("CS 350", Some("3A standing")),
        ]
        .into_iter()
        .map(|(code, prerequisites)| {
            CourseSummary::new(CourseCode::new(code).unwrap(), prerequisites.map(String::from))
        })
        .collect();

        let results = Validator::default()
            .check_catalog(&catalog, &student(&["CS 135"], 2, "Computer Science"));

        let outcome: Vec<(&str, bool)> = results
            .iter()
            .map(|(course, result)| (course.code.as_str(), result.is_satisfied))
            .collect();
        assert_eq!(
            outcome,
            [
                ("CS 136", true),
                ("CS 240", false),
                ("MATH 135", true),
                ("CS 350", false),
            ]
        );
    }

    #[test]
    fn shared_between_threads() {
        let validator = Arc::new(Validator::default());
        let handles: Vec<_> = (1..=4u8)
            .map(|year| {
                let validator = Arc::clone(&validator);
                thread::spawn(move || {
                    validator
                        .validate("3A standing", &StudentContext::new([""; 0], year, "X"))
                        .is_satisfied
                })
            })
            .collect();

        let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outcomes, [false, false, true, true]);
    }
}
