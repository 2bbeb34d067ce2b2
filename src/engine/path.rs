//! Remediation suggestions for unmet prerequisites.

use tracing::debug;

use crate::{
    domain::{Config, CourseCode, CourseSummary, StudentContext},
    engine::validate,
};

/// Suggests the courses to take before `target`.
///
/// This is not a multi-hop search: it returns the unmet course requirements
/// of a direct validation, in evaluator order, with standing and program
/// requirements dropped. The prerequisites of the suggested courses are not
/// consulted, and `_available` (the catalog that such a search would walk) is
/// currently unused.
///
/// The student is evaluated as a first-year student with no known program;
/// neither affects which course requirements are reported.
#[must_use]
pub fn suggest_path<S: AsRef<str>>(
    target: &str,
    prerequisites: &str,
    completed: &[S],
    _available: &[CourseSummary],
    config: &Config,
) -> Vec<CourseCode> {
    let student = StudentContext::new(completed, 1, "");
    let validation = validate(prerequisites, &student, config);

    if validation.is_satisfied {
        debug!(course = target, "prerequisites already satisfied");
        return Vec::new();
    }

    let path: Vec<CourseCode> = validation.missing_courses().cloned().collect();
    debug!(course = target, suggested = path.len(), "suggested prerequisite path");
    path
}
