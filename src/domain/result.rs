use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{CourseCode, Requirement};

/// The outcome of validating a student against a prerequisite expression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    /// Whether the student meets the prerequisites.
    pub is_satisfied: bool,

    /// The unmet atomic requirements, in evaluation order.
    ///
    /// Not deduplicated: a course named in two unmet branches appears twice.
    #[serde(rename = "missing_prereqs")]
    pub missing: Vec<Requirement>,

    /// Advisory messages, such as grade clauses that are not enforced.
    pub warnings: Vec<String>,

    /// Minimum grades keyed by course.
    ///
    /// Grade clauses are detected (and reported as warnings) but never
    /// parsed, so this is always empty.
    pub grade_requirements: BTreeMap<CourseCode, String>,
}

impl ValidationResult {
    /// A satisfied result with nothing missing.
    #[must_use]
    pub fn satisfied() -> Self {
        Self {
            is_satisfied: true,
            ..Self::default()
        }
    }

    /// Returns the unmet requirements as human-readable strings.
    ///
    /// Courses render as their code, standing as `Year N standing`, and
    /// programs as `Enrollment in NAME`.
    #[must_use]
    pub fn missing_prereqs(&self) -> Vec<String> {
        self.missing.iter().map(ToString::to_string).collect()
    }

    /// Returns the unmet course requirements, dropping standing and program
    /// requirements.
    pub fn missing_courses(&self) -> impl Iterator<Item = &CourseCode> {
        self.missing.iter().filter_map(Requirement::as_course)
    }
}
