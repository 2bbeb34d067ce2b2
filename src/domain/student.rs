use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::CourseCode;

/// The student a prerequisite expression is evaluated against.
///
/// Supplied by the caller and only read during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentContext {
    completed: BTreeSet<CourseCode>,
    year: u8,
    program: String,
}

impl StudentContext {
    /// Creates a student context.
    ///
    /// Completed course codes are normalized with [`CourseCode::new`].
    /// Entries that contain no course code at all are skipped rather than
    /// rejected.
    pub fn new<I, S>(completed: I, year: u8, program: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let completed = completed
            .into_iter()
            .filter_map(|raw| match CourseCode::new(raw.as_ref()) {
                Ok(code) => Some(code),
                Err(e) => {
                    debug!("skipping completed course: {e}");
                    None
                }
            })
            .collect();

        Self {
            completed,
            year,
            program: program.into(),
        }
    }

    /// Returns `true` if the student has completed the given course.
    #[must_use]
    pub fn has_completed(&self, code: &CourseCode) -> bool {
        self.completed.contains(code)
    }

    /// Returns the completed courses in sorted order.
    pub fn completed(&self) -> impl Iterator<Item = &CourseCode> {
        self.completed.iter()
    }

    /// Returns the student's current year of study.
    #[must_use]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns the student's program name as supplied.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}
