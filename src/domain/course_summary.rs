use serde::{Deserialize, Serialize};

use crate::domain::CourseCode;

/// A catalog entry as supplied by the catalog layer.
///
/// Only the fields prerequisite handling needs; everything else a catalog
/// record carries is ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// The course's code.
    pub code: CourseCode,

    /// The course title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The raw prerequisite text exactly as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
}

impl CourseSummary {
    /// Creates a summary with no title.
    #[must_use]
    pub fn new(code: CourseCode, prerequisites: Option<String>) -> Self {
        Self {
            code,
            title: None,
            prerequisites,
        }
    }

    /// Returns the prerequisite text, or an empty string if there is none.
    #[must_use]
    pub fn prerequisites(&self) -> &str {
        self.prerequisites.as_deref().unwrap_or_default()
    }
}
