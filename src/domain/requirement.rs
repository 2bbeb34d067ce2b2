use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::CourseCode;

/// One atomic prerequisite: the content of a leaf in a
/// [`PrerequisiteNode`](crate::PrerequisiteNode) tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// The student must have completed this course.
    Course(CourseCode),

    /// The student must be in at least this year of study.
    Level(u8),

    /// The student must be enrolled in a program whose name matches this
    /// (upper-cased) name.
    Program(String),
}

impl Requirement {
    /// Returns `true` for course requirements.
    #[must_use]
    pub const fn is_course(&self) -> bool {
        matches!(self, Self::Course(_))
    }

    /// Returns the course code if this is a course requirement.
    #[must_use]
    pub const fn as_course(&self) -> Option<&CourseCode> {
        match self {
            Self::Course(code) => Some(code),
            Self::Level(_) | Self::Program(_) => None,
        }
    }
}

/// Renders the requirement the way it is reported when unmet.
///
/// ```
/// use prereqs::{CourseCode, Requirement};
///
/// let course = Requirement::Course(CourseCode::new("cs135").unwrap());
/// assert_eq!(course.to_string(), "CS 135");
/// assert_eq!(Requirement::Level(2).to_string(), "Year 2 standing");
/// assert_eq!(
///     Requirement::Program("COMPUTER ENGINEERING".to_string()).to_string(),
///     "Enrollment in COMPUTER ENGINEERING"
/// );
/// ```
impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Course(code) => write!(f, "{code}"),
            Self::Level(year) => write!(f, "Year {year} standing"),
            Self::Program(name) => write!(f, "Enrollment in {name}"),
        }
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_courses_are_courses() {
        let course = Requirement::Course(CourseCode::new("MATH 135").unwrap());
        assert!(course.is_course());
        assert_eq!(course.as_course().map(CourseCode::as_str), Some("MATH 135"));

        assert!(!Requirement::Level(3).is_course());
        assert!(Requirement::Program("MATH".to_string()).as_course().is_none());
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&Requirement::Level(3)).unwrap();
        assert_eq!(json, "\"Year 3 standing\"");
    }
}
