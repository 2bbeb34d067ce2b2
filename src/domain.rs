//! Domain models for prerequisite validation.
//!
//! This module contains the value types shared by every stage of the
//! pipeline: normalized course codes, atomic requirements, the expression
//! tree, the student being evaluated, and the validation result.

/// Normalized course codes.
pub mod course_code;
pub use course_code::{CourseCode, InvalidCourseCode};

mod config;
pub use config::{Config, ConfigError};

mod course_summary;
pub use course_summary::CourseSummary;

/// Atomic requirements (the leaves of a prerequisite tree).
pub mod requirement;
pub use requirement::Requirement;

mod result;
pub use result::ValidationResult;

mod student;
pub use student::StudentContext;

/// Prerequisite expression trees.
pub mod tree;
pub use tree::{Operator, PrerequisiteNode};
