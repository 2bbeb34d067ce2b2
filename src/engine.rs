//! The prerequisite pipeline.
//!
//! Raw text flows through the [`normalizer`], the [`classifier`] and the
//! [`parser`] into a tree, which the [`evaluator`] checks against a student.
//! The [`difficulty`] scorer and the [`path`] suggester build on the same
//! parse and validation.
//!
//! Every stage is a pure function of its arguments.

pub mod classifier;
pub mod difficulty;
pub mod evaluator;
pub mod normalizer;
pub mod parser;
pub mod path;

use crate::domain::{Config, StudentContext, ValidationResult};

/// Parses `prerequisites` and evaluates the result against `student`.
#[must_use]
pub fn validate(prerequisites: &str, student: &StudentContext, config: &Config) -> ValidationResult {
    let parsed = parser::parse(prerequisites, config);

    let Some(tree) = parsed.tree else {
        return ValidationResult {
            warnings: parsed.warnings,
            ..ValidationResult::satisfied()
        };
    };

    let evaluation = evaluator::evaluate(&tree, student);
    let mut warnings = parsed.warnings;
    warnings.extend(evaluation.warnings);

    ValidationResult {
        is_satisfied: evaluation.satisfied,
        missing: evaluation.missing,
        warnings,
        grade_requirements: std::collections::BTreeMap::new(),
    }
}
