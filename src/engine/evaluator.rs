//! Evaluates prerequisite trees against a student.

use tracing::trace;

use crate::domain::{Operator, PrerequisiteNode, Requirement, StudentContext};

/// The outcome of evaluating one (sub)tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether the (sub)tree is satisfied.
    pub satisfied: bool,
    /// Unmet atomic requirements; empty when satisfied.
    pub missing: Vec<Requirement>,
    /// Advisories from every leaf, satisfied or not.
    pub warnings: Vec<String>,
}

impl Evaluation {
    const fn met() -> Self {
        Self {
            satisfied: true,
            missing: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn unmet(requirement: Requirement) -> Self {
        Self {
            satisfied: false,
            missing: vec![requirement],
            warnings: Vec::new(),
        }
    }
}

/// Evaluates a tree against a student.
///
/// - `AND` is satisfied when every child is. When it fails, the unmet list
///   is the concatenation, in child order, of each unsatisfied child's own
///   missing list.
/// - `OR` is satisfied when any child is. When it fails, the unmet list is
///   the concatenation of every child's missing list.
/// - Missing lists are not deduplicated.
/// - Warnings from all children are concatenated regardless of outcome.
#[must_use]
pub fn evaluate(node: &PrerequisiteNode, student: &StudentContext) -> Evaluation {
    match node {
        PrerequisiteNode::Leaf(requirement) => check(requirement, student),
        PrerequisiteNode::Internal { operator, children } => {
            let results: Vec<Evaluation> = children
                .iter()
                .map(|child| evaluate(child, student))
                .collect();

            let satisfied = match operator {
                Operator::And => results.iter().all(|r| r.satisfied),
                Operator::Or => results.iter().any(|r| r.satisfied),
            };

            let mut missing = Vec::new();
            let mut warnings = Vec::new();
            for result in results {
                if !satisfied {
                    missing.extend(result.missing);
                }
                warnings.extend(result.warnings);
            }

            trace!(%operator, satisfied, "evaluated internal node");
            Evaluation {
                satisfied,
                missing,
                warnings,
            }
        }
    }
}

fn check(requirement: &Requirement, student: &StudentContext) -> Evaluation {
    match requirement {
        Requirement::Course(code) => {
            if student.has_completed(code) {
                Evaluation::met()
            } else {
                Evaluation::unmet(requirement.clone())
            }
        }
        Requirement::Level(year) => {
            if student.year() >= *year {
                Evaluation::met()
            } else {
                Evaluation::unmet(requirement.clone())
            }
        }
        Requirement::Program(name) => {
            let actual = student.program().trim().to_lowercase();
            if actual.is_empty() {
                let mut evaluation = Evaluation::unmet(requirement.clone());
                evaluation.warnings.push(format!(
                    "Student program unknown; cannot verify enrollment in {name}"
                ));
                return evaluation;
            }

            let required = name.to_lowercase();
            if actual.contains(&required) || required.contains(&actual) {
                Evaluation::met()
            } else {
                Evaluation::unmet(requirement.clone())
            }
        }
    }
}
