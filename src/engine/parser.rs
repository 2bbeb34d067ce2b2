//! Builds prerequisite trees from raw catalog text.
//!
//! General expressions are parsed with a deliberately flat model: every
//! course code in the text becomes a direct child of a single root, and one
//! operator is chosen for the whole string. `A and (B or C)` and
//! `A and B or C` therefore produce the same tree.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    domain::{Config, CourseCode, Operator, PrerequisiteNode},
    engine::{
        classifier::{Shape, classify},
        normalizer::{COURSE_CODE, normalize},
    },
};

/// The result of parsing a prerequisite string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPrerequisites {
    /// The expression tree, or `None` when there are no prerequisites.
    pub tree: Option<PrerequisiteNode>,
    /// Advisories about text that was recognized but not enforced, or not
    /// recognized at all.
    pub warnings: Vec<String>,
}

/// Any of these, anywhere in the text, make a multi-course expression an OR.
static OR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bor\b|\beither\b|/").expect("valid regex"));

static GRADE_MINIMUM: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)minimum\s+(?:grade\s+)?(?:of\s+)?(\d+)%").expect("valid regex"),
        Regex::new(r"(?i)(\d+)%\s+or\s+higher").expect("valid regex"),
        Regex::new(r"(?i:grade\s+of)\s+([A-F][+-]?)(?:[^A-Za-z]|$)").expect("valid regex"),
    ]
});

/// Parses raw prerequisite text into a tree.
///
/// Never fails: text that cannot be understood yields no tree (and therefore
/// a satisfied validation) plus a warning.
#[must_use]
pub fn parse(raw: &str, config: &Config) -> ParsedPrerequisites {
    let Some(normalized) = normalize(raw, config) else {
        return ParsedPrerequisites::default();
    };

    let text = normalized.text;
    let mut warnings = normalized.warnings;
    warnings.extend(grade_warnings(&text));

    let tree = match classify(&text) {
        Shape::Level(year) => Some(PrerequisiteNode::level(year)),
        Shape::Program(name) => Some(PrerequisiteNode::program(name)),
        Shape::Expression => parse_expression(&text, &mut warnings),
    };

    if let Some(tree) = &tree {
        debug!(%text, %tree, "parsed prerequisites");
    } else {
        debug!(%text, "no enforceable prerequisites");
    }

    ParsedPrerequisites { tree, warnings }
}

/// Extracts the course codes from normalized text, in order of appearance.
pub fn course_codes(text: &str) -> Vec<CourseCode> {
    COURSE_CODE
        .find_iter(text)
        .filter_map(|m| CourseCode::new(m.as_str()).ok())
        .collect()
}

fn parse_expression(text: &str, warnings: &mut Vec<String>) -> Option<PrerequisiteNode> {
    let mut codes = course_codes(text);

    match codes.len() {
        0 => {
            warnings.push(format!("Unrecognized prerequisite text: {text}"));
            None
        }
        1 => codes.pop().map(PrerequisiteNode::course),
        _ => {
            let operator = if OR_TOKEN.is_match(text) {
                Operator::Or
            } else {
                Operator::And
            };
            let children = codes.into_iter().map(PrerequisiteNode::course).collect();
            PrerequisiteNode::internal(operator, children)
        }
    }
}

/// Describes each minimum-grade clause in the text.
///
/// Grades are detected so the user can be told they are not enforced; they
/// are never attached to a course.
fn grade_warnings(text: &str) -> Vec<String> {
    let mut grades: Vec<String> = Vec::new();
    for (i, pattern) in GRADE_MINIMUM.iter().enumerate() {
        for caps in pattern.captures_iter(text) {
            let grade = if i < 2 {
                format!("{}%", &caps[1])
            } else {
                caps[1].to_string()
            };
            if !grades.contains(&grade) {
                grades.push(grade);
            }
        }
    }

    grades
        .into_iter()
        .map(|grade| format!("Minimum grade requirement not enforced: {grade}"))
        .collect()
}
