//! Routes normalized prerequisite text to one of three requirement shapes.

use std::sync::LazyLock;

use regex::Regex;

/// The shape of a prerequisite string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A year-standing requirement (`2A standing`, `year 3`, `level 4`).
    Level(u8),
    /// A program-enrollment requirement; the name is upper-cased.
    Program(String),
    /// Anything else: a logical expression over course codes.
    Expression,
}

static LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+[a-z]*\s+standing|\byear\s+\d+|\b\d+[a-z]*\s+year\b|\blevel\s+\d+")
        .expect("valid regex")
});

static PROGRAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:enroll?(?:ed)?\s+in|admission\s+to|faculty\s+of|students?\s+in)\b(?:\s+(.*))?",
    )
    .expect("valid regex")
});

/// Program name used when the clause names none.
const UNKNOWN_PROGRAM: &str = "UNKNOWN";

/// Classifies normalized prerequisite text.
///
/// Every string gets exactly one shape. When several match, year standing
/// wins over program enrollment, which wins over a general expression.
#[must_use]
pub fn classify(text: &str) -> Shape {
    if let Some(clause) = LEVEL.find(text) {
        let year = clause
            .as_str()
            .chars()
            .find_map(|c| c.to_digit(10))
            .and_then(|digit| u8::try_from(digit).ok())
            .unwrap_or(1);
        return Shape::Level(year);
    }

    if let Some(caps) = PROGRAM.captures(text) {
        let name = caps
            .get(1)
            .map(|m| {
                m.as_str()
                    .trim()
                    .trim_end_matches(['.', ',', ';'])
                    .trim_end()
            })
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PROGRAM);
        return Shape::Program(name.to_uppercase());
    }

    Shape::Expression
}
