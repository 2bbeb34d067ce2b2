//! Canonicalizes raw catalog prerequisite text.
//!
//! Catalog text arrives exactly as published: prefixed with `Prereq:`,
//! sprinkled with scraping metadata, with course codes glued or split
//! arbitrarily. The normalizer removes the noise it recognizes and rewrites
//! every course code as `DEPT NUM`, so the later stages can work with a
//! single pattern.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::domain::Config;

/// Normalized prerequisite text plus anything worth telling the user about
/// what was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// The canonical text. Never empty.
    pub text: String,
    /// Advisories produced while normalizing.
    pub warnings: Vec<String>,
}

/// Literals that mean "no prerequisites" (compared case-insensitively).
const NO_PREREQUISITES: [&str; 4] = ["", "none", "n/a", "null"];

/// Course-code pattern in normalized text: `LETTERS(2-5) DIGITS(3) LETTER?`.
pub(crate) static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,5})\s*(\d{3}[A-Z]?)\b").expect("valid regex"));

static CATALOG_METADATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)course\s+id\s*:?\s*\d+|\[offered:[^\]]*\]|\(credit course for designated students only\)",
    )
    .expect("valid regex")
});

static ANTIREQUISITE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\bantireq(?:uisite)?s?\b.*$").expect("valid regex"));

static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*prereq(?:uisite)?s?\b\s*:?\s*").expect("valid regex")
});

/// A course code followed by bare numbers that share its department, as in
/// `ECE 106, 140 or 150`.
///
/// The last number must be followed by a separator or the end of the text, so
/// `200-level` is never read as a course. The separator is captured and put
/// back by the replacement.
static CONTINUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([A-Z]{2,5}) (\d{3}[A-Z]?)((?:\s*(?:,|/|(?i:\bor\b|\band\b))\s*\d{3}[A-Z]?)+)([\s,;/).]|$)",
    )
    .expect("valid regex")
});

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[A-Z]?\b").expect("valid regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes raw prerequisite text.
///
/// Returns `None` when the text means "no prerequisites": empty, or one of
/// `none`, `n/a`, `null` in any case (after prefixes and noise have been
/// removed, so `Prerequisites: None.` also counts).
///
/// Applying `normalize` to its own output returns the same text.
#[must_use]
pub fn normalize(raw: &str, config: &Config) -> Option<NormalizedText> {
    let mut warnings = Vec::new();

    if raw.chars().count() > config.max_prerequisite_length {
        warnings.push("Prerequisites text is very long".to_string());
    }

    let mut text = raw.to_string();

    if CATALOG_METADATA.is_match(&text) {
        text = CATALOG_METADATA.replace_all(&text, " ").into_owned();
        warnings.push("Prerequisites contain catalog metadata".to_string());
    }

    if let Some(clause) = ANTIREQUISITE_CLAUSE.find(&text) {
        let clause_text = WHITESPACE.replace_all(clause.as_str().trim(), " ");
        warnings.push(format!("Antirequisite clause ignored: {clause_text}"));
        text.truncate(clause.start());
    }

    let text = PREFIX.replace(&text, "");
    let text = COURSE_CODE.replace_all(&text, "${1} ${2}");
    let text = expand_continuations(&text);
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text
        .trim()
        .trim_end_matches(['.', ',', ';'])
        .trim_end()
        .to_string();

    if NO_PREREQUISITES
        .iter()
        .any(|literal| text.eq_ignore_ascii_case(literal))
    {
        trace!("no prerequisites in {raw:?}");
        return None;
    }

    trace!(normalized = %text, "normalized prerequisites");
    Some(NormalizedText { text, warnings })
}

/// Rewrites `ECE 106, 140` as `ECE 106, ECE 140`.
fn expand_continuations(text: &str) -> String {
    CONTINUATION
        .replace_all(text, |caps: &Captures| {
            let department = &caps[1];
            let tail = BARE_NUMBER.replace_all(&caps[3], |number: &Captures| {
                format!("{department} {}", &number[0])
            });
            format!("{department} {}{tail}{}", &caps[2], &caps[4])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn normalized(raw: &str) -> Option<String> {
        normalize(raw, &Config::default()).map(|n| n.text)
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("none"; "none lowercase")]
    #[test_case("None"; "none titlecase")]
    #[test_case("NONE"; "none uppercase")]
    #[test_case("N/A"; "n/a uppercase")]
    #[test_case("n/a"; "n/a lowercase")]
    #[test_case("null"; "null")]
    #[test_case("Prerequisites: None."; "prefixed none")]
    #[test_case("Course ID: 004387"; "metadata only")]
    fn means_no_prerequisites(raw: &str) {
        assert_eq!(normalized(raw), None);
    }

    #[test_case("Prereq: CS 135", "CS 135"; "prereq prefix")]
    #[test_case("Prerequisite: CS 135", "CS 135"; "prerequisite prefix")]
    #[test_case("Prerequisites: CS 135", "CS 135"; "plural prefix")]
    #[test_case("prereq CS 135", "CS 135"; "prefix without colon")]
    #[test_case("ECE240", "ECE 240"; "glued code")]
    #[test_case("MATH  135   and\tMATH136", "MATH 135 and MATH 136"; "whitespace")]
    #[test_case("CS 240 and (STAT 230 or STAT 240).", "CS 240 and (STAT 230 or STAT 240)"; "trailing period")]
    #[test_case("Level at least 2A", "Level at least 2A"; "no codes")]
    fn canonicalizes(raw: &str, expected: &str) {
        assert_eq!(normalized(raw).as_deref(), Some(expected));
    }

    #[test_case("ECE106, 140, MATH119", "ECE 106, ECE 140, MATH 119"; "comma list")]
    #[test_case("STAT 230 or 240", "STAT 230 or STAT 240"; "or list")]
    #[test_case("CS 135/145", "CS 135/CS 145"; "slash list")]
    #[test_case("CS 135, 136 and MATH 135", "CS 135, CS 136 and MATH 135"; "stops at next code")]
    #[test_case("STAT 230 OR 240", "STAT 230 OR STAT 240"; "uppercase or")]
    #[test_case("CS 135, 136.", "CS 135, CS 136"; "trailing period")]
    #[test_case("CS 135 and 200-level MATH", "CS 135 and 200-level MATH"; "level phrase is not a course")]
    #[test_case("ECE 106, 140, 150-level", "ECE 106, ECE 140, 150-level"; "stops before level phrase")]
    fn expands_bare_numbers(raw: &str, expected: &str) {
        assert_eq!(normalized(raw).as_deref(), Some(expected));
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "Prereq: ECE106, 140, MATH119",
            "CS 240 and (STAT 230 or STAT 240)",
            "2A standing",
            "Enrolled in Computer Engineering.",
        ] {
            let once = normalized(raw).unwrap();
            let twice = normalized(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn strips_metadata_with_warning() {
        let result = normalize(
            "Prereq: CS 136. Course ID: 012345 [Offered: F,W]",
            &Config::default(),
        )
        .unwrap();

        assert_eq!(result.text, "CS 136");
        assert_eq!(result.warnings, ["Prerequisites contain catalog metadata"]);
    }

    #[test]
    fn drops_antirequisite_clause() {
        let result =
            normalize("CS 136; Antireq: CS 146, CS 138", &Config::default()).unwrap();

        assert_eq!(result.text, "CS 136");
        assert_eq!(
            result.warnings,
            ["Antirequisite clause ignored: Antireq: CS 146, CS 138"]
        );
    }

    #[test]
    fn warns_about_long_text() {
        let config = Config {
            max_prerequisite_length: 10,
            ..Config::default()
        };
        let result = normalize("CS 135 and MATH 135", &config).unwrap();
        assert_eq!(result.warnings, ["Prerequisites text is very long"]);
    }
}
