use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalized course code, such as `CS 135` or `ECE 240L`.
///
/// Every course code that takes part in a comparison passes through
/// [`CourseCode::new`], so a completed course and a prerequisite leaf
/// written in different styles (`cs-135`, `CS135`, `CS 135`) compare equal.
///
/// Normalization:
/// - uppercase the input
/// - treat every non-alphanumeric character as a separator
/// - split a glued leading token at its first letter/digit boundary
///   (`CS135` becomes `CS` and `135`)
/// - join the first two tokens with a single space
///
/// Normalization is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseCode(NonEmptyString);

impl CourseCode {
    /// Normalizes a raw course code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCourseCode`] if the input contains no ASCII
    /// alphanumeric characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use prereqs::CourseCode;
    ///
    /// assert_eq!(CourseCode::new("cs-135").unwrap().as_str(), "CS 135");
    /// assert_eq!(CourseCode::new("ECE240").unwrap().as_str(), "ECE 240");
    /// assert_eq!(CourseCode::new("MATH 119").unwrap().as_str(), "MATH 119");
    /// ```
    pub fn new(raw: &str) -> Result<Self, InvalidCourseCode> {
        let cleaned: String = raw
            .to_uppercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect();

        let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
        if let Some((department, number)) = tokens.first().copied().and_then(|first| {
            department_boundary(first).map(|index| first.split_at(index))
        }) {
            tokens.splice(0..1, [department, number]);
        }

        let normalized = match tokens.as_slice() {
            [] => return Err(InvalidCourseCode(raw.to_string())),
            [single] => (*single).to_string(),
            [department, number, ..] => format!("{department} {number}"),
        };

        NonEmptyString::new(normalized)
            .map(Self)
            .map_err(|_| InvalidCourseCode(raw.to_string()))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the department prefix (`CS` for `CS 135`).
    #[must_use]
    pub fn department(&self) -> &str {
        self.as_str()
            .split_once(' ')
            .map_or(self.as_str(), |(department, _)| department)
    }

    /// Returns the course level: the first digit of the code.
    ///
    /// `CS 135` is level 1, `CS 444` is level 4. Returns `None` if the code
    /// contains no digits.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.as_str()
            .chars()
            .find_map(|c| c.to_digit(10))
            .and_then(|digit| u8::try_from(digit).ok())
    }
}

/// Byte index where a glued `LETTERS DIGITS` token should be split.
fn department_boundary(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    (1..bytes.len()).find(|&i| bytes[i - 1].is_ascii_alphabetic() && bytes[i].is_ascii_digit())
}

impl TryFrom<&str> for CourseCode {
    type Error = InvalidCourseCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = InvalidCourseCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl FromStr for CourseCode {
    type Err = InvalidCourseCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for CourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CourseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CourseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// Error returned when a string cannot be read as a course code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid course code '{0}': must contain at least one letter or digit")]
pub struct InvalidCourseCode(String);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("CS 135", "CS 135"; "already normalized")]
    #[test_case("cs 135", "CS 135"; "lowercase")]
    #[test_case("CS135", "CS 135"; "glued")]
    #[test_case("cs-135", "CS 135"; "dash separated")]
    #[test_case("  MATH   119 ", "MATH 119"; "extra whitespace")]
    #[test_case("ECE240L", "ECE 240L"; "suffix letter")]
    #[test_case("CS 135 (Fall 2023)", "CS 135"; "trailing noise dropped")]
    #[test_case("CS135 lab", "CS 135"; "glued with trailing word")]
    #[test_case("STAT", "STAT"; "department only")]
    fn normalizes(raw: &str, expected: &str) {
        assert_eq!(CourseCode::new(raw).unwrap().as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    #[test_case("--/--"; "punctuation")]
    fn rejects_codes_without_alphanumerics(raw: &str) {
        assert_eq!(
            CourseCode::new(raw),
            Err(InvalidCourseCode(raw.to_string()))
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["CS 135", "cs135", "ECE-240L", "MATH 119 extra"] {
            let once = CourseCode::new(raw).unwrap();
            let twice = CourseCode::new(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn level_is_first_digit() {
        assert_eq!(CourseCode::new("CS 135").unwrap().level(), Some(1));
        assert_eq!(CourseCode::new("CS 444").unwrap().level(), Some(4));
        assert_eq!(CourseCode::new("ECE 050").unwrap().level(), Some(0));
        assert_eq!(CourseCode::new("STAT").unwrap().level(), None);
    }

    #[test]
    fn department_prefix() {
        assert_eq!(CourseCode::new("math119").unwrap().department(), "MATH");
        assert_eq!(CourseCode::new("STAT").unwrap().department(), "STAT");
    }

    #[test]
    fn serde_uses_normalized_string() {
        let code: CourseCode = serde_json::from_str("\"cs135\"").unwrap();
        assert_eq!(code.as_str(), "CS 135");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CS 135\"");
    }

    #[test]
    fn error_display() {
        let error = CourseCode::new("--").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid course code '--': must contain at least one letter or digit"
        );
    }
}
