//! A heuristic difficulty estimate.
//!
//! The score grows with the course level and with the number of prerequisite
//! courses. It is monotone in both, bounded to `[0, 1]`, and not calibrated
//! against any real outcome data.

use crate::{
    domain::{Config, CourseCode},
    engine::parser::parse,
};

/// Scores a course's difficulty from its code and prerequisite text.
///
/// - No prerequisites (or none that can be recognized): the configured
///   baseline (`0.1` by default).
/// - Otherwise `min(level_component + prerequisite_component, 1.0)`, where
///   the level component is `(level - 1) / 4` clamped to `[0, 0.75]` and the
///   prerequisite component is `course_count / 10` capped at `0.3`.
///
/// The level is the first digit of the course code, `1` if there is none.
/// Only course leaves count towards `course_count`.
#[must_use]
pub fn difficulty_score(course_code: &str, prerequisites: &str, config: &Config) -> f64 {
    let Some(tree) = parse(prerequisites, config).tree else {
        return config.baseline_difficulty;
    };

    let level = CourseCode::new(course_code)
        .ok()
        .and_then(|code| code.level())
        .unwrap_or(1);

    let level_component = if config.level_divisor > 0.0 {
        ((f64::from(level) - 1.0) / config.level_divisor).clamp(0.0, config.max_level_component)
    } else {
        0.0
    };

    let course_count = u32::try_from(tree.course_count()).unwrap_or(u32::MAX);
    let prerequisite_component = (f64::from(course_count) * config.prerequisite_weight)
        .min(config.max_prerequisite_component);

    (level_component + prerequisite_component).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn score(course: &str, prerequisites: &str) -> f64 {
        difficulty_score(course, prerequisites, &Config::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test_case("CS 135", "None", 0.1; "no prerequisites")]
    #[test_case("CS 135", "", 0.1; "empty prerequisites")]
    #[test_case("CS 135", "Consent of instructor", 0.1; "unrecognized prerequisites")]
    #[test_case("CS 136", "CS 135", 0.1; "first year one prerequisite")]
    #[test_case("CS 240", "CS 136 and (STAT 230 or STAT 240)", 0.55; "three prerequisites")]
    #[test_case("CS 341", "CS 240, CS 245", 0.7; "third year")]
    #[test_case("CS 444", "CS 350 and CS 341", 0.95; "fourth year")]
    #[test_case("CS 444", "2A standing", 0.75; "standing counts no courses")]
    #[test_case("CS 999", "CS 1, CS 2", 0.1; "numbers too short to be codes")]
    fn scores(course: &str, prerequisites: &str, expected: f64) {
        assert_close(score(course, prerequisites), expected);
    }

    #[test]
    fn prerequisite_component_is_capped() {
        let many = "CS 101, CS 102, CS 103, CS 104, CS 105";
        assert_close(score("CS 135", many), 0.3);
    }

    #[test]
    fn total_is_capped_at_one() {
        let many = "CS 101, CS 102, CS 103, CS 104, CS 105";
        assert_close(score("CS 999", many), 1.0);
    }

    #[test]
    fn higher_levels_never_score_lower() {
        for prerequisites in ["CS 135", "CS 240 and CS 245", "2A standing", "none"] {
            assert!(score("CS 444", prerequisites) >= score("CS 135", prerequisites));
            assert!(score("CS 341", prerequisites) >= score("CS 240", prerequisites));
        }
    }

    #[test]
    fn codes_without_digits_use_level_one() {
        assert_close(score("SPCOM", "CS 135"), 0.1);
    }

    #[test]
    fn weights_come_from_config() {
        let config = Config {
            prerequisite_weight: 0.05,
            ..Config::default()
        };
        assert_close(difficulty_score("CS 240", "CS 136 and CS 245", &config), 0.35);
    }
}
