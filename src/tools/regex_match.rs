//! Regex full-match tool
//!
//! Anchors the user's pattern at both ends and tests it against the whole
//! string; a pattern that fails to compile is its own outcome, distinct from a
//! non-match.

use regex::Regex;

/// Three-way result of a full-match test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexOutcome {
    Match,
    NoMatch,
    InvalidPattern(String),
}

/// Full-string match of `pattern` against `text`.
pub fn test_regex(pattern: &str, text: &str) -> RegexOutcome {
    let anchored = format!(r"\A(?:{pattern})\z");
    match Regex::new(&anchored) {
        Ok(re) => {
            if re.is_match(text) {
                RegexOutcome::Match
            } else {
                RegexOutcome::NoMatch
            }
        }
        Err(e) => RegexOutcome::InvalidPattern(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match() {
        assert_eq!(test_regex("a+", "aaa"), RegexOutcome::Match);
        assert_eq!(test_regex("[0-9]{3}", "123"), RegexOutcome::Match);
    }

    #[test]
    fn partial_match_is_no_match() {
        // "a+" matches a prefix of "aab" but not the whole string.
        assert_eq!(test_regex("a+", "aab"), RegexOutcome::NoMatch);
        assert_eq!(test_regex("b", "abc"), RegexOutcome::NoMatch);
    }

    #[test]
    fn invalid_pattern_is_distinct() {
        assert!(matches!(
            test_regex("a(", "aaa"),
            RegexOutcome::InvalidPattern(_)
        ));
    }

    #[test]
    fn empty_pattern_matches_empty_string() {
        assert_eq!(test_regex("", ""), RegexOutcome::Match);
        assert_eq!(test_regex("", "x"), RegexOutcome::NoMatch);
    }
}
