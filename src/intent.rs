//! Intent classification
//!
//! Pattern-based router: fixed priority rules over the trimmed input, first
//! match wins, always returns some intent (falls back to General). Prefixes are
//! matched case-insensitively but the original-case text flows into parameters.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Classified intent with extracted parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Show the command reference
    Help,
    /// Meta-command (currently only `clear`)
    Command { cmd: CommandKind },
    /// Free-form chat routed to the remote LLM backend
    Daily { message: String },
    /// Sentence grammaticality check
    Parse { sentence: String },
    /// DFA acceptance over {0,1}
    Dfa { input: String },
    /// Balanced-parenthesis (PDA) check
    Pda { input: String },
    /// Regex full-match test
    Regex { pattern: String, string: String },
    /// Safe arithmetic evaluation
    Math { expression: String },
    /// Anything else: answered with the local tool listing
    General,
}

/// Meta-command kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Clear,
}

/// Classify raw input text. Pure and total; empty or whitespace-only input
/// falls through to `General`.
pub fn classify(text: &str) -> Intent {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    if lowered == "help" {
        return Intent::Help;
    }
    if lowered == "clear" {
        return Intent::Command {
            cmd: CommandKind::Clear,
        };
    }
    if lowered.contains("daily conversation") || lowered.contains("everyday chat") {
        return Intent::Daily {
            message: trimmed.to_string(),
        };
    }
    if let Some(rest) = strip_prefix_ci(trimmed, &lowered, "parse:") {
        return Intent::Parse {
            sentence: rest.trim().to_string(),
        };
    }
    if let Some(rest) = strip_prefix_ci(trimmed, &lowered, "dfa:") {
        return Intent::Dfa {
            input: rest.trim().to_string(),
        };
    }
    if let Some(rest) = strip_prefix_ci(trimmed, &lowered, "pda:") {
        return Intent::Pda {
            input: rest.trim().to_string(),
        };
    }
    if let Some(tail) = strip_prefix_ci(trimmed, &lowered, "regex:") {
        return parse_regex_intent(tail).unwrap_or(Intent::General);
    }
    if !lowered.is_empty() && is_arithmetic_text(&lowered) {
        return Intent::Math {
            expression: trimmed.to_string(),
        };
    }

    Intent::General
}

/// Prefix match against the lowered text, returning the original-case text
/// after the first colon. `lowered` must be `original.to_lowercase()`.
fn strip_prefix_ci<'a>(original: &'a str, lowered: &str, prefix: &str) -> Option<&'a str> {
    if lowered.starts_with(prefix) {
        original.split_once(':').map(|(_, rest)| rest)
    } else {
        None
    }
}

/// `regex: <pattern>; string: <text>` — pattern is everything before the first
/// `;`, string is everything after the final `string:` marker in the remainder
/// (case-insensitive, newlines allowed). Missing marker means an empty string;
/// any failure yields None so the caller can fall back to General.
fn parse_regex_intent(tail: &str) -> Option<Intent> {
    let (pattern, rest) = match tail.split_once(';') {
        Some((p, r)) => (p, r),
        None => (tail, ""),
    };
    let marker = Regex::new(r"(?is)^.*string\s*:\s*(.*)$").ok()?;
    let string = marker
        .captures(rest)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    Some(Intent::Regex {
        pattern: pattern.trim().to_string(),
        string,
    })
}

/// True when the text consists only of digits, arithmetic operators and spaces.
fn is_arithmetic_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || " +-*/().^%".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_commands() {
        assert_eq!(classify("help"), Intent::Help);
        assert_eq!(classify("  HELP  "), Intent::Help);
        assert_eq!(
            classify("clear"),
            Intent::Command {
                cmd: CommandKind::Clear
            }
        );
    }

    #[test]
    fn daily_conversation_substring() {
        let intent = classify("let's have a Daily Conversation about tea");
        assert_eq!(
            intent,
            Intent::Daily {
                message: "let's have a Daily Conversation about tea".to_string()
            }
        );
    }

    #[test]
    fn parse_prefix_preserves_case() {
        assert_eq!(
            classify("PARSE: The cat sleeps"),
            Intent::Parse {
                sentence: "The cat sleeps".to_string()
            }
        );
    }

    #[test]
    fn dfa_and_pda_prefixes() {
        assert_eq!(
            classify("dfa: 1101"),
            Intent::Dfa {
                input: "1101".to_string()
            }
        );
        assert_eq!(
            classify("pda: ((a)(b))"),
            Intent::Pda {
                input: "((a)(b))".to_string()
            }
        );
    }

    #[test]
    fn regex_pattern_and_string() {
        assert_eq!(
            classify("regex: a+; string: aaa"),
            Intent::Regex {
                pattern: "a+".to_string(),
                string: "aaa".to_string()
            }
        );
    }

    #[test]
    fn regex_without_string_marker() {
        assert_eq!(
            classify("regex: a+; aaa"),
            Intent::Regex {
                pattern: "a+".to_string(),
                string: String::new()
            }
        );
    }

    #[test]
    fn regex_takes_final_string_marker() {
        assert_eq!(
            classify("regex: .*; string: first string: second"),
            Intent::Regex {
                pattern: ".*".to_string(),
                string: "second".to_string()
            }
        );
    }

    #[test]
    fn math_expression() {
        assert_eq!(
            classify("2^10 + 5"),
            Intent::Math {
                expression: "2^10 + 5".to_string()
            }
        );
        // Letters disqualify the math rule.
        assert_eq!(classify("2 + x"), Intent::General);
    }

    #[test]
    fn empty_input_is_general() {
        assert_eq!(classify(""), Intent::General);
        assert_eq!(classify("   \n "), Intent::General);
    }

    #[test]
    fn classify_is_idempotent() {
        let text = "regex: [0-9]+; string: 42";
        assert_eq!(classify(text), classify(text));
    }
}
