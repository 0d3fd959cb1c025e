//! Finite-automaton style checks
//!
//! Two toy acceptors: a 3-state DFA over {0,1} accepting strings that end in
//! "01", and a single-stack-symbol PDA accepting balanced parentheses.

/// Acceptance outcome shared by both automata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    Rejected,
}

/// DFA acceptance: strings over {0,1} ending in "01".
///
/// The acceptance condition reduces to a suffix check, so no explicit state
/// table is simulated. Any character outside the alphabet (including an empty
/// input) is an invalid-input error, not a rejection.
pub fn check_dfa_ends_01(input: &str) -> Result<Acceptance, String> {
    if input.is_empty() || !input.chars().all(|c| c == '0' || c == '1') {
        return Err("use only 0 and 1".to_string());
    }
    if input.ends_with("01") {
        Ok(Acceptance::Accepted)
    } else {
        Ok(Acceptance::Rejected)
    }
}

/// PDA balance check: push on `(`, pop on `)`, reject on pop from an empty
/// stack, accept iff the stack is empty at end of input. Characters other than
/// the parentheses are ignored.
pub fn check_pda_balanced(input: &str) -> Acceptance {
    let mut depth: usize = 0;
    for ch in input.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Acceptance::Rejected;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Acceptance::Accepted
    } else {
        Acceptance::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfa_accepts_strings_ending_in_01() {
        assert_eq!(check_dfa_ends_01("01"), Ok(Acceptance::Accepted));
        assert_eq!(check_dfa_ends_01("111001"), Ok(Acceptance::Accepted));
    }

    #[test]
    fn dfa_rejects_other_binary_strings() {
        assert_eq!(check_dfa_ends_01("0"), Ok(Acceptance::Rejected));
        assert_eq!(check_dfa_ends_01("10"), Ok(Acceptance::Rejected));
        assert_eq!(check_dfa_ends_01("0110"), Ok(Acceptance::Rejected));
    }

    #[test]
    fn dfa_invalid_alphabet() {
        assert!(check_dfa_ends_01("").is_err());
        assert!(check_dfa_ends_01("0121").is_err());
        // Invalid alphabet wins even when the suffix would match.
        assert!(check_dfa_ends_01("ab01").is_err());
    }

    #[test]
    fn pda_balanced() {
        assert_eq!(check_pda_balanced(""), Acceptance::Accepted);
        assert_eq!(check_pda_balanced("(())()"), Acceptance::Accepted);
        assert_eq!(check_pda_balanced("(a + b) * (c)"), Acceptance::Accepted);
    }

    #[test]
    fn pda_unbalanced() {
        assert_eq!(check_pda_balanced("("), Acceptance::Rejected);
        assert_eq!(check_pda_balanced(")("), Acceptance::Rejected);
        assert_eq!(check_pda_balanced("(()"), Acceptance::Rejected);
    }
}
