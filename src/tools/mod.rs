//! Local rule-based tools
//!
//! All pure and stateless per call: DFA / PDA checks, regex full-match,
//! sandboxed arithmetic, and the sentence grammaticality heuristic.

pub mod automata;
pub mod math;
pub mod regex_match;
pub mod sentence;

pub use automata::{check_dfa_ends_01, check_pda_balanced, Acceptance};
pub use math::evaluate;
pub use regex_match::{test_regex, RegexOutcome};
pub use sentence::{PosTagger, SentenceReport, SentenceValidator, TokenTag, Verdict};
