//! Sentence grammaticality heuristic
//!
//! Primary path uses an optional part-of-speech/dependency tagger resolved
//! once at startup; without one, a whole-word auxiliary-verb heuristic applies.
//! This is a coarse approximation, not a parser: it accepts some fragments and
//! rejects some valid imperatives, and is documented as such.

use std::sync::Arc;

/// Per-token annotation from a tagger: universal POS tag (e.g. `VERB`, `AUX`)
/// and dependency role (e.g. `nsubj`, `expl`).
#[derive(Debug, Clone)]
pub struct TokenTag {
    pub pos: String,
    pub dep: String,
}

/// Optional NLP collaborator. Implementations annotate each token of a
/// sentence; absence of a tagger is normal and falls back to the heuristic.
pub trait PosTagger: Send + Sync {
    fn annotate(&self, sentence: &str) -> Result<Vec<TokenTag>, String>;
}

/// Validation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    LikelyValid,
    Invalid,
    Empty,
}

/// Verdict plus the user-facing message
#[derive(Debug, Clone)]
pub struct SentenceReport {
    pub verdict: Verdict,
    pub message: String,
}

impl SentenceReport {
    fn new(verdict: Verdict, message: &str) -> Self {
        Self {
            verdict,
            message: message.to_string(),
        }
    }
}

/// Closed set of auxiliary/modal/copula forms for the fallback heuristic.
const AUXILIARY_FORMS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

/// Subject-bearing dependency roles.
const SUBJECT_DEPS: &[&str] = &["nsubj", "nsubjpass", "csubj", "expl"];

/// Sentence validator with an optional tagger, fixed at construction.
pub struct SentenceValidator {
    tagger: Option<Arc<dyn PosTagger>>,
}

impl SentenceValidator {
    pub fn new(tagger: Option<Arc<dyn PosTagger>>) -> Self {
        Self { tagger }
    }

    pub fn validate(&self, sentence: &str) -> SentenceReport {
        let s = sentence.trim();
        if s.is_empty() {
            return SentenceReport::new(Verdict::Empty, "✗ Empty sentence.");
        }
        if let Some(tagger) = &self.tagger {
            match tagger.annotate(s) {
                Ok(tags) => return verdict_from_tags(&tags),
                Err(e) => {
                    tracing::warn!("tagger failed ({e}), using fallback heuristic");
                }
            }
        }
        fallback_heuristic(s)
    }
}

/// Subject + verb → valid; verb only → likely valid; neither → invalid.
fn verdict_from_tags(tags: &[TokenTag]) -> SentenceReport {
    let has_verb = tags.iter().any(|t| t.pos == "VERB" || t.pos == "AUX");
    let has_subject = tags
        .iter()
        .any(|t| SUBJECT_DEPS.contains(&t.dep.to_lowercase().as_str()));
    if has_subject && has_verb {
        SentenceReport::new(Verdict::Valid, "✓ Valid English sentence.")
    } else if has_verb {
        SentenceReport::new(Verdict::LikelyValid, "✓ Likely valid sentence.")
    } else {
        SentenceReport::new(Verdict::Invalid, "✗ Grammatically incorrect.")
    }
}

/// Tagger-free heuristic: length gate plus a whole-word auxiliary hit.
fn fallback_heuristic(s: &str) -> SentenceReport {
    if s.split_whitespace().count() < 3 {
        return SentenceReport::new(Verdict::Invalid, "✗ Too short to be valid.");
    }
    let lowered = s.to_lowercase();
    let has_auxiliary = lowered
        .split(|c: char| !c.is_ascii_alphabetic())
        .any(|word| AUXILIARY_FORMS.contains(&word));
    if has_auxiliary {
        SentenceReport::new(Verdict::LikelyValid, "✓ Probably valid English sentence.")
    } else {
        SentenceReport::new(Verdict::Invalid, "✗ Seems incomplete or incorrect.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned tagger for the primary path.
    struct FixedTagger(Vec<TokenTag>);

    impl PosTagger for FixedTagger {
        fn annotate(&self, _sentence: &str) -> Result<Vec<TokenTag>, String> {
            Ok(self.0.clone())
        }
    }

    fn tag(pos: &str, dep: &str) -> TokenTag {
        TokenTag {
            pos: pos.to_string(),
            dep: dep.to_string(),
        }
    }

    #[test]
    fn empty_input() {
        let v = SentenceValidator::new(None);
        assert_eq!(v.validate("   ").verdict, Verdict::Empty);
    }

    #[test]
    fn tagged_subject_and_verb_is_valid() {
        let tagger = Arc::new(FixedTagger(vec![
            tag("DET", "det"),
            tag("NOUN", "nsubj"),
            tag("VERB", "root"),
        ]));
        let v = SentenceValidator::new(Some(tagger));
        assert_eq!(v.validate("The cat sleeps").verdict, Verdict::Valid);
    }

    #[test]
    fn tagged_verb_only_is_likely_valid() {
        let tagger = Arc::new(FixedTagger(vec![tag("VERB", "root"), tag("NOUN", "dobj")]));
        let v = SentenceValidator::new(Some(tagger));
        assert_eq!(v.validate("Close the door").verdict, Verdict::LikelyValid);
    }

    #[test]
    fn tagged_no_verb_is_invalid() {
        let tagger = Arc::new(FixedTagger(vec![tag("NOUN", "root")]));
        let v = SentenceValidator::new(Some(tagger));
        assert_eq!(v.validate("red balloon sky").verdict, Verdict::Invalid);
    }

    #[test]
    fn fallback_too_short() {
        let v = SentenceValidator::new(None);
        assert_eq!(v.validate("cat sleeps").verdict, Verdict::Invalid);
    }

    #[test]
    fn fallback_auxiliary_hit() {
        let v = SentenceValidator::new(None);
        assert_eq!(
            v.validate("the cat is sleeping").verdict,
            Verdict::LikelyValid
        );
        // "is" must match as a whole word, not inside "island".
        assert_eq!(
            v.validate("the island looks pretty").verdict,
            Verdict::Invalid
        );
    }
}
