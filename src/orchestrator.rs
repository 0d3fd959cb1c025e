//! Chat orchestration: classify -> dispatch -> record
//!
//! Every call appends exactly one user turn and one assistant turn to the
//! session history, except the `clear` and `help` meta-commands which reply
//! without touching the transcript. Backend failures become diagnostic replies
//! and are recorded like any other assistant turn, keeping the history a
//! faithful transcript.

use std::sync::Arc;

use crate::history::{DialogueHistory, Role};
use crate::intent::{classify, CommandKind, Intent};
use crate::llm::ChatBackend;
use crate::tools::{
    check_dfa_ends_01, check_pda_balanced, evaluate, test_regex, Acceptance, RegexOutcome,
    SentenceValidator,
};

const HELP_TEXT: &str = "Help\n\n\
Parsing\n\
• parse: <sentence> — returns ✓ Valid or ✗ Incorrect.\n\n\
Theory of Computation\n\
• dfa: <binary> — accepts if it ends with 01.\n\
• pda: <expr> — checks balanced parentheses.\n\
• regex: <pattern>; string: <text> — full-match test.\n\
• math: <expression> — evaluate safely.\n\n\
Daily Chat\n\
• Include 'daily conversation' or 'everyday chat' to talk to the LLM.\n\n\
Other\n\
• help — show this\n\
• clear — reset conversation";

const FALLBACK_TEXT: &str = "Local Tools:\n\
• parse: <sentence>\n\
• dfa: <binary>\n\
• pda: <parentheses>\n\
• regex: <pattern>; string: <text>\n\
• math: e.g., 2^10 + 5\n\n\
For normal convo, include 'daily conversation' or 'everyday chat'.";

/// Stateless dispatcher; the mutable session history is passed into every
/// call rather than held as process-wide state.
pub struct ChatOrchestrator {
    backend: Arc<dyn ChatBackend>,
    validator: SentenceValidator,
    /// Env var named in the not-configured diagnostic
    credential_hint: String,
}

impl ChatOrchestrator {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        validator: SentenceValidator,
        credential_hint: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            validator,
            credential_hint: credential_hint.into(),
        }
    }

    /// Handle one inbound message against one session's history.
    pub async fn handle(&self, history: &mut DialogueHistory, text: &str) -> String {
        let intent = classify(text);
        tracing::debug!(?intent, "classified input");
        match intent {
            Intent::Command {
                cmd: CommandKind::Clear,
            } => {
                history.clear();
                "✓ Conversation cleared".to_string()
            }
            Intent::Help => HELP_TEXT.to_string(),
            other => {
                let reply = self.dispatch(other, history).await;
                history.add(Role::User, text.trim());
                history.add(Role::Assistant, reply.clone());
                reply
            }
        }
    }

    async fn dispatch(&self, intent: Intent, history: &DialogueHistory) -> String {
        match intent {
            Intent::Daily { message } => self.daily_reply(&message, history).await,
            Intent::Parse { sentence } => self.validator.validate(&sentence).message,
            Intent::Dfa { input } => match check_dfa_ends_01(&input) {
                Ok(Acceptance::Accepted) => "✓ Accepted".to_string(),
                Ok(Acceptance::Rejected) => "✗ Rejected".to_string(),
                Err(e) => format!("Invalid input: {e}"),
            },
            Intent::Pda { input } => match check_pda_balanced(&input) {
                Acceptance::Accepted => "✓ Balanced".to_string(),
                Acceptance::Rejected => "✗ Unbalanced".to_string(),
            },
            Intent::Regex { pattern, string } => match test_regex(&pattern, &string) {
                RegexOutcome::Match => "✓ Match".to_string(),
                RegexOutcome::NoMatch => "✗ No match".to_string(),
                RegexOutcome::InvalidPattern(e) => format!("Regex error: {e}"),
            },
            Intent::Math { expression } => match evaluate(&expression) {
                Ok(value) => format!("Result: {}", crate::tools::math::format_number(value)),
                Err(e) => format!("Math error: {e}"),
            },
            Intent::General => FALLBACK_TEXT.to_string(),
            // Meta-commands are handled in `handle` before dispatch.
            Intent::Help | Intent::Command { .. } => FALLBACK_TEXT.to_string(),
        }
    }

    /// Daily conversation via the remote backend. The snapshot is taken before
    /// this turn is recorded, so the current message is sent exactly once.
    async fn daily_reply(&self, message: &str, history: &DialogueHistory) -> String {
        if !self.backend.is_available() {
            return format!(
                "⚠️ Chat API not configured. Set {}.",
                self.credential_hint
            );
        }
        match self.backend.chat(message, &history.snapshot()).await {
            Ok(reply) if reply.trim().is_empty() => "External API didn't respond.".to_string(),
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("chat backend failed: {e}");
                format!("⚠️ {e}")
            }
        }
    }
}
