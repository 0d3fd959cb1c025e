//! Parley - hybrid chatbot
//!
//! Routes user text to either a remote LLM chat API (daily conversation) or a
//! set of local rule-based tools (sentence check, DFA, PDA, regex, math).
//!
//! Modules:
//! - **config**: application config (TOML + environment variables)
//! - **error**: typed failures for the chat API and the math evaluator
//! - **intent**: pattern-based intent classification
//! - **history**: bounded per-session dialogue transcript
//! - **llm**: chat backend abstraction (Perplexity / Mock)
//! - **tools**: automata, regex full-match, sandboxed math, sentence validator
//! - **orchestrator**: classify -> dispatch -> record
//! - **web**: axum chat UI + JSON endpoint

pub mod config;
pub mod error;
pub mod history;
pub mod intent;
pub mod llm;
pub mod observability;
pub mod orchestrator;
pub mod tools;
pub mod web;

pub use history::{DialogueHistory, Role, Turn};
pub use intent::{classify, Intent};
pub use orchestrator::ChatOrchestrator;
