//! Chat backend abstraction
//!
//! The daily-conversation intent talks to a remote LLM through `ChatBackend`;
//! `PerplexityClient` is the real implementation, `MockChatBackend` serves
//! tests. The credential is resolved once at startup, never re-probed per call.

pub mod mock;
pub mod perplexity;
pub mod traits;

pub use mock::MockChatBackend;
pub use perplexity::PerplexityClient;
pub use traits::ChatBackend;

use std::sync::Arc;

use crate::config::AppConfig;

/// Build the chat backend from config. A missing credential still yields a
/// client (with `is_available() == false`) so the daily intent degrades to a
/// diagnostic instead of failing startup.
pub fn create_chat_backend(cfg: &AppConfig) -> Arc<dyn ChatBackend> {
    let api_key = std::env::var(&cfg.chat.api_key_env).ok();
    if api_key.is_none() {
        tracing::warn!(
            "{} not set, daily conversation disabled",
            cfg.chat.api_key_env
        );
    }
    Arc::new(PerplexityClient::new(
        api_key,
        &cfg.chat.base_url,
        &cfg.chat.model,
        cfg.chat.timeout_secs,
        cfg.chat.history_window,
    ))
}
