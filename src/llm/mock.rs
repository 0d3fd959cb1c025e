//! Mock chat backend (for tests, no API)

use async_trait::async_trait;

use crate::error::ApiError;
use crate::history::Turn;
use crate::llm::ChatBackend;

/// Echoes the incoming message; `available` is configurable to exercise the
/// not-configured path.
pub struct MockChatBackend {
    pub available: bool,
}

impl Default for MockChatBackend {
    fn default() -> Self {
        Self { available: true }
    }
}

#[async_trait]
impl ChatBackend for MockChatBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn chat(&self, message: &str, _history: &[Turn]) -> Result<String, ApiError> {
        if !self.available {
            return Err(ApiError::MissingCredential);
        }
        Ok(format!("Echo from Mock: {message}"))
    }
}
