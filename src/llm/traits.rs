//! Chat backend trait

use async_trait::async_trait;

use crate::error::ApiError;
use crate::history::Turn;

/// Remote chat collaborator: one non-streaming completion given the user
/// message and the recent transcript.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Capability flag, resolved at construction (credential present).
    fn is_available(&self) -> bool {
        true
    }

    /// Send `message` with transcript context and return the reply text.
    async fn chat(&self, message: &str, history: &[Turn]) -> Result<String, ApiError>;
}
