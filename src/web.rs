//! Web front-end: chat UI + JSON endpoint
//!
//! Two routes only: `GET /` serves the embedded chat page, `POST /api/chat`
//! takes `{"message": "...", "session_id"?: "..."}` and returns
//! `{"response": "...", "session_id": "..."}`. A malformed or missing body is
//! treated as an empty message, never rejected. Each session owns its own
//! `DialogueHistory` behind a per-session mutex; histories live in memory
//! only and idle sessions are swept periodically.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::history::DialogueHistory;
use crate::orchestrator::ChatOrchestrator;

/// Idle sessions older than this are dropped by the sweep task.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(3600);

/// One session: shared history plus the time of the last request. The mutex
/// serializes concurrent requests on the same session so no exchange is lost.
struct SessionEntry {
    history: Arc<Mutex<DialogueHistory>>,
    last_active: Instant,
}

pub struct AppState {
    orchestrator: ChatOrchestrator,
    sessions: RwLock<HashMap<String, SessionEntry>>,
    max_turns: usize,
}

impl AppState {
    pub fn new(orchestrator: ChatOrchestrator, max_turns: usize) -> Self {
        Self {
            orchestrator,
            sessions: RwLock::new(HashMap::new()),
            max_turns,
        }
    }

    /// Shared handle to the session's history, creating the session on first
    /// use and refreshing its idle timestamp.
    async fn session_history(&self, session_id: &str) -> Arc<Mutex<DialogueHistory>> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                history: Arc::new(Mutex::new(DialogueHistory::new(self.max_turns))),
                last_active: Instant::now(),
            });
        entry.last_active = Instant::now();
        Arc::clone(&entry.history)
    }

    /// Drop sessions idle for longer than `ttl`; returns how many were
    /// removed. In-flight requests keep their history alive via the Arc.
    pub async fn sweep_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_active.elapsed() < ttl);
        before - sessions.len()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Absent on the first request; the reply carries the assigned id back.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(api_chat))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn api_chat(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ChatRequest>>,
) -> Json<ChatResponse> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let session_id = req
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    // Clone the Arc and release the map lock before awaiting the backend;
    // only the per-session mutex is held across the call, so concurrent
    // requests on the same session serialize instead of losing updates.
    let history = state.session_history(&session_id).await;
    let mut history = history.lock().await;
    let response = state.orchestrator.handle(&mut history, &req.message).await;

    Json(ChatResponse {
        response,
        session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::history::Turn;
    use crate::llm::ChatBackend;
    use crate::tools::SentenceValidator;
    use async_trait::async_trait;

    /// Backend that answers after a delay, to widen the race window.
    struct SlowBackend {
        delay: Duration,
    }

    #[async_trait]
    impl ChatBackend for SlowBackend {
        async fn chat(&self, _message: &str, _history: &[Turn]) -> Result<String, ApiError> {
            tokio::time::sleep(self.delay).await;
            Ok("ok".to_string())
        }
    }

    fn state_with(backend: impl ChatBackend + 'static) -> Arc<AppState> {
        let orchestrator = ChatOrchestrator::new(
            Arc::new(backend),
            SentenceValidator::new(None),
            "PERPLEXITY_API_KEY",
        );
        Arc::new(AppState::new(orchestrator, 30))
    }

    async fn post_chat(state: &Arc<AppState>, message: &str, session_id: &str) -> ChatResponse {
        let req = ChatRequest {
            message: message.to_string(),
            session_id: Some(session_id.to_string()),
        };
        api_chat(State(Arc::clone(state)), Some(Json(req))).await.0
    }

    #[tokio::test]
    async fn concurrent_requests_on_one_session_lose_no_turns() {
        let state = state_with(SlowBackend {
            delay: Duration::from_millis(50),
        });
        post_chat(&state, "1+1", "s").await;

        // A slow daily-chat request racing a quick math request on the same
        // session: both exchanges must survive in the transcript.
        let slow = post_chat(&state, "daily conversation slow", "s");
        let quick = post_chat(&state, "2+2", "s");
        let (slow_reply, quick_reply) = tokio::join!(slow, quick);
        assert_eq!(slow_reply.response, "ok");
        assert_eq!(quick_reply.response, "Result: 4");

        let history = state.session_history("s").await;
        let snap = history.lock().await.snapshot();
        assert_eq!(snap.len(), 6);
        let messages: Vec<&str> = snap.iter().map(|t| t.message.as_str()).collect();
        assert!(messages.contains(&"1+1"));
        assert!(messages.contains(&"2+2"));
        assert!(messages.contains(&"Result: 4"));
        assert!(messages.contains(&"daily conversation slow"));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let state = state_with(crate::llm::MockChatBackend { available: true });
        post_chat(&state, "1+1", "a").await;
        post_chat(&state, "2+2", "b").await;

        let a = state.session_history("a").await;
        let b = state.session_history("b").await;
        assert_eq!(a.lock().await.snapshot()[0].message, "1+1");
        assert_eq!(b.lock().await.snapshot()[0].message, "2+2");
    }

    #[tokio::test]
    async fn sweep_drops_idle_sessions() {
        let state = state_with(crate::llm::MockChatBackend { available: true });
        post_chat(&state, "1+1", "a").await;
        post_chat(&state, "2+2", "b").await;

        // Nothing is older than an hour.
        assert_eq!(state.sweep_idle(SESSION_IDLE_TTL).await, 0);
        // With a zero TTL every idle session is due.
        assert_eq!(state.sweep_idle(Duration::ZERO).await, 2);
        assert!(state.sessions.read().await.is_empty());
    }
}
