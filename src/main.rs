//! Parley - hybrid chatbot
//!
//! Entry point: init logging, load config, build the orchestrator and serve
//! the web UI.

use std::sync::Arc;

use parley::config::load_config;
use parley::llm::create_chat_backend;
use parley::orchestrator::ChatOrchestrator;
use parley::tools::SentenceValidator;
use parley::web::{router, AppState, SESSION_IDLE_TTL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    parley::observability::init();

    let cfg = load_config().unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        Default::default()
    });

    let backend = create_chat_backend(&cfg);
    // No resident tagger; the validator uses its fallback heuristic.
    let validator = SentenceValidator::new(None);
    let orchestrator = ChatOrchestrator::new(backend, validator, cfg.chat.api_key_env.clone());
    let state = Arc::new(AppState::new(orchestrator, cfg.history.max_turns));

    // Periodic sweep so abandoned sessions do not accumulate forever.
    let sweep_state = Arc::clone(&state);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(600));
        interval.tick().await;
        loop {
            interval.tick().await;
            let removed = sweep_state.sweep_idle(SESSION_IDLE_TTL).await;
            if removed > 0 {
                tracing::info!("swept {} idle sessions", removed);
            }
        }
    });

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.web.port));
    tracing::info!("Parley chat UI: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
