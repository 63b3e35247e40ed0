// --- File: crates/tailortalk_agent/src/routes.rs ---
use crate::handlers::{chat_handler, health_handler, AgentState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tailortalk_calendar::BookingEngine;
use tailortalk_common::services::{BoxedError, IntentExtractor};
use tailortalk_config::AppConfig;

/// Creates a router containing all routes for the chat agent.
pub fn routes(
    config: Arc<AppConfig>,
    engine: Arc<BookingEngine>,
    extractor: Option<Arc<dyn IntentExtractor<Error = BoxedError>>>,
) -> Router {
    let agent_state = Arc::new(AgentState {
        config,
        engine,
        extractor,
    });

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .with_state(agent_state)
}
