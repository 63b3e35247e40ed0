// --- File: crates/tailortalk_agent/src/handlers.rs ---
use crate::logic::resolve_intent;
use crate::models::{ChatMessage, ChatRequest, ChatResponse, HealthResponse};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tailortalk_calendar::BookingEngine;
use tailortalk_common::services::{BoxedError, IntentExtractor};
use tailortalk_common::{service_disabled, validation_error, TailorTalkError};
use tailortalk_config::AppConfig;
use tracing::error;

// State for Agent handlers
#[derive(Clone)]
pub struct AgentState {
    pub config: Arc<AppConfig>,
    pub engine: Arc<BookingEngine>,
    /// The language-understanding oracle; None when `use_gemini` is off.
    pub extractor: Option<Arc<dyn IntentExtractor<Error = BoxedError>>>,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/chat", // Relative to /api
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Agent response plus grown conversation context", body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 503, description = "Language understanding disabled")
    ),
    tag = "Chat"
))]
pub async fn chat_handler(
    State(state): State<Arc<AgentState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, TailorTalkError> {
    if payload.message.trim().is_empty() {
        return Err(validation_error("Message must not be empty."));
    }
    let extractor = state
        .extractor
        .as_ref()
        .ok_or_else(|| service_disabled("Language understanding is disabled."))?;

    let mut context = payload.context.unwrap_or_default();

    // Every failure below this point becomes a conversational reply; the
    // chat endpoint itself never fails a turn.
    let response = match extractor.extract(&payload.message, &context).await {
        Ok(record) => match resolve_intent(record, &state.engine).await {
            Ok(message) => message,
            Err(err) => {
                error!("Dialog resolution failed: {}", err);
                format!("Sorry, there was an error: {}", err)
            }
        },
        Err(err) => {
            error!("Intent extraction failed: {}", err);
            "Sorry, I couldn't understand your message. Please try again.".to_string()
        }
    };

    context.push(ChatMessage::user(payload.message));
    context.push(ChatMessage::bot(response.clone()));

    Ok(Json(ChatResponse { response, context }))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health", // Relative to /api
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Chat"
))]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
