// --- File: crates/tailortalk_agent/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;
// Import all relevant schemas from models.rs
use crate::models::{ChatMessage, ChatRequest, ChatResponse, HealthResponse};

/// Documentation for the chat_handler endpoint
/// This endpoint accepts one user message plus the prior conversation
/// context and returns the agent's reply with the context grown by both turns.
#[utoipa::path(
    post,
    path = "/chat", // Path relative to /api
    request_body(content = ChatRequest, example = json!({
        "message": "Book a meeting on 2024-06-27 at 14:00",
        "context": []
    })),
    responses(
        (status = 200, description = "Agent response plus grown conversation context", body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 503, description = "Language understanding disabled")
    ),
    tag = "Chat"
)]
fn doc_chat_handler() {}

/// Documentation for the health_handler endpoint
#[utoipa::path(
    get,
    path = "/health", // Path relative to /api
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Chat"
)]
fn doc_health_handler() {}

/// OpenAPI documentation for the chat agent API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_chat_handler,
        doc_health_handler
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ChatMessage,
            HealthResponse
        )
    ),
    tags(
        (name = "Chat", description = "Conversational booking agent API")
    )
)]
pub struct AgentApiDoc;
