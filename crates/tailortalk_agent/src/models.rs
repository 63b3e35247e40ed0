// --- File: crates/tailortalk_agent/src/models.rs ---
use serde::{Deserialize, Serialize};
pub use tailortalk_common::services::ChatMessage;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One turn of the conversation, as posted by the chat client.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ChatRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Book a meeting tomorrow at 2pm"))]
    pub message: String,
    /// Prior turns, round-tripped unchanged. Absent on the first turn.
    pub context: Option<Vec<ChatMessage>>,
}

/// The agent's reply plus the grown conversation context.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ChatResponse {
    pub response: String,
    pub context: Vec<ChatMessage>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
    #[cfg_attr(feature = "openapi", schema(example = "ok"))]
    pub status: String,
}
