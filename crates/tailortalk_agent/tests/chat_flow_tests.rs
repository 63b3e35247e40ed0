// End-to-end tests for the chat turn flow: extraction, resolution, and
// context growth, with the language-understanding oracle scripted.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tailortalk_agent::handlers::chat_handler;
use tailortalk_agent::models::ChatRequest;
use tailortalk_agent::AgentState;
use tailortalk_calendar::{BookingEngine, MemoryStore};
use tailortalk_common::services::{
    BoxFuture, BoxedError, ChatMessage, ExtractedIntent, Intent, IntentExtractor,
};
use tailortalk_config::{AppConfig, ServerConfig};

struct ScriptedExtractor {
    record: ExtractedIntent,
}

impl IntentExtractor for ScriptedExtractor {
    type Error = BoxedError;

    fn extract<'a>(
        &'a self,
        _message: &'a str,
        _history: &'a [ChatMessage],
    ) -> BoxFuture<'a, ExtractedIntent, Self::Error> {
        let record = self.record.clone();
        Box::pin(async move { Ok(record) })
    }
}

struct FailingExtractor;

impl IntentExtractor for FailingExtractor {
    type Error = BoxedError;

    fn extract<'a>(
        &'a self,
        _message: &'a str,
        _history: &'a [ChatMessage],
    ) -> BoxFuture<'a, ExtractedIntent, Self::Error> {
        Box::pin(async move {
            Err(BoxedError(Box::new(std::io::Error::other(
                "oracle unavailable",
            ))))
        })
    }
}

fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        use_gemini: true,
        calendar: None,
        gemini: None,
    })
}

fn agent_state(
    extractor: Option<Arc<dyn IntentExtractor<Error = BoxedError>>>,
) -> Arc<AgentState> {
    Arc::new(AgentState {
        config: test_config(),
        engine: Arc::new(BookingEngine::new(Arc::new(MemoryStore::new()))),
        extractor,
    })
}

fn booking_record() -> ExtractedIntent {
    ExtractedIntent {
        intent: Intent::BookMeeting,
        date: Some("2024-06-27".to_string()),
        time: Some("14:00".to_string()),
        ..ExtractedIntent::default()
    }
}

#[tokio::test]
async fn chat_turn_appends_user_and_bot_messages_to_context() {
    let state = agent_state(Some(Arc::new(ScriptedExtractor {
        record: booking_record(),
    })));
    let prior = vec![
        ChatMessage::user("hello"),
        ChatMessage::bot("Hi! How can I help?"),
    ];
    let request = ChatRequest {
        message: "book 2024-06-27 at 14:00".to_string(),
        context: Some(prior.clone()),
    };

    let Json(reply) = chat_handler(State(state), Json(request)).await.unwrap();

    assert_eq!(reply.context.len(), 4);
    assert_eq!(&reply.context[..2], &prior[..]);
    assert_eq!(reply.context[2].sender, "user");
    assert_eq!(reply.context[2].text, "book 2024-06-27 at 14:00");
    assert_eq!(reply.context[3].sender, "bot");
    assert_eq!(reply.context[3].text, reply.response);
    assert!(reply.response.starts_with("Booked your meeting for"));
}

#[tokio::test]
async fn first_turn_starts_with_an_empty_context() {
    let state = agent_state(Some(Arc::new(ScriptedExtractor {
        record: booking_record(),
    })));
    let request = ChatRequest {
        message: "book it".to_string(),
        context: None,
    };

    let Json(reply) = chat_handler(State(state), Json(request)).await.unwrap();
    assert_eq!(reply.context.len(), 2);
}

#[tokio::test]
async fn extraction_failure_becomes_a_conversational_reply() {
    let state = agent_state(Some(Arc::new(FailingExtractor)));
    let request = ChatRequest {
        message: "mumble".to_string(),
        context: None,
    };

    let Json(reply) = chat_handler(State(state), Json(request)).await.unwrap();
    assert!(reply.response.contains("couldn't understand your message"));
    // The failed turn is still recorded.
    assert_eq!(reply.context.len(), 2);
}

#[tokio::test]
async fn chat_is_unavailable_without_an_extractor() {
    let state = agent_state(None);
    let request = ChatRequest {
        message: "hello".to_string(),
        context: None,
    };

    let err = chat_handler(State(state), Json(request)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn blank_messages_are_rejected_before_extraction() {
    let state = agent_state(Some(Arc::new(ScriptedExtractor {
        record: booking_record(),
    })));
    let request = ChatRequest {
        message: "   ".to_string(),
        context: None,
    };

    let err = chat_handler(State(state), Json(request)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}
