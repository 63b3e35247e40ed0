// --- File: crates/tailortalk_gemini/src/logic.rs ---
use crate::models::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use std::env;
use tailortalk_common::services::{BoxFuture, BoxedError, ChatMessage, ExtractedIntent, IntentExtractor};
use tailortalk_common::HTTP_CLIENT;
use tailortalk_config::GeminiConfig;
use thiserror::Error;
use tracing::{debug, error, warn};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "models/gemini-2.0-flash";

/// Question the extractor falls back to when the model's reply cannot be
/// turned into a record at all.
const FALLBACK_QUESTION: &str = "Sorry, I couldn't understand your request. Please try again.";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Gemini response had no text candidates")]
    EmptyResponse,
}

/// Builds the extraction prompt for one user message.
pub fn build_extraction_prompt(user_message: &str) -> String {
    format!(
        r#"You are a helpful AI assistant for booking meetings. Extract the user's intent, date, time, and any other details from the following message. If the message is ambiguous, ask a clarifying question.

User message: "{user_message}"

Return a JSON object with:
- intent: (book_meeting, check_availability, etc.)
- date: (ISO format, YYYY-MM-DD)
- time: (24-hour HH:mm, if present)
- duration: (minutes, if present)
- clarification_needed: (true/false)
- clarification_question: (if needed)
"#
    )
}

/// Extracts the first brace-delimited block from the model's reply. Gemini
/// tends to wrap the JSON in prose or code fences.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Language-understanding oracle backed by the Gemini generateContent API.
pub struct GeminiExtractor {
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiExtractor {
    /// Creates an extractor from the optional config section. The API key is
    /// a secret and comes from the `GEMINI_API_KEY` environment variable.
    pub fn from_config(config: Option<&GeminiConfig>) -> Result<Self, GeminiError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| GeminiError::MissingApiKey)?;
        let api_base = config
            .and_then(|c| c.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = config
            .and_then(|c| c.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(GeminiExtractor {
            api_base,
            model,
            api_key,
        })
    }

    fn build_contents(&self, message: &str, history: &[ChatMessage]) -> Vec<Content> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: if turn.sender == "user" { "user" } else { "model" }.to_string(),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: build_extraction_prompt(message),
            }],
        });
        contents
    }

    async fn extract_inner(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ExtractedIntent, GeminiError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents: self.build_contents(message, history),
        };

        let resp = HTTP_CLIENT.post(&url).json(&request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Gemini returned {}: {}", status, body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = resp.json().await?;
        let text = response.first_text().ok_or(GeminiError::EmptyResponse)?;
        debug!("Gemini extraction reply: {}", text);

        // A reply without a parseable JSON block degrades to a clarification
        // record rather than an error; the model simply failed to comply.
        let record = extract_json_block(text)
            .and_then(|block| serde_json::from_str::<ExtractedIntent>(block).ok());
        Ok(record.unwrap_or_else(|| {
            warn!("Gemini reply had no parseable intent record");
            ExtractedIntent::clarification_fallback(FALLBACK_QUESTION)
        }))
    }
}

impl IntentExtractor for GeminiExtractor {
    type Error = BoxedError;

    fn extract<'a>(
        &'a self,
        message: &'a str,
        history: &'a [ChatMessage],
    ) -> BoxFuture<'a, ExtractedIntent, Self::Error> {
        Box::pin(async move {
            self.extract_inner(message, history)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
