// --- File: crates/tailortalk_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for external services used by the application.
//! These traits allow for dependency injection and easier testing by decoupling the
//! dialog logic from specific implementations of the language-understanding oracle.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// One turn of the conversation, round-tripped between the client and the
/// backend unchanged. The dialog core never inspects prior turns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatMessage {
    /// Who produced the turn, e.g. "user" or "bot".
    pub sender: String,
    /// The text of the turn.
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            sender: "user".to_string(),
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        ChatMessage {
            sender: "bot".to_string(),
            text: text.into(),
        }
    }
}

/// The user's intent as classified by the language-understanding oracle.
///
/// The wire format is a plain string (`book_meeting`, `check_availability`,
/// anything else). It is kept as a closed variant here so the dialog
/// resolver's branch over it is exhaustive and statically checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    BookMeeting,
    CheckAvailability,
    Unknown(String),
}

impl Intent {
    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "book_meeting" => Intent::BookMeeting,
            "check_availability" => Intent::CheckAvailability,
            _ => Intent::Unknown(value),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            Intent::BookMeeting => "book_meeting",
            Intent::CheckAvailability => "check_availability",
            Intent::Unknown(value) => value,
        }
    }
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Unknown(String::new())
    }
}

impl Serialize for Intent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The oracle may return null for the intent field; treat it as unknown.
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(Intent::from_wire).unwrap_or_default())
    }
}

/// The structured record the language-understanding oracle extracts from one
/// user message. Every field may independently be absent; the dialog
/// resolver is responsible for turning a partial record into a question.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractedIntent {
    #[serde(default)]
    pub intent: Intent,
    /// ISO date string (YYYY-MM-DD), if the oracle found one.
    #[serde(default)]
    pub date: Option<String>,
    /// 24-hour HH:mm time string, if the oracle found one.
    #[serde(default)]
    pub time: Option<String>,
    /// Meeting duration in minutes. Absent or non-positive values are
    /// normalized to 60 by the resolver.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub clarification_needed: bool,
    #[serde(default)]
    pub clarification_question: Option<String>,
}

impl ExtractedIntent {
    /// Record the extractor falls back to when the oracle's reply cannot be
    /// understood at all.
    pub fn clarification_fallback(question: impl Into<String>) -> Self {
        ExtractedIntent {
            clarification_needed: true,
            clarification_question: Some(question.into()),
            ..ExtractedIntent::default()
        }
    }
}

/// A trait for the natural-language extraction step.
///
/// This trait defines the single operation the dialog layer needs from the
/// language-understanding oracle: turning one free-text message (plus the
/// opaque conversation history) into an [`ExtractedIntent`] record.
pub trait IntentExtractor: Send + Sync {
    /// Error type returned by extraction operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract a structured intent record from one user message.
    fn extract<'a>(
        &'a self,
        message: &'a str,
        history: &'a [ChatMessage],
    ) -> BoxFuture<'a, ExtractedIntent, Self::Error>;
}
