// --- File: crates/tailortalk_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP client utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{service_disabled, validation_error, HttpStatusCode, TailorTalkError};

// Re-export HTTP utilities for easier access
pub use http::client::HTTP_CLIENT;
pub use http::IntoHttpResponse;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// This crate provides common functionality shared across the TailorTalk
// workspace: the error taxonomy, tracing initialization, the shared HTTP
// client and the service trait abstractions.
