// --- File: crates/tailortalk_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// Errors the HTTP boundary reports with a status code.
///
/// The dialog core itself never surfaces errors this way: parse failures,
/// oracle failures and store failures are all converted to conversational
/// replies per the dialog contract. What remains are the request-level
/// conditions below.
#[derive(Error, Debug)]
pub enum TailorTalkError {
    /// The request itself is invalid, e.g. an empty message.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A required service is not configured or switched off.
    #[error("Service disabled: {0}")]
    ServiceDisabled(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TailorTalkError {
    fn status_code(&self) -> u16 {
        match self {
            TailorTalkError::ValidationError(_) => 400,
            TailorTalkError::ServiceDisabled(_) => 503,
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> TailorTalkError {
    TailorTalkError::ValidationError(message.to_string())
}

pub fn service_disabled<T: fmt::Display>(message: T) -> TailorTalkError {
    TailorTalkError::ServiceDisabled(message.to_string())
}
