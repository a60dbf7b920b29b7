//! Error types for the wizard backend

use thiserror::Error;

/// Service-wide error type
///
/// Every pipeline failure falls into one of these kinds so that callers can
/// distinguish their own mistakes (`InvalidArgument`) from provider failures
/// without inspecting message strings.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Caller precondition violated; raised before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Completion endpoint unreachable, returned an error, or timed out
    #[error("Provider error: {0}")]
    Provider(String),

    /// Completion endpoint returned no textual content
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Content present but not valid JSON per the expected shape
    ///
    /// Carries the raw response text so the caller can log it or show a
    /// retry affordance. The pipeline never substitutes defaults for a
    /// failed parse.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String, raw: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WizardError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        WizardError::InvalidArgument(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        WizardError::Provider(msg.into())
    }

    pub fn malformed(msg: impl Into<String>, raw: impl Into<String>) -> Self {
        WizardError::MalformedResponse {
            message: msg.into(),
            raw: raw.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        WizardError::Config(msg.into())
    }
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;
