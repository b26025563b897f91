//! Error types for the upload workflow.
//!
//! - [`ApiError`] - failures reported by a [`crate::PredictionApi`] implementation
//! - [`WorkflowError`] - what an operation returns; its `Display` is the
//!   message shown to the user
//!
//! [`WorkflowError::from_api`] maps one into the other with the
//! per-operation fallback text.

use thiserror::Error;

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_NO_FILE: &str = "Please select a file first";
pub const MSG_PICK_CSV: &str = "Please select a CSV file";
pub const MSG_DROP_CSV: &str = "Please drop a CSV file";
pub const MSG_NO_MAP: &str = "Please generate a map first";
pub const MSG_UPLOAD_FAILED: &str = "Failed to process data";
pub const MSG_UPLOAD_UNKNOWN: &str = "An unknown error occurred";
pub const MSG_ANALYSIS_FAILED: &str = "Failed to analyze data";
pub const MSG_ANALYSIS_UNKNOWN: &str = "Analysis failed";

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// Request never completed.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Success body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Anything else (request construction, platform errors).
    #[error("{0}")]
    Other(String),
}

// =============================================================================
// Workflow Errors
// =============================================================================

/// Errors returned by workflow operations.
///
/// None of these are fatal: the workflow stays usable for a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Local input problem (no file, wrong extension). Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// Operation needs a prior result (analyze without a map).
    #[error("{0}")]
    Precondition(String),

    /// Backend rejected the request or sent an unreadable body.
    #[error("{0}")]
    Server(String),

    /// Request did not complete.
    #[error("{0}")]
    Network(String),

    /// Any other failure.
    #[error("{0}")]
    Unknown(String),

    /// A request is already in flight.
    #[error("Another request is still in progress")]
    Busy,

    /// This workflow variant has no analysis endpoint.
    #[error("Analysis is not available for this variant")]
    AnalysisDisabled,

    /// Response arrived after the workflow was disposed or a newer upload started.
    #[error("Response discarded: the workflow has moved on")]
    Stale,
}

impl WorkflowError {
    /// Map an API failure, using `fallback` when the backend gave no message
    /// and `unknown` for failures that carry no text at all.
    pub fn from_api(err: ApiError, fallback: &str, unknown: &str) -> Self {
        match err {
            ApiError::Status { message: Some(msg), .. } => WorkflowError::Server(msg),
            ApiError::Status { message: None, .. } | ApiError::Decode(_) => {
                WorkflowError::Server(fallback.to_string())
            }
            ApiError::Transport(msg) if !msg.is_empty() => WorkflowError::Network(msg),
            ApiError::Transport(_) => WorkflowError::Network(unknown.to_string()),
            ApiError::Other(msg) if !msg.is_empty() => WorkflowError::Unknown(msg),
            ApiError::Other(_) => WorkflowError::Unknown(unknown.to_string()),
        }
    }
}

/// Result type alias for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_message_is_verbatim() {
        let err = ApiError::Status { status: 500, message: Some("bad columns".into()) };
        let mapped = WorkflowError::from_api(err, MSG_UPLOAD_FAILED, MSG_UPLOAD_UNKNOWN);
        assert_eq!(mapped, WorkflowError::Server("bad columns".into()));
        assert_eq!(mapped.to_string(), "bad columns");
    }

    #[test]
    fn test_fallbacks() {
        let mapped = WorkflowError::from_api(
            ApiError::Status { status: 502, message: None },
            MSG_ANALYSIS_FAILED,
            MSG_ANALYSIS_UNKNOWN,
        );
        assert_eq!(mapped.to_string(), MSG_ANALYSIS_FAILED);

        let mapped = WorkflowError::from_api(
            ApiError::Decode("expected value".into()),
            MSG_UPLOAD_FAILED,
            MSG_UPLOAD_UNKNOWN,
        );
        assert_eq!(mapped.to_string(), MSG_UPLOAD_FAILED);

        let mapped = WorkflowError::from_api(ApiError::Other(String::new()), MSG_UPLOAD_FAILED, MSG_UPLOAD_UNKNOWN);
        assert_eq!(mapped, WorkflowError::Unknown(MSG_UPLOAD_UNKNOWN.into()));
    }

    #[test]
    fn test_transport_keeps_message() {
        let mapped = WorkflowError::from_api(
            ApiError::Transport("connection refused".into()),
            MSG_UPLOAD_FAILED,
            MSG_UPLOAD_UNKNOWN,
        );
        assert_eq!(mapped, WorkflowError::Network("connection refused".into()));
    }
}
