//! Error types for the command-line client.
//!
//! Workflow failures keep their user-facing message so the CLI prints the
//! same text the browser would show in a toast.

use seamap_workflow::WorkflowError;
use thiserror::Error;

/// Errors from a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read the input or write the artifact.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// A workflow operation failed.
    #[error("{0}")]
    Workflow(#[from] WorkflowError),

    /// Artifact download failed.
    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bad command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `download` had nothing to fetch.
    #[error("No map available to download")]
    NothingToDownload,

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the notifier already printed this failure.
    pub fn already_reported(&self) -> bool {
        matches!(
            self,
            CliError::Workflow(
                WorkflowError::Validation(_)
                    | WorkflowError::Precondition(_)
                    | WorkflowError::Server(_)
                    | WorkflowError::Network(_)
                    | WorkflowError::Unknown(_)
            )
        )
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
