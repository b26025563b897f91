//! # Seamap workflow
//!
//! Platform-neutral client for a species distribution prediction backend:
//! pick a CSV of environmental measurements, upload it for a species, show
//! the returned map, optionally ask for an analysis, download the artifact.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   select/submit   ┌────────────────┐   PredictionApi   ┌─────────────┐
//! │  UI / CLI    │──────────────────▶│ UploadWorkflow │──────────────────▶│   Backend   │
//! │              │◀──────────────────│  (UploadState) │◀──────────────────│ (external)  │
//! └──────────────┘ observer, notices └────────────────┘   JSON responses  └─────────────┘
//!                                            │
//!                                            ▼ Scheduler
//!                                    ProgressTimer (200ms ticks)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Species, phases, state record, wire types, notices
//! - [`error`] - `ApiError` / `WorkflowError`
//! - [`config`] - Backend address and page variants
//! - [`progress`] - Simulated progress and the `Scheduler` seam
//! - [`api`] - `PredictionApi`, `Notifier`, `Navigator` capabilities
//! - [`workflow`] - The state machine

pub mod api;
pub mod config;
pub mod error;
pub mod progress;
pub mod types;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{Navigator, Notifier, PredictionApi};
pub use config::{join_url, BackendConfig, UploadRoute, Variant, DEFAULT_BACKEND_URL};
pub use error::{ApiError, WorkflowError, WorkflowResult};
pub use progress::{
    next_progress, ProgressTimer, Scheduler, PROGRESS_CAP, PROGRESS_DONE, PROGRESS_INTERVAL,
    PROGRESS_STEP,
};
pub use types::{
    format_kb, parse_error_message, AnalysisPhase, AnalysisResponse, CsvFile, ErrorBody,
    FileHandle, FileSource, Notice, NoticeLevel, Species, UploadPhase, UploadResponse,
    UploadState, EXPECTED_COLUMNS,
};
pub use workflow::UploadWorkflow;
