//! Backend client seam.
//!
//! The workflow builds endpoint URLs from [`crate::BackendConfig`] and hands
//! them to a [`PredictionApi`]; implementations only move bytes.
//!
//! | Implementation         | Crate              | Transport  |
//! |------------------------|--------------------|------------|
//! | `GlooPredictionApi`    | `seamap-frontend`  | gloo-net   |
//! | `ReqwestPredictionApi` | `seamap-cli`       | reqwest    |

use crate::error::ApiError;
use crate::types::{AnalysisResponse, Species, UploadResponse};

/// HTTP calls made by the workflow.
///
/// Futures are not required to be `Send`: the workflow runs on a single
/// cooperative event loop.
#[allow(async_fn_in_trait)]
pub trait PredictionApi<F> {
    /// Multipart `POST` with fields `file` and `species`.
    async fn upload(&self, url: &str, file: &F, species: Species) -> Result<UploadResponse, ApiError>;

    /// Multipart `POST` with field `species`.
    async fn analyze(&self, url: &str, species: Species) -> Result<AnalysisResponse, ApiError>;
}

/// Receives transient user notifications.
pub trait Notifier {
    fn notify(&self, notice: crate::types::Notice);
}

/// Opens URLs outside the workflow (a new browser tab, a recorded download).
pub trait Navigator {
    fn open_in_new_context(&self, url: &str);
}
