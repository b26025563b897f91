//! # Seamap CLI
//!
//! Runs the upload / analyze / download workflow against a prediction
//! backend from the terminal.
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV file   │────▶│ UploadWorkflow │────▶│   Backend   │────▶│ map URL,    │
//! │  (--input)  │     │ (tokio, local) │     │  (reqwest)  │     │ analysis,   │
//! └─────────────┘     └────────────────┘     └─────────────┘     │ artifact    │
//!                                                                └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - `CliError`
//! - [`client`] - reqwest `PredictionApi`
//! - [`runtime`] - tokio `Scheduler`
//! - [`terminal`] - stderr notifier, download recorder, progress lines

pub mod client;
pub mod error;
pub mod runtime;
pub mod terminal;

use std::path::{Path, PathBuf};

use serde::Serialize;
use seamap_workflow::{BackendConfig, CsvFile, FileSource, Species, UploadWorkflow, Variant};

pub use client::ReqwestPredictionApi;
pub use error::{CliError, CliResult};
pub use runtime::{TaskHandle, TokioScheduler};
pub use terminal::{progress_printer, DownloadRecorder, TerminalNotifier};

/// Workflow wired to the terminal services.
pub type CliWorkflow = UploadWorkflow<CsvFile, ReqwestPredictionApi, TokioScheduler>;

/// Inputs of `seamap predict`.
#[derive(Clone, Debug)]
pub struct PredictOptions {
    pub input: PathBuf,
    pub species: Species,
    pub analyze: bool,
    pub download: Option<PathBuf>,
    pub backend_url: String,
    pub variant: Variant,
}

/// What `seamap predict` produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictOutcome {
    pub map_url: String,
    pub analysis: Option<String>,
    pub downloaded: Option<PathBuf>,
}

/// Run select → species → upload, then the optional analysis and download.
///
/// Must be awaited inside a `LocalSet`.
pub async fn run_predict(options: &PredictOptions) -> CliResult<PredictOutcome> {
    eprintln!("📄 Processing: {}", options.input.display());

    let bytes = tokio::fs::read(&options.input).await?;
    let file = CsvFile::new(file_name(&options.input)?, bytes);

    let recorder = DownloadRecorder::default();
    let workflow: CliWorkflow = UploadWorkflow::new(
        BackendConfig::new(options.backend_url.as_str(), options.variant),
        ReqwestPredictionApi::new(),
        TokioScheduler,
        TerminalNotifier,
        recorder.clone(),
    );
    workflow.set_observer(progress_printer());

    let result = drive(&workflow, &recorder, file, options).await;
    workflow.dispose();
    result
}

async fn drive(
    workflow: &CliWorkflow,
    recorder: &DownloadRecorder,
    file: CsvFile,
    options: &PredictOptions,
) -> CliResult<PredictOutcome> {
    workflow.select_file(file, FileSource::Picker)?;
    workflow.set_species(options.species)?;

    let map_url = workflow.submit_upload().await?;

    let analysis = if options.analyze {
        Some(workflow.analyze().await?)
    } else {
        None
    };

    let downloaded = match &options.download {
        Some(path) => {
            if !workflow.download() {
                return Err(CliError::NothingToDownload);
            }
            let url = recorder.take().ok_or(CliError::NothingToDownload)?;
            let bytes = workflow.api().fetch_artifact(&url).await?;
            tokio::fs::write(path, &bytes).await?;
            eprintln!("💾 Saved to: {}", path.display());
            Some(path.clone())
        }
        None => None,
    };

    Ok(PredictOutcome {
        map_url,
        analysis,
        downloaded,
    })
}

fn file_name(path: &Path) -> CliResult<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidArgument(format!("Not a file: {}", path.display())))
}

/// Human-readable list of the endpoints a configuration talks to.
pub fn describe_endpoints(config: &BackendConfig) -> String {
    let mut lines = vec![format!("POST {}", config.upload_url())];
    if config.analysis_enabled {
        lines.push(format!("POST {}", config.analyze_url()));
    }
    for species in Species::ALL {
        lines.push(format!("GET  {}", config.download_url(species)));
    }
    lines.join("\n")
}
