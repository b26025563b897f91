//! reqwest client for the prediction backend.

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use seamap_workflow::{
    parse_error_message, AnalysisResponse, ApiError, CsvFile, PredictionApi, Species,
    UploadResponse,
};

use crate::error::CliResult;

/// Multipart client implementing [`PredictionApi`] for in-memory files.
#[derive(Clone, Debug, Default)]
pub struct ReqwestPredictionApi {
    client: reqwest::Client,
}

impl ReqwestPredictionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// `GET` an artifact, failing on any non-2xx status.
    pub async fn fetch_artifact(&self, url: &str) -> CliResult<Vec<u8>> {
        eprintln!("   📡 GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        eprintln!("      ✓ Received {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    async fn post_form<T: DeserializeOwned>(&self, url: &str, form: Form) -> Result<T, ApiError> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        log::debug!("POST {} -> {}", url, status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PredictionApi<CsvFile> for ReqwestPredictionApi {
    async fn upload(
        &self,
        url: &str,
        file: &CsvFile,
        species: Species,
    ) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("text/csv")
            .map_err(|e| ApiError::Other(e.to_string()))?;
        let form = Form::new()
            .part("file", part)
            .text("species", species.as_str());

        self.post_form(url, form).await
    }

    async fn analyze(&self, url: &str, species: Species) -> Result<AnalysisResponse, ApiError> {
        let form = Form::new().text("species", species.as_str());
        self.post_form(url, form).await
    }
}
