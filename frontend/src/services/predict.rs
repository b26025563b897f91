//! HTTP client for the prediction backend.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use seamap_workflow::{
    parse_error_message, AnalysisResponse, ApiError, PredictionApi, Species, UploadResponse,
};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::types::BrowserFile;

/// Sends multipart forms with `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooPredictionApi;

impl PredictionApi<BrowserFile> for GlooPredictionApi {
    async fn upload(
        &self,
        url: &str,
        file: &BrowserFile,
        species: Species,
    ) -> Result<UploadResponse, ApiError> {
        let form_data = new_form(species)?;
        form_data
            .append_with_blob("file", &file.0)
            .map_err(|e| js_error("Failed to append file", e))?;

        post_form(url, form_data).await
    }

    async fn analyze(&self, url: &str, species: Species) -> Result<AnalysisResponse, ApiError> {
        let form_data = new_form(species)?;
        post_form(url, form_data).await
    }
}

fn new_form(species: Species) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;
    form_data
        .append_with_str("species", species.as_str())
        .map_err(|e| js_error("Failed to append species", e))?;
    Ok(form_data)
}

fn js_error(context: &str, value: JsValue) -> ApiError {
    match value.as_string() {
        Some(message) => ApiError::Other(format!("{}: {}", context, message)),
        None => ApiError::Other(format!("{}: {:?}", context, value)),
    }
}

async fn post_form<T: DeserializeOwned>(url: &str, form_data: FormData) -> Result<T, ApiError> {
    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| ApiError::Other(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    decode_body(status, response.ok(), &body)
}

/// Turn a completed response into a typed body or an [`ApiError`].
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<T, ApiError> {
    if !ok {
        log::warn!("Backend answered {}: {}", status, body);
        return Err(ApiError::Status {
            status,
            message: parse_error_message(body),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upload_body() {
        let body = r#"{"image_path": "static/maps/sardine_1700000000.png"}"#;
        let response: UploadResponse = decode_body(200, true, body).unwrap();
        assert_eq!(response.image_path, "static/maps/sardine_1700000000.png");
    }

    #[test]
    fn test_decode_error_body() {
        let err = decode_body::<UploadResponse>(400, false, r#"{"error": "Missing column: pH"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 400, message: Some("Missing column: pH".into()) }
        );
    }

    #[test]
    fn test_decode_html_error_page() {
        let err = decode_body::<AnalysisResponse>(502, false, "<html>Bad Gateway</html>")
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: None });
    }

    #[test]
    fn test_decode_malformed_success() {
        let err = decode_body::<UploadResponse>(200, true, r#"{"path": "x.png"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
