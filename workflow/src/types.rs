//! Common types shared by every front end of the workflow.
//!
//! # Categories
//!
//! - **Domain Types** - species selector, file handles
//! - **State Types** - upload/analysis phases and the workflow state record
//! - **API Types** - backend request/response bodies
//! - **Notice Types** - user-facing notifications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSV columns the prediction model expects (user-facing hint only).
pub const EXPECTED_COLUMNS: [&str; 6] = ["LAT_DD", "LONG_DD", "Salinite", "Temp", "DO", "pH"];

// =============================================================================
// Domain Types
// =============================================================================

/// Prediction target selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Sardine,
    Rails,
}

impl Species {
    /// All supported species, in display order.
    pub const ALL: [Species; 2] = [Species::Sardine, Species::Rails];

    /// Wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Sardine => "sardine",
            Species::Rails => "rails",
        }
    }

    /// Capitalized label for notifications and radio buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Species::Sardine => "Sardine",
            Species::Rails => "Rails",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sardine" => Ok(Species::Sardine),
            "rails" => Ok(Species::Rails),
            other => Err(format!("Unknown species '{}' (expected sardine or rails)", other)),
        }
    }
}

/// Anything that can be offered to `select_file`.
///
/// The browser wraps `web_sys::File`; native callers use [`CsvFile`].
pub trait FileHandle: Clone + 'static {
    /// File name including extension.
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// A file loaded into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl CsvFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl FileHandle for CsvFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Where a candidate file came from. Only affects notification wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

/// Format a byte count as kilobytes with two decimals (`"1.50 KB"`).
pub fn format_kb(size: u64) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}

// =============================================================================
// State Types
// =============================================================================

/// Upload state machine: `Idle → Uploading → {Succeeded, Failed}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Analysis state machine, independent of the upload one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Analyzing,
    Succeeded,
    Failed,
}

/// Everything the tool page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState<F> {
    pub selected_file: Option<F>,
    pub species: Species,
    pub upload_phase: UploadPhase,
    /// 0..=100, cosmetic.
    pub progress_percent: u8,
    /// Absolute URL of the last generated map.
    pub result_image: Option<String>,
    /// Species the current map was generated for.
    pub result_species: Option<Species>,
    pub analysis_text: Option<String>,
    pub analysis_phase: AnalysisPhase,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            species: Species::default(),
            upload_phase: UploadPhase::default(),
            progress_percent: 0,
            result_image: None,
            result_species: None,
            analysis_text: None,
            analysis_phase: AnalysisPhase::default(),
        }
    }
}

impl<F> UploadState<F> {
    pub fn is_uploading(&self) -> bool {
        self.upload_phase == UploadPhase::Uploading
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis_phase == AnalysisPhase::Analyzing
    }

    /// File input and remove button are locked while uploading.
    pub fn controls_locked(&self) -> bool {
        self.is_uploading()
    }

    pub fn species_locked(&self) -> bool {
        self.is_uploading() || self.is_analyzing()
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading()
    }

    /// Ignores whether the variant has analysis at all.
    pub fn can_analyze(&self) -> bool {
        self.result_image.is_some() && !self.is_uploading() && !self.is_analyzing()
    }

    /// Species the analysis is requested and labelled for: the one the
    /// current map was generated for.
    pub fn analysis_species(&self) -> Species {
        self.result_species.unwrap_or(self.species)
    }

    pub fn can_download(&self) -> bool {
        self.result_image.is_some() && !self.is_uploading()
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Success body of the upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Path of the generated map, relative to the backend base address.
    pub image_path: String,
}

/// Success body of the analyze endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// Failure body of any endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract the `error` field from a failure body, if the body is JSON and
/// the field is a non-empty string.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    /// Emoji prefix for terminal display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A transient user notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_wire_format() {
        assert_eq!(serde_json::to_string(&Species::Rails).unwrap(), "\"rails\"");
        assert_eq!("sardine".parse::<Species>().unwrap(), Species::Sardine);
        assert!("Sardine".parse::<Species>().is_err());
        assert_eq!(Species::Rails.label(), "Rails");
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(parse_error_message(r#"{"error":"bad columns"}"#), Some("bad columns".to_string()));
        assert_eq!(parse_error_message(r#"{"error":""}"#), None);
        assert_eq!(parse_error_message(r#"{"detail":"x"}"#), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(1536), "1.50 KB");
        assert_eq!(format_kb(0), "0.00 KB");
    }

    #[test]
    fn test_analyze_disabled_while_uploading() {
        let mut state: UploadState<CsvFile> = UploadState::default();
        state.result_image = Some("http://backend.test/a.png".into());
        state.result_species = Some(Species::Sardine);
        assert!(state.can_analyze());

        state.upload_phase = UploadPhase::Uploading;
        state.species = Species::Rails;
        assert!(!state.can_analyze());
        assert_eq!(state.analysis_species(), Species::Sardine);
    }

    #[test]
    fn test_default_state_is_idle() {
        let state: UploadState<CsvFile> = UploadState::default();
        assert_eq!(state.upload_phase, UploadPhase::Idle);
        assert_eq!(state.analysis_phase, AnalysisPhase::Idle);
        assert_eq!(state.species, Species::Sardine);
        assert!(state.result_image.is_none());
    }
}
