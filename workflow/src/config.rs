//! Backend address and variant configuration.
//!
//! The tool ships in two flavours that only differ in where uploads are
//! posted and whether the analysis call exists. Both run the same workflow.

use std::fmt;
use std::str::FromStr;

use crate::types::Species;

/// Default prediction backend.
pub const DEFAULT_BACKEND_URL: &str = "https://backendd-mg0r.onrender.com/";

/// Upload endpoint path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRoute {
    /// `POST /`
    Root,
    /// `POST /upload`
    Upload,
}

impl UploadRoute {
    fn path(&self) -> &'static str {
        match self {
            UploadRoute::Root => "",
            UploadRoute::Upload => "upload",
        }
    }
}

/// Page variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Upload only, posted to `/`.
    Basic,
    /// Upload to `/upload` plus the analysis call.
    #[default]
    Analysis,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Variant::Basic),
            "analysis" => Ok(Variant::Analysis),
            other => Err(format!("Unknown variant '{}' (expected basic or analysis)", other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => f.write_str("basic"),
            Variant::Analysis => f.write_str("analysis"),
        }
    }
}

/// Where the backend lives and which endpoints this workflow uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub upload_route: UploadRoute,
    pub analysis_enabled: bool,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, variant: Variant) -> Self {
        let (upload_route, analysis_enabled) = match variant {
            Variant::Basic => (UploadRoute::Root, false),
            Variant::Analysis => (UploadRoute::Upload, true),
        };
        Self {
            base_url: base_url.into(),
            upload_route,
            analysis_enabled,
        }
    }

    pub fn upload_url(&self) -> String {
        join_url(&self.base_url, self.upload_route.path())
    }

    pub fn analyze_url(&self) -> String {
        join_url(&self.base_url, "analyze")
    }

    pub fn download_url(&self, species: Species) -> String {
        join_url(&self.base_url, &format!("download/{}", species.as_str()))
    }

    /// Absolute URL for an `image_path` returned by the upload endpoint.
    pub fn image_url(&self, image_path: &str) -> String {
        join_url(&self.base_url, image_path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, Variant::default())
    }
}

/// Join with exactly one `/` between base and path.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(join_url("http://h", "maps/a.png"), "http://h/maps/a.png");
        assert_eq!(join_url("http://h/", "/maps/a.png"), "http://h/maps/a.png");
        assert_eq!(join_url("http://h/", ""), "http://h/");
    }

    #[test]
    fn test_variant_endpoints() {
        let basic = BackendConfig::new("http://h", Variant::Basic);
        assert_eq!(basic.upload_url(), "http://h/");
        assert!(!basic.analysis_enabled);

        let full = BackendConfig::new("http://h/", Variant::Analysis);
        assert_eq!(full.upload_url(), "http://h/upload");
        assert_eq!(full.analyze_url(), "http://h/analyze");
        assert_eq!(full.download_url(Species::Rails), "http://h/download/rails");
        assert_eq!(full.image_url("maps/sardine.png"), "http://h/maps/sardine.png");
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("basic".parse::<Variant>().unwrap(), Variant::Basic);
        assert!("full".parse::<Variant>().is_err());
    }
}
