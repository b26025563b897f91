//! Application configuration.
//!
//! Centralized configuration for the prediction tool frontend.
//! The backend address can be overridden at build time with
//! `SEAMAP_BACKEND_URL`; everything else is hardcoded.

use seamap_workflow::{BackendConfig, Variant, DEFAULT_BACKEND_URL};

/// Backend API base URL.
pub const BACKEND_URL: &str = match option_env!("SEAMAP_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

/// Page title.
pub const APP_NAME: &str = "Species Distribution Prediction";

/// How long a toast stays on screen (ms).
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Maximum toasts kept on screen.
pub const MAX_TOASTS: usize = 5;

/// Workflow configuration for a page variant.
pub fn backend_config(variant: Variant) -> BackendConfig {
    BackendConfig::new(BACKEND_URL, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_uses_backend_url() {
        let config = backend_config(Variant::Analysis);
        assert_eq!(config.base_url, BACKEND_URL);
        assert!(config.analysis_enabled);
        assert!(!backend_config(Variant::Basic).analysis_enabled);
    }
}
