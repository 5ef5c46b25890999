//! Frontend configuration module
//!
//! Values are baked in at compile time from the build environment, since a
//! static wasm bundle has no process environment to read at runtime.

use shared::ApiEndpoints;

const DEFAULT_API_BASE_URL: &str = "/api/v1";
const DEFAULT_BATCH_SIZE: u32 = 30;

/// Frontend configuration for the backend location and paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8000/api/v1`.
    pub api_base_url: String,
    /// Rows requested per page by the record tables.
    pub batch_size: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(option_env!("RMS_BACKEND_API"), option_env!("RMS_DEFAULT_BATCH_SIZE"))
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw values; blank or unparsable values fall back to defaults.
    pub fn from_values(api_base_url: Option<&str>, batch_size: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let batch_size = batch_size
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_BATCH_SIZE);
        Self {
            api_base_url,
            batch_size,
        }
    }

    /// Endpoint table rooted at the configured base URL.
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = FrontendConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "/api/v1");
        assert_eq!(config.batch_size, 30);
    }

    #[test]
    fn test_explicit_values() {
        let config = FrontendConfig::from_values(Some(" http://localhost:8000/api/v1/ "), Some("50"));
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1/");
        assert_eq!(config.batch_size, 50);
        assert_eq!(
            config.endpoints().login(),
            "http://localhost:8000/api/v1/users/login"
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = FrontendConfig::from_values(Some("   "), Some("zero"));
        assert_eq!(config.api_base_url, "/api/v1");
        assert_eq!(config.batch_size, 30);

        assert_eq!(FrontendConfig::from_values(None, Some("0")).batch_size, 30);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.batch_size > 0);
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
