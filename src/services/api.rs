use crate::models::{error::AppError, info::Info};

// CONSTANTS
const DEFAULT_DATA_PATH: &str = crate::config::Config::DATA_URL;

// OVERLAY CONFIGURATION
/// Configuration for the overlay data client.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    base_url: String,
    data_path: String,
}

impl OverlayConfig {
    /// Creates a builder for constructing an `OverlayConfig`.
    pub fn builder() -> OverlayConfigBuilder {
        OverlayConfigBuilder::default()
    }

    /// Constructs the absolute URL of the data document. The relative data
    /// path is resolved against the configured base URL, or against the
    /// hosting page's base URI when none is configured. `reqwest` rejects
    /// relative URLs, so resolution has to happen before the request is
    /// built.
    pub fn data_url(&self, document_base: Option<&str>) -> Result<reqwest::Url, AppError> {
        let base = if self.base_url.is_empty() {
            document_base.unwrap_or_default()
        } else {
            &self.base_url
        };

        let base = reqwest::Url::parse(base)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL {base:?}: {e}")))?;
        base.join(&self.data_path)
            .map_err(|e| AppError::ConfigError(format!("Invalid data path: {e}")))
    }
}

/// Base URI of the hosting page, used to resolve the relative data path
/// the same way the browser resolves `fetch("data.json")`.
fn document_base() -> Option<String> {
    gloo::utils::document().base_uri().ok().flatten()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfigBuilder::default().build()
    }
}

// OVERLAY CONFIGURATION BUILDER
/// Builder for constructing an `OverlayConfig` with custom settings.
#[derive(Debug, Default)]
pub struct OverlayConfigBuilder {
    base_url: Option<String>,
    data_path: Option<String>,
}

impl OverlayConfigBuilder {
    /// Sets a base URL to fetch from (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the data document path.
    pub fn data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Builds the `OverlayConfig`.
    pub fn build(self) -> OverlayConfig {
        OverlayConfig {
            base_url: self.base_url.unwrap_or_default(),
            data_path: self
                .data_path
                .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
        }
    }
}

// OVERLAY CLIENT
/// HTTP client for the overlay data document.
pub struct OverlayClient {
    http: reqwest::Client,
    config: OverlayConfig,
}

impl OverlayClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(OverlayConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: OverlayConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Fetches the current data document and deserializes it.
    pub async fn fetch_info(&self) -> Result<Info, AppError> {
        let url = self.config.data_url(document_base().as_deref())?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {e}")))?;

        serde_json::from_str(&body).map_err(|e| AppError::MalformedPayload(e.to_string()))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::FetchError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::FetchError(format!("Request error: {error}"))
        } else {
            AppError::FetchError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::ApiError(format!("Data document not found: {status}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for OverlayClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the data document using default configuration.
pub async fn fetch_overlay_info() -> Result<Info, AppError> {
    OverlayClient::new()?.fetch_info().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_url_is_absolute() {
        let config = OverlayConfig::builder().build();

        let url = config
            .data_url(Some("http://localhost:8080/overlay/index.html"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/overlay/data.json");
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_data_url_requires_a_base() {
        // A bare relative path is rejected by reqwest at request build
        // time, so resolution must fail loudly instead
        let config = OverlayConfig::builder().build();
        let result = config.data_url(None);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_config_builder_custom_path() {
        let config = OverlayConfig::builder().data_path("state.json").build();

        let url = config.data_url(Some("http://localhost:8080/")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/state.json");
    }

    #[test]
    fn test_configured_base_overrides_document_base() {
        let config = OverlayConfig::builder()
            .base_url("http://localhost:8080/")
            .build();

        let url = config.data_url(Some("http://other.example/page/")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/data.json");
    }

    #[test]
    fn test_malformed_body_error_message() {
        let err = serde_json::from_str::<Info>("{not valid")
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
            .unwrap_err();
        assert!(err.to_string().starts_with("Malformed payload: "));
    }
}
