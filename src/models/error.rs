#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
