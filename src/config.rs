/// Configuration constants for the overlay
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds
    pub const POLLING_INTERVAL_MS: u32 = 500;

    /// Path of the data document, relative to the hosting page
    pub const DATA_URL: &'static str = "data.json";
}
