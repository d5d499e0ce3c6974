//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::DEFAULT_API_URL;
use crate::mock::DEFAULT_LATENCY;

fn default_api_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_mock_latency_ms() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the mock API server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL the typed services send requests to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Artificial delay applied to every mock response.
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

impl ServerConfig {
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_settings_fall_back_to_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"address": "127.0.0.1", "port": 8080}"#).expect("config");
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.mock_latency(), Duration::from_millis(300));
    }
}
