//! Application configuration parsed from environment variables.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration.
///
/// Optional env vars:
/// - `API_BASE_URL`: base URL of the remote Streamletz API (default
///   `http://localhost:8080/api`, trailing slashes trimmed)
/// - `PORT`: listen port (default 3000)
/// - `COOKIE_SECURE`: force the `Secure` cookie attribute on or off;
///   inferred from the API base URL scheme when absent
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub port: u16,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(
            &std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned()),
        );
        let port = match std::env::var("PORT") {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
        };
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or_else(|| api_base_url.starts_with("https://"));

        Ok(Self { api_base_url, port, cookie_secure })
    }
}

/// Trim trailing slashes so endpoint paths can always be appended verbatim.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
