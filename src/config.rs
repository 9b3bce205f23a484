//! Runtime configuration read from environment variables.

use anyhow::{Context, Result};
use url::Url;

/// Default character API base URL.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Process-wide configuration. There is no config file; the two knobs
/// come from `RICKDEX_API_URL` and `RICKDEX_TIMEOUT_MS`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the character API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("RICKDEX_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .with_context(|| format!("invalid RICKDEX_API_URL '{base_url}'"))?;

        let timeout_ms = match std::env::var("RICKDEX_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid RICKDEX_TIMEOUT_MS '{raw}'"))?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://rickandmortyapi.com/api");
        assert_eq!(config.timeout_ms, 30_000);
    }
}
