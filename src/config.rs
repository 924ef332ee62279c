//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `API_BASE_URL` - base URL of the upstream statistics API. The service
//!   refuses to start without it: a missing base URL would otherwise show up
//!   as nine independent "no data" widgets on every page, which is much
//!   harder to diagnose than one startup error.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `CACHE_TTL_SECONDS` - fetch memoization TTL (default: 600; `0` disables
//!   caching entirely)
//! - `UPSTREAM_TIMEOUT_SECONDS` - per-request timeout for upstream calls
//!   (default: 10)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream statistics API.
    pub api_base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// TTL (seconds) for memoized fetches. `0` disables the cache.
    pub cache_ttl_seconds: u64,
    /// Timeout (seconds) applied to each upstream request.
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_base_url,
            listen_addr,
            log_level,
            log_format,
            cache_ttl_seconds,
            upstream_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `API_BASE_URL` is not an absolute http(s) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `UPSTREAM_TIMEOUT_SECONDS` is zero
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether fetch memoization is enabled.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_ttl_seconds > 0
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream API: {}", self.api_base_url);

        if self.is_cache_enabled() {
            tracing::info!("  Fetch cache: enabled (TTL {}s)", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Fetch cache: disabled");
        }

        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            api_base_url: "http://localhost:8000".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_ttl_seconds: 600,
            upstream_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Relative or garbage base URL
        config.api_base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
        config.api_base_url = "ftp://localhost/".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "https://api.example.com".to_string();
        assert!(config.validate().is_ok());

        // Invalid log format
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        // Zero timeout
        config.upstream_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let mut config = base_config();
        assert!(config.is_cache_enabled());
        config.cache_ttl_seconds = 0;
        assert!(!config.is_cache_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_missing_base_url_fails_fast() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("API_BASE_URL");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_BASE_URL", "http://localhost:8000");
            env::remove_var("LISTEN");
            env::remove_var("CACHE_TTL_SECONDS");
            env::remove_var("UPSTREAM_TIMEOUT_SECONDS");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.cache_ttl_seconds, 600);
        assert_eq!(config.upstream_timeout_seconds, 10);
        assert_eq!(config.log_format, "text");

        // Cleanup
        unsafe {
            env::remove_var("API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_ttl_override() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_BASE_URL", "http://localhost:8000");
            env::set_var("CACHE_TTL_SECONDS", "60");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.cache_ttl_seconds, 60);

        // Cleanup
        unsafe {
            env::remove_var("API_BASE_URL");
            env::remove_var("CACHE_TTL_SECONDS");
        }
    }
}
