//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full base URL (simpler for local development)
//!
//! ```bash
//! export BASE_URL="http://127.0.0.1:8081"
//! ```
//!
//! ### Method 2: Individual components (recommended behind a reverse proxy)
//!
//! ```bash
//! export PUBLIC_SCHEME="https"
//! export PUBLIC_HOST="s.example.com"
//! export PUBLIC_PORT="443"
//! ```
//!
//! If `BASE_URL` is not set, it will be automatically constructed from
//! `PUBLIC_SCHEME`, `PUBLIC_HOST`, and `PUBLIC_PORT`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:8081`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Default bind address, also the default public host:port for short URLs.
const DEFAULT_LISTEN: &str = "127.0.0.1:8081";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public prefix rendered into `shortenedURL` responses, e.g.
    /// `http://127.0.0.1:8081`. No trailing slash expected.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let base_url = Self::load_base_url(&listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        }
    }

    /// Loads the public base URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `BASE_URL` environment variable
    /// 2. Constructed from `PUBLIC_SCHEME`, `PUBLIC_HOST`, `PUBLIC_PORT`
    /// 3. Constructed from the listen address with an `http` scheme
    fn load_base_url(listen_addr: &str) -> String {
        // Priority 1: Use BASE_URL if provided
        if let Ok(url) = env::var("BASE_URL") {
            return url.trim_end_matches('/').to_string();
        }

        // Priority 2: Build from components (if PUBLIC_HOST is set)
        if let Ok(host) = env::var("PUBLIC_HOST") {
            let scheme = env::var("PUBLIC_SCHEME").unwrap_or_else(|_| "http".to_string());
            let port = env::var("PUBLIC_PORT").unwrap_or_else(|_| "8081".to_string());
            return format!("{}://{}:{}", scheme, host, port);
        }

        // Priority 3: Mirror the listen address
        format!("http://{}", listen_addr)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `base_url` does not carry an `http://` or `https://` scheme
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            listen_addr: "127.0.0.1:8081".to_string(),
            base_url: "http://127.0.0.1:8081".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "8081".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8081".to_string();

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid base URL scheme
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_base_url_from_components() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PUBLIC_SCHEME", "https");
            env::set_var("PUBLIC_HOST", "s.example.com");
            env::set_var("PUBLIC_PORT", "443");
        }

        let url = Config::load_base_url("127.0.0.1:8081");

        assert_eq!(url, "https://s.example.com:443");

        // Cleanup
        unsafe {
            env::remove_var("PUBLIC_SCHEME");
            env::remove_var("PUBLIC_HOST");
            env::remove_var("PUBLIC_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_base_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BASE_URL", "http://from-url:9000/");
            env::set_var("PUBLIC_HOST", "from-components");
        }

        let url = Config::load_base_url("127.0.0.1:8081");

        // BASE_URL should take priority, with the trailing slash trimmed
        assert_eq!(url, "http://from-url:9000");

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("PUBLIC_HOST");
        }
    }

    #[test]
    #[serial]
    fn test_base_url_defaults_to_listen_addr() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("PUBLIC_HOST");
        }

        let url = Config::load_base_url("127.0.0.1:8081");
        assert_eq!(url, "http://127.0.0.1:8081");
    }
}
