//! Configuration for the analysis API connection.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults (`http://localhost:5000`, 15 s)
//! 2. An optional TOML file (`pictune.toml` or an explicit path)
//! 3. Environment variables prefixed with `PICTUNE_`
//!    (`PICTUNE_BASE_URL`, `PICTUNE_TIMEOUT_MS`)

use config::{Config, Environment, File, FileFormat, Map};
use derive_getters::Getters;
use pictune_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client-side deadline for one analysis request.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pictune.toml";

/// Prefix of environment variables read by [`ClientConfig::load`].
pub const ENV_PREFIX: &str = "PICTUNE";

/// Connection settings for the analysis API.
///
/// # Example
///
/// ```toml
/// # pictune.toml
/// base_url = "https://pictune.example.com"
/// timeout_ms = 20000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ClientConfig {
    /// Root of the API, without the `/api/...` path
    base_url: String,
    /// Request deadline in milliseconds
    timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `base_url` with the default deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Request deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL of the analyze endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictune_client::ClientConfig;
    ///
    /// let config = ClientConfig::new("https://api.example.com/");
    /// assert_eq!(config.analyze_url(), "https://api.example.com/api/analyze-photo");
    /// ```
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze-photo", self.base_url.trim_end_matches('/'))
    }

    /// Load from defaults, `./pictune.toml` (if present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None, None)
    }

    /// Load from defaults, an optional config file and environment variables.
    ///
    /// `file` replaces the default `./pictune.toml` lookup; an explicit file
    /// must exist. `env` replaces the process environment, which keeps tests
    /// independent of each other.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    #[instrument(skip_all, fields(file = ?file.map(|p| p.display().to_string())))]
    pub fn load_from(
        file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config: Self = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("timeout_ms", DEFAULT_TIMEOUT_MS as i64))
            .map_err(|e| ConfigError::new(format!("Invalid default: {}", e)))?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "Loaded client configuration");
        Ok(config)
    }

    /// Check that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the deadline is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::new("timeout_ms must be greater than zero"));
        }
        Ok(())
    }
}
