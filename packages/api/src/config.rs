//! # Client configuration
//!
//! [`ApiConfig`] carries the two knobs the client has: the backend base URL and the
//! per-request timeout.
//!
//! ## Sources
//!
//! Loaded by [`ApiConfig::load`], lowest precedence first:
//!
//! 1. Built-in defaults (`http://localhost:3000/api/v1`, 10 seconds). Browser builds
//!    can bake a different default URL in with the `JOBTRACKER_API_URL` build-time
//!    variable.
//! 2. `jobtracker.toml` in the working directory, if present.
//! 3. `JOBTRACKER_URL` / `JOBTRACKER_TIMEOUT_SECS` environment variables (a `.env`
//!    file is read first on native targets).
//!
//! ```toml
//! url = "https://tracker.example.com/api/v1"
//! timeout_secs = 10
//! ```

use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Fallback base URL when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

/// Fixed request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// API base URL, without trailing slash.
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    option_env!("JOBTRACKER_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The well-known filename for the optional config file.
    pub fn filename() -> &'static str {
        "jobtracker.toml"
    }

    /// Load from defaults, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("url", default_url())?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("JOBTRACKER").try_parsing(true))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        Ok(loaded.normalized())
    }

    /// Parse from a TOML string, filling in defaults for missing keys.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;
        let parsed: Self = config.try_deserialize()?;
        Ok(parsed.normalized())
    }

    /// `{url}/{segment}`, the base URL of one resource.
    pub fn resource_url(&self, segment: &str) -> String {
        format!("{}/{}", self.url, segment.trim_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.url.trim().trim_end_matches('/');
        self.url = if trimmed.is_empty() {
            default_url()
        } else {
            trimmed.to_string()
        };
        self
    }
}
