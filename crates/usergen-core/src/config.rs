//! Run configuration
//!
//! Defaults: 100 users, random IDs, a 5 second timeout and a fixed
//! registration endpoint.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SeedError};
use crate::strategy::IdStrategy;

/// Default registration endpoint
pub const DEFAULT_BASE_URL: &str = "http://124.70.165.131:3000/api/users";

/// Default number of users per run
pub const DEFAULT_COUNT: u64 = 100;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default display-name prefix
pub const DEFAULT_NAME_PREFIX: &str = "测试用户";

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeederConfig {
    /// Registration endpoint (POST target, GET for listing)
    pub base_url: String,
    /// Number of attempts
    pub count: u64,
    /// Per-request timeout
    #[serde(serialize_with = "duration_text::write", deserialize_with = "duration_text::read")]
    pub timeout: Duration,
    /// Identifier strategy
    pub strategy: IdStrategy,
    /// Display-name prefix
    pub name_prefix: String,
    /// Optional avatar URL sent with every user
    pub custom_avatar: Option<String>,
    /// Optional RNG seed
    pub seed: Option<u64>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            count: DEFAULT_COUNT,
            timeout: DEFAULT_TIMEOUT,
            strategy: IdStrategy::Random,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            custom_avatar: None,
            seed: None,
        }
    }
}

impl SeederConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Io(format!("{}: {}", path.display(), e)))?;
        let config: SeederConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Check the configuration and return the parsed endpoint URL
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            SeedError::InvalidConfig(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SeedError::InvalidConfig(format!(
                "unsupported URL scheme {:?}",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(SeedError::InvalidConfig("timeout must be non-zero".into()));
        }
        if self.name_prefix.trim().is_empty() {
            return Err(SeedError::InvalidConfig("name prefix must not be empty".into()));
        }
        Ok(url)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

/// Builder for [`SeederConfig`]
#[derive(Debug, Default)]
pub struct SeederConfigBuilder {
    config: SeederConfig,
}

impl SeederConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: SeederConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn count(mut self, count: u64) -> Self {
        self.config.count = count;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.name_prefix = prefix.into();
        self
    }

    pub fn custom_avatar(mut self, url: impl Into<String>) -> Self {
        self.config.custom_avatar = Some(url.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SeederConfig {
        self.config
    }
}

/// Timeouts travel as human-readable text ("5s", "250ms")
mod duration_text {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn write<S: Serializer>(timeout: &Duration, out: S) -> Result<S::Ok, S::Error> {
        out.collect_str(&humantime::format_duration(*timeout))
    }

    pub fn read<'de, D: Deserializer<'de>>(input: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(input)?;
        humantime::parse_duration(text.trim())
            .map_err(|e| de::Error::custom(format!("invalid timeout {:?}: {}", text, e)))
    }
}
