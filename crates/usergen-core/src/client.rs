//! HTTP registry client
//!
//! Posts each user as JSON to the configured endpoint with a fixed timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SeederConfig;
use crate::error::{Result, SeedError};
use crate::registry::UserRegistry;
use crate::user::{RegisteredUser, SyntheticUser};

/// [`UserRegistry`] backed by a registration HTTP endpoint
#[derive(Clone)]
pub struct HttpRegistry {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl std::fmt::Debug for HttpRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRegistry")
            .field("url", &self.url.as_str())
            .field("timeout_ms", &self.timeout.as_millis())
            .finish()
    }
}

impl HttpRegistry {
    /// Create a client for `url` with the given per-request timeout
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("usergen/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SeedError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        info!(url = %url, timeout_ms = timeout.as_millis() as u64, "Created registry client");

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// Validate `config` and create a client for its endpoint
    pub fn from_config(config: &SeederConfig) -> Result<Self> {
        let url = config.validate()?;
        Self::new(url, config.timeout)
    }

    fn classify(&self, err: reqwest::Error) -> SeedError {
        if err.is_timeout() {
            SeedError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else {
            SeedError::from(err)
        }
    }
}

#[async_trait]
impl UserRegistry for HttpRegistry {
    async fn register(&self, user: &SyntheticUser) -> Result<Option<RegisteredUser>> {
        let response = self
            .client
            .post(self.url.clone())
            .json(user)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if status != StatusCode::OK {
            return Err(SeedError::request_failed(status.as_u16(), body));
        }

        let record = serde_json::from_str::<RegisteredUser>(&body).ok();
        if record.is_none() {
            debug!(name = %user.name, "200 response without a user record");
        }
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<RegisteredUser>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(SeedError::request_failed(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}
