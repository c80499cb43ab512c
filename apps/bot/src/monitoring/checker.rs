use std::time::Duration;

use anyhow::{Result, anyhow};

/// Probes a single target and returns the HTTP status code received.
/// An error means no response was obtained at all.
#[async_trait::async_trait]
pub trait Checker: Send + Sync {
    async fn check(&self, target: &str) -> Result<u16>;
}

/// HTTP/HTTPS checker
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Checker for HttpChecker {
    async fn check(&self, target: &str) -> Result<u16> {
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| anyhow!("request failed: {e}"))?;

        Ok(response.status().as_u16())
    }
}
