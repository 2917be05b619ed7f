//! HTTP transport collaborator.
//!
//! The client talks to PubChem through the [`PugTransport`] trait so tests
//! can substitute a canned transport for the real HTTP stack.

use crate::types::PubChemResult;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Collaborator that turns a URL into parsed response JSON.
#[async_trait]
pub trait PugTransport: Send + Sync {
    /// GET `url` and parse the response body as JSON.
    ///
    /// A non-success status or an unparsable body is an error. Nothing is
    /// retried or recovered at this layer.
    async fn get_json(&self, url: &str) -> PubChemResult<Value>;
}

/// Production transport backed by reqwest.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pubchem-props/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PugTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> PubChemResult<Value> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
