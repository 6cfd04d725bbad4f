/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for feed calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{FeedError, Result};

/// Base URL for the public blog feed
const FEED_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the blog feed service
#[derive(Debug, Clone)]
pub struct FeedClient {
    http_client: Client,
    base_url: Url,
}

impl FeedClient {
    /// Create a new client against the public feed with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, FEED_BASE_URL)
    }

    /// Create a new client against an arbitrary base URL
    ///
    /// Used by tests (mock servers) and the `--feed-url` override.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request builder for a feed endpoint
    pub(crate) fn feed_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON body, mapping non-2xx to `FeedError::Api`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(code = status.as_u16(), "feed request returned error status");
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::api_error(status, message));
        }
        Ok(response.json::<T>().await?)
    }
}
