//! # HTTP Transport
//!
//! The production [`Transport`], backed by a `reqwest` client.

use super::{Response, Transport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Sends plain GET requests: no extra headers, no query parameters, no timeout.
///
/// Non-success statuses are reported as [`TransportError::Status`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client, e.g. one configured with proxies.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(Response {
            status: status.as_u16(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_a_request_error() {
        let transport = HttpTransport::with_client(Client::new());
        let err = transport.get("http://127.0.0.1:1/apple").await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
