//! # Fruit Client
//!
//! Binds the fruit operations to one transport and one base endpoint.

use super::{fetch_from, fetch_with_kj_from, FetchError, FruitError, FRUITYVICE_API};
use crate::model::Fruit;
use crate::transport::{HttpTransport, Response, Transport};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Settings for a [`FruitClient`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint the fruit name is appended to.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: FRUITYVICE_API.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Client for the Fruityvice API.
///
/// Defaults to [`HttpTransport`]; tests swap in a double from
/// [`transport::mock`](crate::transport::mock).
#[derive(Debug, Clone)]
pub struct FruitClient<T: Transport = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl FruitClient<HttpTransport> {
    /// A client for the public API over HTTP.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for FruitClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> FruitClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the raw record for `fruit`.
    pub async fn fetch_fruit(&self, fruit: &str) -> Result<Response, FetchError> {
        fetch_from(&self.config.base_url, fruit, &self.transport).await
    }

    /// Fetches the record for `fruit` with `nutritions.kilojoules` added.
    pub async fn fetch_fruit_with_kj(&self, fruit: &str) -> Result<Value, FruitError> {
        fetch_with_kj_from(&self.config.base_url, fruit, &self.transport).await
    }

    /// Fetches the converted record for `fruit` as a typed [`Fruit`].
    #[instrument(skip(self))]
    pub async fn fetch_nutrition(&self, fruit: &str) -> Result<Fruit, FruitError> {
        let record = self.fetch_fruit_with_kj(fruit).await?;
        debug!(?record, "Decoding fruit record");
        serde_json::from_value(record).map_err(|e| FruitError::Decode(e.to_string()))
    }
}
