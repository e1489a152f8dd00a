//! # Transport Capability
//!
//! The network seam of the crate. A [`Transport`] resolves a URL to a decoded
//! JSON [`Response`]; nothing else in the crate touches the network.
//!
//! - [`HttpTransport`] - the production implementation, backed by `reqwest`.
//! - [`mock`] - in-memory doubles for tests.
//!
//! ```rust
//! use async_trait::async_trait;
//! use fruit_utils::transport::{Response, Transport, TransportError};
//! use serde_json::json;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn get(&self, _url: &str) -> Result<Response, TransportError> {
//!         Ok(Response::ok(json!({ "name": "Apple" })))
//!     }
//! }
//! ```

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

/// A decoded HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    /// The JSON body.
    pub data: Value,
}

impl Response {
    /// A `200 OK` response carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self { status: 200, data }
    }
}

/// Resolves a URL to a response body with a single GET.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        (**self).get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    struct Canned;

    #[async_trait]
    impl Transport for Canned {
        async fn get(&self, url: &str) -> Result<Response, TransportError> {
            Ok(Response::ok(json!({ "url": url })))
        }
    }

    #[tokio::test]
    async fn test_arc_forwards_to_inner_transport() {
        let transport: Arc<dyn Transport> = Arc::new(Canned);
        let response = transport.get("http://fruit/fig").await.unwrap();
        assert_eq!(response, Response::ok(json!({ "url": "http://fruit/fig" })));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            TransportError::Status(404).to_string(),
            "Request failed with status code 404"
        );
    }
}
