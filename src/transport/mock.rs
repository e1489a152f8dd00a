//! # Mock Transports & Testing Guide
//!
//! In-memory [`Transport`] doubles for exercising fetch logic without a network.
//!
//! | Double | Style | Use Case |
//! |--------|-------|----------|
//! | [`MockTransport`] | Expectation queue | Canned responses and errors, asserting requested URLs |
//! | [`ChannelTransport`] | Request channel | Answering (or dropping) each request by hand from the test |
//!
//! ## Pattern 0: Expectations
//!
//! ```rust
//! use fruit_utils::fetch_fruit;
//! use fruit_utils::transport::mock::MockTransport;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("https://www.fruityvice.com/api/fruit/apple")
//!         .return_ok(json!({ "name": "Apple" }));
//!
//!     let response = fetch_fruit("apple", &mock).await.unwrap();
//!     assert_eq!(response.data["name"], "Apple");
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Request Channel
//!
//! ```rust
//! use fruit_utils::fetch_fruit;
//! use fruit_utils::transport::mock::{create_mock_transport, expect_get};
//! use fruit_utils::transport::Response;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (transport, mut receiver) = create_mock_transport(10);
//!     let task = tokio::spawn(async move { fetch_fruit("pear", &transport).await });
//!
//!     let (url, responder) = expect_get(&mut receiver).await.unwrap();
//!     assert!(url.ends_with("/pear"));
//!     responder.send(Ok(Response::ok(json!({ "name": "Pear" })))).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap().data["name"], "Pear");
//! }
//! ```

use super::{Response, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected `get` and the result to hand back for it.
struct Expectation {
    /// `None` accepts any URL.
    url: Option<String>,
    response: Result<Response, TransportError>,
}

/// A transport that answers requests from a queue of expectations.
///
/// Expectations are consumed in order. A request that arrives with nothing
/// queued, or for a different URL than expected, panics.
///
/// Clones share the same queue, so a test can keep one handle for `verify()`
/// while another is moved into a client.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new();
/// mock.expect_get(url).return_ok(record);
/// mock.expect_any_get().return_err("Network Error".into());
///
/// // Use the mock as a transport...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `get` for exactly `url`.
    pub fn expect_get(&self, url: impl Into<String>) -> GetExpectationBuilder {
        GetExpectationBuilder {
            url: Some(url.into()),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` for any URL.
    pub fn expect_any_get(&self) -> GetExpectationBuilder {
        GetExpectationBuilder {
            url: None,
            expectations: self.expectations.clone(),
        }
    }

    /// URLs requested so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        lock(&self.calls).push(url.to_string());

        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(Expectation { url: Some(expected), .. }) if expected != url => {
                panic!("Unexpected request: expected GET {}, got GET {}", expected, url);
            }
            Some(Expectation { response, .. }) => response,
            None => panic!("Unexpected request: GET {}", url),
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    url: Option<String>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetExpectationBuilder {
    /// Answers with a `200 OK` response carrying `data`.
    pub fn return_ok(self, data: Value) {
        self.return_response(Response::ok(data));
    }

    /// Answers with a full response.
    pub fn return_response(self, response: Response) {
        self.push(Ok(response));
    }

    /// Fails the request with `error`.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Response, TransportError>) {
        lock(&self.expectations).push_back(Expectation {
            url: self.url,
            response,
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not hide the expectation state from others.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Channel used to answer a single request.
pub type Responder = oneshot::Sender<Result<Response, TransportError>>;

/// A request captured by a [`ChannelTransport`].
#[derive(Debug)]
pub struct TransportRequest {
    pub url: String,
    pub respond_to: Responder,
}

/// A transport that forwards every request to a channel owned by the test.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<TransportRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TransportRequest {
                url: url.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| TransportError::from("transport closed"))?;
        response
            .await
            .map_err(|_| TransportError::from("transport dropped response channel"))?
    }
}

/// Creates a channel transport and the receiver for asserting requests.
///
/// The transport sends each request to `receiver`; the test inspects it and
/// decides whether to answer, fail, or drop it.
pub fn create_mock_transport(
    buffer_size: usize,
) -> (ChannelTransport, mpsc::Receiver<TransportRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Waits for the next request and splits it into its URL and responder.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<TransportRequest>,
) -> Option<(String, Responder)> {
    receiver
        .recv()
        .await
        .map(|request| (request.url, request.respond_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_expectations_are_consumed_in_order() {
        let mock = MockTransport::new();
        mock.expect_get("http://fruit/apple").return_ok(json!({ "id": 6 }));
        mock.expect_any_get().return_err("Network Error".into());

        let first = mock.get("http://fruit/apple").await.unwrap();
        assert_eq!(first.data, json!({ "id": 6 }));

        let second = mock.get("http://fruit/pear").await.unwrap_err();
        assert_eq!(second, TransportError::Request("Network Error".to_string()));

        assert_eq!(mock.calls(), vec!["http://fruit/apple", "http://fruit/pear"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_clones_share_expectations() {
        let mock = MockTransport::new();
        let handle = mock.clone();
        mock.expect_any_get().return_response(Response {
            status: 203,
            data: Value::Null,
        });

        let response = handle.get("http://fruit/kiwi").await.unwrap();
        assert_eq!(response.status, 203);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftover_expectations() {
        let mock = MockTransport::new();
        mock.expect_any_get().return_ok(Value::Null);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected request")]
    async fn test_unexpected_url_panics() {
        let mock = MockTransport::new();
        mock.expect_get("http://fruit/apple").return_ok(Value::Null);
        let _ = mock.get("http://fruit/banana").await;
    }

    #[tokio::test]
    async fn test_channel_transport_round_trip() {
        let (transport, mut receiver) = create_mock_transport(1);
        let task = tokio::spawn(async move { transport.get("http://fruit/lime").await });

        let (url, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(url, "http://fruit/lime");
        responder
            .send(Ok(Response::ok(json!({ "name": "Lime" }))))
            .unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.data["name"], "Lime");
    }

    #[tokio::test]
    async fn test_channel_transport_reports_dropped_responder() {
        let (transport, mut receiver) = create_mock_transport(1);
        let task = tokio::spawn(async move { transport.get("http://fruit/lime").await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "transport dropped response channel");
    }

    #[tokio::test]
    async fn test_channel_transport_reports_closed_receiver() {
        let (transport, receiver) = create_mock_transport(1);
        drop(receiver);

        let err = transport.get("http://fruit/lime").await.unwrap_err();
        assert_eq!(err.to_string(), "transport closed");
    }
}
