//! # Observability & Tracing
//!
//! The crate emits `tracing` events from the fetch operations but never installs
//! a subscriber itself. Applications call [`setup_tracing`] once at startup.
//!
//! ## What Gets Traced
//!
//! - **Requests**: the URL of each fetch (`debug`), inside a `fetch_from` span
//!   carrying the base URL and fruit name
//! - **HTTP**: the response status seen by [`HttpTransport`](crate::transport::HttpTransport) (`debug`)
//! - **Failures**: transport errors before they are rewrapped (`warn`)
//! - **Decoding**: the converted record handed to the typed model (`debug`)
//!
//! The pure utilities (capitalize, conversion, sampling) do not log.
//!
//! ## Usage
//!
//! ```bash
//! # Only failures
//! RUST_LOG=warn cargo run --example fetch_fruit
//!
//! # Requests and statuses
//! RUST_LOG=fruit_utils=debug cargo run --example fetch_fruit
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG fetch_nutrition:fetch_from: Sending request url=https://www.fruityvice.com/api/fruit/apple fruit="apple"
//! DEBUG fetch_nutrition:fetch_from:get: Response received status=200 url="https://www.fruityvice.com/api/fruit/apple"
//! ```

/// Initializes the tracing/logging infrastructure for an application.
///
/// Filtering comes from the `RUST_LOG` environment variable. Panics if a global
/// subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
