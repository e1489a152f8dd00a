//! # Fruit Lookups
//!
//! Fetches nutrition records from the public Fruityvice API through any
//! [`Transport`], optionally adding the energy value in kilojoules.
//!
//! - [`fetch_fruit`] - one GET to `FRUITYVICE_API + name`. Transport failures are
//!   rewrapped as a [`FetchError`] that keeps only the original message.
//! - [`fetch_fruit_with_kj`] - fetches, then returns a copy of the record with
//!   `nutritions.kilojoules` inserted next to `nutritions.calories`.
//! - [`FruitClient`] - the same operations bound to a transport and a
//!   [`ClientConfig`]. `FruitClient::new()` talks to the real API.
//!
//! Nothing is retried, cached, or timed out.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use crate::transport::{Response, Transport};
use crate::units::convert_cal_to_kj;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

/// Base endpoint of the Fruityvice fruit API; the fruit name is appended as-is.
pub const FRUITYVICE_API: &str = "https://www.fruityvice.com/api/fruit/";

/// Fetches the record for `fruit` from the Fruityvice API.
pub async fn fetch_fruit<T: Transport + ?Sized>(
    fruit: &str,
    transport: &T,
) -> Result<Response, FetchError> {
    fetch_from(FRUITYVICE_API, fruit, transport).await
}

/// Fetches the record for `fruit` and adds `nutritions.kilojoules`.
///
/// Errors from the fetch and from the unit conversion are passed through
/// unchanged. A record without `nutritions.calories` fails with
/// [`ConvertError::NotANumber`](crate::units::ConvertError::NotANumber).
pub async fn fetch_fruit_with_kj<T: Transport + ?Sized>(
    fruit: &str,
    transport: &T,
) -> Result<Value, FruitError> {
    fetch_with_kj_from(FRUITYVICE_API, fruit, transport).await
}

#[instrument(skip(transport))]
pub(crate) async fn fetch_from<T: Transport + ?Sized>(
    base_url: &str,
    fruit: &str,
    transport: &T,
) -> Result<Response, FetchError> {
    let url = format!("{}{}", base_url, fruit);
    debug!(%url, "Sending request");

    transport.get(&url).await.map_err(|e| {
        warn!(error = %e, "Request failed");
        FetchError::new(e)
    })
}

pub(crate) async fn fetch_with_kj_from<T: Transport + ?Sized>(
    base_url: &str,
    fruit: &str,
    transport: &T,
) -> Result<Value, FruitError> {
    let response = fetch_from(base_url, fruit, transport).await?;
    Ok(with_kilojoules(&response.data)?)
}

/// Returns a copy of `record` with `nutritions.kilojoules` derived from
/// `nutritions.calories`. `record` itself is left untouched.
pub fn with_kilojoules(record: &Value) -> Result<Value, crate::units::ConvertError> {
    let calories = record
        .pointer("/nutritions/calories")
        .unwrap_or(&Value::Null);
    let kilojoules = convert_cal_to_kj(calories)?;

    let mut converted = record.clone();
    // A calories pointer only resolves through an object.
    if let Some(nutritions) = converted
        .get_mut("nutritions")
        .and_then(Value::as_object_mut)
    {
        nutritions.insert("kilojoules".to_string(), json!(kilojoules));
    }
    Ok(converted)
}
