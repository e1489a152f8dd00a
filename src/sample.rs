//! # Random Sampling
//!
//! Picks one element of a sequence using a uniformly distributed index in
//! `[0, len)`. Results are non-deterministic unless a seeded RNG is passed to
//! [`sample_item_with`].

use rand::Rng;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while sampling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    /// The input was not a sequence.
    #[error("not an array")]
    NotAnArray,
}

/// Returns a uniformly chosen element of `items`, or `None` if it is empty.
pub fn sample_item<T>(items: &[T]) -> Option<&T> {
    sample_item_with(items, &mut rand::rng())
}

/// Same as [`sample_item`], drawing the index from `rng`.
pub fn sample_item_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

/// Samples a dynamically typed value.
///
/// Anything other than a JSON array fails with [`SampleError::NotAnArray`];
/// an empty array yields `Ok(None)`.
pub fn sample_value(value: &Value) -> Result<Option<&Value>, SampleError> {
    match value {
        Value::Array(items) => Ok(sample_item(items)),
        _ => Err(SampleError::NotAnArray),
    }
}
