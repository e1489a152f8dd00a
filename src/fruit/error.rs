//! Error types for fruit lookups.

use crate::units::ConvertError;
use thiserror::Error;

/// A failed fetch.
///
/// Only the message of the underlying transport error is kept; its type is
/// discarded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("fetch_fruit: {0}")]
pub struct FetchError(String);

impl FetchError {
    pub fn new(cause: impl std::fmt::Display) -> Self {
        FetchError(cause.to_string())
    }

    /// The wrapped error's message, without the `fetch_fruit:` prefix.
    pub fn cause(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur while fetching and converting a fruit record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FruitError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The converted record did not match the [`Fruit`](crate::model::Fruit) shape.
    #[error("invalid fruit record: {0}")]
    Decode(String),
}
