//! # Fruit Utils
//!
//! > **Small, independent helpers around fruit nutrition data.**
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Pure Utilities
//! - [`text`] - [`capitalize`] a sentence word by word.
//! - [`units`] - [`convert_cal_to_kj`] with "parse leading integer" coercion.
//! - [`sample`] - [`sample_item`] picks a uniformly random element.
//!
//! Each has a strongly typed entry point and a `serde_json::Value` entry point
//! (`capitalize_value`, the [`Numeral`](units::Numeral) impl for `Value`,
//! `sample_value`) that reports wrong-typed input as an error.
//!
//! ### 2. The Network Seam ([`transport`])
//! - **Role**: Resolves a URL to a JSON response. [`Transport`] is the only way the
//!   crate reaches the network.
//! - **Key items**: [`HttpTransport`] (reqwest), [`transport::mock`] (test doubles).
//!
//! ### 3. Fruit Lookups ([`fruit`])
//! - **Role**: One GET against the Fruityvice API, plus a variant that adds
//!   `nutritions.kilojoules` to a copy of the record.
//! - **Key items**: [`fetch_fruit`], [`fetch_fruit_with_kj`], [`FruitClient`].
//!
//! ### 4. Records ([`model`]) and Logging ([`telemetry`])
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use fruit_utils::FruitClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = FruitClient::new();
//!     let apple = client.fetch_nutrition("apple").await.unwrap();
//!     println!("{} kJ", apple.nutritions.kilojoules.unwrap_or_default());
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run --example fetch_fruit
//! ```

pub mod fruit;
pub mod model;
pub mod sample;
pub mod telemetry;
pub mod text;
pub mod transport;
pub mod units;

pub use fruit::{fetch_fruit, fetch_fruit_with_kj, FetchError, FruitClient, FruitError};
pub use sample::sample_item;
pub use text::capitalize;
pub use transport::{HttpTransport, Response, Transport, TransportError};
pub use units::convert_cal_to_kj;
