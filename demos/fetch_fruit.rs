//! # Fetch Fruit Demo
//!
//! Picks a random fruit, fetches its nutrition record from Fruityvice and prints
//! the energy value in both units.
//!
//! ```bash
//! RUST_LOG=info cargo run --example fetch_fruit
//! RUST_LOG=fruit_utils=debug cargo run --example fetch_fruit
//! ```

use fruit_utils::telemetry::setup_tracing;
use fruit_utils::{capitalize, sample_item, FruitClient};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let fruits = ["apple", "banana", "orange", "pear"];
    let fruit = *sample_item(&fruits).ok_or("no fruit to sample")?;
    info!(fruit, "Sampled fruit");

    let client = FruitClient::new();
    let span = tracing::info_span!("nutrition_lookup");
    let result = async { client.fetch_nutrition(fruit).await }
        .instrument(span)
        .await;

    match result {
        Ok(record) => {
            let name = capitalize(&record.name).map_err(|e| e.to_string())?;
            info!(
                fruit = %name,
                calories = record.nutritions.calories,
                kilojoules = record.nutritions.kilojoules,
                "Nutrition record fetched"
            );
        }
        Err(e) => {
            error!(error = %e, "Lookup failed");
            return Err(e.to_string());
        }
    }

    Ok(())
}
