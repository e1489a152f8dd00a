use serde::{Deserialize, Serialize};

/// A fruit record as served by `GET /api/fruit/{name}`.
///
/// Only the shape is fixed here; the fetch operations work on the raw JSON and
/// leave unknown fields alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub genus: String,
    pub name: String,
    pub id: u32,
    pub family: String,
    pub order: String,
    pub nutritions: Nutritions,
}

/// Nutrition facts per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutritions {
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
    pub sugar: f64,
    /// Derived from `calories`; only present on converted records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilojoules: Option<f64>,
}
