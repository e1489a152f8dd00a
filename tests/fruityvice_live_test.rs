use fruit_utils::{fetch_fruit, FruitClient, HttpTransport};
use serde_json::json;

/// Full round trip against the public API. Slow and network-dependent, so it
/// only runs with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_fetch_apple_from_fruityvice() {
    let response = fetch_fruit("apple", &HttpTransport::new())
        .await
        .expect("Failed to fetch apple");

    let expected = json!({
        "genus": "Malus",
        "name": "Apple",
        "id": 6,
        "family": "Rosaceae",
        "order": "Rosales",
        "nutritions": {
            "carbohydrates": 11.4,
            "protein": 0.3,
            "fat": 0.4,
            "calories": 52,
            "sugar": 10.3
        }
    });
    assert_eq!(response.data, expected);
}

#[tokio::test]
#[ignore]
async fn test_unknown_fruit_is_a_status_error() {
    let client = FruitClient::new();
    let err = client
        .fetch_fruit("not-a-fruit")
        .await
        .expect_err("Unknown fruit should fail");

    assert!(err.to_string().starts_with("fetch_fruit: "));
}
