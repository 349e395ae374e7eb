use crate::helpers::spawn_app_testing;
use api::routes_path::RestaurantById;
use axum::http::StatusCode;
use wiremock::{Mock, ResponseTemplate, matchers::any};

fn restaurant(id: &str) -> RestaurantById {
    RestaurantById { id: id.to_string() }
}

#[tokio::test]
async fn known_restaurant_is_returned_as_is() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    let record = serde_json::json!({
        "id": "3f2c",
        "nom": "La Bonne Fourchette",
        "ville": "Ganges",
        "ferme_manuellement": false,
        "horaires": { "lundi": { "ouvert": true, "ouverture": "11:30", "fermeture": "14:00" } }
    });
    app.mock_restaurant("3f2c", 200, record.clone()).await;

    let response = app.get(restaurant("3f2c")).await;

    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, record);
    assert_eq!(body["id"], "3f2c");
}

#[tokio::test]
async fn unknown_restaurant_returns_404_with_an_error_body() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    app.mock_missing_restaurant("nope").await;

    let response = app.get(restaurant("nope")).await;

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Restaurant non trouvé");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn store_failure_returns_500_with_the_same_body_shape() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.get(restaurant("3f2c")).await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Erreur lors de la récupération du restaurant");
    assert!(body["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn unreachable_store_returns_500() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&app.store_server)
        .await;

    let response = app.get(restaurant("3f2c")).await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
}

#[tokio::test]
async fn blank_restaurant_id_is_rejected_without_asking_the_store() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.store_server)
        .await;

    let response = app.get_raw("/api/restaurants/%20%20").await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn failures_never_answer_2xx_with_an_empty_body() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    for id in ["a", "b", "c"] {
        app.mock_missing_restaurant(id).await;
        let response = app.get(restaurant(id)).await;

        assert!(!response.status().is_success());
        assert!(!response.text().await.unwrap().is_empty());
    }
}
