use crate::helpers::spawn_app_testing;
use api::routes_path;
use axum::http::StatusCode;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, body_json, method, path},
};

#[tokio::test]
async fn register_device_stores_the_token() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(method("POST"))
        .and(path("/rest/v1/device_tokens"))
        .and(body_json(serde_json::json!([
            { "token": "apns-0f9e8d", "platform": "ios" }
        ])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app
        .post_json(
            routes_path::RegisterDevice,
            &serde_json::json!({ "token": "apns-0f9e8d", "platform": "ios" }),
        )
        .await;

    assert_eq!(StatusCode::CREATED, response.status());
}

#[tokio::test]
async fn register_device_returns_422_for_invalid_data() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.store_server)
        .await;

    let test_cases = [
        (
            serde_json::json!({ "token": "", "platform": "android" }),
            "empty token",
        ),
        (
            serde_json::json!({ "token": "abc def", "platform": "android" }),
            "token with whitespace",
        ),
        (
            serde_json::json!({ "token": "abc", "platform": "symbian" }),
            "unknown platform",
        ),
    ];

    for (body, error) in test_cases {
        let response = app.post_json(routes_path::RegisterDevice, &body).await;

        assert_eq!(
            StatusCode::UNPROCESSABLE_ENTITY,
            response.status(),
            "The API did not fail with 422 when the payload had an {error}."
        );
    }
}

#[tokio::test]
async fn register_device_returns_500_when_the_store_fails() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app
        .post_json(
            routes_path::RegisterDevice,
            &serde_json::json!({ "token": "fcm-1", "platform": "android" }),
        )
        .await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Erreur lors de l'enregistrement du token");
}
