use crate::helpers::spawn_app_testing;
use axum::http::StatusCode;

#[tokio::test]
async fn unknown_page_renders_the_support_block() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app.get_raw("/does-not-exist").await;

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = response.text().await.unwrap();
    assert!(html.contains("Page introuvable"));
    assert_eq!(html.matches("mailto:").count(), 1);
}

#[tokio::test]
async fn unknown_api_route_is_a_404() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app
        .api_client
        .post(format!("{}/api/unknown", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
