use crate::helpers::{spawn_app_testing, spawn_app_with};
use api::routes_path;
use axum::http::StatusCode;
use settings::SiteConfiguration;

const PATHS: [&str; 11] = [
    "/",
    "/restaurants",
    "/restaurant-request",
    "/login",
    "/partner",
    "/admin",
    "/delivery",
    "/advertise",
    "/contact",
    "/mentions-legales",
    "/cgv",
];

#[tokio::test]
async fn robots_txt_hides_api_and_maintenance() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app.get(routes_path::Robots).await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let body = response.text().await.unwrap();
    assert!(body.contains("User-Agent: *\n"));
    assert!(body.contains("Allow: /\n"));
    assert!(body.contains("Disallow: /api/\n"));
    assert!(body.contains("Disallow: /maintenance\n"));
    assert!(body.contains(&format!("Sitemap: {}/sitemap.xml", app.site_base_url)));
    assert!(body.contains(&format!("Host: {}", app.site_base_url)));
}

#[tokio::test]
async fn sitemap_lists_every_static_page() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app.get(routes_path::Sitemap).await;

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(response.headers()["content-type"], "application/xml");
    let body = response.text().await.unwrap();
    assert_eq!(body.matches("<url>").count(), 11);
    assert_eq!(body.matches("<changefreq>weekly</changefreq>").count(), 11);
    for path in PATHS {
        assert!(
            body.contains(&format!("<loc>{}{path}</loc>", app.site_base_url)),
            "{path} is missing from the sitemap"
        );
    }
}

#[tokio::test]
async fn only_the_home_page_has_top_priority() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let body = app.get(routes_path::Sitemap).await.text().await.unwrap();

    let home = format!("<loc>{}/</loc>\n<lastmod>", app.site_base_url);
    let home_entry = body
        .split("<url>")
        .find(|entry| entry.contains(&home))
        .expect("home page missing");
    assert!(home_entry.contains("<priority>1.0</priority>"));
    assert_eq!(body.matches("<priority>0.7</priority>").count(), 10);
}

#[tokio::test]
async fn site_url_override_is_used() {
    let app = spawn_app_with(|c| c.site = SiteConfiguration::new("https://preview.cvneat.fr/"))
        .await
        .expect("Failed to spawn app");

    let sitemap = app.get(routes_path::Sitemap).await.text().await.unwrap();
    let robots = app.get(routes_path::Robots).await.text().await.unwrap();

    assert!(sitemap.contains("<loc>https://preview.cvneat.fr/cgv</loc>"));
    assert!(robots.contains("Sitemap: https://preview.cvneat.fr/sitemap.xml"));
}
