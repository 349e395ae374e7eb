use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use tracing::warn;

/// Last stop after the routes and the exported web assets.
pub(crate) async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!("Route not found: {}", uri);
    (StatusCode::NOT_FOUND, Html(include_str!("./not_found.html")))
}
