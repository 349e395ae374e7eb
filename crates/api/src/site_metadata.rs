use crate::routes::routes_path::{Robots, Sitemap};
use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Utc;
use settings::SiteConfiguration;

pub(crate) async fn robots_txt(
    _: Robots,
    State(site): State<SiteConfiguration>,
) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        domain::robots(site.base_url()).to_robots_txt(),
    )
}

/// Regenerated on every request, stamped with the current time.
pub(crate) async fn sitemap_xml(
    _: Sitemap,
    State(site): State<SiteConfiguration>,
) -> impl IntoResponse {
    let entries = domain::sitemap(site.base_url(), Utc::now());

    (
        [(header::CONTENT_TYPE, "application/xml")],
        domain::sitemap_xml(&entries),
    )
}
