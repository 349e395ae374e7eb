use crate::{
    AppState,
    health::health_check,
    not_found::not_found,
    notifications::register_device,
    orders_open::orders_open,
    restaurants::{restaurant_by_id, restaurant_hours, restaurant_is_open},
    site_metadata::{robots_txt, sitemap_xml},
};
use axum::{Router, handler::HandlerWithoutStateExt};
use axum_extra::routing::RouterExt;
use std::path::Path;
use telemetry::RequestIdMakeSpan;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt, request_id::MakeRequestUuid, services::ServeDir, trace::TraceLayer,
};

/// Unmatched requests are served from `web_dir`, then fall through to the
/// not-found page.
pub fn get_router(app_state: AppState, web_dir: &Path) -> Router {
    let request_id_middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(TraceLayer::new_for_http().make_span_with(RequestIdMakeSpan))
        .propagate_x_request_id();

    let web_assets = ServeDir::new(web_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .typed_get(health_check)
        .typed_get(orders_open)
        .typed_get(restaurant_by_id)
        .typed_get(restaurant_hours)
        .typed_post(restaurant_is_open)
        .typed_post(register_device)
        .typed_get(robots_txt)
        .typed_get(sitemap_xml)
        .fallback_service(web_assets)
        .layer(request_id_middleware)
        .with_state(app_state)
}

pub mod routes_path {
    use axum_extra::routing::TypedPath;
    use serde::Deserialize;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/health")]
    pub struct HealthCheck;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/platform/orders-open")]
    pub struct OrdersOpen;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/restaurants/{id}")]
    pub struct RestaurantById {
        pub id: String,
    }

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/restaurants/{id}/hours")]
    pub struct RestaurantHoursById {
        pub id: String,
    }

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/api/notifications/register-device")]
    pub struct RegisterDevice;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/robots.txt")]
    pub struct Robots;

    #[derive(TypedPath, Deserialize)]
    #[typed_path("/sitemap.xml")]
    pub struct Sitemap;
}
