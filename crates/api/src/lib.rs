mod health;
mod not_found;
mod notifications;
mod orders_open;
mod ordering;
mod restaurants;
mod routes;
mod site_metadata;
mod startup;

use axum::extract::FromRef;
use settings::SiteConfiguration;
use store_client::StoreClient;

// re-exports
pub use ordering::OrderingSwitch;
pub use routes::{get_router, routes_path};
pub use startup::{Application, ApplicationBuilder};

/// State shared by every handler, each field extractable on its own.
#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub store: StoreClient,
    pub ordering: OrderingSwitch,
    pub site: SiteConfiguration,
}
