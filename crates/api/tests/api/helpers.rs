use anyhow::Context;
use api::{ApplicationBuilder, OrderingSwitch};
use axum_extra::routing::TypedPath;
use reqwest::Url;
use settings::{Configuration, OrderingConfiguration, get_configuration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const CLOSED_MESSAGE: &str = "Pas de commande ce midi.";

/// Only for integration tests.
#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub site_base_url: String,
    pub store_server: MockServer,
    pub api_client: reqwest::Client,
    pub ordering: OrderingSwitch,
}

impl TestApp {
    pub(crate) fn typed_path(&self, path: impl TypedPath) -> Url {
        let base_url = Url::parse(&self.address)
            .unwrap_or_else(|err| panic!("Failed to parse base address: {}\n{err}", self.address));

        let path_string = path.to_uri().to_string();

        base_url.join(&path_string).expect("Failed to join path")
    }

    pub(crate) async fn get(&self, path: impl TypedPath) -> reqwest::Response {
        self.api_client
            .get(self.typed_path(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn get_raw(&self, raw_path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{raw_path}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn post_json(
        &self,
        path: impl TypedPath,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(self.typed_path(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sends `body` untouched with a json content type, as browsers do for
    /// bodiless `fetch` calls.
    pub(crate) async fn post_raw_json(
        &self,
        path: impl TypedPath,
        body: &'static str,
    ) -> reqwest::Response {
        self.api_client
            .post(self.typed_path(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// The store answers a single-row select on `restaurants` for `id`.
    pub(crate) async fn mock_restaurant(&self, id: &str, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/restaurants"))
            .and(query_param("id", format!("eq.{id}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.store_server)
            .await
    }

    pub(crate) async fn mock_missing_restaurant(&self, id: &str) {
        self.mock_restaurant(
            id,
            406,
            serde_json::json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "message": "JSON object requested, multiple (or no) rows returned"
            }),
        )
        .await
    }
}

pub fn ordering(closed: bool) -> OrderingConfiguration {
    OrderingConfiguration {
        closed,
        closed_message: CLOSED_MESSAGE.to_string(),
    }
}

pub async fn spawn_app_testing() -> anyhow::Result<TestApp> {
    spawn_app_with(|_| {}).await
}

/// It does the following:
/// 1. Tracing
/// 1. Mock store server
/// 1. Mutates configuration for test needs
/// 1. Spawns a tokio task running the axum server
pub async fn spawn_app_with(
    customize: impl FnOnce(&mut Configuration),
) -> anyhow::Result<TestApp> {
    telemetry::init_tracing()
        .map_err(anyhow::Error::msg)
        .context("Failed to initialize tracing.")?;

    let store_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().context("Failed to read Configuration")?;
        c.store.base_url = Url::parse(&store_server.uri()).context("Invalid store url")?;
        c.store.timeout_ms = 500;
        c.ordering = ordering(false);
        c.mobile.web_dir = std::env::temp_dir().join("cvneat-no-assets");
        // randomized OS port
        c.application.port = 0;
        customize(&mut c);
        c
    };

    let app = ApplicationBuilder::new(&config).build().await?;

    let test_app = TestApp {
        address: app.address()?,
        site_base_url: config.site.base_url().to_owned(),
        store_server,
        api_client: reqwest::Client::new(),
        ordering: app.ordering(),
    };

    tokio::spawn(async move { app.run().await.unwrap() });

    Ok(test_app)
}
