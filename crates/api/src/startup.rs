use anyhow::Context;
use axum::Router;
use settings::Configuration;
use store_client::StoreClient;
use tokio::net::TcpListener;

use crate::{AppState, OrderingSwitch, routes::get_router};

pub struct Application {
    router: Router,
    listener: TcpListener,
    ordering: OrderingSwitch,
}

impl Application {
    pub async fn build(config: &Configuration) -> anyhow::Result<Self> {
        ApplicationBuilder::new(config).build().await
    }

    pub fn address(&self) -> std::io::Result<String> {
        Ok(format!("http://{}", self.listener.local_addr()?))
    }

    /// Handle on the switch the running router reads.
    pub fn ordering(&self) -> OrderingSwitch {
        self.ordering.clone()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router)
            .await
            .context("Failed to serve application using axum")
    }
}

pub struct ApplicationBuilder<'a> {
    config: &'a Configuration,
    store: Option<StoreClient>,
    ordering: Option<OrderingSwitch>,
}

impl<'a> ApplicationBuilder<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            store: None,
            ordering: None,
        }
    }

    pub fn with_store_client(mut self, client: StoreClient) -> Self {
        self.store = Some(client);
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingSwitch) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub async fn build(self) -> anyhow::Result<Application> {
        let store = match self.store {
            Some(client) => client,
            None => StoreClient::from_config(&self.config.store)
                .context("Failed to build the store client")?,
        };

        let ordering = self
            .ordering
            .unwrap_or_else(|| OrderingSwitch::new(self.config.ordering.clone()));

        let bind_addr = format!(
            "{}:{}",
            self.config.application.host, self.config.application.port
        );
        let listener = TcpListener::bind(&bind_addr)
            .await
            .context(format!("Failed to bind to address: {bind_addr}"))?;

        let app_state = AppState {
            store,
            ordering: ordering.clone(),
            site: self.config.site.clone(),
        };

        let router = get_router(app_state, &self.config.mobile.web_dir);

        Ok(Application {
            router,
            listener,
            ordering,
        })
    }
}
