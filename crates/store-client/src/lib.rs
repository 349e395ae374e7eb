//! Client for the hosted store, speaking the PostgREST dialect.

use domain::{DeviceRegistration, Restaurant, RestaurantHours, RestaurantId};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use settings::StoreConfiguration;
use std::time::Duration;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("no single row of `{table}` matched the query")]
    NoSingleRow { table: &'static str },
    #[error("the store answered {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("the store could not be reached")]
    Transport(#[from] reqwest::Error),
    #[error("invalid store url")]
    Url(#[from] url::ParseError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NoSingleRow { .. })
    }
}

#[derive(Debug, Clone)]
pub struct StoreClient {
    http_client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl StoreClient {
    pub fn new(base_url: Url, api_key: SecretString, timeout: Duration) -> Result<Self, StoreError> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &StoreConfiguration) -> Result<Self, StoreError> {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.timeout(),
        )
    }

    #[tracing::instrument(name = "Fetch a restaurant from the store", skip(self))]
    pub async fn restaurant(&self, id: &RestaurantId) -> Result<Restaurant, StoreError> {
        self.select_single("restaurants", "*", id.as_ref()).await
    }

    #[tracing::instrument(name = "Fetch restaurant opening hours from the store", skip(self))]
    pub async fn restaurant_hours(&self, id: &RestaurantId) -> Result<RestaurantHours, StoreError> {
        self.select_single("restaurants", "horaires,ferme_manuellement", id.as_ref())
            .await
    }

    #[tracing::instrument(
        name = "Store a device token",
        skip(self, registration),
        fields(platform = %registration.platform, token = %registration.token.redacted())
    )]
    pub async fn register_device(&self, registration: &DeviceRegistration) -> Result<(), StoreError> {
        #[derive(Serialize)]
        struct DeviceTokenRow<'a> {
            token: &'a str,
            platform: &'a str,
        }

        self.upsert(
            "device_tokens",
            "token",
            &[DeviceTokenRow {
                token: registration.token.as_ref(),
                platform: registration.platform.as_str(),
            }],
        )
        .await
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        Ok(self.base_url.join(&format!("rest/v1/{table}"))?)
    }

    fn auth_headers(&self) -> HeaderMap {
        let key = self.api_key.expose_secret();
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {key}")) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Fetches the one row whose `id` equals `id`. The store answers
    /// `406 Not Acceptable` when zero or several rows match.
    async fn select_single<T: DeserializeOwned>(
        &self,
        table: &'static str,
        columns: &str,
        id: &str,
    ) -> Result<T, StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("select", columns)
            .append_pair("id", &format!("eq.{id}"));

        let response = self
            .http_client
            .get(url)
            .headers(self.auth_headers())
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_ACCEPTABLE => Err(StoreError::NoSingleRow { table }),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(StoreError::Rejected {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn upsert<T: Serialize>(
        &self,
        table: &'static str,
        on_conflict: &str,
        rows: &[T],
    ) -> Result<(), StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut().append_pair("on_conflict", on_conflict);

        let response = self
            .http_client
            .post(url)
            .headers(self.auth_headers())
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(rows)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(StoreError::Rejected {
            status,
            body: response.text().await.unwrap_or_default(),
        })
    }
}
