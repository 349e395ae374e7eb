use crate::PushRegistrar;
use domain::{DevicePlatform, DeviceToken};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use settings::MobileConfiguration;
use std::time::Duration;

const REGISTER_DEVICE_PATH: &str = "api/notifications/register-device";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum RegistrationError {
    #[error("push permission was not granted")]
    PermissionDenied,
    #[error("the server refused the device token with status {0}")]
    Rejected(StatusCode),
    #[error("the server could not be reached")]
    Transport(#[from] reqwest::Error),
    #[error("invalid server url")]
    Url(#[from] url::ParseError),
}

/// Hands the device token obtained by the native layer over to the api.
#[derive(Debug)]
pub struct DeviceRegistrar {
    http_client: Client,
    endpoint: Url,
    token: DeviceToken,
    platform: DevicePlatform,
}

impl DeviceRegistrar {
    pub fn new(
        server_url: &Url,
        user_agent: String,
        token: DeviceToken,
        platform: DevicePlatform,
        timeout: Duration,
    ) -> Result<Self, RegistrationError> {
        Ok(Self {
            http_client: Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()?,
            endpoint: server_url.join(REGISTER_DEVICE_PATH)?,
            token,
            platform,
        })
    }

    pub fn from_config(
        config: &MobileConfiguration,
        token: DeviceToken,
        platform: DevicePlatform,
    ) -> Result<Self, RegistrationError> {
        Self::new(
            &config.server_url,
            config.user_agent(),
            token,
            platform,
            DEFAULT_TIMEOUT,
        )
    }
}

#[derive(Serialize)]
struct RegisterDeviceRequest<'a> {
    token: &'a str,
    platform: DevicePlatform,
}

impl PushRegistrar for DeviceRegistrar {
    #[tracing::instrument(
        name = "Send device token to the api",
        skip(self),
        fields(platform = %self.platform, token = %self.token.redacted())
    )]
    async fn register(&self) -> Result<(), RegistrationError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&RegisterDeviceRequest {
                token: self.token.as_ref(),
                platform: self.platform,
            })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(RegistrationError::Rejected(status)),
        }
    }
}
