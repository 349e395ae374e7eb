use crate::routes::routes_path::RegisterDevice;
use api_macros::{DebugChain, IntoErrorResponse};
use axum::{Json, extract::State, http::StatusCode};
use domain::{DevicePlatform, DeviceRegistration, DeviceToken};
use serde::Deserialize;
use store_client::{StoreClient, StoreError};

#[derive(Deserialize)]
pub(crate) struct RegisterDeviceBody {
    token: String,
    platform: String,
}

impl TryFrom<RegisterDeviceBody> for DeviceRegistration {
    type Error = String;

    fn try_from(body: RegisterDeviceBody) -> Result<Self, Self::Error> {
        let token = DeviceToken::parse(body.token)?;
        let platform = DevicePlatform::try_from(body.platform)?;

        Ok(DeviceRegistration { token, platform })
    }
}

#[derive(thiserror::Error, IntoErrorResponse, DebugChain)]
pub enum RegisterDeviceError {
    #[error("{0}")]
    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    ValidationError(String),

    #[error("Erreur lors de l'enregistrement du token")]
    #[status(StatusCode::INTERNAL_SERVER_ERROR)]
    UnexpectedError(#[from] StoreError),
}

/// Stores the push token of a native device.
///
/// # Responses
///
/// - **`201 Created`** once the token is stored (or already was).
/// - **`422 Unprocessable Entity`** for an empty token or an unknown platform.
/// - **`500 Internal Server Error`** when the store rejects the upsert.
#[tracing::instrument(
    name = "Register a device for push notifications",
    skip_all,
    fields(platform = %body.platform)
)]
pub(crate) async fn register_device(
    _: RegisterDevice,
    State(store): State<StoreClient>,
    Json(body): Json<RegisterDeviceBody>,
) -> Result<StatusCode, RegisterDeviceError> {
    let registration: DeviceRegistration = body
        .try_into()
        .map_err(RegisterDeviceError::ValidationError)?;

    store.register_device(&registration).await?;

    Ok(StatusCode::CREATED)
}
