use crate::routes::routes_path::{RestaurantById, RestaurantHoursById};
use api_macros::{DebugChain, IntoErrorResponse};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use domain::{FormattedDay, OpeningStatus, Restaurant, RestaurantId};
use serde::{Deserialize, Serialize};
use store_client::{StoreClient, StoreError};

#[derive(thiserror::Error, IntoErrorResponse, DebugChain)]
pub enum RestaurantError {
    #[error("{0}")]
    #[status(StatusCode::BAD_REQUEST)]
    InvalidId(String),

    #[error("Corps de requête invalide")]
    #[status(StatusCode::BAD_REQUEST)]
    InvalidBody(#[source] serde_json::Error),

    #[error("Restaurant non trouvé")]
    #[status(StatusCode::NOT_FOUND)]
    NotFound(#[source] StoreError),

    #[error("Erreur lors de la récupération du restaurant")]
    #[status(StatusCode::INTERNAL_SERVER_ERROR)]
    Unexpected(#[source] StoreError),
}

impl From<StoreError> for RestaurantError {
    fn from(error: StoreError) -> Self {
        if error.is_not_found() {
            Self::NotFound(error)
        } else {
            Self::Unexpected(error)
        }
    }
}

/// Fetches one restaurant record and returns it untouched.
///
/// # Responses
///
/// - **`200 OK`** with the record.
/// - **`400 Bad Request`** when the id is blank.
/// - **`404 Not Found`** when no single restaurant has this id.
/// - **`500 Internal Server Error`** when the store fails or cannot be reached.
#[tracing::instrument(
    name = "Look up a restaurant",
    skip_all,
    fields(restaurant_id = %path.id)
)]
pub(crate) async fn restaurant_by_id(
    path: RestaurantById,
    State(store): State<StoreClient>,
) -> Result<Json<Restaurant>, RestaurantError> {
    let id = RestaurantId::parse(path.id).map_err(RestaurantError::InvalidId)?;
    let restaurant = store.restaurant(&id).await?;

    Ok(Json(restaurant))
}

#[derive(Serialize)]
pub(crate) struct HoursResponse {
    hours: Vec<FormattedDay>,
    is_manually_closed: bool,
}

/// The week of opening hours in display order.
#[tracing::instrument(
    name = "Get restaurant opening hours",
    skip_all,
    fields(restaurant_id = %path.id)
)]
pub(crate) async fn restaurant_hours(
    path: RestaurantHoursById,
    State(store): State<StoreClient>,
) -> Result<Json<HoursResponse>, RestaurantError> {
    let id = RestaurantId::parse(path.id).map_err(RestaurantError::InvalidId)?;
    let hours = store.restaurant_hours(&id).await?;

    tracing::debug!(hours = ?hours.formatted(), "Opening hours formatted.");

    Ok(Json(HoursResponse {
        hours: hours.formatted(),
        is_manually_closed: hours.is_manually_closed(),
    }))
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct OpeningCheck {
    /// RFC 3339 instant, read as wall-clock time in its own offset.
    date: Option<DateTime<FixedOffset>>,
}

impl OpeningCheck {
    /// An empty body asks about the current time.
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    fn instant(&self) -> NaiveDateTime {
        self.date
            .map(|date| date.naive_local())
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// Whether the restaurant is open at the given instant, now by default.
#[tracing::instrument(
    name = "Check whether a restaurant is open",
    skip_all,
    fields(restaurant_id = %path.id)
)]
pub(crate) async fn restaurant_is_open(
    path: RestaurantHoursById,
    State(store): State<StoreClient>,
    body: Bytes,
) -> Result<Json<OpeningStatus>, RestaurantError> {
    let id = RestaurantId::parse(path.id).map_err(RestaurantError::InvalidId)?;
    let check = OpeningCheck::from_body(&body).map_err(RestaurantError::InvalidBody)?;
    let hours = store.restaurant_hours(&id).await?;

    Ok(Json(hours.status_at(check.instant())))
}
